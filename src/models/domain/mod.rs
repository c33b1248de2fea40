pub mod article;
pub mod learning;

pub use article::{Article, SearchPage};
pub use learning::{ContentKind, EnglishLevel, ExerciseType, GenerationRequest, GenerationResult};
