pub mod catalog;
pub mod fallbacks;
pub mod prompts;
