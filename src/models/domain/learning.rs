use std::fmt;

use serde::{Deserialize, Serialize};

/// Learner proficiency driving the vocabulary and grammar of generated text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnglishLevel {
    Elementary,
    #[default]
    Intermediate,
    Professional,
}

impl EnglishLevel {
    pub const ALL: [EnglishLevel; 3] = [
        EnglishLevel::Elementary,
        EnglishLevel::Intermediate,
        EnglishLevel::Professional,
    ];

    /// Unknown or missing values resolve to `Intermediate`.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("elementary") => EnglishLevel::Elementary,
            Some("intermediate") => EnglishLevel::Intermediate,
            Some("professional") => EnglishLevel::Professional,
            _ => EnglishLevel::Intermediate,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnglishLevel::Elementary => "elementary",
            EnglishLevel::Intermediate => "intermediate",
            EnglishLevel::Professional => "professional",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EnglishLevel::Elementary => "Elementary (A1-A2)",
            EnglishLevel::Intermediate => "Intermediate (B1-B2)",
            EnglishLevel::Professional => "Professional (C1-C2)",
        }
    }
}

impl fmt::Display for EnglishLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    Grammar,
    Vocabulary,
    #[default]
    Extra,
}

impl ExerciseType {
    /// Unknown or missing values resolve to `Extra`.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("grammar") => ExerciseType::Grammar,
            Some("vocabulary") => ExerciseType::Vocabulary,
            _ => ExerciseType::Extra,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseType::Grammar => "grammar",
            ExerciseType::Vocabulary => "vocabulary",
            ExerciseType::Extra => "extra",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Summary,
    Lesson,
    Exercise(ExerciseType),
}

impl ContentKind {
    pub const TEMPERATURE: f32 = 0.7;

    pub fn max_tokens(&self) -> u32 {
        match self {
            ContentKind::Summary | ContentKind::Lesson => 3000,
            ContentKind::Exercise(_) => 2000,
        }
    }

    /// Key of the generated markup in the JSON API response.
    pub fn response_key(&self) -> &'static str {
        match self {
            ContentKind::Summary => "summary",
            ContentKind::Lesson => "lesson",
            ContentKind::Exercise(_) => "exercise",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Exercise(exercise_type) => write!(f, "{} exercise", exercise_type),
            other => write!(f, "{}", other.response_key()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub article_title: String,
    pub english_level: EnglishLevel,
    pub kind: ContentKind,
}

impl GenerationRequest {
    pub fn new(article_title: impl Into<String>, english_level: EnglishLevel, kind: ContentKind) -> Self {
        Self {
            article_title: article_title.into(),
            english_level,
            kind,
        }
    }

    pub fn exercise_type(&self) -> Option<ExerciseType> {
        match self.kind {
            ContentKind::Exercise(exercise_type) => Some(exercise_type),
            _ => None,
        }
    }
}

/// Markup produced either by the generation API or by a fallback template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub html: String,
}

impl GenerationResult {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}
