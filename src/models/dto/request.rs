use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{ContentKind, EnglishLevel, ExerciseType, GenerationRequest};

/// Query string of `GET /api/articles/{category}/{subcategory}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleListQuery {
    pub images_only: Option<String>,
    #[serde(rename = "continue")]
    pub continue_from: Option<String>,
}

impl ArticleListQuery {
    /// Only the literal `true` enables the filter.
    pub fn images_only(&self) -> bool {
        self.images_only.as_deref() == Some("true")
    }

    pub fn continuation_token(&self) -> Option<&str> {
        self.continue_from
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

/// Query string of the summary and lesson pages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LevelQuery {
    pub level: Option<String>,
}

impl LevelQuery {
    pub fn english_level(&self) -> EnglishLevel {
        EnglishLevel::parse(self.level.as_deref())
    }
}

/// Body shared by the three generation endpoints.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GenerateContentRequest {
    #[validate(
        required(message = "article_title is required"),
        length(min = 1, max = 300, message = "article_title must be 1-300 characters")
    )]
    pub article_title: Option<String>,

    #[serde(default)]
    pub english_level: Option<String>,

    #[serde(default)]
    pub exercise_type: Option<String>,
}

impl GenerateContentRequest {
    pub fn english_level(&self) -> EnglishLevel {
        EnglishLevel::parse(self.english_level.as_deref())
    }

    pub fn exercise_type(&self) -> ExerciseType {
        ExerciseType::parse(self.exercise_type.as_deref())
    }

    /// Trimmed title, `None` when absent or blank.
    pub fn title(&self) -> Option<&str> {
        self.article_title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
    }

    pub fn into_generation_request(self, kind: ContentKind) -> Option<GenerationRequest> {
        let english_level = self.english_level();
        let title = self.title()?.to_string();
        Some(GenerationRequest::new(title, english_level, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_images_only_requires_literal_true() {
        let query = ArticleListQuery {
            images_only: Some("true".to_string()),
            continue_from: None,
        };
        assert!(query.images_only());

        let query = ArticleListQuery {
            images_only: Some("1".to_string()),
            continue_from: None,
        };
        assert!(!query.images_only());
        assert!(!ArticleListQuery::default().images_only());
    }

    #[test]
    fn test_blank_continuation_token_is_absent() {
        let query = ArticleListQuery {
            images_only: None,
            continue_from: Some("  ".to_string()),
        };
        assert_eq!(query.continuation_token(), None);

        let query = ArticleListQuery {
            images_only: None,
            continue_from: Some("20".to_string()),
        };
        assert_eq!(query.continuation_token(), Some("20"));
    }

    #[test]
    fn test_generate_request_defaults() {
        let request: GenerateContentRequest =
            serde_json::from_str(r#"{"article_title": "Volcano"}"#).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.english_level(), EnglishLevel::Intermediate);
        assert_eq!(request.exercise_type(), ExerciseType::Extra);
    }

    #[test]
    fn test_generate_request_missing_title_is_invalid() {
        let request: GenerateContentRequest =
            serde_json::from_str(r#"{"english_level": "elementary"}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_into_generation_request_rejects_blank_title() {
        let request = GenerateContentRequest {
            article_title: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(request.into_generation_request(ContentKind::Summary).is_none());
    }

    #[test]
    fn test_into_generation_request() {
        let request = GenerateContentRequest {
            article_title: Some(" Moon ".to_string()),
            english_level: Some("professional".to_string()),
            exercise_type: Some("grammar".to_string()),
        };
        let kind = ContentKind::Exercise(request.exercise_type());
        let generation = request.into_generation_request(kind).unwrap();
        assert_eq!(generation.article_title, "Moon");
        assert_eq!(generation.english_level, EnglishLevel::Professional);
        assert_eq!(generation.kind, ContentKind::Exercise(ExerciseType::Grammar));
    }
}
