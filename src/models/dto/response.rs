use serde::Serialize;

use crate::models::domain::{Article, ContentKind, GenerationResult, SearchPage};

#[derive(Debug, Clone, Serialize)]
pub struct ArticleListResponse {
    pub articles: Vec<Article>,
    #[serde(rename = "continue")]
    pub continue_token: Option<String>,
}

impl From<SearchPage> for ArticleListResponse {
    fn from(page: SearchPage) -> Self {
        ArticleListResponse {
            articles: page.articles,
            continue_token: page.continuation_token,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleListErrorResponse {
    pub error: String,
    pub articles: Vec<Article>,
}

impl ArticleListErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            articles: Vec::new(),
        }
    }
}

/// `{success, summary|lesson|exercise}` on success, `{success, error}` otherwise.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResponse {
    pub fn success(kind: ContentKind, result: GenerationResult) -> Self {
        let mut response = GenerationResponse {
            success: true,
            ..Default::default()
        };
        match kind {
            ContentKind::Summary => response.summary = Some(result.html),
            ContentKind::Lesson => response.lesson = Some(result.html),
            ContentKind::Exercise(_) => response.exercise = Some(result.html),
        }
        response
    }

    pub fn failure(error: impl Into<String>) -> Self {
        GenerationResponse {
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubcategoriesResponse {
    pub category: String,
    pub subcategories: Vec<String>,
}
