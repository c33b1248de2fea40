#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::Article;

    pub fn test_article(title: &str) -> Article {
        Article {
            id: format!("{}", title.len()),
            title: title.to_string(),
            extract: format!("{} is a test article.\n\n== History ==\nIt has a history.", title),
            image: None,
            url: format!("https://en.wikipedia.org/wiki/{}", title.replace(' ', "_")),
        }
    }

    pub fn test_articles() -> Vec<Article> {
        vec![
            Article {
                image: Some("https://upload.wikimedia.org/a.jpg".to_string()),
                ..test_article("Quantum mechanics")
            },
            test_article("Thermodynamics"),
            Article {
                image: Some("https://upload.wikimedia.org/c.jpg".to_string()),
                ..test_article("Optics")
            },
        ]
    }
}

#[cfg(test)]
pub mod stubs {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::{
        errors::{AppError, AppResult},
        models::domain::{Article, SearchPage},
        services::wikipedia_service::ArticleSource,
    };

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SearchCall {
        pub category: String,
        pub subcategory: String,
        pub images_only: bool,
        pub continuation_token: Option<String>,
    }

    /// In-memory `ArticleSource`; any operation can be switched to fail.
    #[derive(Default)]
    pub struct StubArticleSource {
        pub articles: Vec<Article>,
        pub subcategories: Vec<String>,
        pub next_token: Option<String>,
        pub failure: Option<AppError>,
        pub search_calls: Mutex<Vec<SearchCall>>,
        pub fetch_calls: Mutex<Vec<String>>,
    }

    impl StubArticleSource {
        pub fn with_articles(articles: Vec<Article>) -> Self {
            Self {
                articles,
                ..Default::default()
            }
        }

        pub fn failing(error: AppError) -> Self {
            Self {
                failure: Some(error),
                ..Default::default()
            }
        }

        fn check(&self) -> AppResult<()> {
            match &self.failure {
                Some(error) => Err(error.clone()),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl ArticleSource for StubArticleSource {
        async fn list_subcategories(&self, _category: &str) -> AppResult<Vec<String>> {
            self.check()?;
            Ok(self.subcategories.clone())
        }

        async fn search_articles(
            &self,
            category: &str,
            subcategory: &str,
            images_only: bool,
            continuation_token: Option<&str>,
        ) -> AppResult<SearchPage> {
            self.search_calls.lock().unwrap().push(SearchCall {
                category: category.to_string(),
                subcategory: subcategory.to_string(),
                images_only,
                continuation_token: continuation_token.map(str::to_string),
            });
            self.check()?;

            let articles = self
                .articles
                .iter()
                .filter(|article| !images_only || article.has_image())
                .cloned()
                .collect();
            Ok(SearchPage {
                articles,
                continuation_token: self.next_token.clone(),
            })
        }

        async fn fetch_article(&self, title: &str) -> AppResult<Article> {
            self.fetch_calls.lock().unwrap().push(title.to_string());
            self.check()?;

            self.articles
                .iter()
                .find(|article| article.title == title)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("Article '{}' not found", title)))
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::{sync::Arc, time::Duration};

    use actix_web::http::StatusCode;

    use super::stubs::StubArticleSource;
    use crate::{
        app_state::AppState,
        config::Config,
        services::{content_service::ContentService, generator::TextGenerator},
    };

    pub fn test_state(
        articles: Arc<StubArticleSource>,
        generator: Option<Arc<dyn TextGenerator>>,
    ) -> AppState {
        let content_service = ContentService::new(generator, Duration::from_secs(5));
        AppState::with_services(articles, content_service, Config::test_config())
    }

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{fixtures::*, stubs::*};
    use crate::{errors::AppError, services::wikipedia_service::ArticleSource};

    #[tokio::test]
    async fn test_stub_filters_images_and_records_calls() {
        let source = StubArticleSource::with_articles(test_articles());

        let page = source
            .search_articles("Science", "Physics", true, Some("10"))
            .await
            .unwrap();
        assert_eq!(page.articles.len(), 2);

        let calls = source.search_calls.lock().unwrap();
        assert_eq!(calls[0].continuation_token.as_deref(), Some("10"));
        assert!(calls[0].images_only);
    }

    #[tokio::test]
    async fn test_stub_fetch_missing_is_not_found() {
        let source = StubArticleSource::with_articles(test_articles());
        assert!(source.fetch_article("Optics").await.is_ok());
        assert!(matches!(
            source.fetch_article("Nope").await,
            Err(AppError::NotFound(_))
        ));
    }
}
