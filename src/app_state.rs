use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        content_service::ContentService,
        generator::{OpenAiGenerator, TextGenerator},
        wikipedia_service::{ArticleSource, WikipediaClient},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub articles: Arc<dyn ArticleSource>,
    pub content_service: Arc<ContentService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let wikipedia = WikipediaClient::from_config(&config)?;
        log::info!("Using Wikipedia API at {}", wikipedia.endpoint());

        let generator: Option<Arc<dyn TextGenerator>> = match OpenAiGenerator::from_config(&config) {
            Some(generator) => {
                log::info!("Content generation enabled with model {}", generator.model());
                Some(Arc::new(generator))
            }
            None => {
                log::warn!("OPENAI_API_KEY is not set; summaries, lessons and exercises will use static content");
                None
            }
        };

        let content_service = ContentService::from_config(generator, &config);
        Ok(Self::with_services(Arc::new(wikipedia), content_service, config))
    }

    pub fn with_services(
        articles: Arc<dyn ArticleSource>,
        content_service: ContentService,
        config: Config,
    ) -> Self {
        Self {
            articles,
            content_service: Arc::new(content_service),
            config: Arc::new(config),
        }
    }
}
