use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    constants::{fallbacks, prompts},
    errors::{AppError, AppResult},
    models::domain::{ContentKind, EnglishLevel, ExerciseType, GenerationRequest, GenerationResult},
    services::generator::TextGenerator,
};

const TIMEOUT_BACKOFF_BASE: Duration = Duration::from_secs(3);

/// Builds learning material for an article, degrading to static content
/// whenever the generator is absent or fails.
pub struct ContentService {
    generator: Option<Arc<dyn TextGenerator>>,
    timeout: Duration,
    timeout_retries: u32,
    backoff_base: Duration,
}

impl ContentService {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>, timeout: Duration) -> Self {
        Self {
            generator,
            timeout,
            timeout_retries: 0,
            backoff_base: TIMEOUT_BACKOFF_BASE,
        }
    }

    pub fn from_config(generator: Option<Arc<dyn TextGenerator>>, config: &Config) -> Self {
        Self::new(generator, config.generation_timeout())
            .with_timeout_retries(config.generation_timeout_retries)
    }

    /// Extra attempts made only after a timeout, with exponential backoff.
    pub fn with_timeout_retries(mut self, retries: u32) -> Self {
        self.timeout_retries = retries;
        self
    }

    pub fn with_backoff_base(mut self, base: Duration) -> Self {
        self.backoff_base = base;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn generate_summary(&self, article_title: &str, level: EnglishLevel) -> GenerationResult {
        let prompt = prompts::summary_prompt(article_title, level);
        self.generate_or_fallback(ContentKind::Summary, &prompt, || {
            fallbacks::summary_fallback(article_title, level)
        })
        .await
    }

    pub async fn generate_lesson(
        &self,
        article_title: &str,
        level: EnglishLevel,
        article_body: &str,
    ) -> GenerationResult {
        let prompt = prompts::lesson_prompt(article_title, level, article_body);
        self.generate_or_fallback(ContentKind::Lesson, &prompt, || {
            fallbacks::lesson_fallback(article_title, level)
        })
        .await
    }

    pub async fn generate_exercise(
        &self,
        article_title: &str,
        level: EnglishLevel,
        exercise_type: ExerciseType,
    ) -> GenerationResult {
        let prompt = prompts::exercise_prompt(article_title, level, exercise_type);
        self.generate_or_fallback(ContentKind::Exercise(exercise_type), &prompt, || {
            fallbacks::exercise_fallback(article_title, level, exercise_type)
        })
        .await
    }

    /// Dispatches on the request kind; `article_body` is only read for lessons.
    pub async fn generate(&self, request: &GenerationRequest, article_body: &str) -> GenerationResult {
        let title = request.article_title.as_str();
        let level = request.english_level;
        match request.kind {
            ContentKind::Summary => self.generate_summary(title, level).await,
            ContentKind::Lesson => self.generate_lesson(title, level, article_body).await,
            ContentKind::Exercise(exercise_type) => {
                self.generate_exercise(title, level, exercise_type).await
            }
        }
    }

    async fn generate_or_fallback<F>(&self, kind: ContentKind, prompt: &str, fallback: F) -> GenerationResult
    where
        F: FnOnce() -> String,
    {
        match self.call_generator(kind, prompt).await {
            Ok(html) => GenerationResult::new(html),
            Err(AppError::Misconfigured(reason)) => {
                log::debug!("Serving fallback {}: {}", kind, reason);
                GenerationResult::new(fallback())
            }
            Err(err) if err.is_degradable() => {
                log::warn!("Generation of {} unavailable, serving fallback: {}", kind, err);
                GenerationResult::new(fallback())
            }
            Err(err) => {
                log::error!("Generation of {} failed, serving fallback: {}", kind, err);
                GenerationResult::new(fallback())
            }
        }
    }

    async fn call_generator(&self, kind: ContentKind, prompt: &str) -> AppResult<String> {
        let generator = self
            .generator
            .as_ref()
            .ok_or_else(|| AppError::Misconfigured("generation API key not configured".to_string()))?;

        let mut attempt = 0;
        loop {
            let call = generator.generate(prompt, kind.max_tokens(), ContentKind::TEMPERATURE);
            match tokio::time::timeout(self.timeout, call).await {
                Ok(result) => return result,
                Err(_) if attempt < self.timeout_retries => {
                    let wait = self.backoff_base * 2u32.pow(attempt);
                    attempt += 1;
                    log::warn!(
                        "Generation of {} timed out, retrying in {:?} ({}/{})",
                        kind,
                        wait,
                        attempt,
                        self.timeout_retries
                    );
                    tokio::time::sleep(wait).await;
                }
                Err(_) => {
                    return Err(AppError::UpstreamUnavailable(format!(
                        "generation timed out after {:?}",
                        self.timeout
                    )))
                }
            }
        }
    }
}
