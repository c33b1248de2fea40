use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// A remote model that turns a prompt into text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, max_tokens: u32, temperature: f32) -> AppResult<String>;
}

/// Chat-completions backed generator.
pub struct OpenAiGenerator {
    client: Client<OpenAIConfig>,
    model: String,
}

impl std::fmt::Debug for OpenAiGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiGenerator")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

impl OpenAiGenerator {
    pub fn new(api_key: &SecretString, api_base: Option<&str>, model: impl Into<String>) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(api_key.expose_secret());
        if let Some(api_base) = api_base {
            openai_config = openai_config.with_api_base(api_base);
        }

        Self {
            client: Client::with_config(openai_config).with_backoff(single_attempt()),
            model: model.into(),
        }
    }

    /// `None` when no API key is configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        if !config.generation_configured() {
            return None;
        }
        let api_key = config.openai_api_key.as_ref()?;
        Some(Self::new(
            api_key,
            config.openai_api_base.as_deref(),
            config.openai_model.clone(),
        ))
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Rate limits and server errors fail on the first response; retries are
/// decided by `ContentService`, which only retries timeouts.
fn single_attempt() -> backoff::ExponentialBackoff {
    backoff::ExponentialBackoff {
        max_elapsed_time: Some(Duration::ZERO),
        ..Default::default()
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str, max_tokens: u32, temperature: f32) -> AppResult<String> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.clone())
            .messages(messages)
            .max_completion_tokens(max_tokens)
            .temperature(temperature)
            .build()?;

        log::debug!("Requesting completion from {} (max_tokens: {})", self.model, max_tokens);

        let response = self.client.chat().create(request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| AppError::UpstreamUnavailable("No content in generation response".to_string()))
    }
}
