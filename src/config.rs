use std::{env, time::Duration};

use secrecy::{ExposeSecret, SecretString};

pub const DEFAULT_WIKIPEDIA_API_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub wikipedia_api_endpoint: String,
    pub wikipedia_user_agent: String,
    pub http_timeout_secs: u64,
    pub openai_api_key: Option<SecretString>,
    pub openai_api_base: Option<String>,
    pub openai_model: String,
    pub generation_timeout_secs: u64,
    pub generation_timeout_retries: u32,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: parse_env("WEB_SERVER_PORT").unwrap_or(8080),
            wikipedia_api_endpoint: env::var("WIKIPEDIA_API_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_WIKIPEDIA_API_ENDPOINT.to_string()),
            wikipedia_user_agent: env::var("WIKIPEDIA_USER_AGENT")
                .unwrap_or_else(|_| default_user_agent()),
            http_timeout_secs: parse_env("HTTP_TIMEOUT_SECS").unwrap_or(30),
            openai_api_key: non_blank_env("OPENAI_API_KEY").map(SecretString::from),
            openai_api_base: non_blank_env("OPENAI_API_BASE"),
            openai_model: non_blank_env("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            generation_timeout_secs: parse_env("GENERATION_TIMEOUT_SECS").unwrap_or(120),
            generation_timeout_retries: parse_env("GENERATION_TIMEOUT_RETRIES").unwrap_or(0),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|origins| split_origins(&origins))
                .unwrap_or_default(),
        }
    }

    /// Whether a generation API key is present; without one every generation
    /// request is answered with fallback content.
    pub fn generation_configured(&self) -> bool {
        self.openai_api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_server_host.clone(), self.web_server_port)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            wikipedia_api_endpoint: "http://127.0.0.1:9/w/api.php".to_string(),
            wikipedia_user_agent: "wikilearn-server-tests".to_string(),
            http_timeout_secs: 5,
            openai_api_key: None,
            openai_api_base: None,
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            generation_timeout_secs: 5,
            generation_timeout_retries: 0,
            cors_allowed_origins: Vec::new(),
        }
    }
}

fn default_user_agent() -> String {
    format!("wikilearn-server/{}", env!("CARGO_PKG_VERSION"))
}

fn non_blank_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.trim().parse().ok())
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
