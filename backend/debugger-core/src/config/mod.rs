//! Per-call configuration for the chat-completion requester.
//!
//! Only the API key comes from the environment. Every other field
//! defaults to the fixed debug-help constants and can be overridden
//! in code.

pub mod credential;
pub mod env_file;

use crate::error::ConfigError;
use crate::extract::ReplyExtraction;
use crate::{CHAT_COMPLETIONS_URL, DEBUG_SYSTEM_PROMPT, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

use common::RedactedApiKey;

use std::env::{self, VarError};
use std::time::Duration;

use url::Url;

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(60);

const MIN_TEMPERATURE: f64 = 0.0;
const MAX_TEMPERATURE: f64 = 2.0;

#[derive(Debug, Clone)]
pub struct DebuggerConfig {
    api_key: RedactedApiKey,
    endpoint: Url,
    model: String,
    system_prompt: String,
    temperature: f64,
    connect_timeout: Duration,
    read_timeout: Duration,
    extraction: ReplyExtraction,
}

impl DebuggerConfig {
    /// Build a config around an explicit key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty or whitespace.
    #[track_caller]
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = credential::validate_api_key(api_key.into(), "DebuggerConfig::new")?;
        Self::with_api_key(api_key)
    }

    /// Load `.env` if present, then read `OPENAI_API_KEY` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the variable is unset, blank, or not unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        env_file::try_load_dotenv();
        Self::from_lookup(|name| env::var(name))
    }

    /// Same as [`DebuggerConfig::from_env`] but reads through `lookup` and skips `.env`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&str) -> Result<String, VarError>,
    {
        let api_key = credential::resolve_api_key(lookup)?;
        Self::with_api_key(api_key)
    }

    fn with_api_key(api_key: RedactedApiKey) -> Result<Self, ConfigError> {
        Ok(Self {
            api_key,
            endpoint: parse_endpoint(CHAT_COMPLETIONS_URL)?,
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEBUG_SYSTEM_PROMPT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            extraction: ReplyExtraction::default(),
        })
    }

    /// Point the requester at another OpenAI-compatible endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] unless `endpoint` is an absolute http(s) URL.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, ConfigError> {
        self.endpoint = parse_endpoint(endpoint)?;
        Ok(self)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeouts(mut self, connect_timeout: Duration, read_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self.read_timeout = read_timeout;
        self
    }

    pub fn with_extraction(mut self, extraction: ReplyExtraction) -> Self {
        self.extraction = extraction;
        self
    }

    pub fn api_key(&self) -> &RedactedApiKey {
        &self.api_key
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    pub fn extraction(&self) -> ReplyExtraction {
        self.extraction
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::validation("model cannot be empty"));
        }

        if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&self.temperature) {
            return Err(ConfigError::validation(format!(
                "Invalid temperature: {} (must be {MIN_TEMPERATURE}-{MAX_TEMPERATURE})",
                self.temperature
            )));
        }

        if self.connect_timeout.is_zero() || self.read_timeout.is_zero() {
            return Err(ConfigError::validation("timeouts must be non-zero"));
        }

        Ok(())
    }
}

#[track_caller]
fn parse_endpoint(endpoint: &str) -> Result<Url, ConfigError> {
    let url =
        Url::parse(endpoint).map_err(|e| ConfigError::invalid_endpoint(endpoint, e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ConfigError::invalid_endpoint(
            endpoint,
            format!("unsupported scheme '{scheme}'"),
        )),
    }
}
