//! The debug-help round trip: payload, POST, status check, extraction.
//!
//! [`ChatCompletionRequester::try_ask`] returns a tagged result where every
//! failure is an `Err`. [`ChatCompletionRequester::ask_for_debug_help`] keeps
//! the string contract: a body that carries no readable reply comes back
//! as `Ok` with a diagnostic that embeds the raw body.

use crate::config::DebuggerConfig;
use crate::error::RequesterError;
use crate::request::ChatRequest;
use crate::transport::{ChatTransport, ReqwestTransport};

use log::{debug, info, warn};

pub struct ChatCompletionRequester<T = ReqwestTransport> {
    config: DebuggerConfig,
    transport: T,
}

impl ChatCompletionRequester<ReqwestTransport> {
    /// Build a requester backed by a blocking reqwest client.
    ///
    /// # Errors
    ///
    /// Returns [`RequesterError::Config`] if the config fails validation, or
    /// [`RequesterError::Network`] if the HTTP client cannot be built.
    pub fn new(config: DebuggerConfig) -> Result<Self, RequesterError> {
        config.validate()?;
        let transport = ReqwestTransport::new(config.connect_timeout(), config.read_timeout())?;

        Ok(Self { config, transport })
    }
}

impl<T: ChatTransport> ChatCompletionRequester<T> {
    /// # Errors
    ///
    /// Returns [`RequesterError::Config`] if the config fails validation.
    pub fn with_transport(config: DebuggerConfig, transport: T) -> Result<Self, RequesterError> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &DebuggerConfig {
        &self.config
    }

    /// Send `user_text` and return the assistant's reply.
    ///
    /// # Errors
    ///
    /// - [`RequesterError::Serialization`] if the payload cannot be encoded
    /// - [`RequesterError::Network`] on connect, timeout or read failure
    /// - [`RequesterError::Http`] for any status outside 200..300, carrying the raw body
    /// - [`RequesterError::Parse`] if a 2xx body holds no readable reply
    pub fn try_ask(&self, user_text: &str) -> Result<String, RequesterError> {
        let body = ChatRequest::for_config(&self.config, user_text).to_json_body()?;

        info!(
            "Requesting debug help from {} (model {}, {} chars of user text)",
            self.config.endpoint(),
            self.config.model(),
            user_text.chars().count()
        );
        debug!(
            "Request body is {} bytes, key is {} chars",
            body.len(),
            self.config.api_key().len()
        );

        let response = self
            .transport
            .post_json(self.config.endpoint(), self.config.api_key(), body)
            .inspect_err(|e| warn!("Chat completion failed ({}): {}", e.error_category(), e))?;

        if !response.status.is_success() {
            warn!(
                "Chat completion returned HTTP {} ({} byte body)",
                response.status,
                response.body.len()
            );
            return Err(RequesterError::http(response.status, response.body));
        }

        let extracted = self.config.extraction().extract(&response.body);
        match extracted {
            Ok(reply) => {
                debug!("Extracted reply of {} chars", reply.chars().count());
                Ok(reply)
            }
            Err(reason) => {
                warn!("Could not extract reply: {}", reason);
                Err(RequesterError::parse(reason, response.body))
            }
        }
    }

    /// Like [`try_ask`](Self::try_ask), except a parse failure becomes an
    /// `Ok` diagnostic string embedding the raw response body.
    ///
    /// # Errors
    ///
    /// Config, serialization, network and HTTP failures propagate unchanged.
    pub fn ask_for_debug_help(&self, user_text: &str) -> Result<String, RequesterError> {
        match self.try_ask(user_text) {
            Err(error @ RequesterError::Parse { .. }) => match error.diagnostic() {
                Some(diagnostic) => Ok(diagnostic),
                None => Err(error),
            },
            other => other,
        }
    }
}

/// Resolve config from the environment and ask once.
///
/// Fails with [`RequesterError::Config`] before any network activity when
/// `OPENAI_API_KEY` is missing or blank.
pub fn ask_for_debug_help(user_text: &str) -> Result<String, RequesterError> {
    let config = DebuggerConfig::from_env()?;
    ChatCompletionRequester::new(config)?.ask_for_debug_help(user_text)
}
