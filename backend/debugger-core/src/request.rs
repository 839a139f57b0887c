//! Chat-completion request payload.
//!
//! `serde_json` escapes every string it writes: backslash, quote, newline,
//! carriage return and the remaining control characters. A `None` content
//! serializes as `null`, not as an empty string.

use crate::config::DebuggerConfig;
use crate::error::RequesterError;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage<'a> {
    pub role: Role,
    pub content: Option<&'a str>,
}

/// One request: the system prompt followed by the user's text.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: [ChatMessage<'a>; 2],
    pub temperature: f64,
}

impl<'a> ChatRequest<'a> {
    pub fn new(
        model: &'a str,
        system_prompt: &'a str,
        user_text: Option<&'a str>,
        temperature: f64,
    ) -> Self {
        Self {
            model,
            messages: [
                ChatMessage {
                    role: Role::System,
                    content: Some(system_prompt),
                },
                ChatMessage {
                    role: Role::User,
                    content: user_text,
                },
            ],
            temperature,
        }
    }

    pub fn for_config(config: &'a DebuggerConfig, user_text: &'a str) -> Self {
        Self::new(
            config.model(),
            config.system_prompt(),
            Some(user_text),
            config.temperature(),
        )
    }

    /// Serialize to the UTF-8 request entity.
    ///
    /// # Errors
    ///
    /// Returns [`RequesterError::Serialization`] if serde_json rejects the value.
    pub fn to_json_body(&self) -> Result<Vec<u8>, RequesterError> {
        Ok(serde_json::to_vec(self)?)
    }
}
