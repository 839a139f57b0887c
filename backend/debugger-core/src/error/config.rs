use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Config Missing API Key Error: {var} environment variable not set. \
         Please configure your OpenAI API key before using ChatGPT Debugger. {location}"
    )]
    MissingApiKey {
        var: &'static str,
        location: ErrorLocation,
    },

    #[error(
        "Config Empty API Key Error: API key from {origin} is empty. \
         Set OPENAI_API_KEY to a valid OpenAI API key. {location}"
    )]
    EmptyApiKey {
        origin: &'static str,
        location: ErrorLocation,
    },

    #[error("Config Invalid Unicode Error: {var} contains invalid unicode {location}")]
    InvalidUnicode {
        var: &'static str,
        location: ErrorLocation,
    },

    #[error("Config Invalid Endpoint Error: {endpoint}: {reason} {location}")]
    InvalidEndpoint {
        endpoint: String,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Config Validation Error: {reason} {location}")]
    ValidationError {
        reason: String,
        location: ErrorLocation,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn missing_api_key(var: &'static str) -> Self {
        ConfigError::MissingApiKey {
            var,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn empty_api_key(origin: &'static str) -> Self {
        ConfigError::EmptyApiKey {
            origin,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_unicode(var: &'static str) -> Self {
        ConfigError::InvalidUnicode {
            var,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_endpoint(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidEndpoint {
            endpoint: endpoint.into(),
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(reason: impl Into<String>) -> Self {
        ConfigError::ValidationError {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
