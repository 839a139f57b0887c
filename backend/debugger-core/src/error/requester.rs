//! Error types for a chat-completion round trip.
//!
//! - HTTP status codes stored directly (not parsed from strings)
//! - Parse failures keep the raw body so callers can still show it
//! - `#[track_caller]` constructors for automatic location capture

use crate::error::config::ConfigError;

use common::{ErrorLocation, HttpStatusCode};

use std::fmt;
use std::panic::Location;

use thiserror::Error as ThisError;

/// Why a 2xx body did not yield an assistant message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    /// No `content` field (or no choice carrying one).
    ContentFieldMissing,
    /// A `content` marker exists but its value could not be read.
    MalformedContent,
}

impl ParseFailure {
    /// First line of the diagnostic handed back in place of a reply.
    pub fn diagnostic_prefix(&self) -> &'static str {
        match self {
            ParseFailure::ContentFieldMissing => "No 'content' field found in response:",
            ParseFailure::MalformedContent => "Could not parse assistant message from response:",
        }
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFailure::ContentFieldMissing => write!(f, "no content field in response"),
            ParseFailure::MalformedContent => write!(f, "could not read assistant message"),
        }
    }
}

#[derive(Debug, ThisError)]
pub enum RequesterError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("HTTP Error: HTTP {status_code}:\n{body} {location}")]
    Http {
        status_code: HttpStatusCode,
        body: String,
        location: ErrorLocation,
    },

    #[error("Network Error: {message} {location}")]
    Network {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("Serialization Error: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Parse Error: {reason} ({} byte body) {location}", .raw_body.len())]
    Parse {
        reason: ParseFailure,
        raw_body: String,
        location: ErrorLocation,
    },
}

impl RequesterError {
    #[track_caller]
    pub fn http(status_code: impl Into<HttpStatusCode>, body: impl Into<String>) -> Self {
        RequesterError::Http {
            status_code: status_code.into(),
            body: body.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn parse(reason: ParseFailure, raw_body: impl Into<String>) -> Self {
        RequesterError::Parse {
            reason,
            raw_body: raw_body.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn serialization(message: impl Into<String>) -> Self {
        RequesterError::Serialization {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create from reqwest error with timeout/connect categorization.
    #[track_caller]
    pub fn from_reqwest(error: &reqwest::Error) -> Self {
        RequesterError::Network {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Diagnostic text for parse failures: prefix line followed by the raw body.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            RequesterError::Parse {
                reason, raw_body, ..
            } => Some(format!("{}\n{}", reason.diagnostic_prefix(), raw_body)),
            _ => None,
        }
    }

    /// Get error category for logs.
    pub fn error_category(&self) -> &'static str {
        match self {
            RequesterError::Config(_) => "config",
            RequesterError::Http { status_code, .. } if status_code.is_client_error() => {
                "client_error"
            }
            RequesterError::Http { status_code, .. } if status_code.is_server_error() => {
                "server_error"
            }
            RequesterError::Http { .. } => "http",
            RequesterError::Network {
                is_timeout: true, ..
            } => "timeout",
            RequesterError::Network {
                is_connection: true,
                ..
            } => "connection",
            RequesterError::Network { .. } => "network",
            RequesterError::Serialization { .. } => "serialization",
            RequesterError::Parse { .. } => "parse",
        }
    }

    /// Get HTTP status code if applicable.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RequesterError::Http { status_code, .. } => Some(status_code.0),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RequesterError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        RequesterError::from_reqwest(&error)
    }
}

impl From<serde_json::Error> for RequesterError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        RequesterError::Serialization {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
