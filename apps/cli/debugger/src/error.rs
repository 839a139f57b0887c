use common::ErrorLocation;

use debugger_core::RequesterError;

use std::panic::Location;

use thiserror::Error;

/// Errors surfaced by the `chatgpt-debugger` binary.
#[derive(Debug, Error)]
pub enum DebuggerAppError {
    /// Error from this app (logging, output)
    #[error("Debugger Error: {message} {location}")]
    Debugger {
        message: String,
        location: ErrorLocation,
    },

    /// Nothing usable on stdin
    #[error("Input Error: {message} {location}")]
    Input {
        message: String,
        location: ErrorLocation,
    },

    /// Error from the chat-completion round trip
    #[error("Core Error: {source} {location}")]
    Core {
        #[source]
        source: RequesterError,
        location: ErrorLocation,
    },
}

impl DebuggerAppError {
    #[track_caller]
    pub fn debugger(message: impl Into<String>) -> Self {
        DebuggerAppError::Debugger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn input(message: impl Into<String>) -> Self {
        DebuggerAppError::Input {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<RequesterError> for DebuggerAppError {
    #[track_caller]
    fn from(source: RequesterError) -> Self {
        DebuggerAppError::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
