//! Shared value types for the ChatGPT debugger workspace.
//!
//! This crate holds the small pieces every other crate leans on:
//! error locations, the redacted credential wrapper, and HTTP status
//! classification. Nothing here performs I/O.
//!
//! ## Architecture
//!
//! - **common** (this crate): Value types
//! - **debugger-core**: Config, payload, transport and reply extraction
//! - **chatgpt-debugger**: Binary wiring logging and stdin/stdout around the core

pub mod error;
pub mod http_status;
pub mod redacted_key;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;
