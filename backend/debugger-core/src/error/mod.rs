pub mod config;
pub mod requester;

pub use config::ConfigError;
pub use requester::{ParseFailure, RequesterError};
