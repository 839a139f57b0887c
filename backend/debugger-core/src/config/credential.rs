//! API key resolution and sanity checks.
//!
//! An unset or blank key is fatal. Keys that look like copy-pasted
//! placeholders are accepted but logged, since the server is the
//! authority on what a valid key looks like.

use crate::OPENAI_API_KEY_ENV;
use crate::error::ConfigError;

use common::RedactedApiKey;

use std::env::VarError;

use log::{debug, warn};

/// Resolve the key through `lookup`, which receives the variable name.
#[track_caller]
pub fn resolve_api_key<F>(lookup: F) -> Result<RedactedApiKey, ConfigError>
where
    F: FnOnce(&str) -> Result<String, VarError>,
{
    match lookup(OPENAI_API_KEY_ENV) {
        Ok(value) => validate_api_key(value, OPENAI_API_KEY_ENV),
        Err(VarError::NotPresent) => {
            debug!("{} is not set", OPENAI_API_KEY_ENV);
            Err(ConfigError::missing_api_key(OPENAI_API_KEY_ENV))
        }
        Err(VarError::NotUnicode(_)) => {
            warn!("{} contains invalid unicode", OPENAI_API_KEY_ENV);
            Err(ConfigError::invalid_unicode(OPENAI_API_KEY_ENV))
        }
    }
}

/// Wrap `value` if it is non-blank. `origin` names where it came from for messages.
#[track_caller]
pub fn validate_api_key(value: String, origin: &'static str) -> Result<RedactedApiKey, ConfigError> {
    let key = RedactedApiKey::new(value);

    if key.is_blank() {
        return Err(ConfigError::empty_api_key(origin));
    }

    if let Some(pattern) = detect_placeholder(key.expose()) {
        warn!(
            "API key from {} looks like a placeholder ('{}'); the request will likely be rejected",
            origin, pattern
        );
    }

    debug!("Resolved API key from {} ({} chars)", origin, key.len());
    Ok(key)
}

/// Detect common placeholder patterns.
///
/// Returns the matched pattern name if detected.
pub(crate) fn detect_placeholder(key: &str) -> Option<&'static str> {
    let lower = key.to_lowercase();

    static PATTERNS: &[(&str, &str)] = &[
        ("your-api-key", "your-api-key"),
        ("your_api_key", "your_api_key"),
        ("<your", "<your...>"),
        ("sk-...", "sk-..."),
        ("placeholder", "placeholder"),
        ("changeme", "changeme"),
        ("xxx", "xxx"),
    ];

    PATTERNS
        .iter()
        .find(|(pattern, _)| lower.contains(pattern))
        .map(|(_, name)| *name)
}
