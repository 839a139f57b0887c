pub mod config;
pub mod error;
pub mod extract;
pub mod request;
pub mod requester;
pub mod transport;

#[cfg(test)]
mod tests;

pub use config::DebuggerConfig;
pub use error::{ConfigError, ParseFailure, RequesterError};
pub use extract::ReplyExtraction;
pub use requester::{ChatCompletionRequester, ask_for_debug_help};
pub use transport::{ChatTransport, RawResponse, ReqwestTransport};

pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const OPENAI_API_BASE_URL: &str = "https://api.openai.com";
pub const CHAT_COMPLETIONS_URL: &str =
    const_format::concatcp!(OPENAI_API_BASE_URL, "/v1/chat/completions");

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f64 = 0.2;
pub const DEBUG_SYSTEM_PROMPT: &str = "You are a senior Java/NetBeans developer. \
    The user will send compiler errors, stack traces, and code snippets \
    from Apache NetBeans projects. Explain clearly what is wrong and \
    propose concrete fixes with line examples.";
