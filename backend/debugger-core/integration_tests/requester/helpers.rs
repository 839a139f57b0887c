//! Test helpers for requester integration tests.
//!
//! The requester is blocking and owns a blocking reqwest client, so it is
//! built, used and dropped inside `spawn_blocking`, off the async workers
//! that drive the mock server.

use debugger_core::{ChatCompletionRequester, DebuggerConfig, ReplyExtraction, RequesterError};

use std::time::Duration;

use wiremock::MockServer;

pub const TEST_API_KEY: &str = "sk-integration-0123456789";
pub const CHAT_PATH: &str = "/v1/chat/completions";

pub const HELLO_WORLD_BODY: &str =
    r#"{"id":"chatcmpl-1","object":"chat.completion","choices":[{"index":0,"message":{"role":"assistant","content":"Hello\nWorld"},"finish_reason":"stop"}]}"#;

/// Settings for one blocking call against the mock server.
#[derive(Clone)]
pub struct CallSpec {
    pub endpoint: String,
    pub read_timeout: Duration,
    pub extraction: ReplyExtraction,
}

impl CallSpec {
    pub fn against(server: &MockServer) -> Self {
        Self {
            endpoint: format!("{}{}", server.uri(), CHAT_PATH),
            read_timeout: Duration::from_secs(5),
            extraction: ReplyExtraction::Structured,
        }
    }

    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    pub fn with_extraction(mut self, extraction: ReplyExtraction) -> Self {
        self.extraction = extraction;
        self
    }
}

fn build_requester(spec: &CallSpec) -> Result<ChatCompletionRequester, RequesterError> {
    let config = DebuggerConfig::new(TEST_API_KEY)?
        .with_endpoint(&spec.endpoint)?
        .with_timeouts(Duration::from_secs(2), spec.read_timeout)
        .with_extraction(spec.extraction);

    ChatCompletionRequester::new(config)
}

/// Run `ask_for_debug_help` on a blocking thread.
pub async fn ask(spec: CallSpec, user_text: &str) -> Result<String, RequesterError> {
    let user_text = user_text.to_string();
    tokio::task::spawn_blocking(move || build_requester(&spec)?.ask_for_debug_help(&user_text))
        .await
        .expect("blocking task panicked")
}

/// Run `try_ask` on a blocking thread.
pub async fn try_ask(spec: CallSpec, user_text: &str) -> Result<String, RequesterError> {
    let user_text = user_text.to_string();
    tokio::task::spawn_blocking(move || build_requester(&spec)?.try_ask(&user_text))
        .await
        .expect("blocking task panicked")
}
