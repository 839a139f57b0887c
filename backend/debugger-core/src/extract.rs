//! Pulling the assistant's text out of a 2xx response body.
//!
//! Two strategies are supported:
//!
//! - [`ReplyExtraction::Structured`] parses the body and reads
//!   `choices[0].message.content` with full JSON unescaping.
//! - [`ReplyExtraction::ContentMarker`] scans for the first `"content":`
//!   and takes the text up to the next quote. Only `\n` and `\"` are
//!   unescaped, in that order. Any other escape passes through as-is.

use crate::error::ParseFailure;

use log::debug;
use serde::Deserialize;

pub const CONTENT_MARKER: &str = "\"content\":";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplyExtraction {
    #[default]
    Structured,
    ContentMarker,
}

impl ReplyExtraction {
    pub fn extract(self, body: &str) -> Result<String, ParseFailure> {
        match self {
            ReplyExtraction::Structured => extract_structured(body),
            ReplyExtraction::ContentMarker => extract_content_marker(body),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<AssistantMessage>,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<String>,
}

pub fn extract_structured(body: &str) -> Result<String, ParseFailure> {
    let response: ChatCompletionResponse = serde_json::from_str(body).map_err(|e| {
        debug!("Response body is not a chat completion: {}", e);
        ParseFailure::MalformedContent
    })?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or(ParseFailure::ContentFieldMissing)
}

pub fn extract_content_marker(body: &str) -> Result<String, ParseFailure> {
    let marker_at = body
        .find(CONTENT_MARKER)
        .ok_or(ParseFailure::ContentFieldMissing)?;

    let value_start = marker_at + CONTENT_MARKER.len();
    let open_quote = find_quote(body, value_start).ok_or(ParseFailure::MalformedContent)?;
    let close_quote = find_quote(body, open_quote + 1).ok_or(ParseFailure::MalformedContent)?;

    Ok(unescape_minimal(&body[open_quote + 1..close_quote]))
}

/// Replace `\n` with a newline, then `\"` with a quote.
pub fn unescape_minimal(raw: &str) -> String {
    raw.replace("\\n", "\n").replace("\\\"", "\"")
}

fn find_quote(haystack: &str, from: usize) -> Option<usize> {
    haystack
        .get(from..)
        .and_then(|rest| rest.find('"'))
        .map(|offset| from + offset)
}
