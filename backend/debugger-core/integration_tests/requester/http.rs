use super::helpers::{CHAT_PATH, CallSpec, HELLO_WORLD_BODY, TEST_API_KEY, ask, try_ask};

use debugger_core::{
    DEBUG_SYSTEM_PROMPT, DEFAULT_MODEL, ParseFailure, ReplyExtraction, RequesterError,
};

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the full wire contract: method, path, headers, payload.
///
/// **WHY THIS MATTERS**: The real endpoint is strict about auth and content type.
/// This is the only test that exercises reqwest end to end.
///
/// **BUG THIS CATCHES**: Missing charset, wrong auth scheme, payload drift.
#[tokio::test(flavor = "multi_thread")]
async fn given_mock_endpoint_when_asking_then_sends_expected_request_and_returns_reply() {
    // GIVEN: A mock that only matches the exact contract
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .and(header("content-type", "application/json; charset=utf-8"))
        .and(header(
            "authorization",
            format!("Bearer {TEST_API_KEY}").as_str(),
        ))
        .and(body_partial_json(json!({
            "model": DEFAULT_MODEL,
            "temperature": 0.2,
            "messages": [
                { "role": "system", "content": DEBUG_SYSTEM_PROMPT },
                { "role": "user", "content": "error: cannot find symbol\n  \"foo\"" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(HELLO_WORLD_BODY))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN
    let reply = ask(
        CallSpec::against(&server),
        "error: cannot find symbol\n  \"foo\"",
    )
    .await;

    // THEN
    assert_eq!(reply.expect("request should succeed"), "Hello\nWorld");
}

/// **VALUE**: Verifies a 500 becomes an HTTP error carrying status and body.
///
/// **WHY THIS MATTERS**: The error body is read from the error stream, not discarded.
///
/// **BUG THIS CATCHES**: Calling error_for_status() and losing the body.
#[tokio::test(flavor = "multi_thread")]
async fn given_server_error_when_asking_then_http_error_with_body() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string(r#"{"error":"x"}"#))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN
    let err = ask(CallSpec::against(&server), "q")
        .await
        .expect_err("500 must fail");

    // THEN
    let message = err.to_string();
    assert!(message.contains("500"), "message: {message}");
    assert!(message.contains('x'), "message: {message}");
    assert!(matches!(err, RequesterError::Http { ref body, .. } if body == r#"{"error":"x"}"#));
}

/// **VALUE**: Verifies a 401 body is surfaced verbatim.
///
/// **WHY THIS MATTERS**: "Incorrect API key provided" is the most common failure.
///
/// **BUG THIS CATCHES**: Treating client errors differently from server errors.
#[tokio::test(flavor = "multi_thread")]
async fn given_unauthorized_when_asking_then_client_error_category() {
    let server = MockServer::start().await;
    let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string(body))
        .mount(&server)
        .await;

    let err = ask(CallSpec::against(&server), "q")
        .await
        .expect_err("401 must fail");

    assert_eq!(err.status_code(), Some(401));
    assert_eq!(err.error_category(), "client_error");
    assert!(err.to_string().contains("Incorrect API key provided"));
}

/// **VALUE**: Verifies a 200 without content yields an Ok diagnostic with the raw body.
///
/// **WHY THIS MATTERS**: The string contract holds over real HTTP too.
///
/// **BUG THIS CATCHES**: Body decoding differences between stub and reqwest paths.
#[tokio::test(flavor = "multi_thread")]
async fn given_ok_without_content_when_asking_then_diagnostic_embeds_body() {
    let server = MockServer::start().await;
    let body = r#"{"id":"chatcmpl-2","choices":[]}"#;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let reply = ask(CallSpec::against(&server), "q").await.unwrap();

    assert!(reply.contains(body), "reply: {reply}");
    assert!(reply.starts_with("No 'content' field found in response:"));
}

/// **VALUE**: Verifies try_ask exposes the same case as a typed parse error.
///
/// **WHY THIS MATTERS**: Callers can branch on the variant instead of the text.
///
/// **BUG THIS CATCHES**: Parse failures leaking through as Ok in try_ask.
#[tokio::test(flavor = "multi_thread")]
async fn given_ok_without_content_when_try_ask_then_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let err = try_ask(CallSpec::against(&server), "q")
        .await
        .expect_err("garbage must fail");

    assert!(matches!(
        err,
        RequesterError::Parse {
            reason: ParseFailure::MalformedContent,
            ..
        }
    ));
}

/// **VALUE**: Verifies legacy marker extraction over real HTTP.
///
/// **WHY THIS MATTERS**: Both extraction modes must work with reqwest-decoded bodies.
///
/// **BUG THIS CATCHES**: Mode selection ignored by the requester.
#[tokio::test(flavor = "multi_thread")]
async fn given_marker_mode_when_asking_then_returns_minimally_unescaped_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"choices":[{"message":{"content":"a\tb\nc"}}]}"#),
        )
        .mount(&server)
        .await;

    let reply = ask(
        CallSpec::against(&server).with_extraction(ReplyExtraction::ContentMarker),
        "q",
    )
    .await
    .unwrap();

    assert_eq!(reply, "a\\tb\nc");
}

/// **VALUE**: Verifies the read timeout aborts a slow response as a timeout error.
///
/// **WHY THIS MATTERS**: Timeouts are the only cancellation mechanism.
///
/// **BUG THIS CATCHES**: Client built without a timeout, hanging forever.
#[tokio::test(flavor = "multi_thread")]
async fn given_slow_server_when_asking_then_network_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(HELLO_WORLD_BODY)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let err = ask(
        CallSpec::against(&server).with_read_timeout(Duration::from_millis(300)),
        "q",
    )
    .await
    .expect_err("slow response must time out");

    assert!(
        matches!(err, RequesterError::Network { is_timeout: true, .. }),
        "got {err:?}"
    );
}

/// **VALUE**: Verifies identical calls yield identical replies over HTTP.
///
/// **WHY THIS MATTERS**: No hidden state between invocations.
///
/// **BUG THIS CATCHES**: Accumulating messages across calls.
#[tokio::test(flavor = "multi_thread")]
async fn given_same_input_twice_when_asking_then_same_output_and_two_requests() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HELLO_WORLD_BODY))
        .expect(2)
        .mount(&server)
        .await;

    let first = ask(CallSpec::against(&server), "same").await.unwrap();
    let second = ask(CallSpec::against(&server), "same").await.unwrap();

    assert_eq!(first, second);
}
