use crate::RedactedApiKey;

/// **VALUE**: Verifies the key never appears in Debug or Display output.
///
/// **WHY THIS MATTERS**: Config structs holding the key derive Debug and get logged.
///
/// **BUG THIS CATCHES**: Would catch a derived Debug replacing the manual impl.
#[test]
fn given_api_key_when_formatted_then_value_is_redacted() {
    // GIVEN: A realistic key
    let key = RedactedApiKey::new("sk-live-secret-value-123456");

    // WHEN: Formatting with Debug and Display
    let debug = format!("{:?}", key);
    let display = format!("{}", key);

    // THEN: Neither contains the secret
    assert!(!debug.contains("secret"), "Debug leaked key: {debug}");
    assert!(!display.contains("secret"), "Display leaked key: {display}");
    assert!(debug.contains("REDACTED"));
}

/// **VALUE**: Verifies the Authorization header value format.
///
/// **WHY THIS MATTERS**: The endpoint rejects anything but `Bearer <key>`.
///
/// **BUG THIS CATCHES**: Missing space or prefix typo.
#[test]
fn given_api_key_when_bearer_header_built_then_has_bearer_prefix() {
    // GIVEN
    let key = RedactedApiKey::new("sk-abc");

    // WHEN
    let header = key.bearer_header_value();

    // THEN
    assert_eq!(header, "Bearer sk-abc");
    assert_eq!(key.expose(), "sk-abc");
    assert_eq!(key.len(), 6);
}

/// **VALUE**: Verifies blank detection treats whitespace-only keys as missing.
///
/// **WHY THIS MATTERS**: `OPENAI_API_KEY=" "` would otherwise send a useless request.
///
/// **BUG THIS CATCHES**: Using `is_empty()` where `is_blank()` is required.
#[test]
fn given_whitespace_key_when_checked_then_is_blank_but_not_empty() {
    let key = RedactedApiKey::new("  \t");

    assert!(key.is_blank());
    assert!(!key.is_empty());
}

/// **VALUE**: Verifies serializing the key fails instead of writing the secret.
///
/// **WHY THIS MATTERS**: A config dump to JSON must never carry the credential.
///
/// **BUG THIS CATCHES**: Would catch a derived Serialize sneaking in.
#[test]
fn given_api_key_when_serialized_then_returns_error() {
    // GIVEN
    let key = RedactedApiKey::new("sk-never-serialize-me");

    // WHEN
    let result = serde_json::to_string(&key);

    // THEN
    let err = result.expect_err("serialization must fail");
    assert!(err.to_string().contains("cannot be serialized"));
}
