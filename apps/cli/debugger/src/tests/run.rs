use crate::error::DebuggerAppError;
use crate::run_with;

use debugger_core::{ConfigError, RequesterError};

use std::cell::Cell;
use std::io::Cursor;

/// **VALUE**: Verifies stdin is forwarded whole and the reply lands on stdout.
///
/// **WHY THIS MATTERS**: Multi-line stack traces must not be cut at the first line.
///
/// **BUG THIS CATCHES**: Using read_line instead of read_to_string.
#[test]
fn given_multiline_stdin_when_run_then_forwards_all_text_and_prints_reply() {
    // GIVEN
    let trace = "java.lang.NullPointerException\n\tat Main.main(Main.java:5)\n";
    let mut input = Cursor::new(trace.as_bytes());
    let mut output = Vec::new();

    // WHEN
    let result = run_with(&mut input, &mut output, |text| {
        assert_eq!(text, trace);
        Ok("Check for null before calling.".to_string())
    });

    // THEN
    assert!(result.is_ok());
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "Check for null before calling.\n"
    );
}

/// **VALUE**: Verifies blank stdin is rejected before asking.
///
/// **WHY THIS MATTERS**: An empty question costs a request and returns nothing useful.
///
/// **BUG THIS CATCHES**: Sending whitespace-only payloads.
#[test]
fn given_blank_stdin_when_run_then_input_error_without_asking() {
    let asked = Cell::new(false);
    let mut input = Cursor::new(b"  \n".to_vec());
    let mut output = Vec::new();

    let result = run_with(&mut input, &mut output, |_| {
        asked.set(true);
        Ok(String::new())
    });

    assert!(matches!(result, Err(DebuggerAppError::Input { .. })));
    assert!(!asked.get());
    assert!(output.is_empty());
}

/// **VALUE**: Verifies core errors are wrapped with their message intact.
///
/// **WHY THIS MATTERS**: The missing-key remediation text must reach the terminal.
///
/// **BUG THIS CATCHES**: Replacing the source error with a generic message.
#[test]
fn given_core_failure_when_run_then_wraps_requester_error() {
    let mut input = Cursor::new(b"some error".to_vec());
    let mut output = Vec::new();

    let result = run_with(&mut input, &mut output, |_| {
        Err(RequesterError::from(ConfigError::missing_api_key(
            "OPENAI_API_KEY",
        )))
    });

    let err = result.expect_err("core failure must propagate");
    assert!(matches!(err, DebuggerAppError::Core { .. }));
    assert!(err.to_string().contains("OPENAI_API_KEY environment variable not set"));
    assert!(output.is_empty());
}
