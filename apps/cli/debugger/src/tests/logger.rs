// Unit tests for logger initialization and dispatch construction

use crate::logger::{LOG_FILE_NAME, build_dispatch, default_log_dir, initialize};

use std::path::PathBuf;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't fail.
///
/// **WHY THIS MATTERS**: main() and tests may both initialize logging. fern panics
/// or errors when a second global logger is installed.
///
/// **BUG THIS CATCHES**: Would catch if the Once or AtomicBool guards are removed.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // GIVEN: A valid temporary directory
    let temp_dir = tempfile::tempdir().unwrap();

    // WHEN: Calling initialize twice
    let result1 = initialize(temp_dir.path());
    let result2 = initialize(temp_dir.path());

    // THEN: Both should return Ok
    assert!(result1.is_ok(), "First initialization should succeed");
    assert!(
        result2.is_ok(),
        "Second initialization should succeed (idempotent)"
    );
}

/// **VALUE**: Verifies an unwritable log directory is reported, not panicked on.
///
/// **WHY THIS MATTERS**: main() falls back to running without logs in that case.
///
/// **BUG THIS CATCHES**: Would catch if `fern::log_file()` gets unwrapped.
#[test]
fn given_invalid_log_dir_when_dispatch_built_then_returns_error() {
    // GIVEN: A path that cannot hold a file on Unix-like systems
    let invalid_dir = PathBuf::from("/dev/null/invalid-path");

    // WHEN
    let result = build_dispatch(&invalid_dir);

    // THEN
    let err = result.err().expect("Should return error for invalid log directory");
    assert!(
        err.to_string().contains("Failed to create log file"),
        "unexpected error: {err}"
    );
}

/// **VALUE**: Verifies the log file is created in the requested directory.
///
/// **WHY THIS MATTERS**: Users are told to attach this file to bug reports.
///
/// **BUG THIS CATCHES**: Writing the file to the working directory instead.
#[test]
fn given_writable_dir_when_dispatch_built_then_creates_log_file() {
    let temp_dir = tempfile::tempdir().unwrap();

    let result = build_dispatch(temp_dir.path());

    assert!(result.is_ok());
    assert!(temp_dir.path().join(LOG_FILE_NAME).exists());
}

/// **VALUE**: Verifies the default log directory is app-specific.
///
/// **WHY THIS MATTERS**: Avoids dropping log files straight into the user's data root.
///
/// **BUG THIS CATCHES**: Losing the app subdirectory join.
#[test]
fn given_platform_data_dir_when_default_log_dir_then_ends_with_app_name() {
    if let Some(dir) = default_log_dir() {
        assert!(dir.ends_with("chatgpt-debugger"));
    }
}
