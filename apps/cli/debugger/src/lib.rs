// Library exports for testing
// The binary (main.rs) imports these as well

pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

use crate::error::DebuggerAppError;

use debugger_core::RequesterError;

use std::io::{Read, Write};

use log::info;

/// Read all of `input`, ask for debug help, write the reply to `output`.
///
/// # Errors
///
/// Returns [`DebuggerAppError`] if stdin is empty or unreadable, the request
/// fails, or the reply cannot be written.
pub fn run<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<(), DebuggerAppError> {
    run_with(input, output, debugger_core::ask_for_debug_help)
}

/// [`run`] with the ask step injected.
pub fn run_with<R, W, F>(input: &mut R, output: &mut W, ask: F) -> Result<(), DebuggerAppError>
where
    R: Read,
    W: Write,
    F: FnOnce(&str) -> Result<String, RequesterError>,
{
    let mut user_text = String::new();
    input
        .read_to_string(&mut user_text)
        .map_err(|e| DebuggerAppError::input(format!("Failed to read stdin: {e}")))?;

    if user_text.trim().is_empty() {
        return Err(DebuggerAppError::input(
            "Nothing to send: pipe a compiler error, stack trace or code snippet on stdin",
        ));
    }

    info!("Read {} chars from stdin", user_text.chars().count());
    let reply = ask(&user_text)?;

    writeln!(output, "{reply}")
        .and_then(|()| output.flush())
        .map_err(|e| DebuggerAppError::debugger(format!("Failed to write reply: {e}")))?;

    Ok(())
}
