use chatgpt_debugger::error::DebuggerAppError;
use chatgpt_debugger::logger::{default_log_dir, initialize as LoggerInitialize};
use chatgpt_debugger::run;

use std::fs::create_dir_all;
use std::io::{stdin, stdout};
use std::process::ExitCode;

use log::{error, info};

fn main() -> ExitCode {
    if let Err(e) = init_logging() {
        eprintln!("Logging disabled: {e}");
    }

    info!("ChatGPT debugger starting");

    match run(&mut stdin().lock(), &mut stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() -> Result<(), DebuggerAppError> {
    let log_dir = default_log_dir()
        .ok_or_else(|| DebuggerAppError::debugger("No local data directory for logs"))?;

    create_dir_all(&log_dir).map_err(|e| {
        DebuggerAppError::debugger(format!("Failed to create log directory: {e}"))
    })?;

    LoggerInitialize(&log_dir)?;
    info!("Log directory: {}", log_dir.display());
    Ok(())
}
