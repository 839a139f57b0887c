//! Best-effort `.env` loading ahead of the environment lookup.

use std::env;
use std::path::PathBuf;

use log::{debug, info, warn};

/// Result of attempting to load a `.env` file.
#[derive(Debug)]
pub struct EnvLoadResult {
    /// Path to the loaded file, if any.
    pub path: Option<PathBuf>,
}

impl EnvLoadResult {
    pub fn loaded(&self) -> bool {
        self.path.is_some()
    }
}

/// Load `.env` from the current directory, then from next to the executable.
///
/// Variables already present in the process environment win.
pub fn try_load_dotenv() -> EnvLoadResult {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {:?}", path);
        return EnvLoadResult { path: Some(path) };
    }

    if let Some(env_path) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(".env")))
        .filter(|path| path.exists())
    {
        match dotenvy::from_path(&env_path) {
            Ok(()) => {
                info!("Loaded .env from: {:?}", env_path);
                return EnvLoadResult {
                    path: Some(env_path),
                };
            }
            Err(e) => warn!("Failed to parse .env at {:?}: {}", env_path, e),
        }
    }

    debug!("No .env file found - using process environment only");
    EnvLoadResult { path: None }
}
