//! Processing indicator shared between hook invocations and rendering.
//!
//! The assistant's hooks run `nyan-statusline --state processing` when a
//! turn starts and `--state completed` when it ends. The renderer reads the
//! file back to pick the indicator next to the cat.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::platform::state_path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingState {
    Processing,
    Completed,
}

#[derive(Debug, Serialize, Deserialize)]
struct StateFile {
    status: String,
}

/// Record the current state in `dir`.
pub fn set_status(dir: &Path, state: ProcessingState) -> io::Result<()> {
    let status = match state {
        ProcessingState::Processing => "processing",
        ProcessingState::Completed => "completed",
    };
    let contents = serde_json::to_string(&StateFile {
        status: status.to_string(),
    })
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(state_path(dir), contents)
}

/// True unless the last recorded state is `completed`.
///
/// A missing or unreadable file counts as processing.
pub fn is_processing(dir: &Path) -> bool {
    let path = state_path(dir);
    let Ok(contents) = fs::read_to_string(&path) else {
        return true;
    };
    match serde_json::from_str::<StateFile>(&contents) {
        Ok(file) => file.status != "completed",
        Err(e) => {
            debug!(path = %path.display(), error = %e, "unreadable state file");
            true
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
