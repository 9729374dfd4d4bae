//! Data file locations.
//!
//! All state lives in flat files beside the installed binary, so a copy of
//! the executable carries its own preferences.
//!
//! Structure:
//! - Constants: file names (documented invariants)
//! - Pure functions: path construction
//! - Effect functions: executable lookup

use std::io;
use std::path::{Path, PathBuf};

// ============================================================================
// CONSTANTS (Documented Invariants)
// ============================================================================

/// Preference file written by the `config` editor.
pub const CONFIG_FILE_NAME: &str = "nyan-config.json";

/// Processing-state file written by `--state` hook invocations.
pub const STATE_FILE_NAME: &str = "nyan-state.json";

/// Usage statistics maintained by the assistant. Never written by us.
pub const STATS_FILE_NAME: &str = "stats-cache.json";

// ============================================================================
// PURE FUNCTIONS (Path Construction)
// ============================================================================

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

pub fn state_path(dir: &Path) -> PathBuf {
    dir.join(STATE_FILE_NAME)
}

pub fn stats_path(dir: &Path) -> PathBuf {
    dir.join(STATS_FILE_NAME)
}

// ============================================================================
// EFFECT FUNCTIONS
// ============================================================================

/// Directory containing the running executable.
pub fn binary_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("executable has no parent directory: {}", exe.display()),
        )
    })
}

// ============================================================================
// TESTS
// ============================================================================
