//! Interactive field editor (`nyan-statusline config`).
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (MenuRow, MenuState, KeyEvent, Transition)
//! - `update`: pure menu operations and transitions
//! - `view`: pure frame rendering
//! - `keys`: byte → KeyEvent decoding
//! - `terminal`: raw-mode acquisition behind a trait
//! - `run`: the effects loop wiring them together

pub mod keys;
pub mod run;
pub mod state;
pub mod terminal;
pub mod update;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

use std::fmt;
use std::io;

pub use run::{run, run_editor};
pub use state::Outcome;

/// Why an editing session could not complete.
#[derive(Debug)]
pub enum EditorError {
    /// No controlling terminal, or the OS refused raw mode. Nothing drawn.
    TerminalUnavailable(io::Error),
    /// Saving after Confirm failed. Edits are lost.
    Persistence(io::Error),
    /// Reading keys or drawing failed mid-session.
    Io(io::Error),
}

impl From<io::Error> for EditorError {
    fn from(err: io::Error) -> Self {
        EditorError::Io(err)
    }
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::TerminalUnavailable(e) => {
                write!(f, "Cannot enter raw terminal mode: {}", e)
            }
            EditorError::Persistence(e) => write!(f, "Failed to save preferences: {}", e),
            EditorError::Io(e) => write!(f, "Terminal I/O failed: {}", e),
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EditorError::TerminalUnavailable(e)
            | EditorError::Persistence(e)
            | EditorError::Io(e) => Some(e),
        }
    }
}
