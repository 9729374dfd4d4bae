//! nyan-statusline: a Nyan Cat themed status line for an AI coding
//! assistant, plus an interactive editor for choosing its fields.

pub mod animation;
pub mod format;
pub mod git;
pub mod platform;
pub mod preferences;
pub mod processing;
pub mod session;
pub mod stats;
pub mod statusline;
pub mod theme;
pub mod tui;
pub mod types;
