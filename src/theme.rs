//! Color semantics shared by the status line and the editor.
//!
//! A [`Theme`] is an immutable value handed to whoever draws, never
//! process-wide state, so rendering is testable without global setup.
//!
//! Color semantics:
//! - Green: enabled, healthy, additions
//! - Yellow: attention (dirty worktree, cost, mid context usage)
//! - Red: removals, high context usage, heartbeat
//! - Cyan: interactive elements (editor cursor), directory and tokens
//! - Dim: de-emphasized (headers, help, separators, disabled rows)

use std::fmt::Display;

use crossterm::style::{Attribute, Attributes, Color, ContentStyle, StyledContent};

/// 256-color rainbow: red, orange, yellow, green, cyan, blue, violet.
pub const RAINBOW_256: [u8; 7] = [196, 208, 226, 46, 51, 21, 93];

fn fg(color: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: Some(color),
        ..ContentStyle::default()
    }
}

fn bold(color: Color) -> ContentStyle {
    ContentStyle {
        attributes: Attributes::from(Attribute::Bold),
        ..fg(color)
    }
}

/// Every style the program draws with.
#[derive(Debug, Clone)]
pub struct Theme {
    // -- status line --
    pub separator: ContentStyle,
    pub model: ContentStyle,
    pub directory: ContentStyle,
    pub git_clean: ContentStyle,
    pub git_dirty: ContentStyle,
    pub context_low: ContentStyle,
    pub context_mid: ContentStyle,
    pub context_high: ContentStyle,
    pub cost: ContentStyle,
    pub added: ContentStyle,
    pub removed: ContentStyle,
    pub duration: ContentStyle,
    pub tokens: ContentStyle,
    pub heartbeat: ContentStyle,
    pub empty_slot: ContentStyle,
    pub rainbow: [Color; 7],

    // -- statistics line --
    pub coding_days: ContentStyle,
    pub active_days: ContentStyle,
    pub streak: ContentStyle,
    pub sessions: ContentStyle,
    pub messages: ContentStyle,
    pub peak_hour: ContentStyle,
    pub achievement: ContentStyle,
    pub mood: ContentStyle,

    // -- editor --
    pub title: ContentStyle,
    pub header: ContentStyle,
    pub cursor: ContentStyle,
    pub checked: ContentStyle,
    pub unchecked: ContentStyle,
    pub help: ContentStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            separator: fg(Color::DarkGrey),
            model: bold(Color::Magenta),
            directory: fg(Color::Cyan),
            git_clean: fg(Color::Green),
            git_dirty: fg(Color::Yellow),
            context_low: fg(Color::Green),
            context_mid: fg(Color::Yellow),
            context_high: fg(Color::Red),
            cost: fg(Color::Yellow),
            added: fg(Color::Green),
            removed: fg(Color::Red),
            duration: fg(Color::Blue),
            tokens: fg(Color::Cyan),
            heartbeat: fg(Color::Red),
            empty_slot: fg(Color::DarkGrey),
            rainbow: RAINBOW_256.map(Color::AnsiValue),

            coding_days: fg(Color::Magenta),
            active_days: fg(Color::Green),
            streak: fg(Color::Yellow),
            sessions: fg(Color::Blue),
            messages: fg(Color::Cyan),
            peak_hour: fg(Color::Blue),
            achievement: fg(Color::Yellow),
            mood: fg(Color::Cyan),

            title: bold(Color::Magenta),
            header: fg(Color::DarkGrey),
            cursor: fg(Color::Cyan),
            checked: fg(Color::Green),
            unchecked: fg(Color::DarkGrey),
            help: fg(Color::DarkGrey),
        }
    }
}

impl Theme {
    /// Style for a context-usage percentage: green below 30, yellow below 80.
    pub fn context(&self, percent: f64) -> ContentStyle {
        if percent < 30.0 {
            self.context_low
        } else if percent < 80.0 {
            self.context_mid
        } else {
            self.context_high
        }
    }
}

/// Apply a style to any displayable value.
pub fn paint<D: Display>(style: ContentStyle, content: D) -> StyledContent<D> {
    style.apply(content)
}

// ============================================================================
// TESTS
// ============================================================================
