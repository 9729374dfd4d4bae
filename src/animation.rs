//! Cosmetic frame generators: rainbow bar, Nyan Cat, heartbeat, mood text.
//!
//! Every generator takes the frame index or clock value explicitly, so the
//! same input always draws the same frame. Callers pass the current time.

use std::fmt::Write;

use crossterm::style::Stylize;

use crate::theme::{Theme, paint};

const DEFAULT_BAR_WIDTH: usize = 10;
const FILLED: char = '█';
const EMPTY: char = '░';

const CAT_FRAMES: [&str; 4] = ["🐱", "😺", "🐱", "😸"];
const STAR_FRAMES: [&str; 3] = ["✨", "⭐", "✨"];
const HEARTBEAT_FRAMES: [&str; 4] = ["👻", "👹", "💗", "🎃"];

const CAT_FRAME_MS: i64 = 250;
const HEARTBEAT_FRAME_MS: i64 = 333;
const STATUS_PERIOD_SECS: i64 = 60;

const STATUS_MESSAGES: [&str; 12] = [
    "🚀 Full throttle",
    "💡 Inspired",
    "🎯 In the zone",
    "⚡ Max efficiency",
    "🔮 Coding magic",
    "🎮 Game time",
    "☕ Coffee break",
    "🌙 Night owl",
    "🌅 Early bird",
    "🦾 AI-powered",
    "🧠 Big brain",
    "✨ Code as poetry",
];

/// Rainbow-gradient progress bar for a 0–100 percentage.
///
/// Non-positive widths fall back to 10 cells.
pub fn rainbow_progress_bar(percent: f64, width: i32, theme: &Theme) -> String {
    let width = usize::try_from(width)
        .ok()
        .filter(|&w| w > 0)
        .unwrap_or(DEFAULT_BAR_WIDTH);
    let filled = ((width as f64 * percent / 100.0).max(0.0) as usize).min(width);
    let colors = theme.rainbow.len();

    let mut bar = String::new();
    for i in 0..filled {
        let color = theme.rainbow[(i * colors / width).min(colors - 1)];
        let _ = write!(bar, "{}", FILLED.with(color));
    }
    if filled < width {
        let empty = String::from(EMPTY).repeat(width - filled);
        let _ = write!(bar, "{}", paint(theme.empty_slot, empty));
    }
    bar
}

/// Nyan Cat frame `index`: a rainbow tail that shifts one color per frame,
/// then the cat, then a sparkle.
pub fn nyan_frame_at(index: usize, theme: &Theme) -> String {
    let colors = theme.rainbow.len();
    let offset = index % colors;

    let mut frame = String::new();
    for i in 0..colors {
        let color = theme.rainbow[(i + offset) % colors];
        let _ = write!(frame, "{}", FILLED.with(color));
    }
    frame.push_str(CAT_FRAMES[index % CAT_FRAMES.len()]);
    frame.push_str(STAR_FRAMES[index % STAR_FRAMES.len()]);
    frame
}

/// Nyan Cat frame for a wall-clock time in milliseconds.
pub fn nyan_frame(now_millis: i64, theme: &Theme) -> String {
    nyan_frame_at(frame_index(now_millis, CAT_FRAME_MS, CAT_FRAMES.len()), theme)
}

pub fn heartbeat(now_millis: i64) -> &'static str {
    HEARTBEAT_FRAMES[frame_index(now_millis, HEARTBEAT_FRAME_MS, HEARTBEAT_FRAMES.len())]
}

/// Mood text that changes once a minute.
pub fn random_status(now_millis: i64) -> &'static str {
    let period_ms = STATUS_PERIOD_SECS * 1000;
    STATUS_MESSAGES[frame_index(now_millis, period_ms, STATUS_MESSAGES.len())]
}

fn frame_index(now_millis: i64, frame_ms: i64, frames: usize) -> usize {
    (now_millis.div_euclid(frame_ms)).rem_euclid(frames as i64) as usize
}

// ============================================================================
// TESTS
// ============================================================================
