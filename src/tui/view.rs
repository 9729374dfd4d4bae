//! Pure rendering: map MenuState to the lines of one frame.
//!
//! No terminal access here. The loop in `run` owns cursor movement and
//! erasing; this module only decides what each line says.

use crate::theme::{Theme, paint};

use super::state::{MenuRow, MenuState, Outcome};

pub const TITLE: &str = "🐱 Nyan Statusline settings meow~";
pub const HELP: &str = "↑↓ move  space toggle  enter save  q cancel";

const CURSOR_MARK: &str = "> ";
const NO_CURSOR: &str = "  ";
const CHECKED: &str = "✅";
const UNCHECKED: &str = "⬜";

/// Every line of one frame: title, blank, rows, blank, help.
pub fn frame_lines(state: &MenuState, theme: &Theme) -> Vec<String> {
    let mut lines = Vec::with_capacity(state.rows.len() + 4);

    lines.push(paint(theme.title, TITLE).to_string());
    lines.push(String::new());
    for (i, row) in state.rows.iter().enumerate() {
        lines.push(row_line(row, i == state.cursor, theme));
    }
    lines.push(String::new());
    lines.push(paint(theme.help, HELP).to_string());

    lines
}

fn row_line(row: &MenuRow, focused: bool, theme: &Theme) -> String {
    match row {
        MenuRow::Header { label } => format!("{}{}", NO_CURSOR, paint(theme.header, label)),
        MenuRow::Toggle { label, enabled, .. } => {
            let prefix = if focused {
                paint(theme.cursor, CURSOR_MARK).to_string()
            } else {
                NO_CURSOR.to_string()
            };
            let check = if *enabled {
                paint(theme.checked, CHECKED)
            } else {
                paint(theme.unchecked, UNCHECKED)
            };
            format!("{}{} {}", prefix, check, label)
        }
    }
}

/// The one line left on screen after the session ends.
pub fn final_status(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Saved => "🐱 Settings saved meow~",
        Outcome::Cancelled => "🐱 Cancelled meow~",
    }
}

// ============================================================================
// TESTS
// ============================================================================
