//! Editor state algebra: pure types, zero effects.
//!
//! The menu is a flat list of rows. Headers group rows visually and can
//! never hold the cursor; every other row is one preference toggle.
//! The transition function (`update`) and the frame builder (`view`) both
//! program against these types.

use crate::preferences::LINE2_ENABLED_KEY;

// ============================================================================
// ROWS
// ============================================================================

/// Which preference a toggle row writes back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKey {
    /// The `line2_enabled` master switch.
    Line2Master,
    /// A per-field toggle in the `line1` map.
    Line1(&'static str),
    /// A per-field toggle in the `line2` map.
    Line2(&'static str),
}

impl RowKey {
    /// Key as it appears in the preference file.
    pub fn field_key(&self) -> &'static str {
        match self {
            RowKey::Line2Master => LINE2_ENABLED_KEY,
            RowKey::Line1(key) | RowKey::Line2(key) => key,
        }
    }
}

/// One visual line of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuRow {
    /// Section title. Not selectable.
    Header { label: &'static str },
    /// A selectable preference toggle.
    Toggle {
        label: &'static str,
        key: RowKey,
        enabled: bool,
    },
}

impl MenuRow {
    pub fn header(label: &'static str) -> Self {
        MenuRow::Header { label }
    }

    pub fn toggle(label: &'static str, key: RowKey, enabled: bool) -> Self {
        MenuRow::Toggle { label, key, enabled }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, MenuRow::Header { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuRow::Header { label } | MenuRow::Toggle { label, .. } => label,
        }
    }

    /// None for headers.
    pub fn field_key(&self) -> Option<&'static str> {
        match self {
            MenuRow::Header { .. } => None,
            MenuRow::Toggle { key, .. } => Some(key.field_key()),
        }
    }

    /// Headers are never enabled.
    pub fn enabled(&self) -> bool {
        match self {
            MenuRow::Header { .. } => false,
            MenuRow::Toggle { enabled, .. } => *enabled,
        }
    }
}

// ============================================================================
// MENU STATE
// ============================================================================

/// Everything the editor knows during one session.
///
/// Invariant: `rows[cursor]` is a toggle row. Constructors and
/// [`super::update::move_cursor`] maintain it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    pub rows: Vec<MenuRow>,
    pub cursor: usize,
    /// Set once any row has been toggled.
    pub dirty: bool,
}

impl MenuState {
    /// Wrap rows, placing the cursor on the first selectable one.
    pub fn new(rows: Vec<MenuRow>) -> Self {
        let cursor = rows.iter().position(|r| !r.is_header()).unwrap_or(0);
        MenuState {
            rows,
            cursor,
            dirty: false,
        }
    }

    /// Toggle rows only, in display order.
    pub fn selectable(&self) -> impl Iterator<Item = &MenuRow> {
        self.rows.iter().filter(|r| !r.is_header())
    }
}

// ============================================================================
// EVENTS
// ============================================================================

/// Symbolic key event produced by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    MoveUp,
    MoveDown,
    Toggle,
    Confirm,
    Cancel,
    /// Unrecognized input. Ignored by the loop.
    NoOp,
}

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// Follows the Elm/TEA pattern: `update` describes WHAT should happen,
/// the loop in `run` decides HOW.
#[derive(Debug, PartialEq, Eq)]
pub enum Transition {
    /// Keep editing with this state.
    Edit(MenuState),
    /// Flush this state to the preference store and finish.
    Commit(MenuState),
    /// Drop all edits and finish.
    Cancel,
}

/// How an editing session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Saved,
    Cancelled,
}

// ============================================================================
// TESTS
// ============================================================================
