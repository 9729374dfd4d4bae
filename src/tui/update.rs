//! Pure menu operations and the (MenuState, KeyEvent) → Transition function.
//!
//! Fully testable without a terminal. Nothing here touches the disk except
//! through the `Preferences` value handed to [`commit`].

use crate::preferences::{LINE1_FIELDS, LINE2_FIELDS, Preferences};

use super::state::{Direction, KeyEvent, MenuRow, MenuState, RowKey, Transition};

// ============================================================================
// MENU MODEL
// ============================================================================

/// Build the menu from stored preferences, in declared field order.
///
/// Line-2 rows show their stored values even when the master switch is off;
/// the gating applies only when the status line is rendered.
pub fn build_from_preferences(prefs: &Preferences) -> MenuState {
    let mut rows = Vec::with_capacity(LINE1_FIELDS.len() + LINE2_FIELDS.len() + 3);

    rows.push(MenuRow::header("── Line 1 fields ──"));
    for f in &LINE1_FIELDS {
        rows.push(MenuRow::toggle(f.label, RowKey::Line1(f.key), prefs.line1_field(f.key)));
    }

    rows.push(MenuRow::header("── Line 2 ──"));
    rows.push(MenuRow::toggle(
        "✨ Show second line",
        RowKey::Line2Master,
        prefs.line2_enabled,
    ));
    for f in &LINE2_FIELDS {
        rows.push(MenuRow::toggle(f.label, RowKey::Line2(f.key), prefs.line2_field(f.key)));
    }

    MenuState::new(rows)
}

/// Move to the next selectable row in `direction`.
///
/// Stays put if there is none before the list boundary (no wraparound).
pub fn move_cursor(state: &mut MenuState, direction: Direction) {
    let rows = &state.rows;
    let next = match direction {
        Direction::Up => (0..state.cursor).rev().find(|&i| !rows[i].is_header()),
        Direction::Down => (state.cursor + 1..rows.len()).find(|&i| !rows[i].is_header()),
    };

    if let Some(next) = next {
        state.cursor = next;
    }
}

/// Flip the row under the cursor. Headers are left alone.
pub fn toggle_current(state: &mut MenuState) {
    if let Some(MenuRow::Toggle { enabled, .. }) = state.rows.get_mut(state.cursor) {
        *enabled = !*enabled;
        state.dirty = true;
    }
}

/// Write every toggle row back into `prefs`.
pub fn commit(state: &MenuState, prefs: &mut Preferences) {
    for row in &state.rows {
        let MenuRow::Toggle { key, enabled, .. } = row else {
            continue;
        };
        match key {
            RowKey::Line2Master => prefs.line2_enabled = *enabled,
            RowKey::Line1(field) => {
                prefs.line1.insert(field.to_string(), *enabled);
            }
            RowKey::Line2(field) => {
                prefs.line2.insert(field.to_string(), *enabled);
            }
        }
    }
}

// ============================================================================
// TRANSITION FUNCTION
// ============================================================================

/// Apply one key event to the editing state.
pub fn update(mut state: MenuState, event: KeyEvent) -> Transition {
    match event {
        KeyEvent::MoveUp => {
            move_cursor(&mut state, Direction::Up);
            Transition::Edit(state)
        }
        KeyEvent::MoveDown => {
            move_cursor(&mut state, Direction::Down);
            Transition::Edit(state)
        }
        KeyEvent::Toggle => {
            toggle_current(&mut state);
            Transition::Edit(state)
        }
        KeyEvent::Confirm => Transition::Commit(state),
        KeyEvent::Cancel => Transition::Cancel,
        KeyEvent::NoOp => Transition::Edit(state),
    }
}

// ============================================================================
// TESTS
// ============================================================================
