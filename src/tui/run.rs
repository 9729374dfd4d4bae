//! Editor effects boundary: terminal lifecycle, key loop, redraw, save.
//!
//! This is the only editor module with side effects. It wires the pure
//! layers (state, update, view) to a terminal through crossterm commands.
//!
//! The loop is single-threaded and blocks on each keypress. Every frame is
//! a full repaint in place: move up over the previous frame, erase below,
//! print the new frame. No alternate screen, so the final status line stays
//! in the scrollback.

use std::io::{self, Read, Write};
use std::path::Path;

use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use tracing::debug;

use crate::preferences;
use crate::theme::Theme;

use super::EditorError;
use super::keys::KeyReader;
use super::state::{Outcome, Transition};
use super::terminal::{RawModeGuard, TerminalMode};
use super::update::{build_from_preferences, commit, update};
use super::view::{final_status, frame_lines};

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Run the editor on the process's own terminal against `dir`'s preferences.
#[cfg(unix)]
pub fn run(dir: &Path) -> Result<Outcome, EditorError> {
    let terminal = super::terminal::PosixTerminal::stdin();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_editor(&terminal, stdin.lock(), stdout.lock(), dir, &Theme::default())
}

#[cfg(not(unix))]
pub fn run(_dir: &Path) -> Result<Outcome, EditorError> {
    Err(EditorError::TerminalUnavailable(io::Error::new(
        io::ErrorKind::Unsupported,
        "the config editor needs a POSIX terminal",
    )))
}

/// Run one editing session with injected terminal, input and output.
///
/// Preferences are loaded fresh from `dir`, edited in memory, and written
/// back only on Confirm. Raw mode is held for exactly the duration of the
/// loop; the guard restores it on every exit path.
pub fn run_editor<M, R, W>(
    terminal: &M,
    input: R,
    mut output: W,
    dir: &Path,
    theme: &Theme,
) -> Result<Outcome, EditorError>
where
    M: TerminalMode,
    R: Read,
    W: Write,
{
    let mut prefs = preferences::load(dir);
    let mut state = build_from_preferences(&prefs);

    let _guard = RawModeGuard::acquire(terminal)?;
    let mut keys = KeyReader::new(input);
    let mut drawn = 0;

    let outcome = loop {
        drawn = redraw(&mut output, &frame_lines(&state, theme), drawn)?;

        let event = keys.next_event()?;
        match update(state, event) {
            Transition::Edit(next) => state = next,
            Transition::Commit(edited) => {
                debug!(dirty = edited.dirty, "committing preferences");
                commit(&edited, &mut prefs);
                if let Err(e) = preferences::save(dir, &prefs) {
                    erase(&mut output, drawn)?;
                    output.flush()?;
                    return Err(EditorError::Persistence(e));
                }
                break Outcome::Saved;
            }
            Transition::Cancel => {
                debug!("edits discarded");
                break Outcome::Cancelled;
            }
        }
    };

    erase(&mut output, drawn)?;
    writeln!(output, "{}", final_status(outcome))?;
    output.flush()?;
    Ok(outcome)
}

// ============================================================================
// DRAWING
// ============================================================================

/// Replace the previous frame (`previous` lines tall) with `lines`.
///
/// Returns the height of the new frame.
fn redraw<W: Write>(out: &mut W, lines: &[String], previous: usize) -> io::Result<usize> {
    erase(out, previous)?;
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(lines.len())
}

/// Move up over `lines` already-printed lines and clear everything below.
fn erase<W: Write>(out: &mut W, lines: usize) -> io::Result<()> {
    // MoveUp(0) would still move one line on most terminals.
    if lines > 0 {
        queue!(out, MoveUp(u16::try_from(lines).unwrap_or(u16::MAX)))?;
    }
    queue!(out, MoveToColumn(0), Clear(ClearType::FromCursorDown))
}

// ============================================================================
// TESTS
// ============================================================================
