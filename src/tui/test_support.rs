//! Test doubles for driving the editor without a real terminal.

use std::cell::Cell;
use std::collections::VecDeque;
use std::io::{self, Read};

use super::terminal::TerminalMode;
use super::EditorError;

/// Yields one scripted chunk per read, like a terminal does per keypress.
pub struct Keystrokes(VecDeque<Vec<u8>>);

impl Keystrokes {
    pub fn new(chunks: &[&[u8]]) -> Self {
        Keystrokes(chunks.iter().map(|c| c.to_vec()).collect())
    }
}

impl Read for Keystrokes {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.0.pop_front() {
            Some(chunk) => {
                let n = chunk.len().min(buf.len());
                buf[..n].copy_from_slice(&chunk[..n]);
                Ok(n)
            }
            None => Ok(0),
        }
    }
}

/// Counts acquire/release calls instead of touching a tty.
#[derive(Default)]
pub struct FakeTerminal {
    pub unavailable: bool,
    pub acquired: Cell<usize>,
    pub released: Cell<usize>,
}

impl FakeTerminal {
    pub fn unavailable() -> Self {
        FakeTerminal {
            unavailable: true,
            ..Default::default()
        }
    }
}

impl TerminalMode for FakeTerminal {
    type Snapshot = ();

    fn acquire(&self) -> Result<(), EditorError> {
        if self.unavailable {
            return Err(EditorError::TerminalUnavailable(io::Error::new(
                io::ErrorKind::NotFound,
                "not a terminal",
            )));
        }
        self.acquired.set(self.acquired.get() + 1);
        Ok(())
    }

    fn release(&self, _snapshot: ()) {
        self.released.set(self.released.get() + 1);
    }
}
