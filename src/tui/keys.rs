//! Key decoding: raw terminal bytes → [`KeyEvent`].
//!
//! The terminal is in non-canonical mode, so one `read` returns whatever a
//! single keypress produced: one byte for printable keys, three for an
//! arrow key (`ESC [ A`). We classify exactly the bytes one read returned
//! and never wait for more, so a bare ESC resolves immediately.

use std::io::{self, Read};

use tracing::debug;

use super::state::KeyEvent;

const ESC: u8 = 0x1b;

/// Longest sequence we recognize.
const MAX_SEQUENCE: usize = 3;

/// Classify the bytes produced by one read.
pub fn decode(bytes: &[u8]) -> KeyEvent {
    match bytes {
        [ESC, b'[', b'A', ..] => KeyEvent::MoveUp,
        [ESC, b'[', b'B', ..] => KeyEvent::MoveDown,
        [b' ', ..] => KeyEvent::Toggle,
        [b'\r' | b'\n', ..] => KeyEvent::Confirm,
        // Bare ESC, or ESC followed by a sequence we don't handle.
        [b'q' | ESC, ..] => KeyEvent::Cancel,
        _ => KeyEvent::NoOp,
    }
}

/// Blocking source of key events.
pub struct KeyReader<R> {
    input: R,
}

impl<R: Read> KeyReader<R> {
    pub fn new(input: R) -> Self {
        KeyReader { input }
    }

    /// Block until the next keypress and decode it.
    ///
    /// End of input is treated as Cancel so a closed stdin cannot spin the
    /// loop forever.
    pub fn next_event(&mut self) -> io::Result<KeyEvent> {
        let mut buf = [0u8; MAX_SEQUENCE];
        loop {
            match self.input.read(&mut buf) {
                Ok(0) => {
                    debug!("input closed, cancelling");
                    return Ok(KeyEvent::Cancel);
                }
                Ok(n) => return Ok(decode(&buf[..n])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::Keystrokes;

    #[test]
    fn arrow_keys_map_to_movement() {
        assert_eq!(decode(&[ESC, b'[', b'A']), KeyEvent::MoveUp);
        assert_eq!(decode(&[ESC, b'[', b'B']), KeyEvent::MoveDown);
    }

    #[test]
    fn space_toggles() {
        assert_eq!(decode(b" "), KeyEvent::Toggle);
    }

    #[test]
    fn enter_confirms() {
        assert_eq!(decode(b"\r"), KeyEvent::Confirm);
        assert_eq!(decode(b"\n"), KeyEvent::Confirm);
    }

    #[test]
    fn q_and_bare_esc_cancel() {
        assert_eq!(decode(b"q"), KeyEvent::Cancel);
        assert_eq!(decode(&[ESC]), KeyEvent::Cancel);
    }

    #[test]
    fn esc_with_partial_sequence_cancels() {
        assert_eq!(decode(&[ESC, b'[']), KeyEvent::Cancel);
    }

    #[test]
    fn unhandled_arrow_cancels() {
        // Right arrow: ESC [ C
        assert_eq!(decode(&[ESC, b'[', b'C']), KeyEvent::Cancel);
    }

    #[test]
    fn other_bytes_are_noop() {
        assert_eq!(decode(b"x"), KeyEvent::NoOp);
        assert_eq!(decode(b"Q"), KeyEvent::NoOp);
        assert_eq!(decode(&[]), KeyEvent::NoOp);
    }

    #[test]
    fn reader_decodes_one_key_per_read() {
        let script = Keystrokes::new(&[&[ESC, b'[', b'B'], b" ", &[ESC]]);
        let mut reader = KeyReader::new(script);
        assert_eq!(reader.next_event().unwrap(), KeyEvent::MoveDown);
        assert_eq!(reader.next_event().unwrap(), KeyEvent::Toggle);
        assert_eq!(reader.next_event().unwrap(), KeyEvent::Cancel);
    }

    #[test]
    fn reader_treats_end_of_input_as_cancel() {
        let mut reader = KeyReader::new(io::empty());
        assert_eq!(reader.next_event().unwrap(), KeyEvent::Cancel);
    }
}
