//! Terminal lifecycle: raw input mode with guaranteed restoration.
//!
//! The editor only needs three things from the terminal: unbuffered input,
//! no echo, and keystrokes like Ctrl+C delivered as data instead of
//! signals. Output processing is left alone, so `\n` still returns the
//! carriage and the menu can be printed with ordinary line writes.
//!
//! All platform-specific code lives behind [`TerminalMode`]. The menu model
//! and the loop only ever see a [`RawModeGuard`].

use super::EditorError;

/// Capability to switch a terminal into raw input mode and back.
pub trait TerminalMode {
    /// Opaque capture of the attributes in force before `acquire`.
    type Snapshot;

    /// Capture current attributes and enter raw input mode.
    ///
    /// Fails with [`EditorError::TerminalUnavailable`] when there is no
    /// controlling terminal or the OS rejects the change.
    fn acquire(&self) -> Result<Self::Snapshot, EditorError>;

    /// Restore the captured attributes. Best-effort: failures are ignored.
    fn release(&self, snapshot: Self::Snapshot);
}

/// Holds raw mode for its lifetime and restores the terminal on drop.
///
/// Drop also runs during panic unwinding, so the terminal is restored
/// exactly once whichever way the editor exits.
pub struct RawModeGuard<'a, M: TerminalMode> {
    mode: &'a M,
    snapshot: Option<M::Snapshot>,
}

impl<'a, M: TerminalMode> RawModeGuard<'a, M> {
    pub fn acquire(mode: &'a M) -> Result<Self, EditorError> {
        let snapshot = mode.acquire()?;
        Ok(RawModeGuard {
            mode,
            snapshot: Some(snapshot),
        })
    }
}

impl<M: TerminalMode> Drop for RawModeGuard<'_, M> {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            self.mode.release(snapshot);
        }
    }
}

// ============================================================================
// POSIX (termios)
// ============================================================================

#[cfg(unix)]
pub use posix::PosixTerminal;

#[cfg(unix)]
mod posix {
    use std::io;
    use std::mem::MaybeUninit;
    use std::os::unix::io::RawFd;

    use tracing::debug;

    use super::TerminalMode;
    use crate::tui::EditorError;

    /// termios-backed raw mode on a file descriptor (stdin by default).
    pub struct PosixTerminal {
        fd: RawFd,
    }

    impl PosixTerminal {
        pub fn new(fd: RawFd) -> Self {
            PosixTerminal { fd }
        }

        pub fn stdin() -> Self {
            PosixTerminal::new(libc::STDIN_FILENO)
        }
    }

    /// Attributes captured before entering raw mode.
    pub struct TermiosSnapshot(libc::termios);

    fn unavailable(err: io::Error) -> EditorError {
        EditorError::TerminalUnavailable(err)
    }

    impl TerminalMode for PosixTerminal {
        type Snapshot = TermiosSnapshot;

        fn acquire(&self) -> Result<TermiosSnapshot, EditorError> {
            // SAFETY: isatty only inspects the descriptor.
            if unsafe { libc::isatty(self.fd) } != 1 {
                return Err(unavailable(io::Error::last_os_error()));
            }

            let mut original = MaybeUninit::<libc::termios>::uninit();
            // SAFETY: tcgetattr fully initializes `original` when it returns 0.
            let original = unsafe {
                if libc::tcgetattr(self.fd, original.as_mut_ptr()) != 0 {
                    return Err(unavailable(io::Error::last_os_error()));
                }
                original.assume_init()
            };

            let mut raw = original;
            raw.c_lflag &= !(libc::ECHO | libc::ICANON | libc::ISIG);
            raw.c_cc[libc::VMIN] = 1;
            raw.c_cc[libc::VTIME] = 0;

            // SAFETY: `raw` is a valid termios derived from tcgetattr output.
            if unsafe { libc::tcsetattr(self.fd, libc::TCSANOW, &raw) } != 0 {
                return Err(unavailable(io::Error::last_os_error()));
            }

            debug!(fd = self.fd, "raw mode enabled");
            Ok(TermiosSnapshot(original))
        }

        fn release(&self, snapshot: TermiosSnapshot) {
            // SAFETY: restoring attributes previously returned by tcgetattr.
            let rc = unsafe { libc::tcsetattr(self.fd, libc::TCSANOW, &snapshot.0) };
            if rc != 0 {
                debug!(fd = self.fd, error = %io::Error::last_os_error(), "terminal restore failed");
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
    use crate::tui::test_support::FakeTerminal;

    #[test]
    fn guard_releases_once_on_drop() {
        let term = FakeTerminal::default();
        {
            let _guard = RawModeGuard::acquire(&term).unwrap();
            assert_eq!(term.acquired.get(), 1);
            assert_eq!(term.released.get(), 0);
        }
        assert_eq!(term.released.get(), 1);
    }

    #[test]
    fn guard_releases_on_early_return() {
        fn fails_midway(term: &FakeTerminal) -> Result<(), EditorError> {
            let _guard = RawModeGuard::acquire(term)?;
            Err(EditorError::Io(std::io::Error::other("boom")))
        }

        let term = FakeTerminal::default();
        assert!(fails_midway(&term).is_err());
        assert_eq!(term.released.get(), 1);
    }

    #[test]
    fn guard_releases_on_panic() {
        let term = FakeTerminal::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = RawModeGuard::acquire(&term).unwrap();
            panic!("loop blew up");
        }));
        assert!(result.is_err());
        assert_eq!(term.released.get(), 1);
    }

    #[test]
    fn failed_acquire_releases_nothing() {
        let term = FakeTerminal::unavailable();
        let result = RawModeGuard::acquire(&term);
        assert!(matches!(result, Err(EditorError::TerminalUnavailable(_))));
        assert_eq!(term.released.get(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn posix_acquire_fails_on_non_tty() {
        let file = tempfile::tempfile().unwrap();
        let fd = std::os::unix::io::AsRawFd::as_raw_fd(&file);
        let term = PosixTerminal::new(fd);
        assert!(matches!(term.acquire(), Err(EditorError::TerminalUnavailable(_))));
    }

    #[cfg(unix)]
    fn attributes(fd: libc::c_int) -> libc::termios {
        let mut attrs = std::mem::MaybeUninit::<libc::termios>::uninit();
        unsafe {
            assert_eq!(libc::tcgetattr(fd, attrs.as_mut_ptr()), 0);
            attrs.assume_init()
        }
    }

    #[cfg(unix)]
    #[test]
    fn posix_guard_enters_raw_mode_and_restores_on_pty() {
        let mut master: libc::c_int = -1;
        let mut slave: libc::c_int = -1;
        let rc = unsafe {
            libc::openpty(
                &mut master,
                &mut slave,
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
            )
        };
        assert_eq!(rc, 0, "openpty failed: {}", std::io::Error::last_os_error());

        let before = attributes(slave);
        let term = PosixTerminal::new(slave);
        {
            let _guard = RawModeGuard::acquire(&term).unwrap();
            let raw = attributes(slave);
            assert_eq!(raw.c_lflag & libc::ECHO, 0);
            assert_eq!(raw.c_lflag & libc::ICANON, 0);
            assert_eq!(raw.c_lflag & libc::ISIG, 0);
            assert_eq!(raw.c_cc[libc::VMIN], 1);
            assert_eq!(raw.c_cc[libc::VTIME], 0);
            assert_eq!(raw.c_oflag, before.c_oflag);
        }

        let after = attributes(slave);
        assert_eq!(after.c_lflag, before.c_lflag);
        assert_eq!(after.c_iflag, before.c_iflag);
        assert_eq!(after.c_oflag, before.c_oflag);
        assert_eq!(after.c_cc[libc::VMIN], before.c_cc[libc::VMIN]);

        unsafe {
            libc::close(slave);
            libc::close(master);
        }
    }
}
