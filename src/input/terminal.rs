//! The real terminal as an [`InputSource`].
//!
//! Each read acquires raw mode and mouse reporting for exactly its own
//! duration through [`RawModeGuard`], so the terminal is back in its prior
//! mode whenever control is outside a read, including after a panic.
//! When raw mode is unavailable (no TTY, unsupported platform) reads fall
//! back to line-buffered stdin for the rest of the session.
//!
//! Ctrl-C is caught by a process-wide handler. Raw mode sees it as byte 0x03;
//! line mode polls stdin and checks the handler's flag between waits. Either
//! way the read yields [`InputToken::Interrupt`].

use std::io::{self, IsTerminal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use crossterm::terminal;
use tracing::{debug, warn};

use crate::surface::Target;

use super::decoder::{ByteSource, parse_line, read_token};
use super::{InputSource, InputToken};

/// Enable legacy (X10-encoded) mouse click reporting.
pub const MOUSE_REPORTING_ON: &[u8] = b"\x1b[?1000h";

/// Disable mouse click reporting.
pub const MOUSE_REPORTING_OFF: &[u8] = b"\x1b[?1000l";

/// How often a line read checks for Ctrl-C.
const INTERRUPT_POLL_INTERVAL: Duration = Duration::from_millis(100);

// ============================================================================
// CTRL-C
// ============================================================================

/// Flag set by the Ctrl-C handler. The handler is installed on first use.
fn interrupt_flag() -> Arc<AtomicBool> {
    static FLAG: OnceLock<Arc<AtomicBool>> = OnceLock::new();
    let flag = FLAG.get_or_init(|| {
        let flag = Arc::new(AtomicBool::new(false));
        let handler_flag = Arc::clone(&flag);
        if let Err(err) = ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst)) {
            warn!(error = %err, "cannot install Ctrl-C handler");
        }
        flag
    });
    Arc::clone(flag)
}

// ============================================================================
// RAW MODE GUARD
// ============================================================================

/// Raw mode plus mouse reporting, released on drop.
pub struct RawModeGuard {
    /// Raw mode was already on before acquisition; leave it on.
    was_raw: bool,
    output: Target,
}

impl RawModeGuard {
    /// `output` is the stream the terminal control sequences go to.
    pub fn acquire(output: Target) -> io::Result<Self> {
        let was_raw = terminal::is_raw_mode_enabled()?;
        if !was_raw {
            terminal::enable_raw_mode()?;
        }
        // Constructed before the next write so a failure still restores.
        let guard = Self { was_raw, output };
        output.write_all(MOUSE_REPORTING_ON)?;
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Best-effort: nothing useful can be done with a failure here.
        let _ = self.output.write_all(MOUSE_REPORTING_OFF);
        if !self.was_raw {
            let _ = terminal::disable_raw_mode();
        }
    }
}

// ============================================================================
// STDIN BYTES
// ============================================================================

/// Unbuffered stdin. Buffering would hide pending bytes from `poll`.
#[cfg(unix)]
struct StdinBytes;

#[cfg(unix)]
impl ByteSource for StdinBytes {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = 0u8;
        loop {
            // SAFETY: reads at most one byte into a valid, owned u8.
            let n = unsafe { libc::read(libc::STDIN_FILENO, (&raw mut byte).cast(), 1) };
            match n {
                1 => return Ok(Some(byte)),
                0 => return Ok(None),
                _ => {
                    let err = io::Error::last_os_error();
                    if err.kind() != io::ErrorKind::Interrupted {
                        return Err(err);
                    }
                }
            }
        }
    }

    fn read_byte_within(&mut self, timeout: Duration) -> io::Result<Option<u8>> {
        let mut fds = libc::pollfd {
            fd: libc::STDIN_FILENO,
            events: libc::POLLIN,
            revents: 0,
        };
        let millis = libc::c_int::try_from(timeout.as_millis()).unwrap_or(libc::c_int::MAX);
        // SAFETY: one valid pollfd, count matches.
        let ready = unsafe { libc::poll(&mut fds, 1, millis) };
        match ready {
            0 => Ok(None),
            n if n > 0 => self.read_byte(),
            _ => {
                let err = io::Error::last_os_error();
                if err.kind() == io::ErrorKind::Interrupted {
                    Ok(None)
                } else {
                    Err(err)
                }
            }
        }
    }
}

/// Outcome of waiting for one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wait {
    Byte(u8),
    /// Nothing arrived in time, or a signal cut the wait short.
    Idle,
    Closed,
}

#[cfg(unix)]
impl StdinBytes {
    fn wait_byte(&mut self, timeout: Duration) -> io::Result<Wait> {
        let mut fds = libc::pollfd {
            fd: libc::STDIN_FILENO,
            events: libc::POLLIN,
            revents: 0,
        };
        let millis = libc::c_int::try_from(timeout.as_millis()).unwrap_or(libc::c_int::MAX);
        // SAFETY: one valid pollfd, count matches.
        let ready = unsafe { libc::poll(&mut fds, 1, millis) };
        match ready {
            0 => Ok(Wait::Idle),
            n if n > 0 => Ok(self.read_byte()?.map_or(Wait::Closed, Wait::Byte)),
            _ => {
                let err = io::Error::last_os_error();
                if err.kind() == io::ErrorKind::Interrupted {
                    Ok(Wait::Idle)
                } else {
                    Err(err)
                }
            }
        }
    }
}

/// Without `poll`, continuation bytes are read blocking.
#[cfg(not(unix))]
struct StdinBytes;

#[cfg(not(unix))]
impl ByteSource for StdinBytes {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        use std::io::Read;
        let mut buf = [0u8; 1];
        match io::stdin().read(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf[0])),
        }
    }

    fn read_byte_within(&mut self, _timeout: Duration) -> io::Result<Option<u8>> {
        self.read_byte()
    }
}

/// Ctrl-C is only noticed once the pending read returns.
#[cfg(not(unix))]
impl StdinBytes {
    fn wait_byte(&mut self, _timeout: Duration) -> io::Result<Wait> {
        Ok(self.read_byte()?.map_or(Wait::Closed, Wait::Byte))
    }
}

/// Read one line through `wait`, checking `interrupted` between waits.
/// A partial line at end of input still counts as a line.
fn read_line_polled(
    mut wait: impl FnMut(Duration) -> io::Result<Wait>,
    interrupted: &AtomicBool,
) -> io::Result<InputToken> {
    let mut line = Vec::new();
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            return Ok(InputToken::Interrupt);
        }
        match wait(INTERRUPT_POLL_INTERVAL)? {
            Wait::Byte(b'\n') => break,
            Wait::Byte(b) => line.push(b),
            Wait::Idle => {}
            Wait::Closed if line.is_empty() => return Ok(InputToken::Eof),
            Wait::Closed => break,
        }
    }
    Ok(parse_line(&String::from_utf8_lossy(&line)))
}

// ============================================================================
// TERMINAL INPUT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Raw,
    Line,
}

pub struct TerminalInput {
    mode: Mode,
    escape_timeout: Duration,
    output: Target,
    interrupted: Arc<AtomicBool>,
}

impl TerminalInput {
    /// Raw mode when stdin is a terminal, line mode otherwise.
    pub fn new(escape_timeout: Duration) -> Self {
        let mode = if io::stdin().is_terminal() {
            Mode::Raw
        } else {
            debug!("stdin is not a terminal, using line input");
            Mode::Line
        };
        Self {
            mode,
            escape_timeout,
            output: Target::Stdout,
            interrupted: interrupt_flag(),
        }
    }

    /// Send terminal control sequences to `output` instead of stdout.
    pub fn with_output(mut self, output: Target) -> Self {
        self.output = output;
        self
    }

    pub fn is_raw(&self) -> bool {
        self.mode == Mode::Raw
    }

    fn read_raw(&mut self) -> io::Result<InputToken> {
        let _guard = RawModeGuard::acquire(self.output)?;
        read_token(&mut StdinBytes, self.escape_timeout)
    }

    fn read_line(&mut self) -> InputToken {
        let mut stdin = StdinBytes;
        match read_line_polled(|timeout| stdin.wait_byte(timeout), &self.interrupted) {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "line input failed");
                InputToken::Eof
            }
        }
    }
}

impl InputSource for TerminalInput {
    fn next_token(&mut self) -> InputToken {
        // Ctrl-C outside a read (e.g. during a pause) still cancels.
        if self.interrupted.swap(false, Ordering::SeqCst) {
            return InputToken::Interrupt;
        }
        if self.mode == Mode::Raw {
            match self.read_raw() {
                Ok(token) => return token,
                Err(err) => {
                    warn!(error = %err, "raw terminal input unavailable, falling back to line input");
                    self.mode = Mode::Line;
                }
            }
        }
        self.read_line()
    }
}
