//! Escape-sequence decoding as an explicit state machine.
//!
//! States track what has been consumed so far:
//!
//! ```text
//! Ground ──ESC──▶ Escape ──[──▶ Csi ──M──▶ Mouse(0..3 bytes) ──▶ token
//!   │               │            ├──A/B──▶ Up/Down
//!   │               │            └─0x30..0x3F─▶ CsiParams ─final─▶ Unmapped
//!   │               └──timeout──▶ Escape
//!   └──UTF-8 lead──▶ Utf8 ──continuations──▶ Char
//! ```
//!
//! [`EscapeDecoder::feed`] is pure; `None` means "no byte arrived in time"
//! (or end of input), which completes whatever prefix is pending.

use std::io;
use std::time::Duration;

use super::{InputToken, MOUSE_PREFIX, MOUSE_REPORT_LEN};

const ESC: u8 = 0x1b;
const CTRL_C: u8 = 0x03;
const CTRL_D: u8 = 0x04;

// ============================================================================
// STATE MACHINE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Ground,
    Escape,
    Csi,
    CsiParams(Vec<u8>),
    Mouse { payload: [u8; 3], filled: usize },
    Utf8 { buf: [u8; 4], len: usize, filled: usize },
}

/// Result of feeding one byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// More bytes needed.
    Pending,
    Token(InputToken),
}

#[derive(Debug, Clone)]
pub struct EscapeDecoder {
    state: State,
}

impl Default for EscapeDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl EscapeDecoder {
    pub fn new() -> Self {
        Self {
            state: State::Ground,
        }
    }

    /// True while a sequence is partially consumed.
    pub fn in_sequence(&self) -> bool {
        self.state != State::Ground
    }

    pub fn feed(&mut self, byte: Option<u8>) -> Step {
        let state = std::mem::replace(&mut self.state, State::Ground);
        let (next, step) = match byte {
            Some(b) => transition(state, b),
            None => (State::Ground, Step::Token(flush(state))),
        };
        self.state = next;
        step
    }
}

fn done(token: InputToken) -> (State, Step) {
    (State::Ground, Step::Token(token))
}

fn pending(state: State) -> (State, Step) {
    (state, Step::Pending)
}

fn transition(state: State, b: u8) -> (State, Step) {
    match state {
        State::Ground => ground(b),
        State::Escape if b == b'[' => pending(State::Csi),
        State::Escape => done(InputToken::Unmapped(vec![ESC, b])),
        State::Csi => match b {
            b'A' => done(InputToken::Up),
            b'B' => done(InputToken::Down),
            b'M' => pending(State::Mouse {
                payload: [0; 3],
                filled: 0,
            }),
            0x30..=0x3f => pending(State::CsiParams(vec![b])),
            _ => done(InputToken::Unmapped(vec![ESC, b'[', b])),
        },
        State::CsiParams(mut params) => {
            params.push(b);
            if (0x40..=0x7e).contains(&b) {
                let mut bytes = vec![ESC, b'['];
                bytes.extend(params);
                done(InputToken::Unmapped(bytes))
            } else {
                pending(State::CsiParams(params))
            }
        }
        State::Mouse {
            mut payload,
            filled,
        } => {
            payload[filled] = b;
            if filled + 1 == payload.len() {
                let mut report = [0u8; MOUSE_REPORT_LEN];
                report[..3].copy_from_slice(&MOUSE_PREFIX);
                report[3..].copy_from_slice(&payload);
                done(InputToken::Mouse(report))
            } else {
                pending(State::Mouse {
                    payload,
                    filled: filled + 1,
                })
            }
        }
        State::Utf8 {
            mut buf,
            len,
            filled,
        } => {
            if b & 0xc0 != 0x80 {
                let mut bytes = buf[..filled].to_vec();
                bytes.push(b);
                return done(InputToken::Unmapped(bytes));
            }
            buf[filled] = b;
            if filled + 1 < len {
                return pending(State::Utf8 {
                    buf,
                    len,
                    filled: filled + 1,
                });
            }
            match std::str::from_utf8(&buf[..len]).ok().and_then(|s| s.chars().next()) {
                Some(c) => done(InputToken::Char(c)),
                None => done(InputToken::Unmapped(buf[..len].to_vec())),
            }
        }
    }
}

fn ground(b: u8) -> (State, Step) {
    match b {
        ESC => pending(State::Escape),
        b'\r' | b'\n' => done(InputToken::Enter),
        CTRL_C => done(InputToken::Interrupt),
        CTRL_D => done(InputToken::Eof),
        b'0'..=b'9' => done(InputToken::Number(usize::from(b - b'0'))),
        0x00..=0x7f => done(InputToken::Char(char::from(b))),
        _ => match utf8_len(b) {
            Some(len) => {
                let mut buf = [0u8; 4];
                buf[0] = b;
                pending(State::Utf8 {
                    buf,
                    len,
                    filled: 1,
                })
            }
            None => done(InputToken::Unmapped(vec![b])),
        },
    }
}

fn utf8_len(lead: u8) -> Option<usize> {
    match lead {
        0xc2..=0xdf => Some(2),
        0xe0..=0xef => Some(3),
        0xf0..=0xf4 => Some(4),
        _ => None,
    }
}

/// Complete a pending prefix when no further byte arrives.
fn flush(state: State) -> InputToken {
    match state {
        State::Ground => InputToken::Eof,
        State::Escape => InputToken::Escape,
        State::Csi => InputToken::Unmapped(vec![ESC, b'[']),
        State::CsiParams(params) => {
            let mut bytes = vec![ESC, b'['];
            bytes.extend(params);
            InputToken::Unmapped(bytes)
        }
        State::Mouse { payload, filled } => {
            let mut bytes = MOUSE_PREFIX.to_vec();
            bytes.extend_from_slice(&payload[..filled]);
            InputToken::Unmapped(bytes)
        }
        State::Utf8 { buf, filled, .. } => InputToken::Unmapped(buf[..filled].to_vec()),
    }
}

// ============================================================================
// BYTE SOURCES
// ============================================================================

pub trait ByteSource {
    /// Block for the next byte. None at end of input.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Next byte if one arrives within `timeout`, else None.
    fn read_byte_within(&mut self, timeout: Duration) -> io::Result<Option<u8>>;
}

/// Read exactly one token. Continuation bytes are awaited for at most
/// `escape_timeout` each, so a lone ESC is reported as [`InputToken::Escape`].
pub fn read_token<S: ByteSource + ?Sized>(
    source: &mut S,
    escape_timeout: Duration,
) -> io::Result<InputToken> {
    let mut decoder = EscapeDecoder::new();
    loop {
        let byte = if decoder.in_sequence() {
            source.read_byte_within(escape_timeout)?
        } else {
            source.read_byte()?
        };
        if let Step::Token(token) = decoder.feed(byte) {
            return Ok(token);
        }
    }
}

/// In-memory bytes. A byte "arrives in time" whenever one is left.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.bytes.len()
    }
}

impl ByteSource for SliceSource<'_> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.bytes.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        Ok(byte)
    }

    fn read_byte_within(&mut self, _timeout: Duration) -> io::Result<Option<u8>> {
        self.read_byte()
    }
}

// ============================================================================
// LINE MODE
// ============================================================================

/// Interpret one line of cooked input the way the same keys would decode
/// in raw mode.
pub fn parse_line(line: &str) -> InputToken {
    let line = line.trim_end();
    if line.is_empty() {
        return InputToken::Enter;
    }
    if line.bytes().all(|b| b.is_ascii_digit()) {
        return line
            .parse()
            .map(InputToken::Number)
            .unwrap_or_else(|_| InputToken::Unmapped(line.as_bytes().to_vec()));
    }
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some('\x1b'), None) => InputToken::Escape,
        (Some(c), None) => InputToken::Char(c),
        _ => match read_token(&mut SliceSource::new(line.as_bytes()), Duration::ZERO) {
            Ok(token @ (InputToken::Up | InputToken::Down)) => token,
            _ => InputToken::Unmapped(line.as_bytes().to_vec()),
        },
    }
}

// ============================================================================
// TESTS
// ============================================================================
