//! Terminal input: raw bytes in, one [`InputToken`] out per read.
//!
//! - `decoder`: pure escape-sequence state machine and line parsing
//! - `terminal`: raw mode, mouse reporting, line-buffered fallback

pub mod decoder;
pub mod terminal;

use std::collections::VecDeque;

pub use decoder::{ByteSource, EscapeDecoder, SliceSource, Step, parse_line, read_token};
pub use terminal::{RawModeGuard, TerminalInput};

/// Prefix of a legacy (X10) mouse report.
pub const MOUSE_PREFIX: [u8; 3] = [0x1b, b'[', b'M'];

/// Length of a complete mouse report: prefix plus button, column, row.
pub const MOUSE_REPORT_LEN: usize = 6;

/// One logical unit of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputToken {
    /// `ESC [ A`
    Up,
    /// `ESC [ B`
    Down,
    /// `\r` or `\n` (or an empty line in line mode).
    Enter,
    /// A lone `ESC`.
    Escape,
    /// Digit key, or an all-digit line in line mode.
    Number(usize),
    /// Any other character, as typed.
    Char(char),
    /// Full mouse report, prefix included.
    Mouse([u8; MOUSE_REPORT_LEN]),
    /// Bytes that form no recognized key.
    Unmapped(Vec<u8>),
    /// Ctrl-C.
    Interrupt,
    /// End of input (Ctrl-D, closed stdin).
    Eof,
}

/// Blocking supplier of input tokens.
pub trait InputSource {
    /// Block until the next token. Failures are handled inside the source;
    /// a source that can no longer read returns [`InputToken::Eof`].
    fn next_token(&mut self) -> InputToken;
}

/// Pre-recorded tokens. Returns [`InputToken::Eof`] once drained.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    tokens: VecDeque<InputToken>,
}

impl ScriptedInput {
    pub fn new(tokens: impl IntoIterator<Item = InputToken>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    /// Decode a raw byte stream up front, as a terminal would deliver it.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut source = SliceSource::new(bytes);
        let mut tokens = VecDeque::new();
        while !source.is_exhausted() {
            match read_token(&mut source, std::time::Duration::ZERO) {
                Ok(token) => tokens.push_back(token),
                Err(_) => break,
            }
        }
        Self { tokens }
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_token(&mut self) -> InputToken {
        self.tokens.pop_front().unwrap_or(InputToken::Eof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_input_drains_then_reports_eof() {
        let mut input = ScriptedInput::new([InputToken::Down, InputToken::Enter]);
        assert_eq!(input.next_token(), InputToken::Down);
        assert_eq!(input.next_token(), InputToken::Enter);
        assert_eq!(input.next_token(), InputToken::Eof);
        assert_eq!(input.next_token(), InputToken::Eof);
    }

    #[test]
    fn scripted_input_from_bytes_decodes_sequences() {
        let input = ScriptedInput::from_bytes(b"\x1b[B\x1b[A5q\r");
        assert_eq!(
            input.tokens,
            VecDeque::from(vec![
                InputToken::Down,
                InputToken::Up,
                InputToken::Number(5),
                InputToken::Char('q'),
                InputToken::Enter,
            ])
        );
    }
}
