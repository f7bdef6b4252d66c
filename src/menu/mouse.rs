//! Mouse reports: decoding and gesture classification.
//!
//! Reports use the legacy X10 encoding: `ESC [ M` followed by three bytes,
//! each the value plus 32. Coordinates are 1-based.

use std::time::Instant;

use crate::input::{MOUSE_PREFIX, MOUSE_REPORT_LEN};

use super::state::MenuState;

/// Offset added to every value in a report.
pub const MOUSE_BIAS: u8 = 32;

const RELEASE_BITS: u8 = 0b11;
const WHEEL_FLAG: u8 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseReport {
    pub button: u8,
    pub col: u8,
    pub row: u8,
}

/// What a report's button byte says happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseKind {
    Press,
    Release,
    WheelUp,
    WheelDown,
}

impl MouseReport {
    /// Decode a raw report. None if too short, wrongly prefixed, or any
    /// value byte is below the bias.
    pub fn decode(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < MOUSE_REPORT_LEN || !bytes.starts_with(&MOUSE_PREFIX) {
            return None;
        }
        Some(Self {
            button: bytes[3].checked_sub(MOUSE_BIAS)?,
            col: bytes[4].checked_sub(MOUSE_BIAS)?,
            row: bytes[5].checked_sub(MOUSE_BIAS)?,
        })
    }

    /// Inverse of [`MouseReport::decode`]. Values above `255 - 32` saturate.
    pub fn encode(&self) -> [u8; MOUSE_REPORT_LEN] {
        let [a, b, c] = MOUSE_PREFIX;
        [
            a,
            b,
            c,
            self.button.saturating_add(MOUSE_BIAS),
            self.col.saturating_add(MOUSE_BIAS),
            self.row.saturating_add(MOUSE_BIAS),
        ]
    }

    /// Modifier bits (shift/meta/ctrl) and motion are ignored.
    pub fn kind(&self) -> MouseKind {
        if self.button & WHEEL_FLAG != 0 {
            if self.button & 1 == 0 {
                MouseKind::WheelUp
            } else {
                MouseKind::WheelDown
            }
        } else if self.button & RELEASE_BITS == RELEASE_BITS {
            MouseKind::Release
        } else {
            MouseKind::Press
        }
    }
}

/// Outcome of a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Selection moved here; keep waiting.
    Select(usize),
    /// Second click on the same option inside the window.
    Execute(usize),
    /// Off the menu or on a separator.
    Ignored,
}

/// Option index under terminal row `row`, if any.
pub fn row_to_index(state: &MenuState, row: u8) -> Option<usize> {
    let offset = i32::from(row) - i32::from(state.menu_start_line());
    let index = usize::try_from(offset).ok()?;
    (index < state.len()).then_some(index)
}

/// Classify a click and apply it: selection moves to the clicked option and
/// click history is updated.
pub fn interpret_click(state: &mut MenuState, report: &MouseReport, now: Instant) -> Gesture {
    let Some(index) = row_to_index(state, report.row) else {
        return Gesture::Ignored;
    };
    if !state.select(index) {
        return Gesture::Ignored;
    }
    let window = state.double_click_window;
    if state.clicks.register(index, now, window) {
        Gesture::Execute(index)
    } else {
        Gesture::Select(index)
    }
}
