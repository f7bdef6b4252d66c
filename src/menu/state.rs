//! Menu state algebra: options, selection, click history.
//!
//! Invariant once [`MenuState::ensure_selectable`] has succeeded:
//! `selected < options.len()` and `options[selected]` is not a separator.
//! Every transition in `update` preserves it.

use std::time::{Duration, Instant};

use crate::error::MenuError;
use crate::types::MenuOption;

/// Default double-click window.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(500);

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw input tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    /// Execute the selected option.
    Confirm,
    /// Leave the menu without a result.
    Cancel,
    /// Jump to and execute the option at this index.
    Shortcut(usize),
    /// Raw mouse report, decoded by `mouse`.
    Mouse(Vec<u8>),
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Stay in the loop and redraw.
    Render,
    /// Return the option at this index to the caller.
    Execute(usize),
    /// Return no result.
    Exit,
}

// ============================================================================
// CLICK STATE
// ============================================================================

/// Last click, used to recognize a double click.
///
/// Never reset explicitly: a stale timestamp simply fails the window check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickState {
    pub last_at: Option<Instant>,
    pub last_index: Option<usize>,
}

impl ClickState {
    /// Record a click and report whether it completes a double click.
    pub fn register(&mut self, index: usize, now: Instant, window: Duration) -> bool {
        let is_double = self.last_index == Some(index)
            && self
                .last_at
                .is_some_and(|at| now.saturating_duration_since(at) < window);
        self.last_at = Some(now);
        self.last_index = Some(index);
        is_double
    }
}

// ============================================================================
// MENU STATE
// ============================================================================

#[derive(Debug, Clone)]
pub struct MenuState {
    options: Vec<MenuOption>,
    selected: usize,
    pub clicks: ClickState,
    pub double_click_window: Duration,
    /// 1-based terminal row of the first option, as of the last render.
    menu_start_line: u16,
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl MenuState {
    pub fn new(options: Vec<MenuOption>) -> Self {
        Self {
            options,
            selected: 0,
            clicks: ClickState::default(),
            double_click_window: DOUBLE_CLICK_WINDOW,
            menu_start_line: 1,
        }
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    pub fn option(&self, index: usize) -> Option<&MenuOption> {
        self.options.get(index)
    }

    pub fn push(&mut self, option: MenuOption) {
        self.options.push(option);
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_option(&self) -> Option<&MenuOption> {
        self.options.get(self.selected)
    }

    pub fn menu_start_line(&self) -> u16 {
        self.menu_start_line
    }

    pub fn set_menu_start_line(&mut self, line: u16) {
        self.menu_start_line = line;
    }

    /// True if `index` exists and is not a separator.
    pub fn is_selectable(&self, index: usize) -> bool {
        self.options.get(index).is_some_and(|o| !o.is_separator())
    }

    /// Select `index` if it is selectable. Returns whether it was.
    pub fn select(&mut self, index: usize) -> bool {
        let ok = self.is_selectable(index);
        if ok {
            self.selected = index;
        }
        ok
    }

    /// Establish the selection invariant before a run.
    ///
    /// Keeps a valid previous selection, otherwise moves to the first
    /// selectable option. Fails when there is none.
    pub fn ensure_selectable(&mut self) -> Result<(), MenuError> {
        if self.is_selectable(self.selected) {
            return Ok(());
        }
        let first = (0..self.options.len())
            .find(|&i| self.is_selectable(i))
            .ok_or(MenuError::NoSelectableOption)?;
        self.selected = first;
        Ok(())
    }

    /// Step once in `direction` with wrap-around, then keep stepping past
    /// separators. Needs at least one selectable option to terminate.
    pub fn step(&mut self, direction: Direction) {
        let len = self.options.len();
        if len == 0 || !self.options.iter().any(|o| !o.is_separator()) {
            return;
        }
        let advance = |i: usize| match direction {
            Direction::Up => (i + len - 1) % len,
            Direction::Down => (i + 1) % len,
        };
        let mut next = advance(self.selected);
        while self.options[next].is_separator() {
            next = advance(next);
        }
        self.selected = next;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn state(keys: &[&str]) -> MenuState {
        MenuState::new(keys.iter().map(|k| MenuOption::new(*k, *k, "")).collect())
    }

    #[test]
    fn ensure_selectable_rejects_empty_menu() {
        let mut s = state(&[]);
        assert!(matches!(s.ensure_selectable(), Err(MenuError::NoSelectableOption)));
    }

    #[test]
    fn ensure_selectable_rejects_separator_only_menu() {
        let mut s = state(&["separator", "separator"]);
        assert!(matches!(s.ensure_selectable(), Err(MenuError::NoSelectableOption)));
    }

    #[test]
    fn ensure_selectable_skips_leading_separator() {
        let mut s = state(&["separator", "a"]);
        s.ensure_selectable().unwrap();
        assert_eq!(s.selected(), 1);
    }

    #[test]
    fn exit_only_menu_is_selectable() {
        let mut s = state(&["exit"]);
        assert!(s.ensure_selectable().is_ok());
    }

    #[test]
    fn step_wraps_and_skips_separators() {
        let mut s = state(&["a", "separator", "b", "exit"]);
        s.step(Direction::Down);
        assert_eq!(s.selected(), 2);
        s.step(Direction::Down);
        assert_eq!(s.selected(), 3);
        s.step(Direction::Down);
        assert_eq!(s.selected(), 0);
        s.step(Direction::Up);
        assert_eq!(s.selected(), 3);
    }

    #[test]
    fn step_on_separator_only_menu_terminates() {
        let mut s = state(&["separator"]);
        s.step(Direction::Down);
        assert_eq!(s.selected(), 0);
    }

    #[test]
    fn select_refuses_separator_and_out_of_range() {
        let mut s = state(&["a", "separator"]);
        assert!(!s.select(1));
        assert!(!s.select(7));
        assert_eq!(s.selected(), 0);
    }

    #[test]
    fn double_click_requires_same_index_within_window() {
        let window = Duration::from_millis(500);
        let t0 = Instant::now();
        let mut clicks = ClickState::default();
        assert!(!clicks.register(2, t0, window));
        assert!(clicks.register(2, t0 + Duration::from_millis(200), window));

        let mut clicks = ClickState::default();
        clicks.register(2, t0, window);
        assert!(!clicks.register(3, t0 + Duration::from_millis(100), window));

        let mut clicks = ClickState::default();
        clicks.register(2, t0, window);
        assert!(!clicks.register(2, t0 + window, window));
    }
}
