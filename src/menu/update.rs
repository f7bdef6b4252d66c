//! Pure state transitions: (MenuState, Action) → Transition.
//!
//! Fully testable without a terminal. The only input besides the action is
//! the current instant, used for double-click detection.

use std::time::Instant;

use tracing::trace;

use super::mouse::{Gesture, MouseKind, MouseReport, interpret_click};
use super::state::{Action, Direction, MenuState, Transition};

pub fn update(state: &mut MenuState, action: &Action, now: Instant) -> Transition {
    match action {
        Action::MoveUp => {
            state.step(Direction::Up);
            Transition::Render
        }
        Action::MoveDown => {
            state.step(Direction::Down);
            Transition::Render
        }
        Action::Confirm => confirm(state, state.selected()),
        Action::Cancel => Transition::Exit,
        Action::Shortcut(index) => {
            if state.select(*index) {
                confirm(state, *index)
            } else {
                Transition::Render
            }
        }
        Action::Mouse(bytes) => update_mouse(state, bytes, now),
    }
}

/// Execute the option at `index`: exit for the exit row, nothing for a
/// separator.
fn confirm(state: &MenuState, index: usize) -> Transition {
    match state.option(index) {
        Some(option) if option.is_exit() => Transition::Exit,
        Some(option) if option.is_separator() => Transition::Render,
        Some(_) => Transition::Execute(index),
        None => Transition::Render,
    }
}

fn update_mouse(state: &mut MenuState, bytes: &[u8], now: Instant) -> Transition {
    let Some(report) = MouseReport::decode(bytes) else {
        trace!("discarding malformed mouse report");
        return Transition::Render;
    };
    match report.kind() {
        MouseKind::WheelUp => {
            state.step(Direction::Up);
            Transition::Render
        }
        MouseKind::WheelDown => {
            state.step(Direction::Down);
            Transition::Render
        }
        MouseKind::Release => Transition::Render,
        MouseKind::Press => match interpret_click(state, &report, now) {
            Gesture::Execute(index) => confirm(state, index),
            Gesture::Select(_) | Gesture::Ignored => Transition::Render,
        },
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MenuOption;
    use std::time::Duration;

    fn sample() -> MenuState {
        let mut state = MenuState::new(vec![
            MenuOption::new("a", "A", "first"),
            MenuOption::separator(""),
            MenuOption::new("b", "B", "second"),
            MenuOption::exit("Exit", "leave"),
        ]);
        state.ensure_selectable().unwrap();
        state
    }

    fn press(row: u8) -> Action {
        Action::Mouse(MouseReport { button: 0, col: 3, row }.encode().to_vec())
    }

    #[test]
    fn down_skips_separator_then_wraps_to_exit() {
        let mut state = sample();
        let now = Instant::now();
        assert_eq!(update(&mut state, &Action::MoveDown, now), Transition::Render);
        assert_eq!(state.selected(), 2);
        update(&mut state, &Action::MoveDown, now);
        assert_eq!(state.selected(), 3);
    }

    #[test]
    fn down_n_then_up_n_returns_to_start() {
        let now = Instant::now();
        for n in 0..10 {
            let mut state = sample();
            let start = state.selected();
            for _ in 0..n {
                update(&mut state, &Action::MoveDown, now);
            }
            for _ in 0..n {
                update(&mut state, &Action::MoveUp, now);
            }
            assert_eq!(state.selected(), start, "n = {n}");
        }
    }

    #[test]
    fn confirm_executes_selected() {
        let mut state = sample();
        assert_eq!(update(&mut state, &Action::Confirm, Instant::now()), Transition::Execute(0));
    }

    #[test]
    fn confirm_on_exit_exits() {
        let mut state = MenuState::new(vec![MenuOption::exit("Exit", "")]);
        state.ensure_selectable().unwrap();
        assert_eq!(update(&mut state, &Action::Confirm, Instant::now()), Transition::Exit);
    }

    #[test]
    fn cancel_exits() {
        let mut state = sample();
        assert_eq!(update(&mut state, &Action::Cancel, Instant::now()), Transition::Exit);
    }

    #[test]
    fn shortcut_selects_and_executes() {
        let mut state = sample();
        assert_eq!(
            update(&mut state, &Action::Shortcut(2), Instant::now()),
            Transition::Execute(2)
        );
        assert_eq!(state.selected(), 2);
    }

    #[test]
    fn shortcut_to_exit_exits() {
        let mut state = sample();
        assert_eq!(update(&mut state, &Action::Shortcut(3), Instant::now()), Transition::Exit);
        assert_eq!(state.selected(), 3);
    }

    #[test]
    fn shortcut_to_separator_or_out_of_range_is_ignored() {
        let mut state = sample();
        let now = Instant::now();
        assert_eq!(update(&mut state, &Action::Shortcut(1), now), Transition::Render);
        assert_eq!(update(&mut state, &Action::Shortcut(9), now), Transition::Render);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn single_click_selects_double_click_executes() {
        let mut state = sample();
        state.set_menu_start_line(5);
        let t0 = Instant::now();
        assert_eq!(update(&mut state, &press(7), t0), Transition::Render);
        assert_eq!(state.selected(), 2);
        assert_eq!(
            update(&mut state, &press(7), t0 + Duration::from_millis(100)),
            Transition::Execute(2)
        );
    }

    #[test]
    fn double_click_on_exit_exits() {
        let mut state = sample();
        state.set_menu_start_line(5);
        let t0 = Instant::now();
        update(&mut state, &press(8), t0);
        assert_eq!(update(&mut state, &press(8), t0), Transition::Exit);
    }

    #[test]
    fn release_reports_do_not_count_as_clicks() {
        let mut state = sample();
        state.set_menu_start_line(5);
        let t0 = Instant::now();
        let release = Action::Mouse(MouseReport { button: 3, col: 3, row: 7 }.encode().to_vec());
        update(&mut state, &press(7), t0);
        assert_eq!(update(&mut state, &release, t0), Transition::Render);
        assert_eq!(
            update(&mut state, &press(7), t0 + Duration::from_millis(100)),
            Transition::Execute(2)
        );
    }

    #[test]
    fn wheel_navigates() {
        let mut state = sample();
        let wheel_down = Action::Mouse(MouseReport { button: 65, col: 1, row: 1 }.encode().to_vec());
        update(&mut state, &wheel_down, Instant::now());
        assert_eq!(state.selected(), 2);
    }

    #[test]
    fn malformed_mouse_report_is_noop() {
        let mut state = sample();
        let action = Action::Mouse(b"\x1b[M".to_vec());
        assert_eq!(update(&mut state, &action, Instant::now()), Transition::Render);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn click_outside_menu_is_noop() {
        let mut state = sample();
        state.set_menu_start_line(5);
        assert_eq!(update(&mut state, &press(2), Instant::now()), Transition::Render);
        assert_eq!(update(&mut state, &press(40), Instant::now()), Transition::Render);
        assert_eq!(state.selected(), 0);
    }
}
