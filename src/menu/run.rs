//! Menu effects boundary: event loop, pauses, terminal wiring.
//!
//! The only menu module with side effects. It maps input tokens to actions,
//! feeds them to the pure `update`, redraws through `view`, and performs the
//! status messages and cosmetic pauses around the loop.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use ratatui::text::Line;
use tracing::{debug, info};

use crate::config::{MenuConfig, Pacing};
use crate::error::MenuError;
use crate::input::{InputSource, InputToken, TerminalInput};
use crate::surface::{Surface, Target, TerminalSurface};
use crate::theme::{Theme, ThemeRegistry};
use crate::types::MenuOption;

use super::state::{Action, MenuState, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map an input token to a semantic action. None for unbound input.
pub fn map_token(token: &InputToken) -> Option<Action> {
    match token {
        InputToken::Up | InputToken::Char('k') => Some(Action::MoveUp),
        InputToken::Down | InputToken::Char('j') => Some(Action::MoveDown),
        InputToken::Enter => Some(Action::Confirm),
        InputToken::Escape
        | InputToken::Char('q' | 'Q')
        | InputToken::Interrupt
        | InputToken::Eof => Some(Action::Cancel),
        InputToken::Number(n) => Some(Action::Shortcut(*n)),
        InputToken::Mouse(bytes) => Some(Action::Mouse(bytes.to_vec())),
        InputToken::Char(_) | InputToken::Unmapped(_) => None,
    }
}

// ============================================================================
// MENU
// ============================================================================

/// An interactive menu.
///
/// Built fluently, then [`Menu::run`] (real terminal) or [`Menu::run_with`]
/// (any input and surface). The selection survives between runs.
pub struct Menu {
    state: MenuState,
    registry: Arc<ThemeRegistry>,
    pacing: Pacing,
    escape_timeout: Duration,
    output: Target,
}

impl Menu {
    pub fn new(registry: Arc<ThemeRegistry>) -> Self {
        Self::with_config(registry, &MenuConfig::default())
    }

    pub fn with_config(registry: Arc<ThemeRegistry>, config: &MenuConfig) -> Self {
        let mut state = MenuState::default();
        state.double_click_window = config.double_click_window();
        Self {
            state,
            registry,
            pacing: config.pacing(),
            escape_timeout: config.escape_timeout(),
            output: Target::Stdout,
        }
    }

    pub fn option(
        mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.push(MenuOption::new(key, label, description));
        self
    }

    pub fn separator(self) -> Self {
        self.section("")
    }

    /// A separator with an embedded title.
    pub fn section(mut self, title: impl Into<String>) -> Self {
        self.push(MenuOption::separator(title));
        self
    }

    pub fn exit(mut self, label: impl Into<String>, description: impl Into<String>) -> Self {
        self.push(MenuOption::exit(label, description));
        self
    }

    pub fn pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Stream [`Menu::run`] draws on.
    pub fn output(mut self, output: Target) -> Self {
        self.output = output;
        self
    }

    pub fn push(&mut self, option: MenuOption) {
        self.state.push(option);
    }

    pub fn options(&self) -> &[MenuOption] {
        self.state.options()
    }

    pub fn selected(&self) -> usize {
        self.state.selected()
    }

    pub fn registry(&self) -> &Arc<ThemeRegistry> {
        &self.registry
    }

    fn theme(&self) -> Result<Arc<dyn Theme>, MenuError> {
        self.registry.current().ok_or(MenuError::NoTheme)
    }

    /// Run on the real terminal.
    pub fn run(&mut self) -> Result<Option<String>, MenuError> {
        let mut input = TerminalInput::new(self.escape_timeout).with_output(self.output);
        debug!(raw = input.is_raw(), "terminal input ready");
        let mut surface = TerminalSurface::to(self.output);
        self.run_with(&mut input, &mut surface)
    }

    /// Run until an option is executed (its key is returned) or the user
    /// exits (None).
    pub fn run_with(
        &mut self,
        input: &mut dyn InputSource,
        surface: &mut dyn Surface,
    ) -> Result<Option<String>, MenuError> {
        self.state.ensure_selectable()?;
        let theme = self.theme()?;
        info!(options = self.state.len(), theme = theme.name(), "menu started");

        surface.print(Line::styled(theme.loading_message(), theme.colors().dim));
        surface.present()?;
        pause(self.pacing.loading);

        loop {
            let theme = self.theme()?;
            let start = render(&self.state, theme.as_ref(), surface);
            self.state.set_menu_start_line(start);
            surface.present()?;

            let token = input.next_token();
            let Some(action) = map_token(&token) else {
                debug!(?token, "unbound input");
                continue;
            };

            let transition = update(&mut self.state, &action, Instant::now());
            debug!(?action, ?transition, selected = self.state.selected(), "transition");

            match transition {
                Transition::Render => {}
                Transition::Execute(index) => {
                    let Some(option) = self.state.option(index).cloned() else {
                        continue;
                    };
                    surface.clear();
                    surface.print(Line::styled(
                        theme.execution_message(&option.label),
                        theme.colors().success,
                    ));
                    surface.present()?;
                    pause(self.pacing.execution);
                    info!(key = %option.key, "option executed");
                    return Ok(Some(option.key));
                }
                Transition::Exit => {
                    surface.print(Line::styled(theme.goodbye_message(), theme.colors().primary));
                    surface.present()?;
                    info!("menu exited");
                    return Ok(None);
                }
            }
        }
    }
}

fn pause(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;
    use crate::menu::mouse::MouseReport;
    use crate::surface::BufferSurface;

    fn registry() -> Arc<ThemeRegistry> {
        Arc::new(ThemeRegistry::with_presets())
    }

    fn sample() -> Menu {
        Menu::new(registry())
            .pacing(Pacing::none())
            .option("a", "Alpha", "first")
            .separator()
            .option("b", "Beta", "second")
            .exit("Exit", "leave")
    }

    fn run(menu: &mut Menu, tokens: Vec<InputToken>) -> (Result<Option<String>, MenuError>, BufferSurface) {
        let mut input = ScriptedInput::new(tokens);
        let mut surface = BufferSurface::new(100, 60);
        let result = menu.run_with(&mut input, &mut surface);
        (result, surface)
    }

    #[test]
    fn arrow_keys_map_to_movement() {
        assert_eq!(map_token(&InputToken::Up), Some(Action::MoveUp));
        assert_eq!(map_token(&InputToken::Down), Some(Action::MoveDown));
    }

    #[test]
    fn vim_keys_map_to_movement() {
        assert_eq!(map_token(&InputToken::Char('k')), Some(Action::MoveUp));
        assert_eq!(map_token(&InputToken::Char('j')), Some(Action::MoveDown));
    }

    #[test]
    fn escape_q_interrupt_and_eof_cancel() {
        for token in [
            InputToken::Escape,
            InputToken::Char('q'),
            InputToken::Char('Q'),
            InputToken::Interrupt,
            InputToken::Eof,
        ] {
            assert_eq!(map_token(&token), Some(Action::Cancel), "{token:?}");
        }
    }

    #[test]
    fn unmapped_input_returns_none() {
        assert_eq!(map_token(&InputToken::Char('z')), None);
        assert_eq!(map_token(&InputToken::Unmapped(b"\x1b[C".to_vec())), None);
    }

    #[test]
    fn enter_returns_selected_key() {
        let mut menu = sample();
        let (result, surface) = run(&mut menu, vec![InputToken::Enter]);
        assert_eq!(result.unwrap().as_deref(), Some("a"));
        let text = surface.text();
        assert!(text.last().unwrap().contains("Alpha"), "execution message names the label");
    }

    #[test]
    fn down_skips_separator_before_enter() {
        let mut menu = sample();
        let (result, _) = run(&mut menu, vec![InputToken::Down, InputToken::Enter]);
        assert_eq!(result.unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn exit_only_menu_returns_none_on_enter() {
        let mut menu = Menu::new(registry()).pacing(Pacing::none()).exit("Exit", "");
        let (result, surface) = run(&mut menu, vec![InputToken::Enter]);
        assert_eq!(result.unwrap(), None);
        let goodbye = ThemeRegistry::with_presets().current().unwrap().goodbye_message();
        assert_eq!(surface.text().last(), Some(&goodbye));
    }

    #[test]
    fn every_frame_is_presented_once() {
        let mut menu = sample();
        let (result, surface) = run(&mut menu, vec![InputToken::Down, InputToken::Escape]);
        assert_eq!(result.unwrap(), None);
        // Loading message, two renders, goodbye.
        assert_eq!(surface.present_count(), 4);
        assert_eq!(surface.clear_count(), 2);
    }

    #[test]
    fn input_after_execution_is_left_unread() {
        let mut menu = sample();
        let mut input = ScriptedInput::new([InputToken::Enter, InputToken::Down, InputToken::Enter]);
        let mut surface = BufferSurface::new(100, 60);
        let result = menu.run_with(&mut input, &mut surface).unwrap();
        assert_eq!(result.as_deref(), Some("a"));
        assert_eq!(input.remaining(), 2);
    }

    #[test]
    fn interrupt_token_exits_with_goodbye() {
        let mut menu = sample();
        let (result, surface) = run(&mut menu, vec![InputToken::Interrupt]);
        assert_eq!(result.unwrap(), None);
        let goodbye = ThemeRegistry::with_presets().current().unwrap().goodbye_message();
        assert_eq!(surface.text().last(), Some(&goodbye));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let mut menu = sample();
        let (result, _) = run(&mut menu, vec![]);
        assert_eq!(result.unwrap(), None);
    }

    #[test]
    fn digit_shortcut_executes() {
        let mut menu = sample();
        let (result, _) = run(&mut menu, vec![InputToken::Number(2)]);
        assert_eq!(result.unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn out_of_range_digit_is_ignored() {
        let mut menu = sample();
        let (result, _) = run(&mut menu, vec![InputToken::Number(9), InputToken::Enter]);
        assert_eq!(result.unwrap().as_deref(), Some("a"));
    }

    #[test]
    fn unbound_keys_keep_looping() {
        let mut menu = sample();
        let (result, _) = run(
            &mut menu,
            vec![InputToken::Char('x'), InputToken::Unmapped(vec![0xff]), InputToken::Enter],
        );
        assert_eq!(result.unwrap().as_deref(), Some("a"));
    }

    #[test]
    fn mouse_double_click_executes_clicked_option() {
        let mut menu = sample();
        let mut surface = BufferSurface::new(100, 60);
        // Render once to learn where the options start.
        let start = render(&menu.state, menu.theme().unwrap().as_ref(), &mut surface);
        let click = MouseReport { button: 0, col: 4, row: (start + 2) as u8 }.encode();
        let (result, _) = run(&mut menu, vec![InputToken::Mouse(click), InputToken::Mouse(click)]);
        assert_eq!(result.unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn separator_only_menu_is_rejected() {
        let mut menu = Menu::new(registry()).pacing(Pacing::none()).separator().separator();
        let (result, _) = run(&mut menu, vec![InputToken::Enter]);
        assert!(matches!(result, Err(MenuError::NoSelectableOption)));
    }

    #[test]
    fn empty_registry_is_rejected() {
        let mut menu = Menu::new(Arc::new(ThemeRegistry::new()))
            .pacing(Pacing::none())
            .option("a", "A", "");
        let (result, _) = run(&mut menu, vec![InputToken::Enter]);
        assert!(matches!(result, Err(MenuError::NoTheme)));
    }

    #[test]
    fn selection_survives_between_runs() {
        let mut menu = sample();
        let (first, _) = run(&mut menu, vec![InputToken::Down, InputToken::Escape]);
        assert_eq!(first.unwrap(), None);
        let (second, _) = run(&mut menu, vec![InputToken::Enter]);
        assert_eq!(second.unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn theme_switch_between_runs_changes_rendering() {
        let mut menu = sample();
        assert!(menu.registry().set_current("fallout"));
        let (_, surface) = run(&mut menu, vec![InputToken::Escape]);
        let goodbye = crate::theme::presets::FALLOUT.goodbye_message();
        assert_eq!(surface.text().last(), Some(&goodbye));
    }

    #[test]
    fn decoded_byte_stream_drives_the_loop() {
        let mut menu = sample();
        let mut input = ScriptedInput::from_bytes(b"\x1b[B\x1b[B\x1b[A\r");
        let mut surface = BufferSurface::new(100, 60);
        let result = menu.run_with(&mut input, &mut surface).unwrap();
        assert_eq!(result.as_deref(), Some("b"));
    }
}
