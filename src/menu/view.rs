//! Render pass: header, options, footer.
//!
//! The theme decides how each element looks; this module decides what is
//! drawn and in which order, and where the options landed. Every line is
//! clipped to the surface width, so one printed line is one terminal row.

use std::io;

use ratatui::layout::Size;
use ratatui::text::Line;

use crate::surface::{Surface, clip_line};
use crate::theme::Theme;

use super::state::MenuState;

/// Draw the whole menu onto a cleared surface.
///
/// Returns the 1-based terminal row of the first option, for mapping mouse
/// rows back to options.
pub fn render(state: &MenuState, theme: &dyn Theme, surface: &mut dyn Surface) -> u16 {
    let mut surface = Clipped::new(surface);
    surface.clear();
    theme.render_logo(&mut surface);
    theme.render_subtitle(&mut surface);

    let header = surface.lines_printed();
    let menu_start_line = u16::try_from(header + 1).unwrap_or(u16::MAX);

    for (index, option) in state.options().iter().enumerate() {
        let line = if option.is_separator() {
            theme.render_separator(&option.label)
        } else {
            theme.render_menu_item(&option.label, &option.description, index == state.selected())
        };
        surface.print(line);
    }

    theme.render_footer(&mut surface);
    menu_start_line
}

/// Clips every printed line to the wrapped surface's width.
struct Clipped<'a> {
    inner: &'a mut dyn Surface,
    width: usize,
}

impl<'a> Clipped<'a> {
    fn new(inner: &'a mut dyn Surface) -> Self {
        let width = usize::from(inner.size().width);
        Self { inner, width }
    }
}

impl Surface for Clipped<'_> {
    fn clear(&mut self) {
        self.inner.clear();
    }

    fn print(&mut self, line: Line<'static>) {
        self.inner.print(clip_line(line, self.width));
    }

    fn size(&self) -> Size {
        self.inner.size()
    }

    fn lines_printed(&self) -> usize {
        self.inner.lines_printed()
    }

    fn present(&mut self) -> io::Result<()> {
        self.inner.present()
    }
}
