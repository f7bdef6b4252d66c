//! Data-driven theme.
//!
//! A [`Skin`] is pure content: glyphs, strings and a palette. All bundled
//! themes are `Skin` constants, so adding one means writing data.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::surface::Surface;

use super::{NAME_COLUMN_WIDTH, Palette, Theme, WIDE_LAYOUT_MIN_WIDTH, fit_column};

const RULE_WIDTH: usize = 70;
const TITLED_RULE_LEAD: usize = 50;
const TITLED_RULE_TAIL: usize = 15;

#[derive(Debug, Clone, Copy)]
pub struct Skin {
    pub name: &'static str,
    pub description: &'static str,
    pub palette: Palette,
    /// Header drawn on wide surfaces.
    pub logo_wide: &'static [&'static str],
    /// Header drawn on narrow surfaces.
    pub logo_compact: &'static [&'static str],
    /// Title of the subtitle box.
    pub subtitle_title: &'static str,
    pub subtitle: &'static str,
    /// Title of the footer box.
    pub footer_title: &'static str,
    /// Leading glyph of every item and separator row.
    pub gutter: &'static str,
    /// Selection markers placed around a selected row.
    pub selected_open: &'static str,
    pub selected_close: &'static str,
    /// Divider glyph.
    pub rule: char,
    pub loading: &'static str,
    /// Prepended to the action name in the execution message.
    pub executing: &'static str,
    pub goodbye: &'static str,
}

impl Skin {
    fn boxed(&self, title: &str, body: Vec<Span<'static>>, surface: &mut dyn Surface) {
        let p = &self.palette;
        let body_width: usize = body.iter().map(|s| s.content.chars().count()).sum();
        let inner = body_width.max(title.chars().count() + 4) + 2;
        let title_fill = inner.saturating_sub(title.chars().count() + 2);
        let left = title_fill / 2;

        surface.print(Line::from(vec![
            Span::styled(format!("╭{}", "─".repeat(left)), p.border),
            Span::styled(format!(" {title} "), p.accent),
            Span::styled(format!("{}╮", "─".repeat(title_fill - left)), p.border),
        ]));

        let mut row = vec![Span::styled("│ ", p.border)];
        row.extend(body);
        row.push(Span::raw(" ".repeat(inner - body_width - 2)));
        row.push(Span::styled(" │", p.border));
        surface.print(Line::from(row));

        surface.print(Line::styled(format!("╰{}╯", "─".repeat(inner)), p.border));
    }
}

impl Theme for Skin {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn colors(&self) -> Palette {
        self.palette
    }

    fn render_logo(&self, surface: &mut dyn Surface) {
        let logo = if surface.size().width >= WIDE_LAYOUT_MIN_WIDTH {
            self.logo_wide
        } else {
            self.logo_compact
        };
        for row in logo {
            surface.print(Line::styled(*row, self.palette.primary));
        }
    }

    fn render_subtitle(&self, surface: &mut dyn Surface) {
        let body = vec![Span::styled(
            self.subtitle,
            self.palette.primary.add_modifier(Modifier::BOLD),
        )];
        self.boxed(self.subtitle_title, body, surface);
        surface.print(Line::default());
    }

    fn render_menu_item(&self, name: &str, description: &str, selected: bool) -> Line<'static> {
        let p = &self.palette;
        let (style, open, close, gutter, desc_style) = if selected {
            (p.selected, self.selected_open, self.selected_close, p.primary, p.selected)
        } else {
            (p.primary, "  ", "  ", p.dim, p.dim)
        };

        Line::from(vec![
            Span::styled(self.gutter, gutter),
            Span::styled(format!("{open}{}", fit_column(name, NAME_COLUMN_WIDTH)), style),
            Span::styled(format!("{description}{close}"), desc_style),
        ])
    }

    fn render_separator(&self, title: &str) -> Line<'static> {
        let rule = if title.is_empty() {
            self.rule.to_string().repeat(RULE_WIDTH)
        } else {
            format!(
                "{} {title} {}",
                self.rule.to_string().repeat(TITLED_RULE_LEAD),
                self.rule.to_string().repeat(TITLED_RULE_TAIL)
            )
        };
        Line::from(vec![
            Span::styled(self.gutter, self.palette.success),
            Span::styled(rule, self.palette.success),
        ])
    }

    fn render_footer(&self, surface: &mut dyn Surface) {
        let p = &self.palette;
        let key = |s: &'static str| Span::styled(s, p.success);
        let text = |s: &'static str| Span::styled(s, p.secondary);
        let body = vec![
            key("↑↓"),
            text(" Navigate  "),
            key("[ENTER]"),
            text(" Execute  "),
            key("[0-9]"),
            text(" Shortcut  "),
            Span::styled("[ESC]", p.warning),
            text(" Exit  "),
            Span::styled("[MOUSE]", p.accent),
            text(" Click / double-click"),
        ];
        surface.print(Line::default());
        self.boxed(self.footer_title, body, surface);
    }

    fn loading_message(&self) -> String {
        self.loading.to_string()
    }

    fn execution_message(&self, action: &str) -> String {
        format!("{}{action}", self.executing)
    }

    fn goodbye_message(&self) -> String {
        self.goodbye.to_string()
    }
}

/// Selection style shared by skins that invert primary/background.
pub const fn inverted(fg: ratatui::style::Color, bg: ratatui::style::Color) -> Style {
    Style::new().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{BufferSurface, plain_text};
    use crate::theme::presets;

    #[test]
    fn selected_item_differs_from_unselected() {
        let skin = presets::FALLOUT;
        let on = skin.render_menu_item("Build", "Compile", true);
        let off = skin.render_menu_item("Build", "Compile", false);
        assert_ne!(on, off);
        assert_ne!(on.spans[1].style, off.spans[1].style);
    }

    #[test]
    fn descriptions_align_after_name_column() {
        let skin = presets::TRON;
        let short = plain_text(&skin.render_menu_item("A", "desc", false));
        let long = plain_text(&skin.render_menu_item("Much longer name", "desc", false));
        assert_eq!(short.find("desc"), long.find("desc"));
    }

    #[test]
    fn separator_embeds_title() {
        let skin = presets::MATRIX;
        assert!(plain_text(&skin.render_separator("TOOLS")).contains("TOOLS"));
        let bare = plain_text(&skin.render_separator(""));
        assert!(bare.trim_start_matches(skin.gutter).chars().all(|c| c == skin.rule));
    }

    #[test]
    fn execution_message_contains_action_verbatim() {
        for skin in presets::ALL {
            assert!(skin.execution_message("🚀 Deploy").contains("🚀 Deploy"));
        }
    }

    #[test]
    fn narrow_surface_gets_compact_logo() {
        let skin = presets::LOKI;
        let mut wide = BufferSurface::new(120, 40);
        let mut narrow = BufferSurface::new(60, 40);
        skin.render_logo(&mut wide);
        skin.render_logo(&mut narrow);
        assert_eq!(wide.lines_printed(), skin.logo_wide.len());
        assert_eq!(narrow.lines_printed(), skin.logo_compact.len());
        assert!(wide.lines_printed() > narrow.lines_printed());
    }

    #[test]
    fn subtitle_and_footer_boxes_are_rectangular() {
        let skin = presets::FALLOUT;
        let mut surface = BufferSurface::new(100, 40);
        skin.render_subtitle(&mut surface);
        skin.render_footer(&mut surface);
        let widths: Vec<usize> = surface
            .text()
            .iter()
            .filter(|l| !l.is_empty())
            .map(|l| l.chars().count())
            .collect();
        assert!(widths.windows(2).take(2).all(|w| w[0] == w[1]));
    }
}
