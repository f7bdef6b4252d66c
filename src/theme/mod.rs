//! Themes: swappable rendering strategies.
//!
//! A theme controls visual style only. It never blocks, sleeps, or reads
//! input, and holds no mutable state. The engine calls it once per element
//! per render pass.
//!
//! - `skin`: data-driven [`Theme`] implementation
//! - `presets`: the bundled skins
//! - `registry`: name → theme mapping plus the current selection

pub mod presets;
pub mod registry;
pub mod skin;

use ratatui::style::Style;
use ratatui::text::Line;

use crate::surface::Surface;

pub use registry::ThemeRegistry;
pub use skin::Skin;

/// Surfaces at least this wide get the full header; narrower ones get the
/// compact header.
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 80;

/// Column width of an item name. Descriptions start after it.
pub const NAME_COLUMN_WIDTH: usize = 25;

// ============================================================================
// PALETTE
// ============================================================================

/// Semantic color roles every theme defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Primary,
    Secondary,
    Accent,
    Background,
    Warning,
    Success,
    Border,
    Selected,
    Dim,
}

impl Role {
    pub const ALL: [Role; 9] = [
        Role::Primary,
        Role::Secondary,
        Role::Accent,
        Role::Background,
        Role::Warning,
        Role::Success,
        Role::Border,
        Role::Selected,
        Role::Dim,
    ];
}

/// Role → style mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Style,
    pub secondary: Style,
    pub accent: Style,
    pub background: Style,
    pub warning: Style,
    pub success: Style,
    pub border: Style,
    pub selected: Style,
    pub dim: Style,
}

impl Palette {
    pub fn style(&self, role: Role) -> Style {
        match role {
            Role::Primary => self.primary,
            Role::Secondary => self.secondary,
            Role::Accent => self.accent,
            Role::Background => self.background,
            Role::Warning => self.warning,
            Role::Success => self.success,
            Role::Border => self.border,
            Role::Selected => self.selected,
            Role::Dim => self.dim,
        }
    }
}

// ============================================================================
// THEME CAPABILITY
// ============================================================================

pub trait Theme: Send + Sync {
    /// Registry key.
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn colors(&self) -> Palette;

    fn render_logo(&self, surface: &mut dyn Surface);

    fn render_subtitle(&self, surface: &mut dyn Surface);

    /// One option row. Selected rows must look different from the rest.
    fn render_menu_item(&self, name: &str, description: &str, selected: bool) -> Line<'static>;

    /// A horizontal divider, with `title` embedded when non-empty.
    fn render_separator(&self, title: &str) -> Line<'static>;

    fn render_footer(&self, surface: &mut dyn Surface);

    fn loading_message(&self) -> String;

    /// Must contain `action` verbatim.
    fn execution_message(&self, action: &str) -> String;

    fn goodbye_message(&self) -> String;
}

/// Pad or truncate `name` to exactly `width` characters.
pub fn fit_column(name: &str, width: usize) -> String {
    let count = name.chars().count();
    if count <= width {
        format!("{name:<width$}")
    } else if width == 0 {
        String::new()
    } else {
        let mut cut: String = name.chars().take(width - 1).collect();
        cut.push('…');
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn fit_column_pads_short_names() {
        assert_eq!(fit_column("Build", 8), "Build   ");
    }

    #[test]
    fn fit_column_truncates_long_names() {
        let fitted = fit_column("Documentation generator", 10);
        assert_eq!(fitted.chars().count(), 10);
        assert!(fitted.ends_with('…'));
    }

    #[test]
    fn palette_lookup_covers_every_role() {
        let palette = presets::FALLOUT.colors();
        for role in Role::ALL {
            let _ = palette.style(role);
        }
        assert_eq!(palette.style(Role::Primary).fg, Some(Color::LightYellow));
    }
}
