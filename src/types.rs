//! Domain types for retro-menu.
//!
//! A menu is an ordered list of [`MenuOption`]s. Insertion order is display
//! order. Two keys are reserved: [`SEPARATOR_KEY`] marks a visual divider
//! that can never be selected, [`EXIT_KEY`] ends the menu loop without a
//! result.

// ============================================================================
// SENTINEL KEYS
// ============================================================================

/// Key of a non-selectable divider row. Its label holds the divider title.
pub const SEPARATOR_KEY: &str = "separator";

/// Key of the option that leaves the menu without a selection.
pub const EXIT_KEY: &str = "exit";

// ============================================================================
// OPTIONS
// ============================================================================

/// What an option does when confirmed, derived from its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Regular entry; confirming it returns its key to the caller.
    Action,
    /// Divider; never selectable.
    Separator,
    /// Leaves the menu with no result.
    Exit,
}

/// One entry in a menu. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    /// Identity returned to the caller on selection.
    pub key: String,
    /// Display name.
    pub label: String,
    /// One-line description rendered after the label column.
    pub description: String,
}

impl MenuOption {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            description: description.into(),
        }
    }

    /// A divider row, optionally titled.
    pub fn separator(title: impl Into<String>) -> Self {
        Self::new(SEPARATOR_KEY, title, "")
    }

    /// The exit row.
    pub fn exit(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(EXIT_KEY, label, description)
    }

    pub fn kind(&self) -> OptionKind {
        match self.key.as_str() {
            SEPARATOR_KEY => OptionKind::Separator,
            EXIT_KEY => OptionKind::Exit,
            _ => OptionKind::Action,
        }
    }

    pub fn is_separator(&self) -> bool {
        self.kind() == OptionKind::Separator
    }

    pub fn is_exit(&self) -> bool {
        self.kind() == OptionKind::Exit
    }
}

// ============================================================================
// TESTS
// ============================================================================
