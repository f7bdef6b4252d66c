//! retro-menu: themed interactive terminal menus with keyboard and mouse input.

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod menu;
pub mod surface;
pub mod theme;
pub mod types;

pub use error::MenuError;
pub use menu::Menu;
pub use theme::{Theme, ThemeRegistry};
pub use types::MenuOption;
