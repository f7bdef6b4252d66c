//! Error types.
//!
//! Only conditions the caller can act on surface here. Malformed input and
//! unknown theme names are handled in place and never become errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a [`crate::menu::Menu::run`] call.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Every option is a separator (or there are none), so the selection
    /// invariant cannot hold.
    #[error("menu has no selectable option")]
    NoSelectableOption,

    /// The registry has no current theme to render with.
    #[error("no theme selected")]
    NoTheme,

    /// Writing to the output surface failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Failure to load a [`crate::config::MenuConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
