//! The menu engine.
//!
//! Organized along pure/effects boundaries:
//! - `state`: selection, click history, actions, transitions
//! - `mouse`: report decoding and click classification
//! - `update`: pure transitions
//! - `view`: render pass
//! - `run`: event loop and terminal wiring

pub mod mouse;
pub mod run;
pub mod state;
pub mod update;
pub mod view;

pub use run::{Menu, map_token};
pub use state::{Action, ClickState, MenuState, Transition};
