//! bookmark-nav - Keyboard navigation for a multi-pane bookmark popup
//!
//! Tracks the panes of a bookmark-folder drill-down, the highlighted item of
//! each pane and the active keyboard focus window, and turns key presses
//! into intents (open folder, open bookmark, close pane, open menu) for the
//! surrounding state store to apply.

pub mod app;
pub mod core;
pub mod error;
pub mod handler;
pub mod tree;

pub use error::{NavError, Result};
