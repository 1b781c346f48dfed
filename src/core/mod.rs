//! Core module - List registry and focus windows

pub mod list;
pub mod window;

pub use list::ListRegistry;
pub use window::{WindowFocusManager, WindowId, BASE_WINDOW, EDITOR_WINDOW, MENU_WINDOW};
