//! Keyboard focus windows
//!
//! A window is a named focus scope. Only the active window receives key
//! bindings; transient windows (menus, editors, the search box) are layered
//! on top of the base window and hand focus back when they close.

use std::borrow::Cow;
use std::fmt;

/// Identifier of a focus scope, compared by value
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(Cow<'static, str>);

/// The main popup window
pub const BASE_WINDOW: WindowId = WindowId(Cow::Borrowed("base-window"));
/// Context menu opened over the base window
pub const MENU_WINDOW: WindowId = WindowId(Cow::Borrowed("menu-window"));
/// Bookmark editor dialog
pub const EDITOR_WINDOW: WindowId = WindowId(Cow::Borrowed("editor-window"));

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Tracks the active window and the windows it replaced
#[derive(Debug, Clone, Default)]
pub struct WindowFocusManager {
    active: Option<WindowId>,
    previous: Vec<WindowId>,
}

impl WindowFocusManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `window` active, remembering the window it replaces.
    ///
    /// Re-entering the active window changes nothing. Re-entering a buried
    /// window moves it to the top; a window is never both active and
    /// remembered.
    pub fn activate(&mut self, window: WindowId) {
        if self.is_active(&window) {
            return;
        }
        log::debug!("activate window {}", window);
        self.previous.retain(|w| w != &window);
        if let Some(current) = self.active.replace(window) {
            self.previous.push(current);
        }
    }

    /// Leave `window`.
    ///
    /// When it is active, the window it replaced becomes active again.
    /// Otherwise the active window stays, and `window` is forgotten so an
    /// out-of-order unmount can never be restored later.
    pub fn deactivate(&mut self, window: &WindowId) {
        if self.is_active(window) {
            self.previous.retain(|w| w != window);
            self.active = self.previous.pop();
            log::debug!(
                "deactivate window {}, active: {}",
                window,
                self.active.as_ref().map_or("none", WindowId::as_str)
            );
        } else {
            self.previous.retain(|w| w != window);
        }
    }

    pub fn active(&self) -> Option<&WindowId> {
        self.active.as_ref()
    }

    pub fn is_active(&self, window: &WindowId) -> bool {
        self.active.as_ref() == Some(window)
    }

    /// Number of windows waiting to be restored
    pub fn depth(&self) -> usize {
        self.previous.len()
    }
}
