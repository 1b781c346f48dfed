//! Intents emitted by navigation for the state store to apply

use serde::Serialize;

/// Where opened bookmarks go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenIn {
    CurrentTab,
    NewTab,
    BackgroundTab,
    NewWindow,
    Incognito,
}

/// Options for opening bookmarks in the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpenOptions {
    pub open_in: OpenIn,
    /// Run `javascript:` bookmarklets instead of refusing them
    pub allow_bookmarklet: bool,
    /// Close the popup once the bookmark is opened
    pub close_popup: bool,
}

impl OpenOptions {
    /// What Enter does: open in the current tab and close the popup
    pub fn current_tab() -> Self {
        Self {
            open_in: OpenIn::CurrentTab,
            allow_bookmarklet: true,
            close_popup: true,
        }
    }
}

/// Last known pointer/keyboard position of the highlighted item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

impl Coordinates {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// High-level request produced by a key handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    OpenBookmarks {
        ids: Vec<String>,
        options: OpenOptions,
    },
    /// Open folder `id` as a new pane after the pane showing `parent_id`
    OpenFolder { id: String, parent_id: String },
    /// Drop every pane after the one showing `parent_id`
    RemoveTreesAfter { parent_id: String },
    OpenMenu { id: String, at: Coordinates },
    Highlight { list_index: usize, item_index: usize },
}

impl Intent {
    /// Whether applying this intent ends the popup session
    pub fn closes_popup(&self) -> bool {
        matches!(self, Intent::OpenBookmarks { options, .. } if options.close_popup)
    }
}
