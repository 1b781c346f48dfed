//! Bookmark entry definitions
//!
//! Browser bookmark nodes are converted once into [`BookmarkInfo`], whose
//! [`BookmarkKind`] is decided up front so navigation never has to probe
//! for optional fields.

use serde::{Deserialize, Serialize};

/// Id of the invisible root node of the browser's bookmark tree
pub const ROOT_ID: &str = "0";

/// URLs with this prefix are rendered as separators
pub const SEPARATOR_URL_PREFIX: &str = "http://separatethis.com/";

/// A node as returned by the browser bookmarks API
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkNode {
    pub id: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub index: Option<i64>,
    #[serde(default)]
    pub unmodifiable: Option<String>,
    #[serde(default)]
    pub children: Option<Vec<BookmarkNode>>,
}

/// What a bookmark entry is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookmarkKind {
    Bookmark,
    Folder,
    Separator,
}

impl BookmarkKind {
    fn of(node: &BookmarkNode) -> Self {
        match node.url.as_deref() {
            None | Some("") => BookmarkKind::Folder,
            Some(url) if url.starts_with(SEPARATOR_URL_PREFIX) => BookmarkKind::Separator,
            Some(_) => BookmarkKind::Bookmark,
        }
    }
}

/// View model of a single bookmark, folder or separator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmarkInfo {
    pub id: String,
    pub parent_id: String,
    pub title: String,
    pub url: String,
    /// Position inside the parent folder, -1 when unknown
    pub storage_index: i64,
    pub kind: BookmarkKind,
    pub is_root: bool,
    pub is_unmodifiable: bool,
}

impl BookmarkInfo {
    /// Build a folder entry without a browser node (tests, placeholders)
    pub fn folder(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::simulated(id, title, BookmarkKind::Folder, "")
    }

    /// Build a bookmark entry without a browser node
    pub fn bookmark(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self::simulated(id, title, BookmarkKind::Bookmark, url)
    }

    /// Build a separator entry without a browser node
    pub fn separator(id: impl Into<String>) -> Self {
        Self::simulated(id, "", BookmarkKind::Separator, SEPARATOR_URL_PREFIX)
    }

    fn simulated(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: BookmarkKind,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            parent_id: String::new(),
            title: title.into(),
            url: url.into(),
            storage_index: -1,
            kind,
            is_root: false,
            is_unmodifiable: true,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == BookmarkKind::Folder
    }
}

impl From<&BookmarkNode> for BookmarkInfo {
    fn from(node: &BookmarkNode) -> Self {
        let parent_id = node.parent_id.clone().unwrap_or_default();
        let is_root = node.id == ROOT_ID || parent_id == ROOT_ID;

        Self {
            id: node.id.clone(),
            title: node.title.clone(),
            url: node.url.clone().unwrap_or_default(),
            storage_index: node.index.unwrap_or(-1),
            kind: BookmarkKind::of(node),
            is_root,
            is_unmodifiable: is_root || node.unmodifiable.is_some(),
            parent_id,
        }
    }
}

/// One pane: a folder and the entries shown under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmarkTree {
    pub parent: BookmarkInfo,
    pub children: Vec<BookmarkInfo>,
}

impl BookmarkTree {
    pub fn new(parent: BookmarkInfo, children: Vec<BookmarkInfo>) -> Self {
        Self { parent, children }
    }

    /// Child at `index`, if any
    pub fn child(&self, index: usize) -> Option<&BookmarkInfo> {
        self.children.get(index)
    }
}
