//! Tree module - Bookmark data model, source and pane stack

pub mod node;
pub mod panes;
pub mod source;

pub use node::{
    BookmarkInfo, BookmarkKind, BookmarkNode, BookmarkTree, ROOT_ID, SEPARATOR_URL_PREFIX,
};
pub use panes::{Applied, PaneStack};
pub use source::BookmarkSource;
