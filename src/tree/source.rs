//! Read-only bookmark source built from a bookmarks API export

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::node::{BookmarkInfo, BookmarkNode, BookmarkTree};
use crate::error::{NavError, Result};

struct Entry {
    info: BookmarkInfo,
    children: Vec<String>,
}

/// In-memory index of a bookmark tree, keyed by node id
pub struct BookmarkSource {
    root_id: String,
    entries: HashMap<String, Entry>,
}

impl BookmarkSource {
    /// Index a tree parsed from JSON.
    ///
    /// Accepts either a single root node or the array the bookmarks API's
    /// `getTree` returns; only the first element of an array is used.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let root: BookmarkNode = match value {
            serde_json::Value::Array(mut nodes) => {
                if nodes.is_empty() {
                    return Err(NavError::bookmarks("bookmark export is an empty array"));
                }
                serde_json::from_value(nodes.swap_remove(0))?
            }
            other => serde_json::from_value(other)?,
        };
        Ok(Self::from_root(&root))
    }

    /// Load and index a JSON export from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|e| match e {
            NavError::Io(_) => e,
            other => NavError::bookmarks_file(path, other.to_string()),
        })
    }

    /// Index an already parsed root node
    pub fn from_root(root: &BookmarkNode) -> Self {
        let mut entries = HashMap::new();
        Self::index(root, None, &mut entries);
        Self {
            root_id: root.id.clone(),
            entries,
        }
    }

    fn index(node: &BookmarkNode, parent: Option<&str>, out: &mut HashMap<String, Entry>) {
        // Exports nest children without repeating parentId
        let mut info = BookmarkInfo::from(node);
        if info.parent_id.is_empty() {
            if let Some(parent) = parent {
                let fixed = BookmarkNode {
                    parent_id: Some(parent.to_string()),
                    children: None,
                    ..node.clone()
                };
                info = BookmarkInfo::from(&fixed);
            }
        }

        let children = node.children.as_deref().unwrap_or_default();
        for child in children {
            Self::index(child, Some(&node.id), out);
        }

        out.insert(
            node.id.clone(),
            Entry {
                info,
                children: children.iter().map(|c| c.id.clone()).collect(),
            },
        );
    }

    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    /// Folder to open first: the first top-level folder (the bookmarks bar)
    /// or the root itself when it has no children
    pub fn default_root_id(&self) -> &str {
        self.entries
            .get(&self.root_id)
            .and_then(|root| root.children.first())
            .map(String::as_str)
            .unwrap_or(&self.root_id)
    }

    /// Look up a single entry
    pub fn get(&self, id: &str) -> Option<&BookmarkInfo> {
        self.entries.get(id).map(|entry| &entry.info)
    }

    /// Build the pane for a folder; `None` for unknown ids and non-folders
    pub fn tree(&self, id: &str) -> Option<BookmarkTree> {
        let entry = self.entries.get(id)?;
        if !entry.info.is_folder() {
            return None;
        }
        let children = entry
            .children
            .iter()
            .filter_map(|child| self.get(child).cloned())
            .collect();
        Some(BookmarkTree::new(entry.info.clone(), children))
    }

    /// Number of indexed nodes, root included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
