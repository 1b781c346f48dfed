//! Pane stack - the drill-down list of open bookmark folders

use super::node::BookmarkTree;
use super::source::BookmarkSource;
use crate::handler::Intent;

/// Result of applying an intent to the pane stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// Panes changed; holds the new pane count
    Panes(usize),
    /// Highlight change for the session's list registry
    Highlight { list_index: usize, item_index: usize },
    /// Belongs to the host browser (open tabs, context menu)
    External,
    /// Nothing to do (unknown folder, unknown parent)
    Ignored,
}

/// Ordered panes, deepest last
#[derive(Debug, Clone, Default)]
pub struct PaneStack {
    trees: Vec<BookmarkTree>,
}

impl PaneStack {
    /// Create a stack with a single root pane
    pub fn new(initial: BookmarkTree) -> Self {
        Self {
            trees: vec![initial],
        }
    }

    pub fn trees(&self) -> &[BookmarkTree] {
        &self.trees
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Deepest pane
    pub fn last(&self) -> Option<&BookmarkTree> {
        self.trees.last()
    }

    pub fn set_trees(&mut self, trees: Vec<BookmarkTree>) {
        self.trees = trees;
    }

    /// Drop every pane after the one whose parent is `parent_id`.
    ///
    /// Returns false (and leaves the stack alone) for an unknown id.
    pub fn remove_trees_after(&mut self, parent_id: &str) -> bool {
        match self.position_of(parent_id) {
            Some(index) => {
                self.trees.truncate(index + 1);
                true
            }
            None => false,
        }
    }

    /// Open `tree` as the next pane after the pane showing `parent_id`.
    ///
    /// Panes deeper than `parent_id` are replaced; an unknown parent leaves
    /// the stack alone.
    pub fn open_tree(&mut self, tree: BookmarkTree, parent_id: &str) -> bool {
        if !self.remove_trees_after(parent_id) {
            return false;
        }
        self.trees.push(tree);
        true
    }

    fn position_of(&self, parent_id: &str) -> Option<usize> {
        self.trees.iter().position(|tree| tree.parent.id == parent_id)
    }

    /// Apply an intent produced by the navigation controller
    pub fn apply(&mut self, intent: &Intent, source: &BookmarkSource) -> Applied {
        let changed = match intent {
            Intent::RemoveTreesAfter { parent_id } => self.remove_trees_after(parent_id),
            Intent::OpenFolder { id, parent_id } => match source.tree(id) {
                Some(tree) => self.open_tree(tree, parent_id),
                None => false,
            },
            Intent::Highlight {
                list_index,
                item_index,
            } => {
                return Applied::Highlight {
                    list_index: *list_index,
                    item_index: *item_index,
                }
            }
            Intent::OpenBookmarks { .. } | Intent::OpenMenu { .. } => return Applied::External,
        };

        if changed {
            log::debug!("pane stack now has {} panes", self.trees.len());
            Applied::Panes(self.trees.len())
        } else {
            Applied::Ignored
        }
    }
}
