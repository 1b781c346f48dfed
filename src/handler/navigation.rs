//! Keyboard navigation over the pane stack
//!
//! Every command reads the latest snapshot and either returns one intent or
//! nothing. Missing panes, unregistered lists and empty lists are not
//! errors; the command simply does nothing.

use super::intent::{Coordinates, Intent, OpenOptions};
use crate::core::ListRegistry;
use crate::tree::{BookmarkInfo, BookmarkTree};

/// Read-only state handed to key handlers
#[derive(Debug, Clone, Copy)]
pub struct NavContext<'a> {
    pub trees: &'a [BookmarkTree],
    pub lists: &'a ListRegistry,
    /// Where a context menu should appear
    pub coordinates: Coordinates,
}

impl<'a> NavContext<'a> {
    pub fn new(trees: &'a [BookmarkTree], lists: &'a ListRegistry, coordinates: Coordinates) -> Self {
        Self {
            trees,
            lists,
            coordinates,
        }
    }

    /// Deepest registered list and the pane it belongs to
    fn last_pane(&self) -> Option<(usize, &'a BookmarkTree)> {
        let index = self.lists.last_list_index()?;
        self.trees.get(index).map(|tree| (index, tree))
    }

    /// Highlighted item of the deepest list
    fn highlighted_item(&self) -> Option<(&'a BookmarkTree, &'a BookmarkInfo)> {
        let (index, tree) = self.last_pane()?;
        let highlighted = self.lists.highlighted(index)?;
        tree.child(highlighted).map(|item| (tree, item))
    }
}

/// Navigation commands that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavCommand {
    /// Close the deepest pane (ArrowLeft)
    Collapse,
    /// Open the highlighted folder as a new pane (ArrowRight)
    Expand,
    /// Open the highlighted bookmark in the current tab (Enter)
    Open,
    /// Context menu for the highlighted item
    ContextMenu,
    /// Highlight the previous item (ArrowUp)
    HighlightPrev,
    /// Highlight the next item (ArrowDown)
    HighlightNext,
}

impl NavCommand {
    pub const ALL: [NavCommand; 6] = [
        NavCommand::Collapse,
        NavCommand::Expand,
        NavCommand::Open,
        NavCommand::ContextMenu,
        NavCommand::HighlightPrev,
        NavCommand::HighlightNext,
    ];

    /// Parse a keymap command name
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "collapse" => Some(NavCommand::Collapse),
            "expand" => Some(NavCommand::Expand),
            "open" => Some(NavCommand::Open),
            "context_menu" => Some(NavCommand::ContextMenu),
            "highlight_prev" => Some(NavCommand::HighlightPrev),
            "highlight_next" => Some(NavCommand::HighlightNext),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NavCommand::Collapse => "collapse",
            NavCommand::Expand => "expand",
            NavCommand::Open => "open",
            NavCommand::ContextMenu => "context_menu",
            NavCommand::HighlightPrev => "highlight_prev",
            NavCommand::HighlightNext => "highlight_next",
        }
    }
}

/// Turns navigation commands into intents
pub struct NavigationController;

impl NavigationController {
    pub fn run(command: NavCommand, ctx: &NavContext<'_>) -> Option<Intent> {
        let intent = match command {
            NavCommand::Collapse => Self::collapse(ctx),
            NavCommand::Expand => Self::expand(ctx),
            NavCommand::Open => Self::open(ctx),
            NavCommand::ContextMenu => Self::context_menu(ctx),
            NavCommand::HighlightPrev => Self::highlight_prev(ctx),
            NavCommand::HighlightNext => Self::highlight_next(ctx),
        };
        log::debug!("{} -> {:?}", command.name(), intent);
        intent
    }

    /// At least one pane always stays open
    pub fn collapse(ctx: &NavContext<'_>) -> Option<Intent> {
        let [.., second_last, _] = ctx.trees else {
            return None;
        };
        Some(Intent::RemoveTreesAfter {
            parent_id: second_last.parent.id.clone(),
        })
    }

    pub fn expand(ctx: &NavContext<'_>) -> Option<Intent> {
        let (tree, item) = ctx.highlighted_item()?;
        item.is_folder().then(|| Intent::OpenFolder {
            id: item.id.clone(),
            parent_id: tree.parent.id.clone(),
        })
    }

    /// Without a highlight, the first item of the deepest list is opened
    pub fn open(ctx: &NavContext<'_>) -> Option<Intent> {
        let (index, tree) = ctx.last_pane()?;
        let highlighted = ctx.lists.highlighted(index).unwrap_or(0);
        let item = tree.child(highlighted)?;
        Some(Intent::OpenBookmarks {
            ids: vec![item.id.clone()],
            options: OpenOptions::current_tab(),
        })
    }

    pub fn context_menu(ctx: &NavContext<'_>) -> Option<Intent> {
        let (_, item) = ctx.highlighted_item()?;
        Some(Intent::OpenMenu {
            id: item.id.clone(),
            at: ctx.coordinates,
        })
    }

    pub fn highlight_prev(ctx: &NavContext<'_>) -> Option<Intent> {
        let index = ctx.lists.last_list_index()?;
        ctx.lists.prev_index(index).map(|item_index| Intent::Highlight {
            list_index: index,
            item_index,
        })
    }

    pub fn highlight_next(ctx: &NavContext<'_>) -> Option<Intent> {
        let index = ctx.lists.last_list_index()?;
        ctx.lists.next_index(index).map(|item_index| Intent::Highlight {
            list_index: index,
            item_index,
        })
    }
}
