//! Popup session - one navigation controller per open popup
//!
//! The session owns the focus windows, the list registry and the binding
//! table, and passes them explicitly to the handlers it registers.

use crossterm::event::KeyEvent;

use super::dispatcher::{Dispatch, KeyBinding, KeyBindingDispatcher};
use super::intent::{Coordinates, Intent};
use super::key::KeyChord;
use super::keymap::Keymap;
use super::navigation::{NavContext, NavigationController};
use crate::core::{ListRegistry, WindowFocusManager, WindowId, BASE_WINDOW};
use crate::tree::BookmarkTree;

pub struct PopupSession {
    focus: WindowFocusManager,
    lists: ListRegistry,
    /// Folder id shown by each registered list
    pane_ids: Vec<String>,
    coordinates: Coordinates,
    /// Keymap bindings, released with the session
    bindings: Vec<KeyBinding>,
    dispatcher: KeyBindingDispatcher,
}

impl PopupSession {
    /// Open a session with the base window active and the keymap bound
    pub fn new(keymap: &Keymap) -> Self {
        let dispatcher = KeyBindingDispatcher::new();
        let bindings = keymap
            .bindings()
            .map(|(window, chord, command)| {
                dispatcher.bind(*chord, window.clone(), move |ctx| {
                    NavigationController::run(command, ctx)
                })
            })
            .collect();

        let mut focus = WindowFocusManager::new();
        focus.activate(BASE_WINDOW);

        Self {
            focus,
            lists: ListRegistry::new(),
            pane_ids: Vec::new(),
            coordinates: Coordinates::default(),
            bindings,
            dispatcher,
        }
    }

    /// Route a terminal key event to the active window
    pub fn handle_key(&mut self, event: &KeyEvent, trees: &[BookmarkTree]) -> Dispatch {
        match KeyChord::from_event(event) {
            Some(chord) => self.handle_chord(&chord, trees),
            None => Dispatch::Unhandled,
        }
    }

    pub fn handle_chord(&mut self, chord: &KeyChord, trees: &[BookmarkTree]) -> Dispatch {
        let ctx = NavContext::new(trees, &self.lists, self.coordinates);
        let result = self.dispatcher.dispatch(chord, &self.focus, &ctx);
        if let Dispatch::Handled(Some(Intent::Highlight {
            list_index,
            item_index,
        })) = &result
        {
            self.apply_highlight(*list_index, *item_index);
        }
        result
    }

    /// Register every pane's list and forget lists of removed panes.
    ///
    /// A list whose pane now shows a different folder starts over without
    /// a highlight.
    pub fn sync_lists(&mut self, trees: &[BookmarkTree]) {
        self.lists.retain_lists(trees.len());
        for (index, tree) in trees.iter().enumerate() {
            if self
                .pane_ids
                .get(index)
                .is_some_and(|id| *id != tree.parent.id)
            {
                self.lists.unregister_list(index);
            }
            self.lists.register_list(index, tree.children.len());
        }
        self.pane_ids = trees.iter().map(|tree| tree.parent.id.clone()).collect();
    }

    /// Drop every list and highlight, then register `trees` from scratch
    pub fn reset_lists(&mut self, trees: &[BookmarkTree]) {
        self.lists.clear();
        self.pane_ids.clear();
        self.sync_lists(trees);
    }

    pub fn apply_highlight(&mut self, list_index: usize, item_index: usize) -> bool {
        self.lists.set_highlighted(list_index, Some(item_index))
    }

    /// Remember where the highlighted item is, for context menus
    pub fn set_coordinates(&mut self, coordinates: Coordinates) {
        self.coordinates = coordinates;
    }

    /// Layer a transient window over the current one
    pub fn enter_window(&mut self, window: WindowId) {
        self.focus.activate(window);
    }

    pub fn leave_window(&mut self, window: &WindowId) {
        self.focus.deactivate(window);
    }

    /// Bind an extra handler, e.g. for a transient window
    pub fn bind<F>(&self, chord: KeyChord, window: WindowId, handler: F) -> KeyBinding
    where
        F: FnMut(&NavContext<'_>) -> Option<Intent> + 'static,
    {
        self.dispatcher.bind(chord, window, handler)
    }

    pub fn lists(&self) -> &ListRegistry {
        &self.lists
    }

    pub fn focus(&self) -> &WindowFocusManager {
        &self.focus
    }

    pub fn binding_count(&self) -> usize {
        self.dispatcher.binding_count()
    }

    /// Number of keymap bindings this session registered itself
    pub fn keymap_binding_count(&self) -> usize {
        self.bindings.len()
    }
}
