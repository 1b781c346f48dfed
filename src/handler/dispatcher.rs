//! Key binding table
//!
//! Handlers are registered per `(chord, window)` pair. Registration hands
//! back a [`KeyBinding`] guard; the handler stays bound exactly as long as
//! the guard lives, so a torn-down component cannot leave a handler behind.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use super::intent::Intent;
use super::key::KeyChord;
use super::navigation::NavContext;
use crate::core::{WindowFocusManager, WindowId};

/// A bound key handler
pub type Handler = Box<dyn FnMut(&NavContext<'_>) -> Option<Intent>>;

type BindingKey = (KeyChord, WindowId);

struct Slot {
    id: u64,
    handler: Rc<RefCell<Handler>>,
}

#[derive(Default)]
struct BindingTable {
    next_id: u64,
    slots: HashMap<BindingKey, Vec<Slot>>,
}

impl BindingTable {
    fn insert(&mut self, key: BindingKey, handler: Handler) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.slots.entry(key).or_default().push(Slot {
            id,
            handler: Rc::new(RefCell::new(handler)),
        });
        id
    }

    fn remove(&mut self, key: &BindingKey, id: u64) {
        if let Some(slots) = self.slots.get_mut(key) {
            slots.retain(|slot| slot.id != id);
            if slots.is_empty() {
                self.slots.remove(key);
            }
        }
    }

    fn contains(&self, key: &BindingKey, id: u64) -> bool {
        self.slots
            .get(key)
            .is_some_and(|slots| slots.iter().any(|slot| slot.id == id))
    }

    /// Most recently bound handler for the pair
    fn lookup(&self, chord: &KeyChord, window: &WindowId) -> Option<Rc<RefCell<Handler>>> {
        self.slots
            .get(&(*chord, window.clone()))
            .and_then(|slots| slots.last())
            .map(|slot| Rc::clone(&slot.handler))
    }

    fn len(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }
}

/// Outcome of dispatching one key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// A handler consumed the event, possibly producing an intent
    Handled(Option<Intent>),
    /// Nothing is bound to the key in the active window
    Unhandled,
}

impl Dispatch {
    pub fn is_handled(&self) -> bool {
        matches!(self, Dispatch::Handled(_))
    }

    pub fn into_intent(self) -> Option<Intent> {
        match self {
            Dispatch::Handled(intent) => intent,
            Dispatch::Unhandled => None,
        }
    }
}

/// Routes key chords to the handler bound in the active window
#[derive(Default)]
pub struct KeyBindingDispatcher {
    table: Rc<RefCell<BindingTable>>,
}

impl KeyBindingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` to `chord` inside `window`.
    ///
    /// The handler is unbound when the returned guard is dropped.
    pub fn bind<F>(&self, chord: KeyChord, window: WindowId, handler: F) -> KeyBinding
    where
        F: FnMut(&NavContext<'_>) -> Option<Intent> + 'static,
    {
        log::trace!("bind {} in {}", chord, window);
        let key = (chord, window);
        let id = self.table.borrow_mut().insert(key.clone(), Box::new(handler));
        KeyBinding {
            table: Rc::downgrade(&self.table),
            key,
            id,
        }
    }

    /// Deliver one key chord.
    ///
    /// Only the active window's bindings are considered and at most one
    /// handler runs.
    pub fn dispatch(
        &self,
        chord: &KeyChord,
        focus: &WindowFocusManager,
        ctx: &NavContext<'_>,
    ) -> Dispatch {
        let Some(window) = focus.active() else {
            return Dispatch::Unhandled;
        };

        // Release the table before running the handler so it may drop bindings
        let handler = self.table.borrow().lookup(chord, window);
        let Some(handler) = handler else {
            return Dispatch::Unhandled;
        };

        let mut handler = handler.borrow_mut();
        Dispatch::Handled((&mut **handler)(ctx))
    }

    /// Number of live bindings across all windows
    pub fn binding_count(&self) -> usize {
        self.table.borrow().len()
    }
}

/// Guard for a registered handler; dropping it unbinds the handler
#[must_use = "dropping a KeyBinding unbinds its handler immediately"]
pub struct KeyBinding {
    table: Weak<RefCell<BindingTable>>,
    key: BindingKey,
    id: u64,
}

impl KeyBinding {
    pub fn chord(&self) -> &KeyChord {
        &self.key.0
    }

    pub fn window(&self) -> &WindowId {
        &self.key.1
    }

    /// Whether the handler is still registered with a live dispatcher
    pub fn is_bound(&self) -> bool {
        let Some(table) = self.table.upgrade() else {
            return false;
        };
        let bound = table.borrow().contains(&self.key, self.id);
        bound
    }

    /// Unbind now; same as dropping the guard
    pub fn release(self) {}
}

impl Drop for KeyBinding {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            log::trace!("unbind {} in {}", self.key.0, self.key.1);
            table.borrow_mut().remove(&self.key, self.id);
        }
    }
}

impl std::fmt::Debug for KeyBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyBinding")
            .field("chord", &self.key.0)
            .field("window", &self.key.1)
            .field("id", &self.id)
            .finish()
    }
}
