//! Handler module - Key bindings and keyboard navigation

pub mod dispatcher;
pub mod intent;
pub mod key;
pub mod keymap;
pub mod navigation;
pub mod session;

pub use dispatcher::{Dispatch, Handler, KeyBinding, KeyBindingDispatcher};
pub use intent::{Coordinates, Intent, OpenIn, OpenOptions};
pub use key::{ContextMenuKey, KeyChord, Platform};
pub use keymap::{Keymap, KeymapFile};
pub use navigation::{NavCommand, NavContext, NavigationController};
pub use session::PopupSession;
