//! Popup driver: key events in, intents out

use std::io::Write;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use super::render::render_frame;
use crate::error::{NavError, Result};
use crate::handler::{Dispatch, Intent, KeyChord, Keymap, PopupSession};
use crate::tree::{Applied, BookmarkSource, BookmarkTree, PaneStack};

/// A popup session over a bookmark source
pub struct Popup {
    source: BookmarkSource,
    panes: PaneStack,
    session: PopupSession,
}

impl Popup {
    /// Open the popup on `root_id`, or on the source's default folder
    pub fn open(source: BookmarkSource, root_id: Option<&str>, keymap: &Keymap) -> Result<Self> {
        let root_id = root_id.unwrap_or(source.default_root_id()).to_string();
        let tree = source.tree(&root_id).ok_or_else(|| {
            NavError::bookmarks(format!("`{}` is not a bookmark folder", root_id))
        })?;

        let panes = PaneStack::new(tree);
        let mut session = PopupSession::new(keymap);
        session.sync_lists(panes.trees());
        log::info!("popup opened on folder {}", root_id);

        Ok(Self {
            source,
            panes,
            session,
        })
    }

    /// Dispatch one chord and apply the resulting intent to the panes
    pub fn press(&mut self, chord: &KeyChord) -> Dispatch {
        let result = self.session.handle_chord(chord, self.panes.trees());
        if let Dispatch::Handled(Some(intent)) = &result {
            if let Applied::Panes(_) = self.panes.apply(intent, &self.source) {
                self.session.sync_lists(self.panes.trees());
            }
        }
        result
    }

    pub fn press_key(&mut self, event: &KeyEvent) -> Dispatch {
        match KeyChord::from_event(event) {
            Some(chord) => self.press(&chord),
            None => Dispatch::Unhandled,
        }
    }

    /// Replace every pane, e.g. after the host reloads its bookmarks.
    ///
    /// Highlights start over. An empty stack is refused.
    pub fn replace_panes(&mut self, trees: Vec<BookmarkTree>) -> bool {
        if trees.is_empty() {
            return false;
        }
        self.panes.set_trees(trees);
        self.session.reset_lists(self.panes.trees());
        log::debug!("panes replaced, {} open", self.panes.len());
        true
    }

    pub fn panes(&self) -> &PaneStack {
        &self.panes
    }

    pub fn session(&self) -> &PopupSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut PopupSession {
        &mut self.session
    }

    pub fn source(&self) -> &BookmarkSource {
        &self.source
    }
}

/// Replay keymap strings, writing each intent as a JSON line.
///
/// Stops after an intent that closes the popup.
pub fn run_replay<W: Write>(popup: &mut Popup, keys: &[String], out: &mut W) -> anyhow::Result<()> {
    for key in keys {
        let chord = KeyChord::parse(key)?;
        if let Some(intent) = popup.press(&chord).into_intent() {
            writeln!(out, "{}", serde_json::to_string(&intent)?)?;
            if intent.closes_popup() {
                break;
            }
        }
    }
    Ok(())
}

fn is_quit_key(key: &KeyEvent) -> bool {
    key.kind != KeyEventKind::Release && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
}

/// Interactive loop on an already prepared terminal.
///
/// Returns the intent that closed the popup, or `None` when the user quit.
pub fn run_interactive<W: Write>(popup: &mut Popup, out: &mut W) -> anyhow::Result<Option<Intent>> {
    let mut status = String::new();

    loop {
        render_frame(out, popup, &status)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };

        match popup.press_key(&key) {
            Dispatch::Handled(Some(intent)) => {
                status = serde_json::to_string(&intent)?;
                if intent.closes_popup() {
                    return Ok(Some(intent));
                }
            }
            Dispatch::Handled(None) => {}
            Dispatch::Unhandled if is_quit_key(&key) => return Ok(None),
            Dispatch::Unhandled => {}
        }
    }
}
