//! Keymap configuration and registry
//!
//! Loads key bindings from `~/.config/bookmark-nav/keymap.toml`:
//!
//! ```toml
//! [base-window]
//! "j" = "highlight_next"
//! "k" = "highlight_prev"
//! "contextmenu" = "context_menu"
//! "enter" = "none"
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::key::{KeyChord, Platform};
use super::navigation::NavCommand;
use crate::app::ConfigFile;
use crate::core::{WindowId, BASE_WINDOW};
use crate::error::{NavError, Result};

/// Key name that stands for the platform's context-menu key
const CONTEXT_MENU_KEY: &str = "contextmenu";
/// Command name that removes a default binding
const UNBOUND: &str = "none";

/// Keymap file structure: window id -> key string -> command name
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct KeymapFile {
    pub windows: HashMap<String, HashMap<String, String>>,
}

impl KeymapFile {
    /// Get the keymap file path (~/.config/bookmark-nav/keymap.toml)
    pub fn keymap_path() -> Option<PathBuf> {
        ConfigFile::config_dir().map(|p| p.join("keymap.toml"))
    }

    /// Load keymap from the default location, empty if missing or invalid
    pub fn load() -> Self {
        Self::keymap_path()
            .filter(|path| path.exists())
            .and_then(|path| match Self::load_from(&path) {
                Ok(keymap) => Some(keymap),
                Err(e) => {
                    log::warn!("ignoring keymap {}: {}", path.display(), e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Load keymap from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| NavError::config(e.to_string()))
    }
}

/// Resolved bindings per window
#[derive(Debug, Clone)]
pub struct Keymap {
    platform: Platform,
    windows: HashMap<WindowId, HashMap<KeyChord, NavCommand>>,
}

impl Keymap {
    /// Create a keymap with the default bindings
    pub fn new(platform: Platform) -> Self {
        let mut keymap = Self {
            platform,
            windows: HashMap::new(),
        };
        keymap.load_defaults();
        keymap
    }

    /// Defaults merged with the user's keymap file
    pub fn from_file(platform: Platform) -> Self {
        let mut keymap = Self::new(platform);
        for err in keymap.merge(KeymapFile::load()) {
            log::warn!("{}", err);
        }
        keymap
    }

    fn load_defaults(&mut self) {
        use crossterm::event::KeyCode;

        let context_menu = self.platform.context_menu_chord();
        let base = self.windows.entry(BASE_WINDOW).or_default();
        base.insert(KeyChord::plain(KeyCode::Left), NavCommand::Collapse);
        base.insert(KeyChord::plain(KeyCode::Right), NavCommand::Expand);
        base.insert(KeyChord::plain(KeyCode::Enter), NavCommand::Open);
        base.insert(KeyChord::plain(KeyCode::Up), NavCommand::HighlightPrev);
        base.insert(KeyChord::plain(KeyCode::Down), NavCommand::HighlightNext);
        base.insert(context_menu, NavCommand::ContextMenu);
    }

    /// Merge user bindings over the current ones.
    ///
    /// Bad entries are skipped and returned so the caller can report them.
    pub fn merge(&mut self, file: KeymapFile) -> Vec<NavError> {
        let mut errors = Vec::new();

        for (window, bindings) in file.windows {
            let window = WindowId::new(window);
            for (key, command) in bindings {
                let chord = match self.parse_key(&key) {
                    Ok(chord) => chord,
                    Err(e) => {
                        errors.push(e);
                        continue;
                    }
                };

                let table = self.windows.entry(window.clone()).or_default();
                if command == UNBOUND {
                    table.remove(&chord);
                    continue;
                }
                match NavCommand::parse(&command) {
                    Some(command) => {
                        table.insert(chord, command);
                    }
                    None => errors.push(NavError::keymap(
                        key,
                        format!("unknown command `{}`", command),
                    )),
                }
            }
        }

        errors
    }

    fn parse_key(&self, key: &str) -> Result<KeyChord> {
        if key.eq_ignore_ascii_case(CONTEXT_MENU_KEY) {
            Ok(self.platform.context_menu_chord())
        } else {
            KeyChord::parse(key)
        }
    }

    /// Look up the command bound to a chord in a window
    pub fn lookup(&self, window: &WindowId, chord: &KeyChord) -> Option<NavCommand> {
        self.windows.get(window)?.get(chord).copied()
    }

    /// Every binding, for registering with a dispatcher
    pub fn bindings(&self) -> impl Iterator<Item = (&WindowId, &KeyChord, NavCommand)> + '_ {
        self.windows.iter().flat_map(|(window, table)| {
            table
                .iter()
                .map(move |(chord, command)| (window, chord, *command))
        })
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }
}
