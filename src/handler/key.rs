//! Key chords and platform key naming
//!
//! Raw crossterm events are folded into [`KeyChord`]s so that bindings can
//! be looked up by equality, and so the keymap file can spell them as
//! `ctrl+enter`, `down` or `G`.

use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode};
use serde::Deserialize;

use crate::error::{NavError, Result};

/// Modifier flags that take part in matching
const CHORD_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::ALT)
    .union(KeyModifiers::SHIFT);

/// A key plus the modifiers held with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyChord {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Chord without modifiers
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Normalise a terminal key event.
    ///
    /// Release events yield `None`.
    pub fn from_event(event: &KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        let mut modifiers = event.modifiers & CHORD_MODIFIERS;
        let code = match event.code {
            KeyCode::Modifier(key) => return Some(Self::plain(KeyCode::Modifier(fold(key)))),
            KeyCode::BackTab => {
                modifiers |= KeyModifiers::SHIFT;
                KeyCode::Tab
            }
            KeyCode::Char(c) => {
                // Only keep shift for chars when combined with ctrl/alt
                if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                    modifiers.remove(KeyModifiers::SHIFT);
                }
                KeyCode::Char(c)
            }
            code => code,
        };

        Some(Self::new(code, modifiers))
    }

    /// Parse a keymap string such as `ctrl+p`, `shift+tab` or `menu`
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let (prefix, key) = if s == "+" {
            ("", "+")
        } else if let Some(prefix) = s.strip_suffix("++") {
            (prefix, "+")
        } else {
            s.rsplit_once('+').unwrap_or(("", s))
        };

        if key.is_empty() {
            return Err(NavError::keymap(s, "missing key name"));
        }

        let mut modifiers = KeyModifiers::NONE;
        for part in prefix.split('+').filter(|p| !p.is_empty()) {
            modifiers |= match part.to_ascii_lowercase().as_str() {
                "ctrl" => KeyModifiers::CONTROL,
                "alt" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                other => {
                    return Err(NavError::keymap(s, format!("unknown modifier `{}`", other)));
                }
            };
        }

        let code = parse_key_name(key).ok_or_else(|| NavError::keymap(s, "unknown key name"))?;
        // Terminal events never carry shift on a plain character
        if matches!(code, KeyCode::Char(_)) && modifiers == KeyModifiers::SHIFT {
            return Err(NavError::keymap(
                s,
                "shift never applies to a plain character; write the shifted character",
            ));
        }
        Ok(Self::new(code, modifiers))
    }
}

impl FromStr for KeyChord {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<KeyCode> for KeyChord {
    fn from(code: KeyCode) -> Self {
        Self::plain(code)
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            f.write_str("ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            f.write_str("alt+")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            f.write_str("shift+")?;
        }

        match self.code {
            KeyCode::Char(' ') => f.write_str("space"),
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::F(n) => write!(f, "f{}", n),
            code => f.write_str(key_name(code).unwrap_or("unknown")),
        }
    }
}

fn fold(key: ModifierKeyCode) -> ModifierKeyCode {
    match key {
        ModifierKeyCode::RightControl => ModifierKeyCode::LeftControl,
        ModifierKeyCode::RightShift => ModifierKeyCode::LeftShift,
        ModifierKeyCode::RightAlt => ModifierKeyCode::LeftAlt,
        ModifierKeyCode::RightSuper => ModifierKeyCode::LeftSuper,
        ModifierKeyCode::RightHyper => ModifierKeyCode::LeftHyper,
        ModifierKeyCode::RightMeta => ModifierKeyCode::LeftMeta,
        other => other,
    }
}

fn key_name(code: KeyCode) -> Option<&'static str> {
    let name = match code {
        KeyCode::Backspace => "backspace",
        KeyCode::Enter => "enter",
        KeyCode::Left => "left",
        KeyCode::Right => "right",
        KeyCode::Up => "up",
        KeyCode::Down => "down",
        KeyCode::Home => "home",
        KeyCode::End => "end",
        KeyCode::PageUp => "pageup",
        KeyCode::PageDown => "pagedown",
        KeyCode::Tab => "tab",
        KeyCode::Delete => "delete",
        KeyCode::Insert => "insert",
        KeyCode::Esc => "esc",
        KeyCode::Menu => "menu",
        KeyCode::Modifier(ModifierKeyCode::LeftControl) => "control",
        KeyCode::Modifier(ModifierKeyCode::LeftShift) => "shift",
        KeyCode::Modifier(ModifierKeyCode::LeftAlt) => "alt",
        KeyCode::Modifier(ModifierKeyCode::LeftSuper) => "super",
        KeyCode::Modifier(ModifierKeyCode::LeftMeta) => "meta",
        _ => return None,
    };
    Some(name)
}

fn parse_key_name(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }

    let lower = name.to_ascii_lowercase();
    let code = match lower.as_str() {
        "backspace" => KeyCode::Backspace,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "tab" => KeyCode::Tab,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "esc" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "menu" => KeyCode::Menu,
        "control" => KeyCode::Modifier(ModifierKeyCode::LeftControl),
        "shift" => KeyCode::Modifier(ModifierKeyCode::LeftShift),
        "alt" => KeyCode::Modifier(ModifierKeyCode::LeftAlt),
        "super" => KeyCode::Modifier(ModifierKeyCode::LeftSuper),
        "meta" => KeyCode::Modifier(ModifierKeyCode::LeftMeta),
        f => {
            let n: u8 = f.strip_prefix('f')?.parse().ok()?;
            if !(1..=12).contains(&n) {
                return None;
            }
            KeyCode::F(n)
        }
    };
    Some(code)
}

/// Host platform, as far as key naming is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// No dedicated context-menu key; Control opens the menu
    Mac,
    /// Keyboards with a Menu key
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Mac
        } else {
            Platform::Other
        }
    }

    /// Chord that opens the context menu on this platform
    pub fn context_menu_chord(self) -> KeyChord {
        match self {
            Platform::Mac => KeyChord::plain(KeyCode::Modifier(ModifierKeyCode::LeftControl)),
            Platform::Other => KeyChord::plain(KeyCode::Menu),
        }
    }
}

/// Configured context-menu key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextMenuKey {
    /// Follow the host platform
    #[default]
    Auto,
    Menu,
    Control,
}

impl ContextMenuKey {
    pub fn platform(self) -> Platform {
        match self {
            ContextMenuKey::Auto => Platform::current(),
            ContextMenuKey::Menu => Platform::Other,
            ContextMenuKey::Control => Platform::Mac,
        }
    }
}
