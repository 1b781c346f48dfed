//! Application configuration from CLI arguments

use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use super::config_file::ConfigFile;
use crate::handler::ContextMenuKey;

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliRequest {
    /// Open the popup
    Run,
    /// Print usage and exit
    Help,
    /// Print version and exit
    Version,
}

/// Application configuration from CLI args and config file
#[derive(Debug)]
pub struct Config {
    pub request: CliRequest,
    /// Bookmarks API export (JSON)
    pub bookmarks: PathBuf,
    /// Folder shown in the first pane
    pub root_id: Option<String>,
    /// Keys to replay instead of reading the terminal
    pub keys: Option<Vec<String>>,
    /// Which key opens the context menu (from config file)
    pub context_menu_key: ContextMenuKey,
    /// Log level (from config file)
    pub log_level: LevelFilter,
    /// Log file (from config file or --log-file)
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_args() -> anyhow::Result<Self> {
        Self::parse(env::args().skip(1))
    }

    /// Parse arguments (without the program name)
    pub fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut request = CliRequest::Run;
        let mut bookmarks: Option<PathBuf> = None;
        let mut root_id: Option<String> = None;
        let mut keys: Option<Vec<String>> = None;
        let mut config_path: Option<PathBuf> = None;
        let mut log_file: Option<PathBuf> = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bookmarks" | "-b" => {
                    if let Some(path) = args.next() {
                        bookmarks = Some(PathBuf::from(path));
                    } else {
                        anyhow::bail!("--bookmarks requires a file path");
                    }
                }
                "--root" | "-r" => {
                    if let Some(id) = args.next() {
                        root_id = Some(id);
                    } else {
                        anyhow::bail!("--root requires a folder id");
                    }
                }
                "--keys" | "-k" => {
                    if let Some(list) = args.next() {
                        keys = Some(split_keys(&list));
                    } else {
                        anyhow::bail!("--keys requires a comma-separated key list");
                    }
                }
                "--config" | "-c" => {
                    if let Some(path) = args.next() {
                        config_path = Some(PathBuf::from(path));
                    } else {
                        anyhow::bail!("--config requires a file path");
                    }
                }
                "--log-file" => {
                    if let Some(path) = args.next() {
                        log_file = Some(PathBuf::from(path));
                    } else {
                        anyhow::bail!("--log-file requires a file path");
                    }
                }
                "--help" | "-h" => request = CliRequest::Help,
                "--version" | "-V" => request = CliRequest::Version,
                other => {
                    anyhow::bail!(
                        "Unknown option: {}. Use --help for usage information.",
                        other
                    );
                }
            }
        }

        if request != CliRequest::Run {
            return Ok(Self::informational(request));
        }

        let config_file = match config_path {
            Some(path) => ConfigFile::load_from(&path)?,
            None => ConfigFile::load(),
        };

        let Some(bookmarks) = bookmarks else {
            anyhow::bail!("--bookmarks is required. Use --help for usage information.");
        };

        Ok(Self {
            request,
            bookmarks,
            root_id: root_id.or(config_file.general.root_id.clone()),
            keys,
            context_menu_key: config_file.keyboard.context_menu_key,
            log_level: config_file.logging.level_filter()?,
            log_file: log_file.or(config_file.logging.file),
        })
    }

    fn informational(request: CliRequest) -> Self {
        Self {
            request,
            bookmarks: PathBuf::new(),
            root_id: None,
            keys: None,
            context_menu_key: ContextMenuKey::default(),
            log_level: LevelFilter::Off,
            log_file: None,
        }
    }
}

/// Split `down, down,enter` into keymap strings; `,` alone is a key
fn split_keys(list: &str) -> Vec<String> {
    let mut keys = Vec::new();
    let mut current = String::new();
    for c in list.chars() {
        if c == ',' && !current.trim().is_empty() {
            keys.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(c);
        }
    }
    if !current.trim().is_empty() {
        keys.push(current.trim().to_string());
    }
    keys
}

pub fn print_help() {
    println!(
        r#"pmb - Popup my Bookmarks: keyboard navigation for bookmark panes

USAGE:
    pmb --bookmarks FILE [OPTIONS]

OPTIONS:
    -b, --bookmarks FILE  Bookmarks API export (JSON tree)
    -r, --root ID         Folder shown in the first pane (default: bookmarks bar)
    -k, --keys LIST       Replay comma-separated keys and print intents, no terminal
    -c, --config FILE     Read configuration from FILE
    --log-file FILE       Write JSON-lines logs to FILE
    -h, --help            Show this help message
    -V, --version         Show version

CONFIG FILE:
    ~/.config/bookmark-nav/config.toml    Main configuration file
    ~/.config/bookmark-nav/keymap.toml    Key bindings (customizable)

KEYBINDINGS:
    ↑/↓         Highlight previous / next item
    →           Open highlighted folder as a new pane
    ←           Close the deepest pane
    Enter       Open highlighted bookmark (first one if none) and close
    Menu        Context menu (Control on macOS)
    q/Esc       Quit"#
    );
}
