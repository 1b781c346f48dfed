//! Application module
//!
//! Configuration, logging and the terminal driver for the `pmb` binary.

mod config;
mod config_file;
mod event_loop;
mod logger;
mod render;

pub use config::{print_help, CliRequest, Config};
pub use config_file::{ConfigFile, GeneralConfig, KeyboardConfig, LoggingConfig};
pub use event_loop::{run_interactive, run_replay, Popup};
pub use logger::{init as init_logging, JsonFileLogger};
pub use render::breadcrumb;

/// Process exit codes
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const ERROR: i32 = 1;
    pub const INVALID: i32 = 2;
}
