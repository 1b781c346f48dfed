//! pmb - Popup my Bookmarks keyboard navigation driver

use std::io::{self, stdout, Write};
use std::process::ExitCode;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use bookmark_nav::app::{
    exit_code, init_logging, print_help, run_interactive, run_replay, CliRequest, Config, Popup,
};
use bookmark_nav::handler::Keymap;
use bookmark_nav::tree::BookmarkSource;

fn main() -> ExitCode {
    // Parse config first to return INVALID exit code for argument errors
    let config = match Config::from_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::INVALID as u8);
        }
    };

    match config.request {
        CliRequest::Help => {
            print_help();
            return ExitCode::SUCCESS;
        }
        CliRequest::Version => {
            println!("pmb {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        CliRequest::Run => {}
    }

    if let Err(e) = init_logging(config.log_file.as_deref(), config.log_level) {
        eprintln!("Error: {}", e);
        return ExitCode::from(exit_code::ERROR as u8);
    }

    let code = match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    };
    // The installed logger lives until exit and is never dropped
    log::logger().flush();
    code
}

fn run(config: Config) -> anyhow::Result<()> {
    let source = BookmarkSource::load(&config.bookmarks)?;
    let keymap = Keymap::from_file(config.context_menu_key.platform());
    let mut popup = Popup::open(source, config.root_id.as_deref(), &keymap)?;

    match &config.keys {
        Some(keys) => {
            let mut out = io::stdout().lock();
            run_replay(&mut popup, keys, &mut out)?;
            out.flush()?;
            Ok(())
        }
        None => run_terminal(&mut popup),
    }
}

fn run_terminal(popup: &mut Popup) -> anyhow::Result<()> {
    // Menu and lone modifier keys are only reported with enhanced keyboard flags
    let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);

    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
            )
        )?;
    }

    let result = run_interactive(popup, &mut stdout);

    // Restore terminal
    if enhanced {
        execute!(stdout, PopKeyboardEnhancementFlags)?;
    }
    terminal::disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, cursor::Show)?;

    if let Some(intent) = result? {
        println!("{}", serde_json::to_string(&intent)?);
    }
    Ok(())
}
