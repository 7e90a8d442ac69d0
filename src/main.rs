use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::time::Duration;

mod app;
mod config;
mod error;
mod form;
mod notification;
mod results;
mod search;

use app::App;
use error::TherafindError;
use search::client::SearchClient;
use search::search_state::SearchState;

/// Terminal search client for companion diagnostics data
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Search a companion-diagnostics and precision-medicine dataset from the terminal"
)]
struct Args {
    /// Search service base URL (overrides the config file)
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> Result<()> {
    // Writes to /tmp/therafind-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/therafind-debug.log")
            .expect("Failed to open /tmp/therafind-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== THERAFIND DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    // CLI flag wins over the config file; the client itself only ever sees
    // an explicit base URL
    let base_url = args
        .api_url
        .unwrap_or_else(|| config_result.config.api.base_url.clone());
    validate_api_url(&base_url)?;

    let client = SearchClient::new(
        &base_url,
        Duration::from_secs(config_result.config.api.timeout_secs),
    );

    let terminal = init_terminal()?;

    let search = SearchState::new(client);
    let mut app = App::new(&config_result.config, search);
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    let result = run(terminal, app);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== THERAFIND DEBUG SESSION ENDED ===");

    Ok(())
}

/// Validate that the base URL looks like an http(s) origin
fn validate_api_url(url: &str) -> Result<(), TherafindError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(TherafindError::InvalidApiUrl(url.to_string()))
    }
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        // Poll before render so settled searches appear this frame
        app.poll_search();

        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
