mod app;
mod config;
mod error;
mod events;
mod log;
mod select;
mod tui;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;

use app::App;
use config::Config;
use events::EventHandler;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_override: Option<std::path::PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_override = Some(std::path::PathBuf::from(&args[i + 1]));
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: --config requires a path argument");
                    i += 1;
                }
            }
            _ => {
                eprintln!("Warning: ignoring unknown argument '{}'", args[i]);
                i += 1;
            }
        }
    }

    // An explicit --config path must load; the default path falls back to
    // the built-in demo fields.
    let config = match config_override {
        Some(path) => Config::from_path(&path)?,
        None => Config::load(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(&config);

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        let Some(event) = event_stream.next().await else {
            break;
        };

        // Gestures resolve fully, in arrival order; the next event is not
        // read until this one is applied.
        let action = EventHandler::handle_event(app, &event?);
        app.apply(action);

        if app.should_quit {
            log::log_event("quit");
            break;
        }
    }

    Ok(())
}
