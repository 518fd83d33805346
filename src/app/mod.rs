//! TUI Application module

pub mod animation;
pub mod async_ops;
mod events;
pub mod loader;
pub mod state;
mod ui;

pub use loader::{Loader, RemoteData, RetryUi};
pub use state::{AppState, Mode, Screen};

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::runtime::Runtime;

use crate::api::ApiClient;
use crate::config::Config;
use crate::demo;

use async_ops::{FetchCommand, FetchEvent, WorkerHandle, spawn_worker};

/// Run the TUI application
pub fn run() -> Result<()> {
    // Create tokio runtime
    let rt = Runtime::new()?;

    // Load config
    let config = Config::load()?;

    // Spawn async worker
    let api = ApiClient::new(&config.base_url);
    let async_handle = rt.block_on(async { spawn_worker(api) });

    // Query terminal graphics support before entering raw mode
    if config.show_images {
        crate::images::init_picker();
    }

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Create app state; the list screen mounts loading
    let mut state = AppState::new(config);
    let _ = async_handle.cmd_tx.blocking_send(state.initial_fetch());

    // Main loop
    let result = run_app(&mut terminal, &mut state, async_handle);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    state: &mut AppState,
    mut async_handle: WorkerHandle,
) -> Result<()> {
    let tick = Duration::from_millis(state.config.tick_rate_ms);

    loop {
        // Process any settled fetches
        while let Ok(fetch_event) = async_handle.event_rx.try_recv() {
            state.apply(fetch_event);
        }

        // Draw UI
        terminal.draw(|frame| ui::render(frame, state))?;

        // Handle events
        if event::poll(tick)?
            && let Event::Key(key) = event::read()?
            && let Some(cmd) = events::handle_key(state, key)
        {
            let _ = async_handle.cmd_tx.blocking_send(cmd);
        }

        // Queue image loading for the item on screen
        let wanted = state.images_to_queue();
        if !wanted.is_empty() {
            state.mark_images_loading(&wanted);
            for path in wanted {
                let _ = async_handle
                    .cmd_tx
                    .blocking_send(FetchCommand::Image { path });
            }
        }

        if state.should_quit {
            // Shutdown async worker
            let _ = async_handle.cmd_tx.blocking_send(FetchCommand::Shutdown);
            break;
        }
    }

    Ok(())
}

/// Run the TUI in demo mode with canned data (for screenshots)
pub fn run_demo() -> Result<()> {
    // Load config
    let config = Config::load()?;

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Create app state with demo data already loaded
    let mut state = AppState::new(config);
    state.preload_list(demo::demo_category());
    state.set_status("Demo mode | Press ? for help | q to quit");

    let tick = Duration::from_millis(state.config.tick_rate_ms);

    // Main loop (no worker; fetches resolve locally from demo data)
    loop {
        terminal.draw(|frame| ui::render(frame, &mut state))?;

        if event::poll(tick)?
            && let Event::Key(key) = event::read()?
            && let Some(cmd) = events::handle_key(&mut state, key)
        {
            resolve_from_demo(&mut state, cmd);
        }

        if state.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Answer a fetch command from the canned demo data, exercising the same
/// state transitions the worker would drive.
fn resolve_from_demo(state: &mut AppState, cmd: FetchCommand) {
    match cmd {
        FetchCommand::Items { request } => state.apply(FetchEvent::Items {
            request,
            result: Ok(demo::demo_category()),
        }),
        FetchCommand::Text { id, request } => state.apply(FetchEvent::Text {
            request,
            result: Ok(demo::demo_text(&id)),
        }),
        FetchCommand::Image { .. } | FetchCommand::Shutdown => {}
    }
}
