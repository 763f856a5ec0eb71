//! WearShop TUI — a wearable app-store demo in the terminal.
//!
//! Screens:
//! 1. Menu — greeting with a single "show list" action
//! 2. App Cards — scrollable list of 25 demo apps
//! 3. Detail — description plus a download action
//!
//! Esc/Backspace is the swipe-dismiss gesture: it walks the back-stack and
//! exits from the start screen. Download submissions run on a worker
//! thread; their outcomes surface as toasts in the status bar.

mod app;
mod input;
mod persistence;
mod theme;
mod ui;
mod worker;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use wearshop_core::download::InMemoryDownloadService;

use crate::app::AppState;
use crate::worker::WorkerCommand;

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wearshop")
        .join("state.json");

    // Worker channels
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let worker_handle = worker::spawn_worker(Box::new(InMemoryDownloadService::new()), cmd_rx, resp_tx);

    // Build app state and restore the last session's position.
    let mut app = AppState::new(cmd_tx.clone(), resp_rx);
    persistence::apply(&mut app, persistence::load(&state_path));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    let _ = persistence::save(&state_path, &persistence::extract(&app));

    // Shutdown worker
    let _ = cmd_tx.send(WorkerCommand::Shutdown);
    let _ = worker_handle.join();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. The drawn frame completes any in-flight transition; only now
        //    may the next queued navigation request start.
        app.nav.transition_complete();

        // 3. Drain worker responses and dialog notices (non-blocking).
        while let Ok(resp) = app.worker_rx.try_recv() {
            app.handle_worker_response(resp);
        }
        app.drain_notices();
        app.tick();

        // 4. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 5. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
