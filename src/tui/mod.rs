//! Terminal frontend: crossterm events in, ratatui frames out.

mod app;
mod layout;
mod render;
mod theme;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use pajamagrams::GameStore;

use app::App;

const FRAME_POLL: Duration = Duration::from_millis(50);

/// Run the game until the player quits.
pub fn run(store: GameStore) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(store);
    let res = run_loop(&mut terminal, &mut app);
    app.shutdown();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(completed = app.store.completed_puzzles(), "Exiting");
    res
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let started = Instant::now();

    while !app.should_quit() {
        let now_ms = started.elapsed().as_millis() as u64;
        app.tick(now_ms);

        terminal.draw(|frame| {
            app.resize(frame.area());
            render::draw(frame, app);
        })?;

        // Wake up in time for the next deferred store operation.
        let timeout = app.store.next_deferred_ms().map_or(FRAME_POLL, |due| {
            FRAME_POLL.min(Duration::from_millis(due.saturating_sub(now_ms)))
        });
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }

    info!("User quit");
    Ok(())
}
