use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use crate::error::RenameResult;
use crate::rename_engine::{RenameEngine, RunSummary};

use super::app::App;
use super::models::AppAction;
use super::rendering::ui;

/// Shows the plan held by `engine` and renames the files once the user
/// confirms. Quitting before that leaves the filesystem untouched.
pub fn review(engine: &RenameEngine) -> RenameResult<RunSummary> {
    enable_raw_mode()?;
    let guard = RestoreGuard::new(restore_terminal);
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(engine.plan());
    let res = run_app(&mut terminal, &mut app, engine);

    guard.finish()?;
    terminal.show_cursor()?;

    res?;
    if !app.finished {
        info!("Review cancelled, nothing renamed");
    }
    match app.apply_error.take() {
        Some(err) => Err(err),
        None => Ok(app.summary()),
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// Runs `restore` once: through `finish`, or on drop when setup bails out
/// early with `?`.
struct RestoreGuard<F: FnOnce() -> io::Result<()>> {
    restore: Option<F>,
}

impl<F: FnOnce() -> io::Result<()>> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }

    fn finish(mut self) -> io::Result<()> {
        match self.restore.take() {
            Some(restore) => restore(),
            None => Ok(()),
        }
    }
}

impl<F: FnOnce() -> io::Result<()>> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            if let Err(e) = restore() {
                debug!("Failed to restore terminal: {}", e);
            }
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    engine: &RenameEngine,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.handle_key(key.code) {
            AppAction::Quit => return Ok(()),
            AppAction::Apply => app.process_files(engine),
            AppAction::None => {}
        }
    }
}
