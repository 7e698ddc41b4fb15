//! Terminal UI for CitySift

pub mod app;
pub mod colors;
pub mod search;
pub mod table;
pub mod ui;

use crate::dataset::Dataset;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;

/// Run the interactive screen until the user quits.
///
/// The terminal is restored on every exit path, including errors out
/// of the event loop.
pub fn run(cities: Dataset) -> crate::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = app::App::new(cities);
    let result = app.run(&mut terminal);

    let _ = disable_raw_mode();
    let _ = terminal.backend_mut().execute(LeaveAlternateScreen);

    result
}
