//! taskpad binary entry point.
//!
//! # Responsibility
//! - Bootstrap logging and the database, then run the synchronous event
//!   loop until the user exits.
//!
//! # Invariants
//! - One connection is opened at startup, held for the process lifetime,
//!   and closed explicitly on clean exit.
//! - Logs go to rotating files, never to the terminal the TUI owns.

mod app;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::info;
use std::path::PathBuf;
use std::time::Duration;
use taskpad_core::db::open_db;
use taskpad_core::{default_log_level, init_logging, SqliteTaskRepository, TaskList,
    TaskRepository};

use crate::app::App;
use crate::terminal::TerminalGuard;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);

fn main() -> Result<()> {
    let data_dir = data_dir()?;
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

    let log_dir = data_dir.join("logs");
    let log_dir = log_dir
        .to_str()
        .context("data directory path is not valid UTF-8")?;
    init_logging(default_log_level(), log_dir).map_err(anyhow::Error::msg)?;

    let conn = open_db(data_dir.join("taskpad.db"))?;
    {
        let tasks = TaskList::load(SqliteTaskRepository::new(&conn))?;
        let mut app = App::new(tasks);
        run(&mut app)?;
    }

    // Flush pending writes and release the handle on clean exit.
    conn.close().map_err(|(_conn, err)| err)?;
    info!("event=app_exit module=tui status=ok");
    Ok(())
}

fn run<R: TaskRepository>(app: &mut App<R>) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;

    while !app.should_quit() {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(INPUT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key)?;
            }
        }
    }

    Ok(())
}

fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("no platform data directory available")?;
    Ok(base.join("taskpad"))
}
