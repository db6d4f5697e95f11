//! TUI application state and key handling.
//!
//! # Responsibility
//! - Route key events to the presenter and keep widget state (input field,
//!   list selection, active dialog) consistent with the mirror.
//!
//! # Invariants
//! - Every mutation goes through `TaskList`; this module never touches the
//!   store directly.
//! - The list selection is clamped into range after every mutation.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::widgets::ListState;
use taskpad_core::{DeleteOutcome, SubmitOutcome, TaskList, TaskRepository};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

pub const MSG_EMPTY_FIELD: &str = "Field is empty.";
pub const MSG_NO_SELECTION: &str = "No task selected. Cannot delete.";
pub const MSG_CONFIRM_CLEAR: &str = "Delete all tasks?";

/// Which surface currently receives key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Input field focused, list navigable.
    Normal,
    /// Blocking yes/no dialog before clear-all.
    ConfirmClear,
    /// Blocking informational dialog; any key dismisses it.
    Notice(String),
}

pub struct App<R: TaskRepository> {
    tasks: TaskList<R>,
    pub input: Input,
    pub list_state: ListState,
    pub mode: Mode,
    pub status: String,
    should_quit: bool,
}

impl<R: TaskRepository> App<R> {
    pub fn new(tasks: TaskList<R>) -> Self {
        let mut list_state = ListState::default();
        if !tasks.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            tasks,
            input: Input::default(),
            list_state,
            mode: Mode::Normal,
            status: "Ready".to_string(),
            should_quit: false,
        }
    }

    pub fn titles(&self) -> &[String] {
        self.tasks.titles()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        match &self.mode {
            Mode::Notice(_) => {
                self.mode = Mode::Normal;
                Ok(())
            }
            Mode::ConfirmClear => self.handle_confirm_key(key),
            Mode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('q') if ctrl => {
                self.should_quit = true;
            }
            KeyCode::Char('l') if ctrl => {
                self.mode = Mode::ConfirmClear;
            }
            KeyCode::Enter => self.submit_input()?,
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Delete => self.delete_selected()?,
            _ => {
                self.input.handle_event(&Event::Key(key));
            }
        }
        Ok(())
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                let removed = self.tasks.clear_all()?;
                self.list_state.select(None);
                self.status = format!("Cleared {removed} task(s)");
                self.mode = Mode::Normal;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.status = "Clear-all cancelled".to_string();
                self.mode = Mode::Normal;
            }
            _ => {}
        }
        Ok(())
    }

    fn submit_input(&mut self) -> Result<()> {
        match self.tasks.submit(self.input.value())? {
            SubmitOutcome::Added { title } => {
                self.input.reset();
                if self.list_state.selected().is_none() {
                    self.list_state.select(Some(0));
                }
                self.status = format!("Added \"{title}\"");
            }
            SubmitOutcome::EmptyInput => {
                self.mode = Mode::Notice(MSG_EMPTY_FIELD.to_string());
            }
        }
        Ok(())
    }

    fn delete_selected(&mut self) -> Result<()> {
        match self.tasks.delete_selected(self.list_state.selected())? {
            DeleteOutcome::Deleted { title, .. } => {
                self.clamp_selection();
                self.status = format!("Deleted \"{title}\"");
            }
            DeleteOutcome::NothingSelected => {
                self.mode = Mode::Notice(MSG_NO_SELECTION.to_string());
            }
        }
        Ok(())
    }

    fn move_selection(&mut self, delta: i64) {
        let len = self.tasks.len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as i64;
        let next = (current + delta).clamp(0, len as i64 - 1) as usize;
        self.list_state.select(Some(next));
    }

    fn clamp_selection(&mut self) {
        let len = self.tasks.len();
        if len == 0 {
            self.list_state.select(None);
        } else if let Some(selected) = self.list_state.selected() {
            if selected >= len {
                self.list_state.select(Some(len - 1));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskpad_core::db::open_db_in_memory;
    use taskpad_core::SqliteTaskRepository;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn type_text<R: TaskRepository>(app: &mut App<R>, text: &str) {
        for ch in text.chars() {
            app.handle_key(key(KeyCode::Char(ch))).unwrap();
        }
    }

    fn new_app(conn: &rusqlite::Connection) -> App<SqliteTaskRepository<'_>> {
        let tasks = TaskList::load(SqliteTaskRepository::new(conn)).unwrap();
        App::new(tasks)
    }

    #[test]
    fn typing_and_enter_adds_a_task_and_resets_the_field() {
        let conn = open_db_in_memory().unwrap();
        let mut app = new_app(&conn);

        type_text(&mut app, "Buy milk");
        assert_eq!(app.input.value(), "Buy milk");

        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.titles(), ["Buy milk"]);
        assert_eq!(app.input.value(), "");
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn enter_on_empty_field_shows_notice_and_changes_nothing() {
        let conn = open_db_in_memory().unwrap();
        let mut app = new_app(&conn);

        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.mode, Mode::Notice(MSG_EMPTY_FIELD.to_string()));
        assert!(app.titles().is_empty());

        // Any key dismisses the notice.
        app.handle_key(key(KeyCode::Char('x'))).unwrap();
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.input.value(), "");
    }

    #[test]
    fn delete_with_empty_list_shows_no_selection_notice() {
        let conn = open_db_in_memory().unwrap();
        let mut app = new_app(&conn);

        app.handle_key(key(KeyCode::Delete)).unwrap();
        assert_eq!(app.mode, Mode::Notice(MSG_NO_SELECTION.to_string()));
    }

    #[test]
    fn delete_removes_the_selected_task_and_clamps_selection() {
        let conn = open_db_in_memory().unwrap();
        let mut app = new_app(&conn);
        type_text(&mut app, "one");
        app.handle_key(key(KeyCode::Enter)).unwrap();
        type_text(&mut app, "two");
        app.handle_key(key(KeyCode::Enter)).unwrap();

        app.handle_key(key(KeyCode::Down)).unwrap();
        assert_eq!(app.list_state.selected(), Some(1));

        app.handle_key(key(KeyCode::Delete)).unwrap();
        assert_eq!(app.titles(), ["one"]);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn clear_all_requires_confirmation() {
        let conn = open_db_in_memory().unwrap();
        let mut app = new_app(&conn);
        type_text(&mut app, "a");
        app.handle_key(key(KeyCode::Enter)).unwrap();

        // Declining leaves the list unchanged.
        app.handle_key(ctrl('l')).unwrap();
        assert_eq!(app.mode, Mode::ConfirmClear);
        app.handle_key(key(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.titles(), ["a"]);

        // Confirming empties it.
        app.handle_key(ctrl('l')).unwrap();
        app.handle_key(key(KeyCode::Char('y'))).unwrap();
        assert!(app.titles().is_empty());
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn escape_requests_exit() {
        let conn = open_db_in_memory().unwrap();
        let mut app = new_app(&conn);

        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert!(app.should_quit());
    }
}
