//! Frame rendering.
//!
//! # Responsibility
//! - Draw the full screen from app state on every frame: header, input
//!   panel, task list, status line, and any active dialog.
//!
//! # Invariants
//! - Rendering never mutates presenter state; the only widget state touched
//!   is the list selection offset.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;
use taskpad_core::TaskRepository;

use crate::app::{App, Mode, MSG_CONFIRM_CLEAR};

const HEADER_STYLE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Blue)
    .add_modifier(Modifier::BOLD);

pub fn render<R: TaskRepository>(frame: &mut Frame, app: &mut App<R>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, rows[0]);
    render_body(frame, rows[1], app);
    render_status(frame, rows[2], app);

    match app.mode.clone() {
        Mode::Normal => {}
        Mode::ConfirmClear => render_confirm(frame, frame.area()),
        Mode::Notice(message) => render_notice(frame, frame.area(), &message),
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(" taskpad — to-do list")
        .style(HEADER_STYLE)
        .alignment(Alignment::Left);
    frame.render_widget(header, area);
}

fn render_body<R: TaskRepository>(frame: &mut Frame, area: Rect, app: &mut App<R>) {
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    render_input_panel(frame, panels[0], app);
    render_task_list(frame, panels[1], app);
}

fn render_input_panel<R: TaskRepository>(frame: &mut Frame, area: Rect, app: &mut App<R>) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let input_area = sections[0];
    let inner_width = input_area.width.saturating_sub(2) as usize;
    let scroll = app.input.visual_scroll(inner_width);

    let input = Paragraph::new(app.input.value())
        .scroll((0, scroll as u16))
        .block(Block::default().borders(Borders::ALL).title(" New task "));
    frame.render_widget(input, input_area);

    if app.mode == Mode::Normal {
        let cursor_x = input_area.x + 1 + (app.input.visual_cursor().saturating_sub(scroll)) as u16;
        frame.set_cursor_position(Position::new(cursor_x, input_area.y + 1));
    }

    let help_lines = vec![
        Line::from(""),
        help_line("Enter", "add task"),
        help_line("↑/↓", "select"),
        help_line("Del", "delete selected"),
        help_line("Ctrl-L", "clear all"),
        help_line("Esc", "exit"),
    ];
    let help = Paragraph::new(help_lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, sections[1]);
}

fn help_line(keys: &str, action: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {keys:<7}"),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {action}")),
    ])
}

fn render_task_list<R: TaskRepository>(frame: &mut Frame, area: Rect, app: &mut App<R>) {
    let items: Vec<ListItem> = app
        .titles()
        .iter()
        .map(|title| ListItem::new(title.clone()))
        .collect();
    let count = items.len();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Tasks ({count}) ")),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_status<R: TaskRepository>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let status = Paragraph::new(format!(" {}", app.status))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}

fn render_confirm(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(50, 30, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Clear all ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            MSG_CONFIRM_CLEAR,
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[y] ",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Yes   "),
            Span::styled(
                "[n] ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("No"),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup);
}

fn render_notice(frame: &mut Frame, area: Rect, message: &str) {
    let popup = centered_rect(50, 25, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Notice ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let content = vec![
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
