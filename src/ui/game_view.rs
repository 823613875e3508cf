use crate::game::{Phase, Session};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget;

pub fn render(frame: &mut Frame, session: &Session, message: &Option<String>, colors: bool) {
    let grid_rows = u16::try_from(session.engine().grid().height()).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Header
            Constraint::Min(grid_rows.saturating_mul(2).saturating_add(1)), // Board
            Constraint::Length(3),                // Status
            Constraint::Length(3),                // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    board_widget::render_board(frame, session.engine().grid(), colors, chunks[1]);
    render_status(frame, session.phase(), message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, session: &Session, area: ratatui::layout::Rect) {
    let engine = session.engine();
    let mut status = format!("SCORE: {}", engine.score());
    if engine.high_score() != 0 {
        status.push_str(&format!("  |  HIGH SCORE: {}", engine.high_score()));
    }

    let header = Paragraph::new(status)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", engine.win_target())),
        );

    frame.render_widget(header, area);
}

fn render_status(
    frame: &mut Frame,
    phase: Phase,
    message: &Option<String>,
    area: ratatui::layout::Rect,
) {
    let (text, color) = match phase {
        Phase::Won => ("YOU WIN!  Press 'r' to play again.", Color::Green),
        Phase::Lost => ("GAME OVER  Press 'r' to play again.", Color::Red),
        _ => (message.as_deref().unwrap_or(""), Color::Yellow),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(status, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = Line::from("←↑→↓ / WASD: Move  |  R: Restart  |  E/Q: Exit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
