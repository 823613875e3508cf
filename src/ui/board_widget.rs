use crate::game::{border_line, tile_label, Grid};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::palette;

/// Box-drawn grid lines, one styled span per tile.
pub fn board_lines(grid: &Grid, colors: bool) -> Vec<Line<'static>> {
    let border_style = if colors {
        Style::default().fg(palette::BORDER)
    } else {
        Style::default()
    };
    let rule = |left, mid, right| {
        Line::from(Span::styled(
            border_line(left, mid, right, grid.width()),
            border_style,
        ))
    };

    let mut lines = vec![rule('┌', '┬', '┐')];
    for (idx, row) in grid.rows().enumerate() {
        if idx > 0 {
            lines.push(rule('├', '┼', '┤'));
        }

        let mut spans = Vec::with_capacity(row.len() * 2 + 1);
        for &value in row {
            spans.push(Span::styled("│", border_style));
            let style = if colors {
                palette::tile_style(value)
            } else {
                Style::default()
            };
            spans.push(Span::styled(tile_label(value), style));
        }
        spans.push(Span::styled("│", border_style));
        lines.push(Line::from(spans));
    }
    lines.push(rule('└', '┴', '┘'));
    lines
}

/// Render the grid centred in the given area.
pub fn render_board(frame: &mut Frame, grid: &Grid, colors: bool, area: Rect) {
    let widget = Paragraph::new(board_lines(grid, colors)).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
