use ratatui::style::{Color, Style};

const BLANK: Color = Color::Rgb(205, 193, 180);
const DARK_TEXT: Color = Color::Rgb(119, 110, 101);
const LIGHT_TEXT: Color = Color::Rgb(249, 246, 242);

/// Frame around the tiles.
pub const BORDER: Color = Color::Rgb(189, 174, 158);

/// Background colour for a tile value. Values past 2048 keep the 2048 colour.
pub fn tile_background(value: u32) -> Color {
    match value {
        0 => BLANK,
        2 => Color::Rgb(238, 228, 218),
        4 => Color::Rgb(237, 224, 200),
        8 => Color::Rgb(242, 177, 121),
        16 => Color::Rgb(245, 149, 99),
        32 => Color::Rgb(246, 124, 95),
        64 => Color::Rgb(246, 95, 59),
        128 => Color::Rgb(237, 207, 114),
        256 => Color::Rgb(237, 204, 97),
        512 => Color::Rgb(237, 200, 80),
        1024 => Color::Rgb(237, 197, 63),
        _ => Color::Rgb(237, 194, 46),
    }
}

/// Text colour: dark on the pale low tiles, light on everything else.
pub fn tile_foreground(value: u32) -> Color {
    if value <= 4 {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

pub fn tile_style(value: u32) -> Style {
    Style::default()
        .fg(tile_foreground(value))
        .bg(tile_background(value))
}
