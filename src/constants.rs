use ratatui::style::Color;

// Grid size of the original board
pub const NUM_ROWS: usize = 15;
pub const NUM_COLS: usize = 15;

// How many palette colors are actually in play, must be <= PALETTE.len()
pub const NUM_COLORS_USED: usize = 6;

// Available cell/button colors and the icons drawn on them
pub const PALETTE: [(Color, char); 8] = [
    (Color::Red, '•'),
    (Color::Green, '+'),
    (Color::Blue, 'x'),
    (Color::Yellow, '∆'),
    (Color::Magenta, '*'),
    (Color::Cyan, '◊'),
    (Color::LightRed, '≈'),
    (Color::White, ':'),
];

// Draw icons on cells (useful for color-blind players, noisy otherwise)
pub const SHOW_ICONS: bool = false;

pub const LOG_FILE: &str = "colordrops.log";
