//! Colours for the terminal screens.

use ratatui::style::Color;

pub const YELLOW: Color = Color::Rgb(0xF8, 0xBD, 0x04);

pub const BG_LANDING: Color = YELLOW;
pub const BG_PUZZLE: Color = Color::Rgb(0xF5, 0xEF, 0xDC);
pub const BG_SUCCESS: Color = YELLOW;
pub const BG_ERROR: Color = Color::Rgb(0xF5, 0xEF, 0xDC);

pub const TILE_FILL: Color = Color::Rgb(0xE3, 0xD3, 0xC4);
pub const TILE_BORDER: Color = Color::Rgb(0xDE, 0xBB, 0x96);

pub const TEXT_PRIMARY: Color = Color::Rgb(0x00, 0x00, 0x00);
pub const TEXT_SECONDARY: Color = Color::Rgb(0x7B, 0x57, 0x3D);
pub const TEXT_DARK: Color = Color::Rgb(0x40, 0x31, 0x00);

pub const SLOT_BORDER: Color = Color::Rgb(0xB2, 0xB2, 0xB2);
pub const SLOT_HOVER_FILL: Color = Color::Rgb(0xDC, 0xD6, 0xC3);
pub const SLOT_HOVER_BORDER: Color = Color::Rgb(0x7A, 0x7A, 0x7A);

pub const BUTTON_SUCCESS: Color = Color::Rgb(0x7B, 0x57, 0x3D);
pub const BUTTON_ERROR: Color = Color::Rgb(0xFF, 0x00, 0x00);

pub const FUTURE_ITEM: Color = Color::Rgb(0xB2, 0xA8, 0x7A);

pub const CONFETTI: [Color; 8] = [
    Color::Rgb(0xF8, 0xBD, 0x04),
    Color::Rgb(0xFF, 0x6B, 0x6B),
    Color::Rgb(0x4E, 0xCD, 0xC4),
    Color::Rgb(0x45, 0xB7, 0xD1),
    Color::Rgb(0x96, 0xCE, 0xB4),
    Color::Rgb(0xFF, 0xEA, 0xA7),
    Color::Rgb(0xDD, 0xA0, 0xDD),
    Color::Rgb(0x98, 0xD8, 0xC8),
];
