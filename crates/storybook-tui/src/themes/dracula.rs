//! Dracula theme
//! https://draculatheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        backdrop: Color::Rgb(0x21, 0x22, 0x2c),
        paper: Color::Rgb(0x28, 0x2a, 0x36),  // Background
        card: Color::Rgb(0x44, 0x47, 0x5a),   // Selection
        letter: Color::Rgb(0x28, 0x2a, 0x36),
        canvas: Color::Rgb(0x19, 0x1a, 0x21),
        footer: Color::Rgb(0x44, 0x47, 0x5a),
        button: Color::Rgb(0x44, 0x47, 0x5a),
        shadow: Color::Rgb(0x19, 0x1a, 0x21),
        ink: Color::Rgb(0xf8, 0xf8, 0xf2),    // Foreground
        ink_soft: Color::Rgb(0xe9, 0xe9, 0xea),
        muted: Color::Rgb(0x62, 0x72, 0xa4),  // Comment
        accent: Color::Rgb(0xff, 0x79, 0xc6), // Pink
        error: Color::Rgb(0xff, 0x55, 0x55),
        loading: Color::Rgb(0xf1, 0xfa, 0x8c),
    }
}
