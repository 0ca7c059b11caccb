//! Nord theme
//! https://www.nordtheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        backdrop: Color::Rgb(0x2e, 0x34, 0x40), // nord0
        paper: Color::Rgb(0x3b, 0x42, 0x52),    // nord1
        card: Color::Rgb(0x43, 0x4c, 0x5e),     // nord2
        letter: Color::Rgb(0x3b, 0x42, 0x52),
        canvas: Color::Rgb(0x24, 0x29, 0x33),
        footer: Color::Rgb(0x43, 0x4c, 0x5e),
        button: Color::Rgb(0x4c, 0x56, 0x6a),   // nord3
        shadow: Color::Rgb(0x24, 0x29, 0x33),
        ink: Color::Rgb(0xec, 0xef, 0xf4),      // nord6
        ink_soft: Color::Rgb(0xd8, 0xde, 0xe9), // nord4
        muted: Color::Rgb(0x81, 0xa1, 0xc1),    // nord9
        accent: Color::Rgb(0x88, 0xc0, 0xd0),   // nord8
        error: Color::Rgb(0xbf, 0x61, 0x6a),    // nord11
        loading: Color::Rgb(0xeb, 0xcb, 0x8b),  // nord13
    }
}
