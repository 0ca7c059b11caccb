//! Rose theme: pink paper, rose backdrop, dark picture canvas

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        backdrop: Color::Rgb(0xfe, 0xcd, 0xd3), // rose-200
        paper: Color::Rgb(0xff, 0xff, 0xff),
        card: Color::Rgb(0xfd, 0xf2, 0xf8),     // pink-50
        letter: Color::Rgb(0xff, 0xf1, 0xf2),   // rose-50
        canvas: Color::Rgb(0x00, 0x00, 0x00),
        footer: Color::Rgb(0xf9, 0xfa, 0xfb),
        button: Color::Rgb(0xff, 0xff, 0xff),
        shadow: Color::Rgb(0xe5, 0xb8, 0xc4),
        ink: Color::Rgb(0x1f, 0x29, 0x37),      // gray-800
        ink_soft: Color::Rgb(0x37, 0x41, 0x51), // gray-700
        muted: Color::Rgb(0x9c, 0xa3, 0xaf),
        accent: Color::Rgb(0xdb, 0x27, 0x77),   // pink-600
        error: Color::Rgb(0xdc, 0x26, 0x26),
        loading: Color::Rgb(0xd9, 0x77, 0x06),
    }
}
