//! Gruvbox Material theme
//! https://github.com/sainnhe/gruvbox-material

use ratatui::style::Color;
use crate::theme::Theme;

pub fn dark() -> Theme {
    Theme {
        backdrop: Color::Rgb(0x1d, 0x20, 0x21),
        paper: Color::Rgb(0x28, 0x28, 0x28),
        card: Color::Rgb(0x32, 0x30, 0x2f),
        letter: Color::Rgb(0x28, 0x28, 0x28),
        canvas: Color::Rgb(0x14, 0x14, 0x14),
        footer: Color::Rgb(0x32, 0x30, 0x2f),
        button: Color::Rgb(0x45, 0x40, 0x3d),
        shadow: Color::Rgb(0x1d, 0x20, 0x21),
        ink: Color::Rgb(0xdd, 0xc7, 0xa1),
        ink_soft: Color::Rgb(0xd4, 0xbe, 0x98),
        muted: Color::Rgb(0x92, 0x83, 0x74),
        accent: Color::Rgb(0x89, 0xb4, 0x82),
        error: Color::Rgb(0xea, 0x69, 0x62),
        loading: Color::Rgb(0xd8, 0xa6, 0x57),
    }
}

pub fn light() -> Theme {
    Theme {
        backdrop: Color::Rgb(0xeb, 0xdb, 0xb2),
        paper: Color::Rgb(0xfb, 0xf1, 0xc7),
        card: Color::Rgb(0xf2, 0xe5, 0xbc),
        letter: Color::Rgb(0xfb, 0xf1, 0xc7),
        canvas: Color::Rgb(0x28, 0x28, 0x28),
        footer: Color::Rgb(0xf2, 0xe5, 0xbc),
        button: Color::Rgb(0xf2, 0xe5, 0xbc),
        shadow: Color::Rgb(0xd5, 0xc4, 0xa1),
        ink: Color::Rgb(0x65, 0x47, 0x35),
        ink_soft: Color::Rgb(0x4f, 0x38, 0x29),
        muted: Color::Rgb(0x92, 0x83, 0x74),
        accent: Color::Rgb(0x4c, 0x7a, 0x5d),
        error: Color::Rgb(0xc1, 0x4a, 0x4a),
        loading: Color::Rgb(0xb4, 0x71, 0x09),
    }
}
