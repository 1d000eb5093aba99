//! Theme registry and loader

use ratatui::style::Color;
use tracing::warn;

use crate::theme::Theme;

/// Names accepted by [`load_theme`]
pub const THEME_NAMES: [&str; 3] = ["midnight", "gruvbox-dark", "paper"];

/// Load a theme by name, falling back to midnight
pub fn load_theme(name: &str) -> Theme {
    match name.trim().to_lowercase().as_str() {
        "midnight" => midnight(),
        "gruvbox-dark" | "gruvbox" => gruvbox_dark(),
        "paper" => paper(),
        other => {
            warn!("Unknown theme '{}', using midnight", other);
            midnight()
        }
    }
}

/// Deep navy with a blue/violet glow
pub fn midnight() -> Theme {
    Theme {
        bg0: Color::Rgb(0x0b, 0x0d, 0x17),
        bg1: Color::Rgb(0x12, 0x15, 0x24),
        bg2: Color::Rgb(0x1c, 0x20, 0x35),
        fg0: Color::Rgb(0xe6, 0xe9, 0xf2),
        fg1: Color::Rgb(0xc3, 0xc8, 0xd9),
        grey0: Color::Rgb(0x3a, 0x40, 0x5a),
        grey1: Color::Rgb(0x6b, 0x72, 0x8e),
        grey2: Color::Rgb(0x94, 0x9a, 0xb3),
        primary: Color::Rgb(0x44, 0x6f, 0xe0),
        accent: Color::Rgb(0x7b, 0x5c, 0xd6),
        string: Color::Rgb(0x4a, 0xde, 0x80),
        error: Color::Rgb(0xf0, 0x5d, 0x6c),
        success: Color::Rgb(0x4a, 0xde, 0x80),
    }
}

pub fn gruvbox_dark() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x28, 0x28),
        bg1: Color::Rgb(0x32, 0x30, 0x2f),
        bg2: Color::Rgb(0x45, 0x40, 0x3d),
        fg0: Color::Rgb(0xd4, 0xbe, 0x98),
        fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
        grey0: Color::Rgb(0x7c, 0x6f, 0x64),
        grey1: Color::Rgb(0x92, 0x83, 0x74),
        grey2: Color::Rgb(0xa8, 0x99, 0x84),
        primary: Color::Rgb(0x7d, 0xae, 0xa3),
        accent: Color::Rgb(0xd3, 0x86, 0x9b),
        string: Color::Rgb(0xa9, 0xb6, 0x65),
        error: Color::Rgb(0xea, 0x69, 0x62),
        success: Color::Rgb(0xa9, 0xb6, 0x65),
    }
}

/// Light theme for bright terminals
pub fn paper() -> Theme {
    Theme {
        bg0: Color::Rgb(0xfa, 0xfa, 0xf7),
        bg1: Color::Rgb(0xef, 0xee, 0xe8),
        bg2: Color::Rgb(0xe0, 0xde, 0xd5),
        fg0: Color::Rgb(0x1f, 0x22, 0x2b),
        fg1: Color::Rgb(0x3b, 0x3f, 0x4c),
        grey0: Color::Rgb(0xc4, 0xc1, 0xb6),
        grey1: Color::Rgb(0x8a, 0x87, 0x7d),
        grey2: Color::Rgb(0x63, 0x61, 0x59),
        primary: Color::Rgb(0x2b, 0x55, 0xc9),
        accent: Color::Rgb(0x6a, 0x3f, 0xc2),
        string: Color::Rgb(0x2f, 0x85, 0x4a),
        error: Color::Rgb(0xc0, 0x39, 0x2b),
        success: Color::Rgb(0x2f, 0x85, 0x4a),
    }
}
