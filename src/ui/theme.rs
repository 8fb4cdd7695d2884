use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x8e, 0x7c, 0xc3);
pub const CARD_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const CARD_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const CARD_SURFACE: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const BUTTON_BG: Color = Color::Rgb(0x62, 0x5b, 0x71);
pub const BUTTON_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const HINT_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
