use ratatui::style::Color;

pub const PAGER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const PAGER_SHORTCUT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PAGER_CURRENT: Color = Color::Rgb(0xda, 0x77, 0x56);
