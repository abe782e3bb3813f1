use ratatui::style::{Color, Modifier, Style};

pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
pub const STYLE_TITLE_DISABLED: Style = Style::new().fg(Color::DarkGray).add_modifier(Modifier::BOLD);
pub const STYLE_DESCRIPTION: Style = Style::new().fg(Color::Gray);
pub const STYLE_BADGE: Style = Style::new().fg(Color::Cyan);
pub const STYLE_HEADER: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
pub const STYLE_HEADER_DIM: Style = Style::new().fg(Color::DarkGray);
