use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::StatusMessage;

/// Footer line: keyboard shortcuts, or the outcome of the last operation
/// while one is worth showing.
pub struct StatusBarWidget<'a> {
    message: Option<&'a StatusMessage>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(message: Option<&'a StatusMessage>) -> Self {
        Self { message }
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let shortcuts = [("Enter", "activate"), ("r", "refresh"), ("q", "quit")];

        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, action)) in shortcuts.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!("[{}]", key),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                action.to_string(),
                Style::default().fg(Color::White),
            ));
        }

        let line = if let Some(message) = self.message {
            let style = if message.is_error {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Yellow)
            };
            Line::from(Span::styled(message.text.clone(), style))
        } else {
            Line::from(spans)
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}
