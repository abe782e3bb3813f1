use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::affordance::{AffordanceKind, Descriptor};
use crate::ui::helpers::{STYLE_BADGE, STYLE_DESCRIPTION, STYLE_TITLE, STYLE_TITLE_DISABLED};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// The toolbar control itself: icon, title, badge, description, and a gauge
/// while an operation is running.
pub struct SyncButtonWidget<'a> {
    descriptor: &'a Descriptor,
    tick: u64,
}

impl<'a> SyncButtonWidget<'a> {
    pub fn new(descriptor: &'a Descriptor) -> Self {
        Self {
            descriptor,
            tick: 0,
        }
    }

    pub fn with_tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let descriptor = self.descriptor;

        let accent = if descriptor.enabled {
            match descriptor.kind {
                AffordanceKind::Pull => Color::Yellow,
                AffordanceKind::Push => Color::Green,
                _ => Color::Cyan,
            }
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(" Sync ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let icon = if descriptor.icon_spins {
            SPINNER_FRAMES[self.tick as usize % SPINNER_FRAMES.len()]
        } else {
            descriptor.icon.glyph()
        };

        let title_style = if descriptor.enabled {
            STYLE_TITLE
        } else {
            STYLE_TITLE_DISABLED
        };

        let mut title_spans = vec![
            Span::styled(format!(" {} ", icon), Style::default().fg(accent)),
            Span::styled(descriptor.title.clone(), title_style),
        ];
        if let Some(badge) = &descriptor.badge {
            for entry in badge.entries() {
                title_spans.push(Span::raw(" "));
                title_spans.push(Span::styled(entry, STYLE_BADGE));
            }
        }

        let mut constraints = vec![Constraint::Length(1), Constraint::Length(1)];
        if descriptor.progress_value.is_some() {
            constraints.push(Constraint::Length(1));
        }
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        frame.render_widget(Paragraph::new(Line::from(title_spans)), rows[0]);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", descriptor.description),
                STYLE_DESCRIPTION,
            ))),
            rows[1],
        );

        if let Some(value) = descriptor.progress_value {
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(accent))
                .ratio(f64::from(value))
                .label("");
            frame.render_widget(gauge, rows[2]);
        }
    }
}
