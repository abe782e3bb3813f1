use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::AppState;
use crate::ui::helpers::{STYLE_HEADER, STYLE_HEADER_DIM};
use crate::util::format_last_fetched;

use super::components::{StatusBarWidget, SyncButtonWidget};

/// Top-level layout: repo header, the sync control, and the footer.
pub struct AppWidget<'a> {
    state: &'a AppState,
    tick: u64,
}

impl<'a> AppWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state, tick: 0 }
    }

    pub fn with_tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    pub fn render(self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0]);

        let descriptor = self.state.descriptor();
        SyncButtonWidget::new(&descriptor)
            .with_tick(self.tick)
            .render(frame, chunks[1]);

        StatusBarWidget::new(self.state.status_message.as_ref()).render(frame, chunks[3]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let snapshot = &self.state.snapshot;
        let remote = snapshot.remote_name.as_deref().unwrap_or("unpublished");

        let line = Line::from(vec![
            Span::styled(format!(" {}", self.state.repo_path), STYLE_HEADER),
            Span::styled(format!("  {}", remote), STYLE_HEADER_DIM),
            Span::styled(
                format!("  {}", format_last_fetched(snapshot.last_fetched)),
                STYLE_HEADER_DIM,
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
