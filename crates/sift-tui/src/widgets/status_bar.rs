//! Status bar — a single-line readout under the results pane.
//!
//! Shows, in priority order: the busy indicator while a search runs, the
//! no-match notice when one was published, or the match count.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use sift_core::SearchState;

/// Single-row status readout.
///
/// The caller passes a 1-row `Rect` at the bottom of the terminal.
pub struct StatusBar<'a> {
    state: &'a SearchState,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a SearchState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if self.state.busy {
            Line::from(Span::styled("searching…", self.theme.status_busy))
        } else if let Some(ref message) = self.state.message {
            Line::from(Span::styled(message.clone(), self.theme.status_message))
        } else if self.state.results.is_empty() {
            Line::from("")
        } else {
            let count = self.state.results.len();
            let label = if count == 1 { "match" } else { "matches" };
            Line::from(Span::styled(
                format!("{count} {label}"),
                self.theme.status_count,
            ))
        };

        buf.set_line(area.x, area.y, &line, area.width);
    }
}
