//! Results list widget — the scrollable match pane below the input bar.
//!
//! # Navigation
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `↓` | Move selection up / down one row (scrolls view if needed) |
//! | `PageUp` / `Ctrl+u` | Scroll up one page |
//! | `PageDown` / `Ctrl+d` | Scroll down one page |
//!
//! # Scroll semantics
//!
//! `offset` = index of the first visible match (0 = top). `cursor` =
//! absolute index of the selected match. The cursor is always kept within
//! the visible window; moving it past an edge drags the window along.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

const PAGE_STEP: usize = 10;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ResultsListState {
    pub matches: Vec<String>,
    /// Absolute index of the selected match.
    pub cursor: usize,
    /// Index of the first visible match.
    pub offset: usize,
    /// Cached from the last render so `handle()` can do cursor-aware scrolling.
    last_height: Cell<usize>,
}

impl ResultsListState {
    /// Replace the match set; selection and scroll restart at the top.
    pub fn set_matches(&mut self, matches: Vec<String>) {
        self.matches = matches;
        self.cursor = 0;
        self.offset = 0;
    }

    /// The currently selected match, if any.
    pub fn selected(&self) -> Option<&str> {
        self.matches.get(self.cursor).map(String::as_str)
    }

    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Pull `offset` so the cursor sits inside the visible window.
    fn clamp_window(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.height() {
            self.offset = self.cursor + 1 - self.height();
        }
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        let total = self.matches.len();
        if total == 0 {
            return;
        }

        match event {
            AppEvent::ListNav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                self.clamp_window();
                tracing::debug!(cursor = self.cursor, offset = self.offset, "results: up");
            }
            AppEvent::ListNav(Direction::Down) => {
                if self.cursor + 1 < total {
                    self.cursor += 1;
                }
                self.clamp_window();
                tracing::debug!(cursor = self.cursor, offset = self.offset, "results: down");
            }
            AppEvent::PageUp => {
                self.cursor = self.cursor.saturating_sub(PAGE_STEP);
                self.clamp_window();
            }
            AppEvent::PageDown => {
                self.cursor = (self.cursor + PAGE_STEP).min(total - 1);
                self.clamp_window();
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ResultsList<'a> {
    state: &'a ResultsListState,
    theme: &'a Theme,
}

impl<'a> ResultsList<'a> {
    pub fn new(state: &'a ResultsListState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for ResultsList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Matches")
            .border_style(self.theme.border_unfocused);
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        // Cache for handle() — safe because draw always runs before handle()
        self.state.last_height.set(height);

        let total = self.state.matches.len();
        let start = self.state.offset.min(total);
        let end = (start + height).min(total);

        let lines: Vec<Line<'static>> = self.state.matches[start..end]
            .iter()
            .enumerate()
            .map(|(row, m)| {
                let mut line = Line::styled(m.clone(), self.theme.result_row);
                if start + row == self.state.cursor {
                    line = line.patch_style(Style::default().add_modifier(Modifier::REVERSED));
                }
                line
            })
            .collect();

        // Text (fill) + 1-column scrollbar strip inside the borders, so the
        // track height matches the number of visible content rows.
        let text_area = Rect {
            width: inner.width.saturating_sub(1),
            ..inner
        };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        Paragraph::new(lines).render(text_area, buf);

        if total > height {
            let mut sb_state = ScrollbarState::new(total)
                .position(start)
                .viewport_content_length(height);
            StatefulWidget::render(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                sb_area,
                buf,
                &mut sb_state,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
