//! Input bar widget — the search term field at the top of the screen.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `CursorLeft` / `CursorRight` move the cursor.
//!
//! Editing events that change the text make [`InputBarState::handle`]
//! return `true` so the app shell can forward the new term to the
//! dispatcher; pure cursor movement returns `false`.

use crate::event::AppEvent;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct InputBarState {
    /// The raw search term typed by the user.
    pub value: String,
    /// Byte offset of the cursor within `value`.
    pub cursor: usize,
}

impl InputBarState {
    /// Handle a key event from the app shell. Returns `true` when the text
    /// changed (the caller must re-dispatch the term).
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Char(c) => {
                self.value.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(value = %self.value, cursor = self.cursor, "input: char inserted");
                true
            }
            AppEvent::Backspace => {
                if self.cursor > 0 {
                    // Walk back one char boundary
                    let prev = self.value[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    self.value.remove(prev);
                    self.cursor = prev;
                    tracing::debug!(value = %self.value, cursor = self.cursor, "input: backspace");
                    true
                } else {
                    false
                }
            }
            AppEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = self.value[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                }
                false
            }
            AppEvent::CursorRight => {
                if self.cursor < self.value.len() {
                    self.cursor = self.value[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.value.len());
                }
                false
            }
            _ => false,
        }
    }

    /// Replace the whole value (Enter adopting a match, Escape clearing).
    /// Returns `true` when the text actually changed.
    pub fn set(&mut self, value: String) -> bool {
        if self.value == value {
            return false;
        }
        self.cursor = value.len();
        self.value = value;
        true
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct InputBar<'a> {
    state: &'a InputBarState,
    placeholder: &'a str,
    theme: &'a Theme,
}

impl<'a> InputBar<'a> {
    pub fn new(state: &'a InputBarState, placeholder: &'a str, theme: &'a Theme) -> Self {
        Self {
            state,
            placeholder,
            theme,
        }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let col = self.state.value[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(1));
        let y = area.y + 1;
        (x, y)
    }
}

impl Widget for InputBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Search")
            .border_style(self.theme.border_focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.state.value.is_empty() {
            Line::from(Span::styled(self.placeholder, self.theme.input_placeholder))
        } else {
            Line::from(self.state.value.as_str())
        };
        Paragraph::new(line).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_insert_and_backspace() {
        let mut s = InputBarState::default();
        assert!(s.handle(&AppEvent::Char('d')));
        assert!(s.handle(&AppEvent::Char('a')));
        assert!(s.handle(&AppEvent::Char('n')));
        assert_eq!(s.value, "dan");
        assert_eq!(s.cursor, 3);
        assert!(s.handle(&AppEvent::Backspace));
        assert_eq!(s.value, "da");
        assert_eq!(s.cursor, 2);
    }

    #[test]
    fn backspace_at_origin_reports_no_change() {
        let mut s = InputBarState::default();
        assert!(!s.handle(&AppEvent::Backspace));
    }

    #[test]
    fn cursor_movement_respects_char_boundaries() {
        let mut s = InputBarState::default();
        s.handle(&AppEvent::Char('á'));
        s.handle(&AppEvent::Char('b'));
        assert!(!s.handle(&AppEvent::CursorLeft));
        assert!(!s.handle(&AppEvent::CursorLeft));
        assert_eq!(s.cursor, 0);
        s.handle(&AppEvent::Char('x'));
        assert_eq!(s.value, "xáb");
    }

    #[test]
    fn mid_string_edit() {
        let mut s = InputBarState::default();
        for c in ['k', 'r', 'i'] {
            s.handle(&AppEvent::Char(c));
        }
        s.handle(&AppEvent::CursorLeft);
        s.handle(&AppEvent::Backspace);
        assert_eq!(s.value, "ki");
        assert_eq!(s.cursor, 1);
    }

    #[test]
    fn set_replaces_value_and_detects_no_op() {
        let mut s = InputBarState::default();
        assert!(s.set("rebeka".to_string()));
        assert_eq!(s.cursor, 6);
        assert!(!s.set("rebeka".to_string()));
    }
}
