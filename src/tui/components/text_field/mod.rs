//! # TextField Component
//!
//! A labelled, bordered text input used by the add form.
//!
//! ## Responsibilities
//!
//! - Capture text input and paste
//! - Handle editing (backspace, delete, cursor movement across lines)
//! - Keep the cursor line visible when the content is taller than the box
//!
//! ## State Management
//!
//! `buffer` and the cursor are internal state. `focused` is a prop set by
//! the form each frame; only the focused field draws the terminal cursor.
//!
//! Single-line fields turn Enter into `FieldEvent::Next` and flatten pasted
//! newlines to spaces. Multi-line fields insert the newline.

mod editing;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use editing::{
    line_end, line_index, line_start, move_vertically, next_char_boundary, prev_char_boundary,
};

/// Top + bottom borders consumed vertically
const VERTICAL_OVERHEAD: u16 = 2;
/// Offset from area edge to content (border width)
const BORDER_OFFSET: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    ContentChanged,
    /// Enter in a single-line field: move focus on.
    Next,
}

pub struct TextField {
    pub label: String,
    pub buffer: String,
    pub multiline: bool,
    /// Whether this field has focus (Prop)
    pub focused: bool,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    /// First visible line
    scroll_offset: u16,
}

impl TextField {
    pub fn new(label: &str, multiline: bool) -> Self {
        Self {
            label: label.to_string(),
            buffer: String::new(),
            multiline,
            focused: false,
            cursor: 0,
            scroll_offset: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    fn move_to(&mut self, pos: usize) -> Option<FieldEvent> {
        (pos != self.cursor).then(|| {
            self.cursor = pos;
            FieldEvent::ContentChanged
        })
    }

    /// Keep the cursor line within `visible` lines of the viewport.
    fn update_scroll_offset(&mut self, visible: u16) {
        if visible == 0 {
            self.scroll_offset = 0;
            return;
        }
        let cursor_line = line_index(&self.buffer, self.cursor) as u16;
        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + visible {
            self.scroll_offset = cursor_line + 1 - visible;
        }
    }

    fn visible_text(&self, visible: u16) -> String {
        self.buffer
            .split('\n')
            .skip(self.scroll_offset as usize)
            .take(visible as usize)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Screen position of the cursor, clamped to the inner area.
    fn screen_pos(&self, area: Rect) -> (u16, u16) {
        let start = line_start(&self.buffer, self.cursor);
        let column = self.buffer[start..self.cursor].width() as u16;
        let row = (line_index(&self.buffer, self.cursor) as u16).saturating_sub(self.scroll_offset);

        let max_col = area.width.saturating_sub(BORDER_OFFSET * 2 + 1);
        let max_row = area.height.saturating_sub(VERTICAL_OVERHEAD + 1);
        (
            area.x + BORDER_OFFSET + column.min(max_col),
            area.y + BORDER_OFFSET + row.min(max_row),
        )
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let visible = area.height.saturating_sub(VERTICAL_OVERHEAD);
        self.update_scroll_offset(visible);

        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.label.as_str());

        frame.render_widget(Paragraph::new(self.visible_text(visible)).block(block), area);

        if self.focused {
            frame.set_cursor_position(self.screen_pos(area));
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FieldEvent> {
        match event {
            TuiEvent::InputChar('\n') if !self.multiline => Some(FieldEvent::Next),
            TuiEvent::InputChar(c) => {
                let mut utf8 = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut utf8));
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Terminals may send pasted line breaks as a bare \r
                let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
                if self.multiline {
                    self.insert_str(&normalized);
                } else {
                    self.insert_str(&normalized.replace('\n', " "));
                }
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::Submit if self.multiline => {
                self.insert_str("\n");
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::Submit => Some(FieldEvent::Next),
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::CursorLeft if self.cursor > 0 => {
                self.move_to(prev_char_boundary(&self.buffer, self.cursor))
            }
            TuiEvent::CursorRight if self.cursor < self.buffer.len() => {
                self.move_to(next_char_boundary(&self.buffer, self.cursor))
            }
            TuiEvent::CursorHome => self.move_to(line_start(&self.buffer, self.cursor)),
            TuiEvent::CursorEnd => self.move_to(line_end(&self.buffer, self.cursor)),
            TuiEvent::CursorUp => move_vertically(&self.buffer, self.cursor, -1)
                .and_then(|pos| self.move_to(pos)),
            TuiEvent::CursorDown => move_vertically(&self.buffer, self.cursor, 1)
                .and_then(|pos| self.move_to(pos)),
            _ => None,
        }
    }
}
