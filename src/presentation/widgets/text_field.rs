use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthChar;

use crate::presentation::config::Styles;

const MASK: char = '•';

/// Single-line bordered input. The label sits in the top border.
pub struct TextField<'a> {
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    note: Option<&'a str>,
    masked: bool,
    focused: bool,
    disabled: bool,
    styles: &'a Styles,
}

impl<'a> TextField<'a> {
    pub fn new(label: &'a str, value: &'a str, styles: &'a Styles) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            note: None,
            masked: false,
            focused: false,
            disabled: false,
            styles,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Right-aligned text in the top border
    pub fn note(mut self, note: &'a str) -> Self {
        self.note = Some(note);
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The value as shown, masked or plain
    pub fn display_value(&self) -> String {
        if self.masked {
            MASK.to_string().repeat(self.value.chars().count())
        } else {
            self.value.to_string()
        }
    }

    /// Where the terminal cursor goes when this field is being edited
    pub fn cursor(&self, area: Rect) -> Option<Position> {
        if !self.focused || self.disabled || area.width < 3 || area.height < 3 {
            return None;
        }
        let inner_width = area.width - 2;
        let shown = visible_tail(&self.display_value(), usize::from(inner_width - 1));
        let offset = u16::try_from(display_width(&shown)).unwrap_or(inner_width - 1);
        Some(Position::new(area.x + 1 + offset, area.y + 1))
    }
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.disabled {
            self.styles.style("disabled")
        } else if self.focused {
            self.styles.style("focused")
        } else {
            self.styles.style("border")
        };
        let mut block = Block::bordered()
            .border_style(border_style)
            .title(Span::styled(self.label, self.styles.style("label")));
        if let Some(note) = self.note {
            block = block.title_top(Line::styled(note, self.styles.style("hint")).right_aligned());
        }

        let inner_width = usize::from(area.width.saturating_sub(3));
        let content = if self.value.is_empty() {
            Span::styled(self.placeholder, self.styles.style("placeholder"))
        } else {
            let text_style = if self.disabled {
                self.styles.style("disabled")
            } else {
                self.styles.style("text")
            };
            Span::styled(visible_tail(&self.display_value(), inner_width), text_style)
        };

        Paragraph::new(Line::from(content))
            .block(block)
            .render(area, buf);
    }
}

fn display_width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Longest suffix of `text` that fits in `width` columns
fn visible_tail(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut tail: Vec<char> = Vec::new();
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        tail.push(c);
    }
    tail.into_iter().rev().collect()
}
