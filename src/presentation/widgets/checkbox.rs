use ratatui::prelude::*;

use crate::presentation::config::Styles;

pub struct Checkbox<'a> {
    label: &'a str,
    checked: bool,
    focused: bool,
    disabled: bool,
    styles: &'a Styles,
}

impl<'a> Checkbox<'a> {
    pub fn new(label: &'a str, checked: bool, styles: &'a Styles) -> Self {
        Self {
            label,
            checked,
            focused: false,
            disabled: false,
            styles,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Widget for Checkbox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mark = if self.checked { "[x]" } else { "[ ]" };
        let style = if self.disabled {
            self.styles.style("disabled")
        } else if self.focused {
            self.styles.style("focused")
        } else {
            self.styles.style("text")
        };
        Line::from(vec![
            Span::styled(mark, style),
            Span::raw(" "),
            Span::styled(self.label, style),
        ])
        .render(area, buf);
    }
}
