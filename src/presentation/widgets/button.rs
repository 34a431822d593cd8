use ratatui::prelude::*;

use crate::presentation::config::Styles;

/// Full-width button with a centered label
pub struct Button<'a> {
    label: &'a str,
    focused: bool,
    disabled: bool,
    styles: &'a Styles,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, styles: &'a Styles) -> Self {
        Self {
            label,
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

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.disabled {
            self.styles.style("button").patch(self.styles.style("disabled"))
        } else if self.focused {
            self.styles.style("button.focused")
        } else {
            self.styles.style("button")
        };
        buf.set_style(area, style);
        Line::from(self.label)
            .centered()
            .style(style)
            .render(area, buf);
    }
}

/// Inline link text, e.g. the "Sign up" in "Don't have an account? Sign up"
pub fn link<'a>(label: &'a str, focused: bool, styles: &Styles) -> Span<'a> {
    let style = if focused {
        styles.style("link").patch(styles.style("focused"))
    } else {
        styles.style("link")
    };
    Span::styled(label, style)
}
