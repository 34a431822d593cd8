use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::presentation::config::Styles;

/// Error message injected by the embedding application
pub struct ErrorBanner<'a> {
    message: &'a str,
    styles: &'a Styles,
}

impl<'a> ErrorBanner<'a> {
    pub fn new(message: &'a str, styles: &'a Styles) -> Self {
        Self { message, styles }
    }
}

impl Widget for ErrorBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.styles.style("error");
        buf.set_style(area, style);
        Paragraph::new(format!("⚠ {}", self.message))
            .style(style)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
