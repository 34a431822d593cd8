use ratatui::{
    prelude::*,
    widgets::{Block, Clear, Paragraph},
};

use crate::{core::state::toast::Toast, domain::notification::Severity, presentation::config::Styles};

/// Height of one toast including its border
pub const TOAST_HEIGHT: u16 = 3;

pub struct ToastWidget<'a> {
    toast: &'a Toast,
    styles: &'a Styles,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast, styles: &'a Styles) -> Self {
        Self { toast, styles }
    }
}

fn style_key(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "toast.info",
        Severity::Loading => "toast.loading",
        Severity::Success => "toast.success",
        Severity::Error => "toast.error",
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let notification = &self.toast.notification;
        let style = self.styles.style(style_key(notification.severity));

        Clear.render(area, buf);
        Paragraph::new(Line::from(vec![
            Span::styled(notification.severity.icon(), style),
            Span::raw(" "),
            Span::raw(notification.message.as_str()),
        ]))
        .block(Block::bordered().border_style(style))
        .render(area, buf);
    }
}
