use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::widgets::toast::{ToastWidget, TOAST_HEIGHT},
};

const TOAST_WIDTH: u16 = 40;

/// Stacks the visible toasts in the top-right corner, newest on top
#[derive(Debug, Default)]
pub struct ToastsComponent;

impl ToastsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let width = TOAST_WIDTH.min(area.width);
        let x = area.right().saturating_sub(width);

        for (i, toast) in state.toasts.toasts().iter().rev().enumerate() {
            let y = area.y + TOAST_HEIGHT * i as u16;
            if y + TOAST_HEIGHT > area.bottom() {
                break;
            }
            let rect = Rect::new(x, y, width, TOAST_HEIGHT);
            frame.render_widget(ToastWidget::new(toast, styles), rect);
        }
    }
}
