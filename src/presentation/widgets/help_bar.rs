use ratatui::prelude::*;

use crate::presentation::config::{keybindings::Action, KeyBindings, Styles};

/// One line of `<key> label` hints for the bound actions
pub struct HelpBar<'a> {
    entries: Vec<(String, &'a str)>,
    styles: &'a Styles,
}

impl<'a> HelpBar<'a> {
    /// Actions without a binding are left out
    pub fn new(actions: &[(Action, &'a str)], keybindings: &KeyBindings, styles: &'a Styles) -> Self {
        let entries = actions
            .iter()
            .filter_map(|(action, label)| keybindings.describe(*action).map(|key| (key, *label)))
            .collect();
        Self { entries, styles }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.styles.style("hint");
        let mut spans = Vec::new();
        for (i, (key, label)) in self.entries.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", style));
            }
            spans.push(Span::styled(key, style.add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(format!(" {label}"), style));
        }
        Line::from(spans).centered().render(area, buf);
    }
}
