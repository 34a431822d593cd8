//! Diagnostics view mounted at `/test`

use ratatui::{
    prelude::*,
    widgets::{Block, Row, Table},
};

use crate::{core::state::AppState, domain::route::Route, integration::runtime::RuntimeStats};

#[derive(Debug, Default)]
pub struct TestViewComponent;

impl TestViewComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, stats: &RuntimeStats, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let [header, routes, runtime] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(Route::table().len() as u16 + 2),
            Constraint::Min(0),
        ])
        .areas(area);

        frame.render_widget(
            Line::from(vec![
                Span::styled("Current route: ", styles.style("label")),
                Span::styled(state.route.path(), styles.style("text")),
            ]),
            header,
        );

        let route_rows = Route::table().iter().map(|(path, route)| {
            let style = if *route == state.route {
                styles.style("focused")
            } else {
                styles.style("text")
            };
            Row::new(vec![path.to_string(), route.title().to_string()]).style(style)
        });
        frame.render_widget(
            Table::new(route_rows, [Constraint::Length(12), Constraint::Min(0)])
                .block(Block::bordered().title("Routes").border_style(styles.style("border"))),
            routes,
        );

        let stat_rows = [
            ("queued messages", stats.queued_messages.to_string()),
            ("queued commands", stats.queued_commands.to_string()),
            ("processed messages", stats.processed_messages.to_string()),
            ("visible toasts", stats.visible_toasts.to_string()),
            ("form mounts", stats.mounts.to_string()),
            ("loading", stats.is_loading.to_string()),
            ("executor", stats.has_executor.to_string()),
        ]
        .map(|(name, value)| Row::new(vec![name.to_string(), value]));
        frame.render_widget(
            Table::new(stat_rows, [Constraint::Length(20), Constraint::Min(0)])
                .block(Block::bordered().title("Runtime").border_style(styles.style("border"))),
            runtime,
        );
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    #[test]
    fn test_shows_route_and_stats() {
        let mut state = AppState::default();
        state.navigate(Route::Test);
        let stats = RuntimeStats {
            route: Route::Test,
            processed_messages: 7,
            ..Default::default()
        };

        let mut terminal = Terminal::new(TestBackend::new(50, 24)).unwrap();
        terminal
            .draw(|f| TestViewComponent::new().view(&state, &stats, f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let rows: Vec<String> = (0..buffer.area.height)
            .map(|y| (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect();

        assert!(rows[0].contains("Current route: /test"));
        assert!(rows.iter().any(|row| row.contains("/sign-up")));
        let processed = rows
            .iter()
            .find(|row| row.contains("processed messages"))
            .unwrap();
        assert!(processed.trim_end_matches([' ', '│']).ends_with('7'));
    }
}
