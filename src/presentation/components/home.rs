use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    domain::route::Route,
    presentation::{
        components::{centered_column, FORM_WIDTH},
        config::keybindings::Action,
        widgets::{button::link, help_bar::HelpBar},
    },
};

const HELP: &[(Action, &str)] = &[
    (Action::GoSignIn, "sign in"),
    (Action::GoSignUp, "sign up"),
    (Action::GoTest, "test"),
    (Action::Quit, "quit"),
];

/// Landing view linking to both forms
#[derive(Debug, Default)]
pub struct HomeComponent;

impl HomeComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let rows = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(centered_column(area, FORM_WIDTH));

        frame.render_widget(
            Line::styled("TaskForge", styles.style("title")).centered(),
            rows[1],
        );
        frame.render_widget(
            Line::styled("Plan, track and ship together", styles.style("subtitle")).centered(),
            rows[2],
        );
        frame.render_widget(
            Line::from(vec![
                link("Sign in", false, styles),
                Span::styled(format!("  {}", Route::SignIn.path()), styles.style("hint")),
            ])
            .centered(),
            rows[4],
        );
        frame.render_widget(
            Line::from(vec![
                link("Sign up", false, styles),
                Span::styled(format!("  {}", Route::SignUp.path()), styles.style("hint")),
            ])
            .centered(),
            rows[5],
        );
        frame.render_widget(
            HelpBar::new(HELP, &state.config.config.keybindings, styles),
            rows[7],
        );
    }
}
