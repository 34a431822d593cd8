//! Sign-up view

use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    core::state::AppState,
    domain::form::{SignupField, PASSWORD_MIN_LENGTH},
    presentation::{
        components::{centered_column, FORM_WIDTH},
        config::keybindings::Action,
        widgets::{
            banner::ErrorBanner,
            button::{link, Button},
            checkbox::Checkbox,
            help_bar::HelpBar,
            text_field::TextField,
        },
    },
};

const HELP: &[(Action, &str)] = &[
    (Action::FocusNext, "next"),
    (Action::TogglePasswordVisibility, "show password"),
    (Action::Submit, "sign up"),
    (Action::Quit, "quit"),
];

/// Stateless renderer of [`SignupState`](crate::core::state::signup::SignupState)
#[derive(Debug, Default)]
pub struct SignupComponent;

impl SignupComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let signup = &state.signup;
        let styles = &state.config.config.styles;
        let focused = |field: SignupField| signup.focus == field;

        let error_height = if signup.props.error.is_some() { 2 } else { 0 };
        let rows = Layout::vertical([
            Constraint::Length(1), // title
            Constraint::Length(1), // subtitle
            Constraint::Length(1),
            Constraint::Length(error_height),
            Constraint::Length(3), // name
            Constraint::Length(3), // email
            Constraint::Length(3), // password
            Constraint::Length(1), // hint
            Constraint::Length(1), // agree
            Constraint::Length(1),
            Constraint::Length(1), // submit
            Constraint::Length(1),
            Constraint::Length(1), // sign-in link
            Constraint::Length(1), // footer
            Constraint::Min(0),
            Constraint::Length(1), // help
        ])
        .split(centered_column(area, FORM_WIDTH));

        frame.render_widget(
            Line::styled("Create Account", styles.style("title")).centered(),
            rows[0],
        );
        frame.render_widget(
            Line::styled("Get started with TaskForge today", styles.style("subtitle")).centered(),
            rows[1],
        );

        if let Some(error) = &signup.props.error {
            frame.render_widget(ErrorBanner::new(error, styles), rows[3]);
        }

        let text_fields = [
            (SignupField::Name, "Full name", "Jane Doe", rows[4]),
            (SignupField::Email, "Email", "you@example.com", rows[5]),
        ];
        for (field, label, placeholder, area) in text_fields {
            let widget = TextField::new(label, signup.form.text(field).unwrap_or_default(), styles)
                .placeholder(placeholder)
                .focused(focused(field))
                .disabled(signup.is_disabled(field));
            if let Some(position) = widget.cursor(area) {
                frame.set_cursor_position(position);
            }
            frame.render_widget(widget, area);
        }

        let password = TextField::new("Password", &signup.form.password, styles)
            .placeholder("••••••••")
            .note(if signup.show_password { "shown" } else { "hidden" })
            .masked(!signup.show_password)
            .focused(focused(SignupField::Password))
            .disabled(signup.is_disabled(SignupField::Password));
        if let Some(position) = password.cursor(rows[6]) {
            frame.set_cursor_position(position);
        }
        frame.render_widget(password, rows[6]);

        frame.render_widget(
            Line::styled(
                format!("At least {PASSWORD_MIN_LENGTH} characters"),
                styles.style("hint"),
            ),
            rows[7],
        );

        frame.render_widget(
            Checkbox::new("I agree to the Terms & Privacy Policy", signup.form.agree, styles)
                .focused(focused(SignupField::Agree))
                .disabled(signup.is_disabled(SignupField::Agree)),
            rows[8],
        );

        frame.render_widget(
            Button::new(signup.submit_label(), styles)
                .focused(focused(SignupField::Submit))
                .disabled(signup.is_disabled(SignupField::Submit)),
            rows[10],
        );

        frame.render_widget(
            Line::from(vec![
                Span::styled("Already have an account? ", styles.style("text")),
                link("Sign in", focused(SignupField::SignInLink), styles),
            ])
            .centered(),
            rows[12],
        );
        frame.render_widget(
            Paragraph::new("By signing up, you agree to our Terms & Privacy Policy.")
                .style(styles.style("hint"))
                .centered(),
            rows[13],
        );

        frame.render_widget(
            HelpBar::new(HELP, &state.config.config.keybindings, styles),
            rows[15],
        );
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{domain::route::Route, infrastructure::config::Config};

    fn render(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 28)).unwrap();
        terminal
            .draw(|f| SignupComponent::new().view(state, f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_form() {
        let mut state = AppState::new_with_config(Config::embedded().unwrap());
        state.navigate(Route::SignUp);

        let screen = render(&state);

        assert!(screen.contains("Create Account"));
        assert!(screen.contains("Full name"));
        assert!(screen.contains("[ ] I agree"));
        assert!(screen.contains("Already have an account? Sign in"));
        assert!(screen.contains("By signing up, you agree"));
    }

    #[test]
    fn test_loading_label() {
        let mut state = AppState::new_with_config(Config::embedded().unwrap());
        state.navigate(Route::SignUp);
        state.signup.form.name = "Jo".into();
        state.signup.submitting = true;

        let screen = render(&state);

        assert!(screen.contains("Signing up..."));
        assert!(screen.contains("Jo"));
    }
}
