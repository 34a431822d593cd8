//! Sign-in view

use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    core::state::{signin::SigninState, AppState},
    domain::form::{SigninField, PASSWORD_MIN_LENGTH},
    presentation::{
        components::{centered_column, FORM_WIDTH},
        config::{keybindings::Action, Styles},
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
    (Action::DemoLogin, "demo"),
    (Action::TogglePasswordVisibility, "show password"),
    (Action::Submit, "sign in"),
    (Action::Quit, "quit"),
];

/// Stateless renderer of [`SigninState`]
#[derive(Debug, Default)]
pub struct SigninComponent;

impl SigninComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let signin = &state.signin;
        let styles = &state.config.config.styles;
        let focused = |field: SigninField| signin.focus == field;

        let error_height = if signin.props.error.is_some() { 2 } else { 0 };
        let rows = Layout::vertical([
            Constraint::Length(1), // title
            Constraint::Length(1), // subtitle
            Constraint::Length(1),
            Constraint::Length(error_height),
            Constraint::Length(1), // demo button
            Constraint::Length(1), // divider
            Constraint::Length(3), // email
            Constraint::Length(3), // password
            Constraint::Length(1), // hint / forgot
            Constraint::Length(1), // remember me
            Constraint::Length(1),
            Constraint::Length(1), // submit
            Constraint::Length(1),
            Constraint::Length(1), // sign-up link
            Constraint::Length(1), // footer
            Constraint::Min(0),
            Constraint::Length(1), // help
        ])
        .split(centered_column(area, FORM_WIDTH));

        frame.render_widget(
            Line::styled("Welcome Back", styles.style("title")).centered(),
            rows[0],
        );
        frame.render_widget(
            Line::styled("Sign in to continue to TaskForge", styles.style("subtitle")).centered(),
            rows[1],
        );

        if let Some(error) = &signin.props.error {
            frame.render_widget(ErrorBanner::new(error, styles), rows[3]);
        }

        frame.render_widget(
            Button::new("✨ Try the demo account", styles)
                .focused(focused(SigninField::DemoButton))
                .disabled(signin.is_disabled(SigninField::DemoButton)),
            rows[4],
        );
        frame.render_widget(
            Line::styled("or continue with email", styles.style("hint")).centered(),
            rows[5],
        );

        let email = TextField::new("Email", &signin.form.email, styles)
            .placeholder("you@example.com")
            .focused(focused(SigninField::Email))
            .disabled(signin.is_disabled(SigninField::Email));
        if let Some(position) = email.cursor(rows[6]) {
            frame.set_cursor_position(position);
        }
        frame.render_widget(email, rows[6]);

        let password = password_field(signin, styles);
        if let Some(position) = password.cursor(rows[7]) {
            frame.set_cursor_position(position);
        }
        frame.render_widget(password, rows[7]);

        let hint = format!("At least {PASSWORD_MIN_LENGTH} characters");
        let mut hint_spans = vec![Span::styled(hint, styles.style("hint"))];
        if signin.forgot_password_enabled {
            let width = usize::from(rows[8].width);
            let used = hint_spans.iter().map(Span::width).sum::<usize>() + "Forgot?".len();
            hint_spans.push(Span::raw(" ".repeat(width.saturating_sub(used))));
            hint_spans.push(link(
                "Forgot?",
                focused(SigninField::ForgotPassword),
                styles,
            ));
        }
        frame.render_widget(Line::from(hint_spans), rows[8]);

        frame.render_widget(
            Checkbox::new("Remember me", signin.form.remember_me, styles)
                .focused(focused(SigninField::RememberMe))
                .disabled(signin.is_disabled(SigninField::RememberMe)),
            rows[9],
        );

        frame.render_widget(
            Button::new(signin.submit_label(), styles)
                .focused(focused(SigninField::Submit))
                .disabled(signin.is_disabled(SigninField::Submit)),
            rows[11],
        );

        frame.render_widget(
            Line::from(vec![
                Span::styled("Don't have an account? ", styles.style("text")),
                link("Sign up", focused(SigninField::SignUpLink), styles),
            ])
            .centered(),
            rows[13],
        );
        frame.render_widget(
            Paragraph::new("By signing in, you agree to our Terms & Privacy Policy.")
                .style(styles.style("hint"))
                .centered(),
            rows[14],
        );

        frame.render_widget(
            HelpBar::new(HELP, &state.config.config.keybindings, styles),
            rows[16],
        );
    }
}

fn password_field<'a>(signin: &'a SigninState, styles: &'a Styles) -> TextField<'a> {
    TextField::new("Password", &signin.form.password, styles)
        .placeholder("••••••••")
        .note(if signin.show_password { "shown" } else { "hidden" })
        .masked(!signin.show_password)
        .focused(signin.focus == SigninField::Password)
        .disabled(signin.is_disabled(SigninField::Password))
}
