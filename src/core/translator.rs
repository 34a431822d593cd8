use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    core::{
        msg::{
            router::RouterMsg, signin::SigninMsg, signup::SignupMsg, system::SystemMsg,
            toast::ToastMsg, Msg,
        },
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::{
        form::{FieldValue, SigninField, SignupField},
        notification::Notification,
        route::Route,
    },
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // Ticks only matter while notifications are counting down
        RawMsg::Tick if state.toasts.is_empty() => vec![],
        RawMsg::Tick => vec![Msg::Toast(ToastMsg::Elapsed(state.system.tick_interval))],
        RawMsg::Render => vec![],

        // User input - translate based on focus and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) => translate_paste(&text, state),

        RawMsg::Navigate(path) => vec![Msg::Router(RouterMsg::NavigatePath(path))],
        RawMsg::Error(error) => vec![Msg::Toast(ToastMsg::Push(Notification::error(error)))],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    // Handle global key bindings first
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = key
    {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    // The focused control gets first pick of plain keys
    if let Some(msgs) = translate_focused_input(key, state) {
        return msgs;
    }

    let normalized = KeyEvent::new(key.code, key.modifiers);
    if let Some(action) = state.config.config.keybindings.get(&vec![normalized]) {
        return translate_action_to_msg(*action, state);
    }

    vec![] // No matching keybinding found
}

fn translate_focused_input(key: KeyEvent, state: &AppState) -> Option<Vec<Msg>> {
    match state.route {
        Route::SignIn => {
            let field = state.signin.focus;
            let value = if field.kind().is_editable() {
                edit_text(key, state.signin.form.text(field).unwrap_or_default())
                    .map(FieldValue::Text)
            } else if is_space(key) {
                state.signin.toggled(field)
            } else {
                None
            }?;
            Some(vec![Msg::Signin(SigninMsg::FieldChanged(field, value))])
        }
        Route::SignUp => {
            let field = state.signup.focus;
            let value = if field.kind().is_editable() {
                edit_text(key, state.signup.form.text(field).unwrap_or_default())
                    .map(FieldValue::Text)
            } else if is_space(key) {
                state.signup.toggled(field)
            } else {
                None
            }?;
            Some(vec![Msg::Signup(SignupMsg::FieldChanged(field, value))])
        }
        Route::Home | Route::Test => None,
    }
}

/// New text for a single-line input after `key`, if the key edits text
fn edit_text(key: KeyEvent, current: &str) -> Option<String> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => Some(format!("{current}{c}")),
        KeyCode::Backspace => {
            let mut text = current.to_string();
            text.pop();
            Some(text)
        }
        _ => None,
    }
}

fn is_space(key: KeyEvent) -> bool {
    key.code == KeyCode::Char(' ') && key.modifiers.is_empty()
}

fn translate_paste(text: &str, state: &AppState) -> Vec<Msg> {
    let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
    match state.route {
        Route::SignIn => {
            let field = state.signin.focus;
            match state.signin.form.text(field) {
                Some(current) => vec![Msg::Signin(SigninMsg::FieldChanged(
                    field,
                    FieldValue::Text(format!("{current}{pasted}")),
                ))],
                None => vec![],
            }
        }
        Route::SignUp => {
            let field = state.signup.focus;
            match state.signup.form.text(field) {
                Some(current) => vec![Msg::Signup(SignupMsg::FieldChanged(
                    field,
                    FieldValue::Text(format!("{current}{pasted}")),
                ))],
                None => vec![],
            }
        }
        Route::Home | Route::Test => vec![],
    }
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],

        Action::GoHome => navigate(Route::Home),
        Action::GoSignIn => navigate(Route::SignIn),
        Action::GoSignUp => navigate(Route::SignUp),
        Action::GoTest => navigate(Route::Test),

        Action::DismissNotifications => vec![Msg::Toast(ToastMsg::DismissAll)],

        Action::FocusNext => for_form(state, SigninMsg::FocusNext, SignupMsg::FocusNext),
        Action::FocusPrev => for_form(state, SigninMsg::FocusPrev, SignupMsg::FocusPrev),
        Action::Submit => for_form(state, SigninMsg::Submit, SignupMsg::Submit),
        Action::TogglePasswordVisibility => for_form(
            state,
            SigninMsg::TogglePasswordVisibility,
            SignupMsg::TogglePasswordVisibility,
        ),

        Action::DemoLogin if state.route == Route::SignIn => {
            vec![Msg::Signin(SigninMsg::DemoLogin)]
        }
        Action::ForgotPassword if state.route == Route::SignIn => {
            vec![Msg::Signin(SigninMsg::ForgotPassword)]
        }
        Action::DemoLogin | Action::ForgotPassword => vec![],

        Action::Activate => activate_focused(state),
    }
}

fn navigate(route: Route) -> Vec<Msg> {
    vec![Msg::Router(RouterMsg::Navigate(route))]
}

fn for_form(state: &AppState, signin: SigninMsg, signup: SignupMsg) -> Vec<Msg> {
    match state.route {
        Route::SignIn => vec![Msg::Signin(signin)],
        Route::SignUp => vec![Msg::Signup(signup)],
        Route::Home | Route::Test => vec![],
    }
}

/// Enter on a control: text inputs submit their form like an HTML form would
fn activate_focused(state: &AppState) -> Vec<Msg> {
    match state.route {
        Route::SignIn => match state.signin.focus {
            SigninField::DemoButton => vec![Msg::Signin(SigninMsg::DemoLogin)],
            SigninField::Email | SigninField::Password | SigninField::Submit => {
                vec![Msg::Signin(SigninMsg::Submit)]
            }
            SigninField::ForgotPassword => vec![Msg::Signin(SigninMsg::ForgotPassword)],
            field @ SigninField::RememberMe => state
                .signin
                .toggled(field)
                .map(|value| vec![Msg::Signin(SigninMsg::FieldChanged(field, value))])
                .unwrap_or_default(),
            SigninField::SignUpLink => navigate(Route::SignUp),
        },
        Route::SignUp => match state.signup.focus {
            SignupField::Name | SignupField::Email | SignupField::Password | SignupField::Submit => {
                vec![Msg::Signup(SignupMsg::Submit)]
            }
            field @ SignupField::Agree => state
                .signup
                .toggled(field)
                .map(|value| vec![Msg::Signup(SignupMsg::FieldChanged(field, value))])
                .unwrap_or_default(),
            SignupField::SignInLink => navigate(Route::SignIn),
        },
        Route::Home => navigate(Route::SignIn),
        Route::Test => vec![],
    }
}
