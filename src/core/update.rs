use crate::{
    core::cmd::Cmd,
    core::msg::{router::RouterMsg, Msg},
    core::state::AppState,
    domain::route::Route,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    if msg.is_sensitive() {
        log::debug!("update: password field changed");
    } else if !msg.is_frequent() {
        log::debug!("update: {msg:?}");
    }

    let commands = match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => state.system.update(system_msg),

        Msg::Router(RouterMsg::Navigate(route)) => state.navigate(route),
        Msg::Router(RouterMsg::NavigatePath(path)) => state.navigate(Route::from_path(&path)),

        // Form messages (delegated to the form states)
        Msg::Signin(signin_msg) => state.signin.update(signin_msg),
        Msg::Signup(signup_msg) => state.signup.update(signup_msg),

        Msg::Toast(toast_msg) => state.toasts.update(toast_msg),
    };

    (state, commands)
}
