pub mod signin;
pub mod signup;
pub mod system;
pub mod toast;

use crate::{core::cmd::Cmd, domain::route::Route, infrastructure::config::Config};

use signin::SigninState;
use signup::SignupState;
use system::SystemState;
use toast::ToastState;

/// Unified application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub route: Route,
    pub signin: SigninState,
    pub signup: SignupState,
    pub toasts: ToastState,
    pub system: SystemState,
    pub config: ConfigState,
    /// Number of form mounts so far; doubles as the next submission ticket
    mounts: u64,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new_with_config(Config::default())
    }
}

impl AppState {
    /// Initialize AppState with the specified config, showing the home view
    pub fn new_with_config(config: Config) -> Self {
        let submit_delay = config.submit_delay();
        Self {
            route: Route::Home,
            signin: SigninState::new(submit_delay),
            signup: SignupState::new(submit_delay),
            toasts: ToastState::new(config.toast_duration()),
            system: SystemState::default(),
            config: ConfigState { config },
            mounts: 0,
        }
    }

    /// Offer the "Forgot?" control on the sign-in view
    pub fn with_forgot_password(mut self, enabled: bool) -> Self {
        self.signin.forgot_password_enabled = enabled;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: f64) -> Self {
        self.system = self.system.with_tick_rate(tick_rate);
        self
    }

    /// Switch views. The destination form is mounted fresh; staying on the
    /// same route keeps the current form as it is.
    pub fn navigate(&mut self, route: Route) -> Vec<Cmd> {
        if route == self.route {
            return vec![];
        }
        self.route = route;
        self.mounts += 1;
        match route {
            Route::SignIn => self.signin.remount(self.mounts),
            Route::SignUp => self.signup.remount(self.mounts),
            Route::Home | Route::Test => {}
        }
        log::info!("navigated to {}", route.path());
        vec![]
    }

    /// Loading flag of the form currently on screen
    pub fn is_loading(&self) -> bool {
        match self.route {
            Route::SignIn => self.signin.is_loading(),
            Route::SignUp => self.signup.is_loading(),
            Route::Home | Route::Test => false,
        }
    }

    pub fn mounts(&self) -> u64 {
        self.mounts
    }
}
