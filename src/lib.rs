//! # TaskForge Auth
//!
//! Sign-in and sign-up forms for TaskForge as a terminal user interface,
//! built with Rust and Ratatui. State changes follow an Elm-like
//! architecture.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): application state, one value per view
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects (toasts, timers, auth callbacks)
//! - **View** (`presentation::components`): rendering of the current state
//!
//! ## Example Usage
//!
//! ```rust
//! use taskforge_auth::{
//!     core::{msg::{signin::SigninMsg, Msg}, state::AppState, update::update},
//!     domain::{form::DEMO_EMAIL, route::Route},
//! };
//!
//! let mut state = AppState::default();
//! state.navigate(Route::SignIn);
//!
//! let (state, commands) = update(Msg::Signin(SigninMsg::DemoLogin), state);
//!
//! assert_eq!(state.signin.form.email, DEMO_EMAIL);
//! assert_eq!(commands.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Elm architecture: state, messages, update, commands
//! - [`domain`] - Routes, forms, validation and notifications
//! - [`infrastructure`] - Terminal, CLI, config, notifier and auth callbacks
//! - [`integration`] - Runtime and the terminal-driven app loop
//! - [`presentation`] - Views, widgets, keybindings and styles

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use integration::runtime::{Runtime, RuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
