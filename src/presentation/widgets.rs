//! Reusable form widgets
//!
//! Widgets take plain values plus the configured styles and know nothing
//! about application state.

pub mod banner;
pub mod button;
pub mod checkbox;
pub mod help_bar;
pub mod text_field;
pub mod toast;
