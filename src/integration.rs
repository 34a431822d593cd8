//! Glue between the pure core and the terminal: the message runtime, the
//! renderer and the loop that drives both.

pub mod app_runner;
pub mod renderer;
pub mod runtime;
