use std::time::Duration;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// System-related state
#[derive(Debug, Clone)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    /// Time represented by one tick, used to age notifications
    pub tick_interval: Duration,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            should_quit: false,
            should_suspend: false,
            tick_interval: Duration::from_millis(250),
        }
    }
}

impl SystemState {
    /// Tick interval for a rate given in ticks per second
    pub fn with_tick_rate(mut self, tick_rate: f64) -> Self {
        if tick_rate.is_finite() && tick_rate > 0.0 {
            self.tick_interval = Duration::from_secs_f64(1.0 / tick_rate);
        }
        self
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![]
            }

            SystemMsg::Resize(width, height) => vec![Cmd::Tui(TuiCommand::Resize { width, height })],
        }
    }
}
