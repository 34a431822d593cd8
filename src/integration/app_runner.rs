use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{
        cmd::TuiCommand,
        msg::{system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{
        auth_handler::AuthHandler,
        tui::{real::RealTui, Event, TuiLike},
    },
    integration::{renderer::Renderer, runtime::Runtime},
};

/// Drives the Elm runtime from terminal events and renders the views
pub struct AppRunner<T: TuiLike> {
    runtime: Runtime,
    tui: Arc<Mutex<T>>,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
    renderer: Renderer,
}

impl AppRunner<RealTui> {
    pub fn new_with_real(
        state: AppState,
        tui: Arc<Mutex<RealTui>>,
        auth_handler: Arc<dyn AuthHandler>,
    ) -> Result<Self> {
        Self::new(state, tui, auth_handler)
    }
}

impl<T: TuiLike> AppRunner<T> {
    pub fn new(
        state: AppState,
        tui: Arc<Mutex<T>>,
        auth_handler: Arc<dyn AuthHandler>,
    ) -> Result<Self> {
        let mut runtime = Runtime::new_with_toasts(state, auth_handler);
        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_tx).map_err(|e| eyre!(e))?;

        Ok(Self {
            runtime,
            tui,
            tui_rx,
            renderer: Renderer::new(),
        })
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Queue navigation to `path` before (or while) running
    pub fn open(&mut self, path: &str) {
        self.runtime.send_raw_msg(RawMsg::Navigate(path.to_string()));
    }

    /// Run until quit or until the terminal stops producing events
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;

        self.update_cycle();
        self.render().await?;

        loop {
            let event = self.tui.lock().await.next().await;
            let Some(event) = event else {
                log::debug!("AppRunner: event source exhausted");
                break;
            };

            let mut should_render = self.forward_event(event);
            self.update_cycle();

            // Handle commands that require immediate host reaction
            while let Ok(cmd) = self.tui_rx.try_recv() {
                match cmd {
                    TuiCommand::Resize { width, height } => {
                        self.tui
                            .lock()
                            .await
                            .resize(Rect::new(0, 0, width, height))?;
                        should_render = true;
                    }
                }
            }

            if self.runtime.state().system.should_suspend {
                self.tui.lock().await.suspend()?;
                self.runtime.send_msg(Msg::System(SystemMsg::Resume));
                self.tui.lock().await.resume()?;
                self.update_cycle();
                should_render = true;
            }

            // Check quit condition from Elm state
            if self.runtime.state().system.should_quit {
                break;
            }

            if should_render {
                self.render().await?;
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// Returns whether the event asks for a frame
    fn forward_event(&mut self, event: Event) -> bool {
        match event {
            Event::Quit | Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
            Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            Event::Render => return true,
            Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
            Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            Event::Paste(text) => self.runtime.send_raw_msg(RawMsg::Paste(text)),
            Event::Error => self
                .runtime
                .send_raw_msg(RawMsg::Error("Terminal input error".to_string())),
            Event::Init | Event::FocusGained | Event::FocusLost | Event::Mouse(_) => {}
        }
        false
    }

    fn update_cycle(&mut self) {
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
            self.runtime
                .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
        }
    }

    async fn render(&mut self) -> Result<()> {
        let stats = self.runtime.get_stats();
        self.renderer
            .render(&self.tui, self.runtime.state(), &stats)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        domain::route::Route,
        infrastructure::{
            auth_handler::RecordingAuthHandler, config::Config, tui::test::TestTui,
        },
    };

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn runner(events: Vec<Event>) -> AppRunner<TestTui> {
        let tui = Arc::new(Mutex::new(TestTui::with_events(80, 30, events).unwrap()));
        let state = AppState::new_with_config(Config::embedded().unwrap());
        AppRunner::new(state, tui, Arc::new(RecordingAuthHandler::default())).unwrap()
    }

    #[tokio::test]
    async fn test_runs_until_events_exhausted() {
        let mut runner = runner(vec![Event::Init, Event::Tick]);
        runner.run().await.unwrap();

        assert!(!runner.runtime().state().system.should_quit);
        assert_eq!(runner.tui.lock().await.draw_count(), 1);
    }

    #[tokio::test]
    async fn test_ctrl_c_quits_before_rest_of_events() {
        let mut runner = runner(vec![
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            key(KeyCode::F(3), KeyModifiers::NONE),
        ]);
        runner.run().await.unwrap();

        assert!(runner.runtime().state().system.should_quit);
        assert_eq!(runner.runtime().state().route, Route::Home);
    }

    #[tokio::test]
    async fn test_open_path_and_type() {
        let mut runner = runner(vec![
            key(KeyCode::Char('j'), KeyModifiers::NONE),
            key(KeyCode::Char('o'), KeyModifiers::NONE),
            Event::Render,
        ]);
        runner.open("/sign-up/");
        runner.run().await.unwrap();

        let state = runner.runtime().state();
        assert_eq!(state.route, Route::SignUp);
        assert_eq!(state.signup.form.name, "jo");
        assert_eq!(runner.tui.lock().await.draw_count(), 2);
    }

    #[tokio::test]
    async fn test_resize_and_suspend() {
        let mut runner = runner(vec![
            Event::Resize(100, 40),
            key(KeyCode::Char('z'), KeyModifiers::CONTROL),
        ]);
        runner.run().await.unwrap();

        let tui = runner.tui.lock().await;
        assert_eq!(tui.buffer().area, Rect::new(0, 0, 100, 40));
        assert_eq!(tui.suspend_count(), 1);
        assert!(!runner.runtime().state().system.should_suspend);
    }
}
