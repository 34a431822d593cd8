use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{
    core::state::AppState,
    infrastructure::tui::{Frame, TuiLike},
    integration::runtime::RuntimeStats,
    presentation::components::Components,
};

/// Draws one frame of the current state onto a terminal
#[derive(Debug, Default)]
pub struct Renderer {
    components: Components,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            components: Components::new(),
        }
    }

    pub async fn render<T: TuiLike>(
        &mut self,
        tui: &Arc<Mutex<T>>,
        state: &AppState,
        stats: &RuntimeStats,
    ) -> Result<()> {
        let mut guard = tui.lock().await;
        let components = &self.components;
        let mut draw = |f: &mut Frame<'_>| components.render(f, state, stats);
        guard.draw(&mut draw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        domain::route::Route, infrastructure::config::Config, infrastructure::tui::test::TestTui,
    };

    #[tokio::test]
    async fn test_renders_routed_view() {
        let tui = Arc::new(Mutex::new(TestTui::new(80, 30).unwrap()));
        let mut state = AppState::new_with_config(Config::embedded().unwrap());
        state.navigate(Route::SignIn);

        let mut renderer = Renderer::new();
        renderer
            .render(&tui, &state, &RuntimeStats::default())
            .await
            .unwrap();

        let tui = tui.lock().await;
        assert_eq!(tui.draw_count(), 1);
        assert!(tui.screen_text().contains("Welcome Back"));
    }
}
