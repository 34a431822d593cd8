//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.
//! The router picks exactly one view per frame; toasts are drawn over it.

use ratatui::prelude::*;

use crate::{core::state::AppState, domain::route::Route, integration::runtime::RuntimeStats};

pub mod home;
pub mod signin;
pub mod signup;
pub mod test_view;
pub mod toasts;

pub use home::HomeComponent;
pub use signin::SigninComponent;
pub use signup::SignupComponent;
pub use test_view::TestViewComponent;
pub use toasts::ToastsComponent;

/// Column width shared by the forms
pub const FORM_WIDTH: u16 = 56;

/// Horizontally centered column at most `width` wide
pub fn centered_column(area: Rect, width: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(layout::Flex::Center)
        .areas(area);
    column
}

/// Collection of all components
#[derive(Debug, Default)]
pub struct Components {
    pub home: HomeComponent,
    pub signin: SigninComponent,
    pub signup: SignupComponent,
    pub test_view: TestViewComponent,
    pub toasts: ToastsComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the routed view, then the toast overlay
    pub fn render(&self, frame: &mut Frame, state: &AppState, stats: &RuntimeStats) {
        let area = frame.area();
        let [_, main] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        match state.route {
            Route::Home => self.home.view(state, frame, main),
            Route::SignIn => self.signin.view(state, frame, main),
            Route::SignUp => self.signup.view(state, frame, main),
            Route::Test => self.test_view.view(state, stats, frame, main),
        }

        self.toasts.view(state, frame, area);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_centered_column() {
        let area = Rect::new(0, 0, 100, 10);
        assert_eq!(centered_column(area, 40), Rect::new(30, 0, 40, 10));
        assert_eq!(centered_column(Rect::new(0, 0, 30, 10), 40), Rect::new(0, 0, 30, 10));
    }
}
