//! UI components

pub mod bottom_bar;
pub mod detail;
pub mod home;
pub mod status_bar;

use ratatui::prelude::*;

use crate::{
    core::{navigation::Route, state::AppState},
    domain::User,
};

use self::{
    bottom_bar::BottomBarComponent, detail::DetailComponent, home::HomeComponent,
    status_bar::StatusBarComponent,
};

/// Data read from outside [`AppState`] while rendering
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub users: &'a [User],
    pub is_refreshing: bool,
}

/// Root of the UI tree: the current screen, a status line and the bottom bar
#[derive(Debug, Default)]
pub struct Components {
    home: HomeComponent,
    detail: DetailComponent,
    status_bar: StatusBarComponent,
    bottom_bar: BottomBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState, ctx: ViewContext<'_>) {
        let [content, status, bottom] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(BottomBarComponent::HEIGHT),
        ])
        .areas(area);

        match state.current_route() {
            Route::Home => self.home.view(&state.home, ctx, frame, content),
            Route::Detail { .. } => self.detail.view(&state.detail, frame, content),
        }
        self.status_bar.view(state, ctx, frame, status);
        self.bottom_bar.view(state.current_route(), frame, bottom);
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::Result;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::core::{msg::Msg, navigation::BottomBarAction, update::update};

    fn render(state: &AppState, users: &[User]) -> Result<String> {
        let mut terminal = Terminal::new(TestBackend::new(60, 14))?;
        let components = Components::new();
        terminal.draw(|frame| {
            let ctx = ViewContext {
                users,
                is_refreshing: false,
            };
            let area = frame.area();
            components.render(frame, area, state, ctx);
        })?;
        Ok(terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect())
    }

    #[test]
    fn test_home_route_renders_list_and_bars() -> Result<()> {
        let users = vec![User::new("1", "Nguyễn Văn A", "nguyenvana@example.com")];
        let screen = render(&AppState::new(), &users)?;
        assert!(screen.contains("nguyenvana@example.com"));
        assert!(screen.contains("home"));
        assert!(screen.contains("Home"));
        assert!(screen.contains("Detail"));
        Ok(())
    }

    #[test]
    fn test_detail_route_renders_identifier() -> Result<()> {
        let (state, _) = update(
            Msg::BottomBarPressed(BottomBarAction::Detail),
            AppState::new(),
        );
        let screen = render(&state, &[])?;
        assert!(screen.contains("123"));
        assert!(screen.contains("detail/123"));
        Ok(())
    }
}
