//! Status bar component
//!
//! One line: current route, user count, loading indicator and the latest status message.

use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, presentation::components::ViewContext};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn line(state: &AppState, ctx: ViewContext<'_>) -> Line<'static> {
        let mut spans = vec![
            Span::styled(
                format!(" {} ", state.current_route().path()),
                Style::default().reversed(),
            ),
            Span::raw(format!(" {} users", ctx.users.len())),
        ];
        if ctx.is_refreshing {
            spans.push(Span::styled(" [loading]", Style::default().fg(Color::Yellow)));
        }
        if let Some(message) = &state.system.status_message {
            // Status messages never span lines
            spans.push(Span::raw(format!(" | {}", message.replace('\n', " "))));
        }
        Line::from(spans)
    }

    pub fn view(&self, state: &AppState, ctx: ViewContext<'_>, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(Self::line(state, ctx)), area);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{core::navigation::Route, domain::User};

    fn ctx(users: &[User], is_refreshing: bool) -> ViewContext<'_> {
        ViewContext {
            users,
            is_refreshing,
        }
    }

    #[test]
    fn test_idle_home() {
        let line = StatusBarComponent::line(&AppState::new(), ctx(&[], false));
        assert_eq!(line.to_string(), " home  0 users");
    }

    #[test]
    fn test_loading_indicator() {
        let line = StatusBarComponent::line(&AppState::new(), ctx(&[], true));
        assert_eq!(line.to_string(), " home  0 users [loading]");
    }

    #[test]
    fn test_detail_route_and_message() {
        let mut state = AppState::new();
        state.navigator.navigate(Route::detail("123"));
        state.system.status_message = Some("Loaded 3\nusers".into());
        let users = vec![User::new("1", "Nguyễn Văn A", "nguyenvana@example.com")];
        let line = StatusBarComponent::line(&state, ctx(&users, false));
        assert_eq!(line.to_string(), " detail/123  1 users | Loaded 3 users");
    }
}
