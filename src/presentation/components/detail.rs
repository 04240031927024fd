//! Detail component
//!
//! Shows the raw identifier of the detail route and, once looked up, the record behind it.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::DetailState;

#[derive(Debug, Clone, Default)]
pub struct DetailComponent;

impl DetailComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, detail: &DetailState, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Detail ")
            .padding(Padding::horizontal(1));
        let paragraph = Paragraph::new(Self::lines(detail)).block(block);
        frame.render_widget(paragraph, area);
    }

    fn lines(detail: &DetailState) -> Vec<Line<'static>> {
        let Some(user_id) = &detail.user_id else {
            return vec![];
        };

        let mut lines = vec![Line::from(user_id.clone()).bold()];
        if detail.is_loading {
            lines.push(Line::from("Loading...").fg(Color::DarkGray));
        } else if let Some(user) = &detail.user {
            lines.push(Line::from(user.name().to_string()));
            lines.push(Line::from(user.email().to_string()).fg(Color::Gray));
        } else {
            lines.push(Line::from("User not found").fg(Color::DarkGray));
        }
        lines
    }
}
