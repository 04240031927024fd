//! Bottom navigation bar
//!
//! Three equal slots: home, a decorative centre button and detail.

use ratatui::{prelude::*, widgets::*};

use crate::core::navigation::{BottomBarAction, Route};

#[derive(Debug, Clone, Default)]
pub struct BottomBarComponent;

impl BottomBarComponent {
    pub const HEIGHT: u16 = 3;

    pub fn new() -> Self {
        Self
    }

    pub fn label(action: BottomBarAction) -> &'static str {
        match action {
            BottomBarAction::Home => "Home",
            BottomBarAction::Center => "●",
            BottomBarAction::Detail => "Detail",
        }
    }

    pub fn view(&self, route: &Route, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let slots = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(inner);
        for (action, slot) in BottomBarAction::ALL.iter().zip(slots.iter()) {
            let style = if action.is_active(route) {
                Style::default().reversed()
            } else if *action == BottomBarAction::Center {
                Style::default().fg(Color::Magenta)
            } else {
                Style::default()
            };
            let label = Paragraph::new(Self::label(*action))
                .style(style)
                .alignment(Alignment::Center);
            frame.render_widget(label, *slot);
        }
    }
}
