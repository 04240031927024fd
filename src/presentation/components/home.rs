//! Home component
//!
//! Displays the user list published by the store.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::HomeState,
    domain::{text::fit_to_width, User},
    presentation::components::ViewContext,
};

const NAME_WIDTH: usize = 20;

/// Home list component
///
/// A stateless component; the list comes from the store snapshot and the
/// selection from [`HomeState`].
#[derive(Debug, Clone, Default)]
pub struct HomeComponent;

impl HomeComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, home: &HomeState, ctx: ViewContext<'_>, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Users ")
            .padding(Padding::horizontal(1));

        if ctx.users.is_empty() {
            let message = if ctx.is_refreshing {
                "Loading users..."
            } else {
                "No users to display"
            };
            let empty_text = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty_text, area);
            return;
        }

        let items: Vec<ListItem> = ctx.users.iter().map(Self::row).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().reversed())
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        list_state.select(home.selected_index);
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn row(user: &User) -> ListItem<'static> {
        ListItem::new(Line::from(vec![
            Span::styled(fit_to_width(user.name(), NAME_WIDTH), Style::default().bold()),
            Span::raw(" "),
            Span::styled(user.email().to_string(), Style::default().fg(Color::Gray)),
        ]))
    }
}
