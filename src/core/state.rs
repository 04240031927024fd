use crate::{
    core::navigation::{Navigator, Route},
    domain::User,
};

/// State of the navigable UI tree
///
/// The user list itself lives in the [`UserStore`](crate::core::store::UserStore);
/// this only tracks how many users were last published so the selection can be clamped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub navigator: Navigator,
    pub home: HomeState,
    pub detail: DetailState,
    pub system: SystemState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_route(&self) -> &Route {
        self.navigator.current()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeState {
    pub user_count: usize,
    pub selected_index: Option<usize>,
}

impl HomeState {
    pub fn select_next(&mut self) {
        if self.user_count == 0 {
            self.selected_index = None;
            return;
        }
        let max_index = self.user_count - 1;
        self.selected_index = Some(match self.selected_index {
            Some(current) => (current + 1).min(max_index),
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if self.user_count == 0 {
            self.selected_index = None;
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(current) => current.saturating_sub(1),
            None => 0,
        });
    }

    pub fn set_user_count(&mut self, count: usize) {
        self.user_count = count;
        self.selected_index = match self.selected_index {
            _ if count == 0 => None,
            Some(index) => Some(index.min(count - 1)),
            None => None,
        };
    }
}

/// What the detail screen shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailState {
    /// Back stack entry the shown lookup belongs to
    pub entry_id: Option<u64>,
    pub user_id: Option<String>,
    pub user: Option<User>,
    pub is_loading: bool,
}

impl DetailState {
    pub fn loading(entry_id: u64, user_id: impl Into<String>) -> Self {
        Self {
            entry_id: Some(entry_id),
            user_id: Some(user_id.into()),
            user: None,
            is_loading: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemState {
    pub should_quit: bool,
    pub status_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn home(user_count: usize, selected_index: Option<usize>) -> HomeState {
        HomeState {
            user_count,
            selected_index,
        }
    }

    #[test]
    fn test_new_state_is_at_home() {
        let state = AppState::new();
        assert_eq!(state.current_route(), &Route::Home);
        assert_eq!(state.home, home(0, None));
        assert!(!state.system.should_quit);
    }

    #[test]
    fn test_select_next_clamps_at_end() {
        let mut state = home(3, None);
        state.select_next();
        assert_eq!(state.selected_index, Some(0));
        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected_index, Some(2));
    }

    #[test]
    fn test_select_previous_clamps_at_start() {
        let mut state = home(3, Some(1));
        state.select_previous();
        state.select_previous();
        assert_eq!(state.selected_index, Some(0));
    }

    #[test]
    fn test_selection_on_empty_list() {
        let mut state = home(0, None);
        state.select_next();
        assert_eq!(state.selected_index, None);
        state.select_previous();
        assert_eq!(state.selected_index, None);
    }

    #[test]
    fn test_set_user_count_clamps_selection() {
        let mut state = home(3, Some(2));
        state.set_user_count(2);
        assert_eq!(state, home(2, Some(1)));
        state.set_user_count(0);
        assert_eq!(state, home(0, None));
    }
}
