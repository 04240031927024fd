use crate::core::{
    cmd::Cmd,
    msg::Msg,
    navigation::{Entry, Route, Transition},
    state::{AppState, DetailState},
};

/// Initial state plus the commands of the first home appearance
pub fn init() -> (AppState, Vec<Cmd>) {
    let state = AppState::new();
    let commands = on_enter(state.navigator.current_entry());
    (state, commands)
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        Msg::Quit => {
            state.system.should_quit = true;
            (state, vec![])
        }

        Msg::BottomBarPressed(action) => {
            let transition = action.apply(&mut state.navigator);
            let commands = handle_transition(&mut state, transition);
            (state, commands)
        }

        Msg::NavigatedBack => {
            let transition = state.navigator.back();
            let commands = handle_transition(&mut state, transition);
            (state, commands)
        }

        Msg::NextUserSelected => {
            if *state.current_route() == Route::Home {
                state.home.select_next();
            }
            (state, vec![])
        }

        Msg::PreviousUserSelected => {
            if *state.current_route() == Route::Home {
                state.home.select_previous();
            }
            (state, vec![])
        }

        Msg::RefreshRequested => (state, vec![Cmd::RefreshUsers]),

        Msg::UsersPublished { count } => {
            state.home.set_user_count(count);
            state.system.status_message = Some(format!("Loaded {count} users"));
            (state, vec![])
        }

        Msg::UserDetailLoaded {
            entry_id,
            user_id,
            user,
        } => {
            // Ignore lookups for an entry that is no longer shown, even one with the same id
            if state.detail.entry_id == Some(entry_id) {
                state.detail.user = user;
                state.detail.is_loading = false;
            } else {
                log::debug!("dropping stale lookup of {user_id} for entry {entry_id}");
            }
            (state, vec![])
        }

        Msg::ErrorOccurred(error) => {
            state.system.status_message = Some(format!("[ERR] {error}"));
            (state, vec![])
        }
    }
}

fn handle_transition(state: &mut AppState, transition: Transition) -> Vec<Cmd> {
    match transition {
        Transition::Entered(route) => {
            log::debug!("entered {}", route.path());
            state.detail = match &route {
                Route::Home => DetailState::default(),
                Route::Detail { user_id } => {
                    DetailState::loading(state.navigator.current_entry().id(), user_id.clone())
                }
            };
            on_enter(state.navigator.current_entry())
        }
        Transition::Unchanged => vec![],
    }
}

/// Commands issued each time `entry` appears
fn on_enter(entry: &Entry) -> Vec<Cmd> {
    match entry.route() {
        Route::Home => vec![Cmd::RefreshUsers],
        Route::Detail { user_id } => vec![Cmd::LoadUserDetail {
            entry_id: entry.id(),
            user_id: user_id.clone(),
        }],
    }
}
