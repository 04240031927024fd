use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{msg::Msg, navigation::BottomBarAction, raw_msg::RawMsg},
    presentation::config::keybindings::{Action, KeyBindings},
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, keybindings: &KeyBindings) -> Vec<Msg> {
    match raw {
        RawMsg::Quit => vec![Msg::Quit],
        RawMsg::Key(key) => translate_key_event(key, keybindings),
        RawMsg::Error(error) => vec![Msg::ErrorOccurred(error)],

        // Handled by the runner directly
        RawMsg::Resize(..) | RawMsg::Tick | RawMsg::Render => vec![],
    }
}

fn translate_key_event(key: KeyEvent, keybindings: &KeyBindings) -> Vec<Msg> {
    // Ctrl-C always quits, regardless of user bindings
    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
        return vec![Msg::Quit];
    }

    match keybindings.get(&vec![key]) {
        Some(action) => translate_action(*action),
        None => vec![],
    }
}

fn translate_action(action: Action) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::Quit],
        Action::Home => vec![Msg::BottomBarPressed(BottomBarAction::Home)],
        Action::Detail => vec![Msg::BottomBarPressed(BottomBarAction::Detail)],
        Action::Back => vec![Msg::NavigatedBack],
        Action::ScrollUp => vec![Msg::PreviousUserSelected],
        Action::ScrollDown => vec![Msg::NextUserSelected],
        Action::Refresh => vec![Msg::RefreshRequested],
    }
}
