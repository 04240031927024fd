use pretty_assertions::assert_eq;
use rstest::rstest;

use userdeck::core::{
    cmd::Cmd,
    msg::Msg,
    navigation::{BottomBarAction, Navigator, Route, DEMO_USER_ID},
    update::{init, update},
};

fn press_all(actions: &[BottomBarAction]) -> Navigator {
    let mut navigator = Navigator::new();
    for action in actions {
        action.apply(&mut navigator);
    }
    navigator
}

#[rstest]
#[case::from_start(&[])]
#[case::after_detail(&[BottomBarAction::Detail])]
#[case::after_center(&[BottomBarAction::Center, BottomBarAction::Detail])]
#[case::repeated(&[BottomBarAction::Detail, BottomBarAction::Home, BottomBarAction::Detail])]
fn test_home_action_always_lands_on_single_home(#[case] before: &[BottomBarAction]) {
    let mut navigator = press_all(before);
    BottomBarAction::Home.apply(&mut navigator);

    assert_eq!(navigator.current(), &Route::Home);
    assert_eq!(navigator.routes(), vec![&Route::Home]);
}

#[rstest]
#[case::from_start(&[])]
#[case::after_home(&[BottomBarAction::Home])]
#[case::after_detail(&[BottomBarAction::Detail, BottomBarAction::Detail])]
#[case::after_center(&[BottomBarAction::Detail, BottomBarAction::Center])]
fn test_detail_action_always_lands_on_demo_user(#[case] before: &[BottomBarAction]) {
    let mut navigator = press_all(before);
    BottomBarAction::Detail.apply(&mut navigator);

    assert_eq!(navigator.current(), &Route::detail(DEMO_USER_ID));
    assert_eq!(navigator.routes(), vec![&Route::Home, &Route::detail("123")]);
}

#[test]
fn test_home_detail_home_round_trip() {
    let navigator = press_all(&[
        BottomBarAction::Home,
        BottomBarAction::Detail,
        BottomBarAction::Home,
    ]);
    assert_eq!(navigator.depth(), 1);
    assert_eq!(navigator.current(), &Route::Home);
}

#[test]
fn test_center_action_never_changes_destination() {
    let mut navigator = press_all(&[BottomBarAction::Detail]);
    let before = navigator.entries().to_vec();
    BottomBarAction::Center.apply(&mut navigator);
    assert_eq!(navigator.entries(), before.as_slice());
}

#[test]
fn test_route_paths() {
    assert_eq!(Route::Home.path(), "home");
    assert_eq!(Route::detail("abc").path(), "detail/abc");
    assert_eq!(Route::parse("detail/123"), Some(Route::detail("123")));
    assert_eq!(Route::parse("settings"), None);
}

#[test]
fn test_update_issues_refresh_on_each_home_appearance() {
    let (state, commands) = init();
    assert_eq!(commands, vec![Cmd::RefreshUsers]);

    let (state, commands) = update(Msg::BottomBarPressed(BottomBarAction::Home), state);
    assert_eq!(commands, vec![]);

    let (state, commands) = update(Msg::BottomBarPressed(BottomBarAction::Detail), state);
    assert_eq!(
        commands,
        vec![Cmd::LoadUserDetail {
            entry_id: 1,
            user_id: "123".to_owned()
        }]
    );

    let (state, commands) = update(Msg::NavigatedBack, state);
    assert_eq!(state.current_route(), &Route::Home);
    assert_eq!(commands, vec![Cmd::RefreshUsers]);
}
