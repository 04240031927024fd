//! Navigation back stack
//!
//! Two routes exist: `home` and `detail/{userId}`. The bottom bar navigates with
//! "pop to start, single top" semantics, so tapping its slots never grows the stack
//! beyond the start entry plus one.

use strum::Display;

/// Identifier the bottom bar opens in the detail screen.
///
/// It is not derived from the list selection.
pub const DEMO_USER_ID: &str = "123";

/// A UI destination
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum Route {
    #[strum(to_string = "home")]
    Home,
    #[strum(to_string = "detail")]
    Detail { user_id: String },
}

impl Route {
    pub fn detail(user_id: impl Into<String>) -> Self {
        Route::Detail {
            user_id: user_id.into(),
        }
    }

    /// Path form, e.g. `home` or `detail/123`
    pub fn path(&self) -> String {
        match self {
            Route::Home => self.to_string(),
            Route::Detail { user_id } => format!("{self}/{user_id}"),
        }
    }

    /// Inverse of [`Route::path`]. Everything after the first `/` of a detail path is the id.
    pub fn parse(path: &str) -> Option<Self> {
        match path.split_once('/') {
            None if path == "home" => Some(Route::Home),
            Some(("detail", user_id)) => Some(Route::detail(user_id)),
            _ => None,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        match self {
            Route::Home => None,
            Route::Detail { user_id } => Some(user_id),
        }
    }
}

/// Options for [`Navigator::navigate_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavOptions {
    /// Pop every entry above the start entry before navigating
    pub pop_to_start: bool,
    /// Do not push `route` when it is already on top
    pub single_top: bool,
}

impl NavOptions {
    /// The policy every bottom bar tap uses
    pub const BOTTOM_BAR: Self = Self {
        pop_to_start: true,
        single_top: true,
    };
}

/// A back stack entry. Each push creates an entry with a fresh id, even for an equal route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: u64,
    route: Route,
}

impl Entry {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn route(&self) -> &Route {
        &self.route
    }
}

/// Result of a navigation operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A different entry is now visible
    Entered(Route),
    /// The visible entry is the same as before
    Unchanged,
}

/// Back stack that always holds at least the start (`home`) entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Entry>,
    next_id: u64,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Entry {
                id: 0,
                route: Route::Home,
            }],
            next_id: 1,
        }
    }

    pub fn current(&self) -> &Route {
        &self.top().route
    }

    /// The visible entry
    pub fn current_entry(&self) -> &Entry {
        self.top()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.stack
    }

    pub fn routes(&self) -> Vec<&Route> {
        self.stack.iter().map(Entry::route).collect()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push `route` on top of the stack
    pub fn navigate(&mut self, route: Route) -> Transition {
        self.navigate_with(route, NavOptions::default())
    }

    pub fn navigate_with(&mut self, route: Route, options: NavOptions) -> Transition {
        let before = self.top().id;

        if options.pop_to_start {
            self.stack.truncate(1);
        }
        if !(options.single_top && self.top().route == route) {
            self.push(route);
        }

        self.transition_from(before)
    }

    /// Pop the top entry unless it is the start entry
    pub fn back(&mut self) -> Transition {
        if self.stack.len() <= 1 {
            return Transition::Unchanged;
        }
        let before = self.top().id;
        self.stack.pop();
        self.transition_from(before)
    }

    fn push(&mut self, route: Route) {
        self.stack.push(Entry {
            id: self.next_id,
            route,
        });
        self.next_id += 1;
    }

    fn top(&self) -> &Entry {
        // The start entry is never popped
        &self.stack[self.stack.len() - 1]
    }

    fn transition_from(&self, before: u64) -> Transition {
        let top = self.top();
        if top.id == before {
            Transition::Unchanged
        } else {
            Transition::Entered(top.route.clone())
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

/// The three bottom bar slots, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum BottomBarAction {
    Home,
    /// Decorative centre slot without a screen
    Center,
    Detail,
}

impl BottomBarAction {
    pub const ALL: [BottomBarAction; 3] = [
        BottomBarAction::Home,
        BottomBarAction::Center,
        BottomBarAction::Detail,
    ];

    /// Destination of the slot, `None` for the centre placeholder
    pub fn route(&self) -> Option<Route> {
        match self {
            BottomBarAction::Home => Some(Route::Home),
            BottomBarAction::Center => None,
            BottomBarAction::Detail => Some(Route::detail(DEMO_USER_ID)),
        }
    }

    /// Navigate `navigator` the way a tap on this slot does
    pub fn apply(&self, navigator: &mut Navigator) -> Transition {
        match self.route() {
            Some(route) => navigator.navigate_with(route, NavOptions::BOTTOM_BAR),
            None => Transition::Unchanged,
        }
    }

    /// Whether this slot corresponds to `route`
    pub fn is_active(&self, route: &Route) -> bool {
        matches!(
            (self, route),
            (BottomBarAction::Home, Route::Home) | (BottomBarAction::Detail, Route::Detail { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Route::Home, "home")]
    #[case(Route::detail("123"), "detail/123")]
    #[case(Route::detail("2"), "detail/2")]
    #[case(Route::detail("a/b"), "detail/a/b")]
    #[case(Route::detail("/"), "detail//")]
    #[case(Route::detail(""), "detail/")]
    fn test_route_path_round_trip(#[case] route: Route, #[case] path: &str) {
        assert_eq!(route.path(), path);
        assert_eq!(Route::parse(path), Some(route));
    }

    #[rstest]
    #[case("")]
    #[case("detail")]
    #[case("settings")]
    #[case("settings/1")]
    #[case("home/1")]
    fn test_route_parse_rejects_unknown(#[case] path: &str) {
        assert_eq!(Route::parse(path), None);
    }

    #[test]
    fn test_navigator_starts_at_home() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), &Route::Home);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_plain_navigate_pushes_duplicates() {
        let mut nav = Navigator::new();
        assert_eq!(
            nav.navigate(Route::detail("1")),
            Transition::Entered(Route::detail("1"))
        );
        assert_eq!(
            nav.navigate(Route::detail("1")),
            Transition::Entered(Route::detail("1"))
        );
        assert_eq!(nav.depth(), 3);
    }

    #[test]
    fn test_single_top_skips_duplicate() {
        let mut nav = Navigator::new();
        let options = NavOptions {
            pop_to_start: false,
            single_top: true,
        };
        nav.navigate_with(Route::detail("1"), options);
        assert_eq!(
            nav.navigate_with(Route::detail("1"), options),
            Transition::Unchanged
        );
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn test_pop_to_start_drops_everything_above_home() {
        let mut nav = Navigator::new();
        nav.navigate(Route::detail("1"));
        nav.navigate(Route::detail("2"));
        nav.navigate_with(
            Route::detail("3"),
            NavOptions {
                pop_to_start: true,
                single_top: false,
            },
        );
        assert_eq!(nav.routes(), vec![&Route::Home, &Route::detail("3")]);
    }

    #[test]
    fn test_back_pops_until_start() {
        let mut nav = Navigator::new();
        nav.navigate(Route::detail("1"));
        assert_eq!(nav.back(), Transition::Entered(Route::Home));
        assert_eq!(nav.back(), Transition::Unchanged);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_entries_get_fresh_ids() {
        let mut nav = Navigator::new();
        nav.navigate(Route::detail("1"));
        nav.back();
        nav.navigate(Route::detail("1"));
        let ids: Vec<u64> = nav.entries().iter().map(Entry::id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    fn navigator_at(path: &[BottomBarAction]) -> Navigator {
        let mut nav = Navigator::new();
        for action in path {
            action.apply(&mut nav);
        }
        nav
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![BottomBarAction::Home])]
    #[case(vec![BottomBarAction::Detail])]
    #[case(vec![BottomBarAction::Detail, BottomBarAction::Detail])]
    #[case(vec![BottomBarAction::Center, BottomBarAction::Detail, BottomBarAction::Home])]
    fn test_first_slot_always_yields_single_home(#[case] prior: Vec<BottomBarAction>) {
        let mut nav = navigator_at(&prior);
        BottomBarAction::Home.apply(&mut nav);
        assert_eq!(nav.routes(), vec![&Route::Home]);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![BottomBarAction::Home])]
    #[case(vec![BottomBarAction::Detail])]
    #[case(vec![BottomBarAction::Detail, BottomBarAction::Home, BottomBarAction::Center])]
    fn test_last_slot_always_yields_demo_detail(#[case] prior: Vec<BottomBarAction>) {
        let mut nav = navigator_at(&prior);
        BottomBarAction::Detail.apply(&mut nav);
        assert_eq!(nav.current(), &Route::detail("123"));
        assert_eq!(nav.routes(), vec![&Route::Home, &Route::detail("123")]);
    }

    #[test]
    fn test_home_detail_home_leaves_single_home_entry() {
        let mut nav = Navigator::new();
        assert_eq!(
            BottomBarAction::Detail.apply(&mut nav),
            Transition::Entered(Route::detail("123"))
        );
        assert_eq!(
            BottomBarAction::Home.apply(&mut nav),
            Transition::Entered(Route::Home)
        );
        assert_eq!(nav.routes(), vec![&Route::Home]);
        assert_eq!(nav.entries()[0].id(), 0);
    }

    #[test]
    fn test_home_tap_on_home_is_unchanged() {
        let mut nav = Navigator::new();
        assert_eq!(BottomBarAction::Home.apply(&mut nav), Transition::Unchanged);
    }

    #[test]
    fn test_detail_tap_on_detail_enters_fresh_entry() {
        let mut nav = Navigator::new();
        BottomBarAction::Detail.apply(&mut nav);
        let first = nav.entries()[1].id();
        assert_eq!(
            BottomBarAction::Detail.apply(&mut nav),
            Transition::Entered(Route::detail("123"))
        );
        assert_ne!(nav.entries()[1].id(), first);
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn test_center_slot_has_no_screen() {
        let mut nav = navigator_at(&[BottomBarAction::Detail]);
        assert_eq!(BottomBarAction::Center.route(), None);
        assert_eq!(BottomBarAction::Center.apply(&mut nav), Transition::Unchanged);
        assert_eq!(nav.current(), &Route::detail("123"));
    }

    #[test]
    fn test_is_active() {
        assert!(BottomBarAction::Home.is_active(&Route::Home));
        assert!(BottomBarAction::Detail.is_active(&Route::detail("9")));
        assert!(!BottomBarAction::Center.is_active(&Route::Home));
        assert!(!BottomBarAction::Home.is_active(&Route::detail("1")));
    }
}
