use crate::{core::navigation::BottomBarAction, domain::User};

/// Domain messages processed by [`update`](crate::core::update::update)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Quit,
    BottomBarPressed(BottomBarAction),
    NavigatedBack,
    NextUserSelected,
    PreviousUserSelected,
    RefreshRequested,
    /// The user store published a new snapshot
    UsersPublished { count: usize },
    /// A detail lookup for the back stack entry `entry_id` finished; `user` is `None` when the id is unknown
    UserDetailLoaded {
        entry_id: u64,
        user_id: String,
        user: Option<User>,
    },
    ErrorOccurred(String),
}
