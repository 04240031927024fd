/// Side effects requested by [`update`](crate::core::update::update)
///
/// Commands describe what should happen; the runner decides how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Ask the user store to refresh from the repository
    RefreshUsers,
    /// Look up a single user for the detail entry `entry_id`
    LoadUserDetail { entry_id: u64, user_id: String },
}
