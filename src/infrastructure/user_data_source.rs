//! Mocked user data source
//!
//! Produces a fixed set of user records after an artificial delay. Nothing is read
//! from disk or the network.

use std::time::Duration;

use tokio::time::sleep;

use crate::{domain::User, infrastructure::config::DataSourceConfig};

/// Data source returning hard-coded users after a simulated latency.
#[derive(Debug, Clone)]
pub struct UserDataSource {
    fetch_all_delay: Duration,
    fetch_by_id_delay: Duration,
}

impl UserDataSource {
    pub fn new() -> Self {
        Self::with_config(&DataSourceConfig::default())
    }

    pub fn with_config(config: &DataSourceConfig) -> Self {
        Self {
            fetch_all_delay: Duration::from_millis(config.fetch_all_delay_ms),
            fetch_by_id_delay: Duration::from_millis(config.fetch_by_id_delay_ms),
        }
    }

    pub fn fetch_all_delay(&self) -> Duration {
        self.fetch_all_delay
    }

    pub fn fetch_by_id_delay(&self) -> Duration {
        self.fetch_by_id_delay
    }

    /// Returns every user, in a fixed order, once the list latency has elapsed.
    pub async fn fetch_all(&self) -> Vec<User> {
        sleep(self.fetch_all_delay).await;
        let users = mocked_users();
        log::debug!("fetched {} users", users.len());
        users
    }

    /// Returns the user with the given identifier, or `None` when it is unknown.
    pub async fn fetch_by_id(&self, id: &str) -> Option<User> {
        sleep(self.fetch_by_id_delay).await;
        let user = mocked_users().into_iter().find(|user| user.id() == id);
        log::debug!("fetched user {id}: found={}", user.is_some());
        user
    }
}

impl Default for UserDataSource {
    fn default() -> Self {
        Self::new()
    }
}

fn mocked_users() -> Vec<User> {
    vec![
        User::new("1", "Nguyễn Văn A", "nguyenvana@example.com"),
        User::new("2", "Trần Thị B", "tranthib@example.com"),
        User::new("3", "Lê Văn C", "levanc@example.com"),
    ]
}
