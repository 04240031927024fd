use std::sync::Arc;

use async_trait::async_trait;

use crate::{domain::User, infrastructure::user_data_source::UserDataSource};

/// Read access to user records.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_users(&self) -> Vec<User>;

    /// `None` when no user has the given identifier.
    async fn find_user(&self, id: &str) -> Option<User>;
}

/// Repository that forwards every call to a [`UserDataSource`].
#[derive(Debug, Clone)]
pub struct DataSourceUserRepository {
    data_source: Arc<UserDataSource>,
}

impl DataSourceUserRepository {
    pub fn new(data_source: Arc<UserDataSource>) -> Self {
        Self { data_source }
    }
}

#[async_trait]
impl UserRepository for DataSourceUserRepository {
    async fn get_users(&self) -> Vec<User> {
        self.data_source.fetch_all().await
    }

    async fn find_user(&self, id: &str) -> Option<User> {
        self.data_source.fetch_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn repository() -> (Arc<UserDataSource>, DataSourceUserRepository) {
        let data_source = Arc::new(UserDataSource::new());
        let repo = DataSourceUserRepository::new(Arc::clone(&data_source));
        (data_source, repo)
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_users_delegates_to_fetch_all() {
        let (data_source, repo) = repository();
        assert_eq!(repo.get_users().await, data_source.fetch_all().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_find_user_delegates_to_fetch_by_id() {
        let (data_source, repo) = repository();
        assert_eq!(
            repo.find_user("2").await,
            data_source.fetch_by_id("2").await
        );
        assert_eq!(repo.find_user("9").await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_usable_as_trait_object() {
        let (_, repo) = repository();
        let repo: Arc<dyn UserRepository> = Arc::new(repo);
        assert_eq!(repo.get_users().await.len(), 3);
    }
}
