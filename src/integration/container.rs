use std::sync::Arc;

use crate::{
    core::store::UserStore,
    infrastructure::{config::Config, user_data_source::UserDataSource},
    repositories::{DataSourceUserRepository, UserRepository},
};

/// Composition root
///
/// Built once at startup and passed by reference to whatever needs a dependency.
/// The data source and repository are shared for the lifetime of the container;
/// every call to [`AppContainer::user_store`] builds a fresh store over them.
pub struct AppContainer {
    config: Config,
    data_source: Arc<UserDataSource>,
    repository: Arc<dyn UserRepository>,
}

impl AppContainer {
    pub fn new(config: Config) -> Self {
        let data_source = Arc::new(UserDataSource::with_config(&config.data_source));
        let repository: Arc<dyn UserRepository> =
            Arc::new(DataSourceUserRepository::new(Arc::clone(&data_source)));
        log::debug!(
            "container built: fetch_all_delay={:?}, fetch_by_id_delay={:?}",
            data_source.fetch_all_delay(),
            data_source.fetch_by_id_delay()
        );
        Self {
            config,
            data_source,
            repository,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn data_source(&self) -> Arc<UserDataSource> {
        Arc::clone(&self.data_source)
    }

    pub fn repository(&self) -> Arc<dyn UserRepository> {
        Arc::clone(&self.repository)
    }

    pub fn user_store(&self) -> UserStore {
        UserStore::new(self.repository())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::config::DataSourceConfig;

    fn config(fetch_all_delay_ms: u64) -> Config {
        Config {
            data_source: DataSourceConfig {
                fetch_all_delay_ms,
                fetch_by_id_delay_ms: 0,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_data_source_uses_config() {
        let container = AppContainer::new(config(42));
        assert_eq!(
            container.data_source().fetch_all_delay(),
            std::time::Duration::from_millis(42)
        );
    }

    #[test]
    fn test_singletons_are_shared() {
        let container = AppContainer::new(config(0));
        assert!(Arc::ptr_eq(&container.data_source(), &container.data_source()));
        assert!(Arc::ptr_eq(&container.repository(), &container.repository()));
    }

    #[tokio::test]
    async fn test_user_store_is_wired_to_repository() {
        let container = AppContainer::new(config(0));
        let store = container.user_store();
        assert!(store.is_empty());
        store.refresh().await.expect("refresh task");
        assert_eq!(store.users(), container.repository().get_users().await);
    }

    #[tokio::test]
    async fn test_each_store_is_independent() {
        let container = AppContainer::new(config(0));
        let first = container.user_store();
        let second = container.user_store();
        first.refresh().await.expect("refresh task");
        assert_eq!(first.len(), 3);
        assert!(second.is_empty());
    }
}
