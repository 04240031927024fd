use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{cmd::Cmd, msg::Msg, store::UserStore},
    repositories::UserRepository,
};

/// Executes commands produced by `update`
///
/// Owns the screen's [`UserStore`]. Results of background work come back as [`Msg`]s
/// on the channel handed to [`CmdExecutor::new`]. Dropping the executor cancels
/// in-flight detail lookups along with the store's refreshes.
pub struct CmdExecutor {
    store: UserStore,
    repository: Arc<dyn UserRepository>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    lookups: Arc<AtomicUsize>,
    scope: CancellationToken,
}

impl CmdExecutor {
    pub fn new(
        store: UserStore,
        repository: Arc<dyn UserRepository>,
        msg_tx: mpsc::UnboundedSender<Msg>,
    ) -> Self {
        Self {
            store,
            repository,
            msg_tx,
            lookups: Arc::new(AtomicUsize::new(0)),
            scope: CancellationToken::new(),
        }
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    /// Whether a refresh or lookup may still deliver a result
    pub fn has_pending_work(&self) -> bool {
        self.store.is_refreshing() || self.lookups.load(Ordering::SeqCst) > 0
    }

    pub fn execute(&self, cmd: Cmd) {
        log::debug!("execute: {cmd:?}");
        match cmd {
            Cmd::RefreshUsers => {
                self.store.refresh();
            }
            Cmd::LoadUserDetail { entry_id, user_id } => self.load_user_detail(entry_id, user_id),
        }
    }

    pub fn execute_all(&self, commands: Vec<Cmd>) {
        for cmd in commands {
            self.execute(cmd);
        }
    }

    fn load_user_detail(&self, entry_id: u64, user_id: String) {
        let repository = Arc::clone(&self.repository);
        let msg_tx = self.msg_tx.clone();
        let scope = self.scope.clone();
        let lookups = Arc::clone(&self.lookups);
        lookups.fetch_add(1, Ordering::SeqCst);

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = scope.cancelled() => {}
                user = repository.find_user(&user_id) => {
                    let msg = Msg::UserDetailLoaded { entry_id, user_id, user };
                    if msg_tx.send(msg).is_err() {
                        log::debug!("detail lookup finished after the runner went away");
                    }
                }
            }
            // Decrement only after the result is queued
            lookups.fetch_sub(1, Ordering::SeqCst);
        });
    }

    pub fn shutdown(&self) {
        self.scope.cancel();
        self.store.shutdown();
    }
}

impl Drop for CmdExecutor {
    fn drop(&mut self) {
        self.scope.cancel();
    }
}
