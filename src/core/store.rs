//! Observable user store
//!
//! Holds the latest fetched user list in a single-writer `watch` cell. Readers
//! either borrow the current snapshot or subscribe for changes; the only writer is
//! [`UserStore::refresh`], which replaces the whole list in one assignment.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use tokio::{sync::watch, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::{domain::User, repositories::UserRepository};

pub struct UserStore {
    repository: Arc<dyn UserRepository>,
    users: watch::Sender<Vec<User>>,
    in_flight: Arc<AtomicUsize>,
    // Cancelled when the store goes away; in-flight refreshes never publish after that
    scope: CancellationToken,
}

impl UserStore {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        let (users, _) = watch::channel(Vec::new());
        Self {
            repository,
            users,
            in_flight: Arc::new(AtomicUsize::new(0)),
            scope: CancellationToken::new(),
        }
    }

    /// Current snapshot; empty until the first refresh completes.
    pub fn users(&self) -> Vec<User> {
        self.users.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.users.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.borrow().is_empty()
    }

    /// Receiver that sees the current snapshot and is notified on every replacement.
    pub fn subscribe(&self) -> watch::Receiver<Vec<User>> {
        self.users.subscribe()
    }

    pub fn is_refreshing(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Fetches users from the repository in the background and publishes the result.
    ///
    /// Overlapping calls are neither merged nor cancelled: every call publishes its own
    /// result, so the state ends up with whichever fetch completed last.
    pub fn refresh(&self) -> JoinHandle<()> {
        let repository = Arc::clone(&self.repository);
        let users = self.users.clone();
        let scope = self.scope.clone();
        let guard = InFlight::enter(Arc::clone(&self.in_flight));
        if guard.overlapping {
            log::debug!("refresh started while another is in flight");
        }

        tokio::spawn(async move {
            let _guard = guard;
            log::debug!("refreshing users");
            tokio::select! {
                biased;
                _ = scope.cancelled() => {
                    log::debug!("refresh cancelled");
                }
                fetched = repository.get_users() => {
                    log::info!("refreshed {} users", fetched.len());
                    users.send_replace(fetched);
                }
            }
        })
    }

    /// Cancels every in-flight refresh. Later refreshes are cancelled immediately.
    pub fn shutdown(&self) {
        self.scope.cancel();
    }
}

impl Drop for UserStore {
    fn drop(&mut self) {
        self.scope.cancel();
    }
}

struct InFlight {
    counter: Arc<AtomicUsize>,
    overlapping: bool,
}

impl InFlight {
    fn enter(counter: Arc<AtomicUsize>) -> Self {
        let previous = counter.fetch_add(1, Ordering::SeqCst);
        Self {
            counter,
            overlapping: previous > 0,
        }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
    }
}
