// Application state module
// Shared by every connection: configuration plus the router that owns the store

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::types::Config;
use crate::api::Router;
use crate::store::Store;

/// Application state
pub struct AppState {
    pub config: Config,
    // Held for the whole of each dispatch so requests observe the store sequentially
    router: Mutex<Router>,
}

impl AppState {
    pub fn new(config: Config, store: Store) -> Self {
        Self {
            config,
            router: Mutex::new(Router::new(store)),
        }
    }

    /// Lock the router; a panic during an earlier dispatch does not poison it
    pub fn router(&self) -> MutexGuard<'_, Router> {
        self.router.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
