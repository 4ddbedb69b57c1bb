use std::sync::Arc;

use crate::infra::store::Store;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    store: Arc<Store>,
}

impl AppState {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Fresh, empty state for tests.
    pub fn for_tests() -> Self {
        Self::new(Arc::new(Store::new()))
    }
}
