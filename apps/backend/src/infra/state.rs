use std::sync::Arc;

use crate::error::AppError;
use crate::infra::store::Store;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    store: Option<Arc<Store>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self { store: None }
    }

    /// Share an existing store instead of starting empty.
    pub fn with_store(mut self, store: Arc<Store>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        let store = self.store.unwrap_or_else(|| Arc::new(Store::new()));
        Ok(AppState::new(store))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
