use crate::store::KvStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: KvStore,
}

impl AppState {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }
}
