use crate::config::Config;
use crate::store::ItemStore;
use std::sync::Arc;

/// Shared application state
///
/// The store is injected as a trait object so handlers run identically
/// against MongoDB in production and the in-memory store in tests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
    pub config: Arc<Config>,
}
