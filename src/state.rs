use crate::services::CatalogService;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub catalog: CatalogService,
}

impl AppState {
    /// Creates a new empty application state
    pub fn new() -> Self {
        Self {
            catalog: CatalogService::new(),
        }
    }
}
