use std::sync::Arc;

use diacare_render::pages::Pages;
use diacare_storage::records::RecordStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: RecordStore,
    pub pages: Arc<Pages>,
}
