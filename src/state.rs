use std::sync::Arc;

use crate::domain::repositories::AliasRepository;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub aliases: Arc<dyn AliasRepository>,
}
