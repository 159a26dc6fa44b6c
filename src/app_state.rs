use sqlx::PgPool;

use crate::store::{EventStore, UserStore};

/// Shared application state available to all handlers via Axum's
/// `State` extractor. Both stores clone the same underlying pool.
#[derive(Debug, Clone)]
pub struct AppState {
    pub events: EventStore,
    pub users: UserStore,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            events: EventStore::new(pool.clone()),
            users: UserStore::new(pool),
        }
    }
}
