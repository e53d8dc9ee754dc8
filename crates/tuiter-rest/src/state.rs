//! Application state for Axum handlers.

use std::sync::Arc;
use tuiter_repository::{FollowDao, MessageDao};

/// Shared application state.
///
/// DAOs are constructed once at startup and injected here; handlers
/// reach them through the router state.
#[derive(Clone)]
pub struct AppState {
    pub follow_dao: Arc<dyn FollowDao>,
    pub message_dao: Arc<dyn MessageDao>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(follow_dao: Arc<dyn FollowDao>, message_dao: Arc<dyn MessageDao>) -> Self {
        Self {
            follow_dao,
            message_dao,
        }
    }
}
