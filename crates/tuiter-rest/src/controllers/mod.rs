//! REST controllers, one per resource.

pub mod follow_controller;
pub mod health_controller;
pub mod message_controller;

use crate::responses::AppError;
use tuiter_core::{TuiterError, UserId};

/// Helper to parse a user ID from a path parameter.
pub(crate) fn parse_user_id(id: &str) -> Result<UserId, AppError> {
    UserId::parse(id)
        .map_err(|_| AppError(TuiterError::Validation(format!("Invalid user ID: {}", id))))
}
