//! Domain models for the Tuiter backend.

pub mod follow;
pub mod message;
pub mod user;

pub use follow::*;
pub use message::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// Outcome of a delete operation, mirroring the document store's
/// deletion descriptor. A `deleted_count` of zero is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteOutcome {
    /// Creates an acknowledged outcome with the given count.
    #[must_use]
    pub const fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_outcome_wire_format() {
        let outcome = DeleteOutcome::new(1);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["acknowledged"], true);
        assert_eq!(json["deletedCount"], 1);
    }
}
