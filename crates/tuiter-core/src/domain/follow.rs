//! Follow model: one user following another.

use crate::{FollowId, UserId, UserRef};
use serde::{Deserialize, Serialize};

/// A follow edge between two users.
///
/// A given (follower, following) pair is intended to be unique, but the
/// store does not enforce it; duplicate edges can exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Follow {
    pub id: FollowId,
    /// User doing the following.
    pub follower: UserRef,
    /// User being followed.
    pub following: UserRef,
}

impl Follow {
    /// Creates a follow edge between two user IDs.
    #[must_use]
    pub fn new(id: FollowId, follower: UserId, following: UserId) -> Self {
        Self {
            id,
            follower: UserRef::Id(follower),
            following: UserRef::Id(following),
        }
    }
}
