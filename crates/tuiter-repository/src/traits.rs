//! DAO trait definitions.

use async_trait::async_trait;
use tuiter_core::{DeleteOutcome, Follow, Message, NewMessage, TuiterResult, UserId};

/// Data-access object for the follows resource.
#[async_trait]
pub trait FollowDao: Send + Sync {
    /// Creates a follow edge from `follower_uid` to `following_uid` and
    /// returns the new record. Neither user existence nor duplicate
    /// edges are checked.
    async fn follow_user(
        &self,
        follower_uid: UserId,
        following_uid: UserId,
    ) -> TuiterResult<Follow>;

    /// Deletes the matching follow edge. Deleting a pair that does not
    /// exist is not an error; the outcome reports zero deletions.
    async fn unfollow_user(
        &self,
        follower_uid: UserId,
        following_uid: UserId,
    ) -> TuiterResult<DeleteOutcome>;

    /// Returns all follows where `following == uid`, with the follower
    /// reference expanded to the full user document.
    async fn find_all_followers(&self, uid: UserId) -> TuiterResult<Vec<Follow>>;

    /// Returns all follows where `follower == uid`, with the following
    /// reference expanded.
    async fn find_all_following(&self, uid: UserId) -> TuiterResult<Vec<Follow>>;
}

/// Data-access object for the messages resource.
#[async_trait]
pub trait MessageDao: Send + Sync {
    /// Creates and returns a new message. Sender and receiver are taken
    /// from the arguments, overriding any such fields in the body; the
    /// timestamp defaults to creation time when unset.
    async fn send_message(
        &self,
        sender_uid: UserId,
        receiver_uid: UserId,
        message: NewMessage,
    ) -> TuiterResult<Message>;

    /// Deletes a message matching the (sender, receiver) pair. When
    /// several messages exist between the pair, the store removes one
    /// of them arbitrarily; deletion is keyed by the pair, not by a
    /// message identifier.
    async fn delete_message(
        &self,
        sender_uid: UserId,
        receiver_uid: UserId,
    ) -> TuiterResult<DeleteOutcome>;

    /// Returns all messages where `sender == uid`, with the receiver
    /// reference expanded.
    async fn find_all_messages_sent(&self, uid: UserId) -> TuiterResult<Vec<Message>>;

    /// Returns all messages where `receiver == uid`, with the sender
    /// reference expanded.
    async fn find_all_messages_received(&self, uid: UserId) -> TuiterResult<Vec<Message>>;
}
