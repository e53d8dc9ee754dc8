//! Shared helpers for REST endpoint tests.

use async_trait::async_trait;
use axum::{body::Body, response::Response, Router};
use http_body_util::BodyExt;
use mockall::mock;
use std::sync::Arc;
use tuiter_config::ServerConfig;
use tuiter_core::{DeleteOutcome, Follow, Message, NewMessage, TuiterResult, User, UserId};
use tuiter_repository::{FollowDao, MessageDao};
use tuiter_rest::{create_router, AppState};

mock! {
    pub Follows {}

    #[async_trait]
    impl FollowDao for Follows {
        async fn follow_user(
            &self,
            follower_uid: UserId,
            following_uid: UserId,
        ) -> TuiterResult<Follow>;

        async fn unfollow_user(
            &self,
            follower_uid: UserId,
            following_uid: UserId,
        ) -> TuiterResult<DeleteOutcome>;

        async fn find_all_followers(&self, uid: UserId) -> TuiterResult<Vec<Follow>>;

        async fn find_all_following(&self, uid: UserId) -> TuiterResult<Vec<Follow>>;
    }
}

mock! {
    pub Messages {}

    #[async_trait]
    impl MessageDao for Messages {
        async fn send_message(
            &self,
            sender_uid: UserId,
            receiver_uid: UserId,
            message: NewMessage,
        ) -> TuiterResult<Message>;

        async fn delete_message(
            &self,
            sender_uid: UserId,
            receiver_uid: UserId,
        ) -> TuiterResult<DeleteOutcome>;

        async fn find_all_messages_sent(&self, uid: UserId) -> TuiterResult<Vec<Message>>;

        async fn find_all_messages_received(&self, uid: UserId) -> TuiterResult<Vec<Message>>;
    }
}

/// Builds the real router over mocked DAOs.
pub fn app(follow_dao: MockFollows, message_dao: MockMessages) -> Router {
    let state = AppState::new(Arc::new(follow_dao), Arc::new(message_dao));
    create_router(state, &ServerConfig::default())
}

/// Collects a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Builds a minimal user document for expansion results.
pub fn user(id: UserId, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        email: format!("{username}@tuiter.com"),
        password: None,
        first_name: None,
        last_name: None,
        profile_photo: None,
        header_image: None,
        biography: None,
        date_of_birth: None,
        account_type: None,
        marital_status: None,
        location: None,
    }
}
