//! Messages resource controller.
//!
//! Routes are registered relative to the `/api/users/:uid` prefix, so
//! the full surface is:
//! - `POST   /api/users/:uid/messages/:other_uid`
//! - `GET    /api/users/:uid/messages/sent`
//! - `GET    /api/users/:uid/messages/received`
//! - `DELETE /api/users/:uid/unsend/:other_uid`

use crate::{
    controllers::parse_user_id,
    responses::{created, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::debug;
use tuiter_core::{DeleteOutcome, Message, NewMessage};

/// Creates the messages router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/messages/sent", get(find_all_messages_sent))
        .route("/messages/received", get(find_all_messages_received))
        .route("/messages/:other_uid", post(send_message))
        .route("/unsend/:other_uid", delete(delete_message))
}

/// Send a message from the path user to the other user. The path
/// identifiers override any sender/receiver fields in the body.
async fn send_message(
    State(state): State<AppState>,
    Path((uid, other_uid)): Path<(String, String)>,
    Json(body): Json<NewMessage>,
) -> Result<(StatusCode, Json<ApiResponse<Message>>), AppError> {
    debug!("Send message request: {} -> {}", uid, other_uid);

    let sender = parse_user_id(&uid)?;
    let receiver = parse_user_id(&other_uid)?;

    let message = state
        .message_dao
        .send_message(sender, receiver, body)
        .await?;
    Ok(created(message))
}

/// Delete a message between the pair. Reports zero deletions when no
/// message matched; with several matches one is removed arbitrarily.
async fn delete_message(
    State(state): State<AppState>,
    Path((uid, other_uid)): Path<(String, String)>,
) -> ApiResult<DeleteOutcome> {
    debug!("Delete message request: {} -> {}", uid, other_uid);

    let sender = parse_user_id(&uid)?;
    let receiver = parse_user_id(&other_uid)?;

    let outcome = state.message_dao.delete_message(sender, receiver).await?;
    ok(outcome)
}

/// List messages sent by the path user, receiver expanded.
async fn find_all_messages_sent(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> ApiResult<Vec<Message>> {
    debug!("List sent messages request: {}", uid);

    let uid = parse_user_id(&uid)?;

    let messages = state.message_dao.find_all_messages_sent(uid).await?;
    ok(messages)
}

/// List messages received by the path user, sender expanded.
async fn find_all_messages_received(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> ApiResult<Vec<Message>> {
    debug!("List received messages request: {}", uid);

    let uid = parse_user_id(&uid)?;

    let messages = state.message_dao.find_all_messages_received(uid).await?;
    ok(messages)
}
