//! Follows resource controller.
//!
//! Routes are registered relative to the `/api/users/:uid` prefix, so
//! the full surface is:
//! - `POST   /api/users/:uid/follows/:other_uid`
//! - `DELETE /api/users/:uid/unfollows/:other_uid`
//! - `GET    /api/users/:uid/followers` (and `/followers/`)
//! - `GET    /api/users/:uid/following` (and `/following/`)

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
use tuiter_core::{DeleteOutcome, Follow};

/// Creates the follows router.
///
/// The listing routes are also registered with a trailing slash, the
/// form the upstream clients use.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/follows/:other_uid", post(follow_user))
        .route("/unfollows/:other_uid", delete(unfollow_user))
        .route("/followers", get(find_all_followers))
        .route("/followers/", get(find_all_followers))
        .route("/following", get(find_all_following))
        .route("/following/", get(find_all_following))
}

/// Create a follow edge: the path user follows the other user.
async fn follow_user(
    State(state): State<AppState>,
    Path((uid, other_uid)): Path<(String, String)>,
) -> Result<(StatusCode, Json<ApiResponse<Follow>>), AppError> {
    debug!("Follow request: {} -> {}", uid, other_uid);

    let follower = parse_user_id(&uid)?;
    let following = parse_user_id(&other_uid)?;

    let follow = state.follow_dao.follow_user(follower, following).await?;
    Ok(created(follow))
}

/// Delete a follow edge. Reports zero deletions when no edge matched.
async fn unfollow_user(
    State(state): State<AppState>,
    Path((uid, other_uid)): Path<(String, String)>,
) -> ApiResult<DeleteOutcome> {
    debug!("Unfollow request: {} -> {}", uid, other_uid);

    let follower = parse_user_id(&uid)?;
    let following = parse_user_id(&other_uid)?;

    let outcome = state.follow_dao.unfollow_user(follower, following).await?;
    ok(outcome)
}

/// List the follows pointing at the path user, follower expanded.
async fn find_all_followers(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> ApiResult<Vec<Follow>> {
    debug!("List followers request: {}", uid);

    let uid = parse_user_id(&uid)?;

    let follows = state.follow_dao.find_all_followers(uid).await?;
    ok(follows)
}

/// List the follows originating from the path user, following expanded.
async fn find_all_following(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> ApiResult<Vec<Follow>> {
    debug!("List following request: {}", uid);

    let uid = parse_user_id(&uid)?;

    let follows = state.follow_dao.find_all_following(uid).await?;
    ok(follows)
}
