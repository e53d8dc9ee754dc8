//! Endpoint tests for the follows resource.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{app, body_json, MockFollows, MockMessages};
use tower::ServiceExt;
use tuiter_core::{DeleteOutcome, Follow, FollowId, TuiterError, UserId};

const UID: &str = "507f1f77bcf86cd799439011";
const OTHER_UID: &str = "507f191e810c19729de860ea";

#[tokio::test]
async fn follow_user_creates_and_returns_edge() {
    let mut follows = MockFollows::new();
    follows
        .expect_follow_user()
        .returning(|follower, following| Ok(Follow::new(FollowId::new(), follower, following)));

    let app = app(follows, MockMessages::new());
    let response = app
        .oneshot(
            Request::post(format!("/api/users/{UID}/follows/{OTHER_UID}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["follower"], UID);
    assert_eq!(json["data"]["following"], OTHER_UID);
}

#[tokio::test]
async fn unfollow_missing_pair_reports_zero_deletions() {
    let mut follows = MockFollows::new();
    follows
        .expect_unfollow_user()
        .returning(|_, _| Ok(DeleteOutcome::new(0)));

    let app = app(follows, MockMessages::new());
    let response = app
        .oneshot(
            Request::delete(format!("/api/users/{UID}/unfollows/{OTHER_UID}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // a miss is not an error
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["acknowledged"], true);
    assert_eq!(json["data"]["deletedCount"], 0);
}

#[tokio::test]
async fn list_followers_returns_empty_array_for_lonely_user() {
    let mut follows = MockFollows::new();
    follows
        .expect_find_all_followers()
        .returning(|_| Ok(Vec::new()));

    let app = app(follows, MockMessages::new());
    let response = app
        .oneshot(
            Request::get(format!("/api/users/{UID}/followers"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"], serde_json::json!([]));
}

#[tokio::test]
async fn list_following_carries_expanded_user() {
    let followee = UserId::parse(OTHER_UID).unwrap();

    let mut follows = MockFollows::new();
    follows.expect_find_all_following().returning(move |uid| {
        let mut follow = Follow::new(FollowId::new(), uid, followee);
        follow.following.expand(common::user(followee, "bob"));
        Ok(vec![follow])
    });

    let app = app(follows, MockMessages::new());
    let response = app
        .oneshot(
            Request::get(format!("/api/users/{UID}/following"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["follower"], UID);
    assert_eq!(json["data"][0]["following"]["username"], "bob");
    assert_eq!(json["data"][0]["following"]["id"], OTHER_UID);
}

#[tokio::test]
async fn listing_routes_accept_a_trailing_slash() {
    let mut follows = MockFollows::new();
    follows
        .expect_find_all_followers()
        .returning(|_| Ok(Vec::new()));
    follows
        .expect_find_all_following()
        .returning(|_| Ok(Vec::new()));

    let app = app(follows, MockMessages::new());

    for path in [
        format!("/api/users/{UID}/followers/"),
        format!("/api/users/{UID}/following/"),
    ] {
        let response = app
            .clone()
            .oneshot(Request::get(path.as_str()).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{path}");
        let json = body_json(response).await;
        assert_eq!(json["data"], serde_json::json!([]));
    }
}

#[tokio::test]
async fn malformed_uid_is_rejected_before_the_dao_runs() {
    // no expectations: a DAO call would fail the test
    let app = app(MockFollows::new(), MockMessages::new());
    let response = app
        .oneshot(
            Request::get("/api/users/not-an-object-id/followers")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn store_failure_maps_to_internal_server_error() {
    let mut follows = MockFollows::new();
    follows
        .expect_find_all_followers()
        .returning(|_| Err(TuiterError::database("connection reset")));

    let app = app(follows, MockMessages::new());
    let response = app
        .oneshot(
            Request::get(format!("/api/users/{UID}/followers"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "DATABASE_ERROR");
}
