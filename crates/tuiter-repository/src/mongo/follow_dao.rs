//! MongoDB follow DAO implementation.

use crate::mongo::documents::FollowDocument;
use crate::mongo::expand::attach_users;
use crate::mongo::store::MongoStore;
use crate::traits::FollowDao;
use async_trait::async_trait;
use bson::doc;
use futures::stream::TryStreamExt;
use std::sync::Arc;
use tracing::debug;
use tuiter_core::{DeleteOutcome, Follow, TuiterResult, UserId};

/// MongoDB-backed follow DAO.
#[derive(Debug, Clone)]
pub struct MongoFollowDao {
    store: Arc<MongoStore>,
}

impl MongoFollowDao {
    /// Creates a new follow DAO over the given store.
    #[must_use]
    pub fn new(store: Arc<MongoStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FollowDao for MongoFollowDao {
    async fn follow_user(
        &self,
        follower_uid: UserId,
        following_uid: UserId,
    ) -> TuiterResult<Follow> {
        debug!("Creating follow: {} -> {}", follower_uid, following_uid);

        let document = FollowDocument::new(follower_uid, following_uid);
        self.store.follows().insert_one(&document).await?;

        Ok(Follow::from(document))
    }

    async fn unfollow_user(
        &self,
        follower_uid: UserId,
        following_uid: UserId,
    ) -> TuiterResult<DeleteOutcome> {
        debug!("Deleting follow: {} -> {}", follower_uid, following_uid);

        let result = self
            .store
            .follows()
            .delete_one(doc! {
                "follower": follower_uid.into_inner(),
                "following": following_uid.into_inner(),
            })
            .await?;

        Ok(DeleteOutcome::new(result.deleted_count))
    }

    async fn find_all_followers(&self, uid: UserId) -> TuiterResult<Vec<Follow>> {
        debug!("Finding followers of user: {}", uid);

        let documents: Vec<FollowDocument> = self
            .store
            .follows()
            .find(doc! { "following": uid.into_inner() })
            .await?
            .try_collect()
            .await?;

        let mut follows: Vec<Follow> = documents.into_iter().map(Follow::from).collect();

        let users = self
            .store
            .load_users(follows.iter().map(|f| f.follower.user_id()))
            .await?;
        attach_users(follows.iter_mut().map(|f| &mut f.follower), &users);

        Ok(follows)
    }

    async fn find_all_following(&self, uid: UserId) -> TuiterResult<Vec<Follow>> {
        debug!("Finding users followed by: {}", uid);

        let documents: Vec<FollowDocument> = self
            .store
            .follows()
            .find(doc! { "follower": uid.into_inner() })
            .await?
            .try_collect()
            .await?;

        let mut follows: Vec<Follow> = documents.into_iter().map(Follow::from).collect();

        let users = self
            .store
            .load_users(follows.iter().map(|f| f.following.user_id()))
            .await?;
        attach_users(follows.iter_mut().map(|f| &mut f.following), &users);

        Ok(follows)
    }
}
