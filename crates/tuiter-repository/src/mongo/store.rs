//! Connection and collection ownership for the document store.

use crate::mongo::documents::{FollowDocument, MessageDocument, UserDocument};
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::{options::ClientOptions, Client, Collection, Database};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};
use tuiter_config::DatabaseConfig;
use tuiter_core::{TuiterResult, User, UserId};

const FOLLOWS_COLLECTION: &str = "follows";
const MESSAGES_COLLECTION: &str = "messages";
const USERS_COLLECTION: &str = "users";

/// Handle to the MongoDB database backing the service.
///
/// Owns the client and hands out typed collections to the DAOs. Also
/// hosts the user-lookup half of the reference-expansion join, since
/// the `users` collection is shared by both resources.
#[derive(Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connects to the document store described by the configuration.
    pub async fn connect(config: &DatabaseConfig) -> TuiterResult<Self> {
        let mut options = ClientOptions::parse(&config.url).await?;
        options.app_name = Some("tuiter".to_string());
        options.min_pool_size = Some(config.min_pool_size);
        options.max_pool_size = Some(config.max_pool_size);
        options.connect_timeout = Some(config.connect_timeout());

        let client = Client::with_options(options)?;
        let database = client.database(&config.database);

        info!("Connected to document store, database: {}", config.database);
        Ok(Self { database })
    }

    /// Wraps an existing database handle (used by tests and tools).
    #[must_use]
    pub fn from_database(database: Database) -> Self {
        Self { database }
    }

    pub(crate) fn follows(&self) -> Collection<FollowDocument> {
        self.database.collection(FOLLOWS_COLLECTION)
    }

    pub(crate) fn messages(&self) -> Collection<MessageDocument> {
        self.database.collection(MESSAGES_COLLECTION)
    }

    fn users(&self) -> Collection<UserDocument> {
        self.database.collection(USERS_COLLECTION)
    }

    /// Fetches the user documents for the given IDs in a single `$in`
    /// query. This is the lookup half of the reference-expansion join.
    pub(crate) async fn load_users(
        &self,
        ids: impl IntoIterator<Item = UserId>,
    ) -> TuiterResult<HashMap<UserId, User>> {
        let unique: HashSet<ObjectId> = ids.into_iter().map(UserId::into_inner).collect();
        let object_ids: Vec<ObjectId> = unique.into_iter().collect();

        if object_ids.is_empty() {
            return Ok(HashMap::new());
        }

        debug!("Loading {} user document(s) for expansion", object_ids.len());

        let documents: Vec<UserDocument> = self
            .users()
            .find(doc! { "_id": { "$in": object_ids } })
            .await?
            .try_collect()
            .await?;

        Ok(documents
            .into_iter()
            .map(|doc| {
                let user = User::from(doc);
                (user.id, user)
            })
            .collect())
    }
}

impl std::fmt::Debug for MongoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoStore")
            .field("database", &self.database.name())
            .finish()
    }
}
