//! Common test infrastructure for document-store integration tests.

use bson::{doc, oid::ObjectId};
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::mongo::Mongo;
use tuiter_config::DatabaseConfig;
use tuiter_core::UserId;
use tuiter_repository::MongoStore;

/// Test store container wrapper.
///
/// Manages a MongoDB testcontainer lifecycle and provides a connected
/// store plus a raw database handle for seeding.
pub struct TestStore {
    _container: ContainerAsync<Mongo>,
    store: Arc<MongoStore>,
    database: mongodb::Database,
}

impl TestStore {
    /// Creates a new test store with a fresh MongoDB container.
    pub async fn new() -> Self {
        let container = Mongo::default()
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");

        let url = format!("mongodb://127.0.0.1:{}", port);

        // Wait for the server to answer pings before handing it out
        let client = Self::connect_with_retry(&url, 30).await;
        let database = client.database("tuiter_test");

        let config = DatabaseConfig {
            url,
            database: "tuiter_test".to_string(),
            min_pool_size: 1,
            max_pool_size: 5,
            connect_timeout_secs: 30,
        };
        let store = MongoStore::connect(&config)
            .await
            .expect("Failed to connect store");

        Self {
            _container: container,
            store: Arc::new(store),
            database,
        }
    }

    /// Returns a handle to the connected store.
    pub fn store(&self) -> Arc<MongoStore> {
        Arc::clone(&self.store)
    }

    /// Seeds a user document for the expansion join to find.
    pub async fn seed_user(&self, username: &str) -> UserId {
        let id = ObjectId::new();
        self.database
            .collection::<bson::Document>("users")
            .insert_one(doc! {
                "_id": id,
                "username": username,
                "email": format!("{}@tuiter.com", username),
            })
            .await
            .expect("Failed to seed user");

        UserId::from_object_id(id)
    }

    /// Connects to the database with retry logic.
    async fn connect_with_retry(url: &str, max_attempts: u32) -> mongodb::Client {
        let client = mongodb::Client::with_uri_str(url)
            .await
            .expect("Invalid MongoDB URL");

        let mut attempts = 0;
        loop {
            attempts += 1;
            match client.database("admin").run_command(doc! { "ping": 1 }).await {
                Ok(_) => return client,
                Err(e) => {
                    if attempts >= max_attempts {
                        panic!(
                            "Failed to connect to MongoDB after {} attempts: {}",
                            max_attempts, e
                        );
                    }
                    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                }
            }
        }
    }
}
