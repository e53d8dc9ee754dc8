//! # Tuiter Repository
//!
//! DAO traits and their MongoDB implementations. Each DAO method issues
//! one database operation; listing operations additionally run the
//! reference-expansion join against the `users` collection.

pub mod mongo;
pub mod traits;

pub use mongo::{MongoFollowDao, MongoMessageDao, MongoStore};
pub use traits::*;
