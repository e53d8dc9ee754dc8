//! MongoDB implementations of the DAO traits.

mod documents;
mod expand;
mod follow_dao;
mod message_dao;
mod store;

pub use follow_dao::MongoFollowDao;
pub use message_dao::MongoMessageDao;
pub use store::MongoStore;
