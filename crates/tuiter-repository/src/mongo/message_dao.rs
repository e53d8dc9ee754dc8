//! MongoDB message DAO implementation.

use crate::mongo::documents::MessageDocument;
use crate::mongo::expand::attach_users;
use crate::mongo::store::MongoStore;
use crate::traits::MessageDao;
use async_trait::async_trait;
use bson::doc;
use chrono::Utc;
use futures::stream::TryStreamExt;
use std::sync::Arc;
use tracing::debug;
use tuiter_core::{DeleteOutcome, Message, NewMessage, TuiterResult, UserId};

/// MongoDB-backed message DAO.
#[derive(Debug, Clone)]
pub struct MongoMessageDao {
    store: Arc<MongoStore>,
}

impl MongoMessageDao {
    /// Creates a new message DAO over the given store.
    #[must_use]
    pub fn new(store: Arc<MongoStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MessageDao for MongoMessageDao {
    async fn send_message(
        &self,
        sender_uid: UserId,
        receiver_uid: UserId,
        message: NewMessage,
    ) -> TuiterResult<Message> {
        debug!("Creating message: {} -> {}", sender_uid, receiver_uid);

        let sent_on = message.sent_on.unwrap_or_else(Utc::now);
        let document = MessageDocument::new(sender_uid, receiver_uid, message.message, sent_on);
        self.store.messages().insert_one(&document).await?;

        Ok(Message::from(document))
    }

    async fn delete_message(
        &self,
        sender_uid: UserId,
        receiver_uid: UserId,
    ) -> TuiterResult<DeleteOutcome> {
        debug!("Deleting message: {} -> {}", sender_uid, receiver_uid);

        // Single-document delete keyed by the pair; with several
        // matching messages the store picks one arbitrarily.
        let result = self
            .store
            .messages()
            .delete_one(doc! {
                "sender": sender_uid.into_inner(),
                "receiver": receiver_uid.into_inner(),
            })
            .await?;

        Ok(DeleteOutcome::new(result.deleted_count))
    }

    async fn find_all_messages_sent(&self, uid: UserId) -> TuiterResult<Vec<Message>> {
        debug!("Finding messages sent by user: {}", uid);

        let documents: Vec<MessageDocument> = self
            .store
            .messages()
            .find(doc! { "sender": uid.into_inner() })
            .await?
            .try_collect()
            .await?;

        let mut messages: Vec<Message> = documents.into_iter().map(Message::from).collect();

        let users = self
            .store
            .load_users(messages.iter().map(|m| m.receiver.user_id()))
            .await?;
        attach_users(messages.iter_mut().map(|m| &mut m.receiver), &users);

        Ok(messages)
    }

    async fn find_all_messages_received(&self, uid: UserId) -> TuiterResult<Vec<Message>> {
        debug!("Finding messages received by user: {}", uid);

        let documents: Vec<MessageDocument> = self
            .store
            .messages()
            .find(doc! { "receiver": uid.into_inner() })
            .await?
            .try_collect()
            .await?;

        let mut messages: Vec<Message> = documents.into_iter().map(Message::from).collect();

        let users = self
            .store
            .load_users(messages.iter().map(|m| m.sender.user_id()))
            .await?;
        attach_users(messages.iter_mut().map(|m| &mut m.sender), &users);

        Ok(messages)
    }
}
