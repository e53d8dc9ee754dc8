//! Direct message model: one user messaging another.

use crate::{MessageId, UserId, UserRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directed message from one user to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    /// Message content.
    pub message: String,
    /// User sending the message.
    pub sender: UserRef,
    /// User receiving the message.
    pub receiver: UserRef,
    /// When the message was sent; defaulted at creation.
    pub sent_on: DateTime<Utc>,
}

/// Payload for sending a message.
///
/// Sender and receiver come from the request path and override any such
/// fields in the body, so they are not part of this type; unknown body
/// fields are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_on: Option<DateTime<Utc>>,
}

impl Message {
    /// Creates a message between two user IDs.
    #[must_use]
    pub fn new(
        id: MessageId,
        sender: UserId,
        receiver: UserId,
        message: String,
        sent_on: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            message,
            sender: UserRef::Id(sender),
            receiver: UserRef::Id(receiver),
            sent_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_wire_format() {
        let sender = UserId::parse("507f1f77bcf86cd799439011").unwrap();
        let receiver = UserId::parse("507f191e810c19729de860ea").unwrap();
        let message = Message::new(
            MessageId::new(),
            sender,
            receiver,
            "hi".to_string(),
            Utc::now(),
        );

        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["message"], "hi");
        assert_eq!(json["sender"], sender.to_string());
        assert_eq!(json["receiver"], receiver.to_string());
        assert!(json["sentOn"].is_string());
    }

    #[test]
    fn test_new_message_ignores_sender_fields_in_body() {
        let body = serde_json::json!({
            "message": "hello",
            "sender": "507f1f77bcf86cd799439011",
            "receiver": "507f191e810c19729de860ea"
        });
        let parsed: NewMessage = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.message, "hello");
        assert!(parsed.sent_on.is_none());
    }

    #[test]
    fn test_new_message_accepts_explicit_sent_on() {
        let body = serde_json::json!({
            "message": "hello",
            "sentOn": "2024-05-01T12:00:00Z"
        });
        let parsed: NewMessage = serde_json::from_value(body).unwrap();
        assert!(parsed.sent_on.is_some());
    }
}
