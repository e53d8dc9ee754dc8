//! BSON document representations of the stored records.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tuiter_core::{
    AccountType, Follow, FollowId, Location, MaritalStatus, Message, MessageId, User, UserId,
};

/// Document shape of the `users` collection. Users are written by
/// another service; this backend only reads them for expansion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile_photo: Option<String>,
    #[serde(default)]
    pub header_image: Option<String>,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<bson::DateTime>,
    #[serde(default)]
    pub account_type: Option<AccountType>,
    #[serde(default)]
    pub marital_status: Option<MaritalStatus>,
    #[serde(default)]
    pub location: Option<Location>,
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        Self {
            id: UserId::from_object_id(doc.id),
            username: doc.username,
            email: doc.email,
            password: doc.password,
            first_name: doc.first_name,
            last_name: doc.last_name,
            profile_photo: doc.profile_photo,
            header_image: doc.header_image,
            biography: doc.biography,
            date_of_birth: doc.date_of_birth.map(bson::DateTime::to_chrono),
            account_type: doc.account_type,
            marital_status: doc.marital_status,
            location: doc.location,
        }
    }
}

/// Document shape of the `follows` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct FollowDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub follower: ObjectId,
    pub following: ObjectId,
}

impl FollowDocument {
    /// Creates a new follow document with a fresh ID.
    pub(crate) fn new(follower: UserId, following: UserId) -> Self {
        Self {
            id: ObjectId::new(),
            follower: follower.into_inner(),
            following: following.into_inner(),
        }
    }
}

impl From<FollowDocument> for Follow {
    fn from(doc: FollowDocument) -> Self {
        Self::new(
            FollowId::from_object_id(doc.id),
            UserId::from_object_id(doc.follower),
            UserId::from_object_id(doc.following),
        )
    }
}

/// Document shape of the `messages` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct MessageDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub message: String,
    pub sender: ObjectId,
    pub receiver: ObjectId,
    #[serde(
        rename = "sentOn",
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    pub sent_on: DateTime<Utc>,
}

impl MessageDocument {
    /// Creates a new message document with a fresh ID.
    pub(crate) fn new(
        sender: UserId,
        receiver: UserId,
        message: String,
        sent_on: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ObjectId::new(),
            message,
            sender: sender.into_inner(),
            receiver: receiver.into_inner(),
            sent_on,
        }
    }
}

impl From<MessageDocument> for Message {
    fn from(doc: MessageDocument) -> Self {
        Self::new(
            MessageId::from_object_id(doc.id),
            UserId::from_object_id(doc.sender),
            UserId::from_object_id(doc.receiver),
            doc.message,
            doc.sent_on,
        )
    }
}
