//! User profile model and foreign-user references.
//!
//! Users are owned by another service; this backend only reads user
//! documents when expanding the foreign references held by follows and
//! messages.

use crate::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user profile on the Tuiter application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<MaritalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// Type of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Personal,
    Academic,
    Professional,
}

/// Marital status of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaritalStatus {
    Married,
    Single,
    Widowed,
}

/// Geographic location of a user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// A reference to a user held by another record.
///
/// The store keeps the raw identifier; listing operations expand the
/// reference into the full user document as an explicit join step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Id(UserId),
    Expanded(Box<User>),
}

impl UserRef {
    /// Returns the referenced user's ID, expanded or not.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        match self {
            Self::Id(id) => *id,
            Self::Expanded(user) => user.id,
        }
    }

    /// Returns the expanded user document, if present.
    #[must_use]
    pub fn as_user(&self) -> Option<&User> {
        match self {
            Self::Id(_) => None,
            Self::Expanded(user) => Some(user),
        }
    }

    /// Replaces the reference with the full user document.
    pub fn expand(&mut self, user: User) {
        *self = Self::Expanded(Box::new(user));
    }
}

impl From<UserId> for UserRef {
    fn from(id: UserId) -> Self {
        Self::Id(id)
    }
}
