//! Typed ID wrappers for domain entities.
//!
//! IDs wrap MongoDB object identifiers but serialize as plain hex
//! strings so API payloads carry `"64f..."` rather than extended JSON.

use bson::oid::ObjectId;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display};

macro_rules! object_id_wrapper {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub ObjectId);

        impl $name {
            /// Creates a new random ID.
            #[must_use]
            pub fn new() -> Self {
                Self(ObjectId::new())
            }

            /// Creates an ID from an existing object ID.
            #[must_use]
            pub const fn from_object_id(oid: ObjectId) -> Self {
                Self(oid)
            }

            /// Parses an ID from a 24-character hex string.
            pub fn parse(s: &str) -> Result<Self, bson::oid::Error> {
                Ok(Self(ObjectId::parse_str(s)?))
            }

            /// Returns the inner object ID.
            #[must_use]
            pub const fn into_inner(self) -> ObjectId {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0.to_hex())
            }
        }

        impl From<ObjectId> for $name {
            fn from(oid: ObjectId) -> Self {
                Self(oid)
            }
        }

        impl From<$name> for ObjectId {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(&self.0.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                ObjectId::parse_str(&s).map(Self).map_err(de::Error::custom)
            }
        }
    };
}

object_id_wrapper!(
    /// A strongly-typed wrapper for user IDs.
    UserId
);

object_id_wrapper!(
    /// A strongly-typed wrapper for follow-record IDs.
    FollowId
);

object_id_wrapper!(
    /// A strongly-typed wrapper for message IDs.
    MessageId
);
