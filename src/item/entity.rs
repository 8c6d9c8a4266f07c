//! The item entity.

use serde::Serialize;

/// A single item as served to callers.
///
/// Immutable value, produced only by the translator from a successful
/// upstream result; serialized once and discarded, never persisted.
/// REST serialization keeps the upstream field names, so `owner_id`
/// appears as `userId` on the wire.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Item {
    pub id: i32,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub owner_id: i32,
}
