//! Classified result of one upstream lookup attempt.

use serde::Deserialize;

/// Raw item payload as the upstream provider serves it.
///
/// Every field is optional on the wire; a missing field deserializes to its
/// zero value rather than failing. A malformed payload can therefore pass
/// silently with defaults, which matches the upstream contract.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ItemPayload {
    pub id: i32,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: i32,
}

/// Outcome of a single upstream round trip.
///
/// Exactly one variant describes each attempt; callers must handle all three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamOutcome {
    /// 2xx response with a parseable JSON body.
    Fetched(ItemPayload),

    /// No usable response: DNS, connection, timeout, or malformed body.
    Transport(String),

    /// Well-formed response with a non-2xx status.
    Status(u16),
}
