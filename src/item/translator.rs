//! Pure mapping from an upstream outcome to an item or a typed error.

use thiserror::Error;

use crate::item::entity::Item;
use crate::upstream::outcome::UpstreamOutcome;

/// Typed failure of one item lookup.
///
/// The Display strings are the caller-visible error text for both front
/// ends: the REST body embeds them verbatim, the RPC response carries them
/// in its `error` field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// No response was obtained from the upstream provider.
    #[error("Request error: {0}")]
    Transport(String),

    /// The upstream provider answered with a non-2xx status.
    #[error("HTTP error: {0}")]
    UpstreamStatus(u16),
}

/// Map an upstream outcome to an item or a typed error.
///
/// Synchronous and total: every outcome variant maps to a value, nothing
/// panics or performs I/O. Missing payload fields have already been
/// defaulted to zero values during deserialization.
pub fn translate(outcome: UpstreamOutcome) -> Result<Item, TranslationError> {
    match outcome {
        UpstreamOutcome::Fetched(payload) => Ok(Item {
            id: payload.id,
            title: payload.title,
            body: payload.body,
            owner_id: payload.user_id,
        }),
        UpstreamOutcome::Transport(detail) => Err(TranslationError::Transport(detail)),
        UpstreamOutcome::Status(code) => Err(TranslationError::UpstreamStatus(code)),
    }
}
