//! Item domain subsystem.
//!
//! # Data Flow
//! ```text
//! UpstreamOutcome
//!     → translator.rs (pure mapping, no I/O)
//!     → Item (entity.rs) or TranslationError
//!     → protocol-specific serialization in the front ends
//! ```
//!
//! The translator is shared by both front ends, so REST and RPC give
//! semantically equivalent answers for the same upstream outcome.

pub mod entity;
pub mod translator;

pub use entity::Item;
pub use translator::{translate, TranslationError};
