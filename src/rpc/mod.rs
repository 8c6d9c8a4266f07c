//! gRPC front end subsystem.
//!
//! # Data Flow
//! ```text
//! gRPC connection
//!     → server.rs (tonic service)
//!     → upstream client → item translator
//!     → ItemResponse (error field populated on failure)
//! ```
//!
//! # Design Decisions
//! - Failures ride the success channel: every outcome, including panics
//!   caught at the method boundary, returns Ok(ItemResponse); the `error`
//!   field is the only fault signal. Callers must inspect it rather than
//!   rely on gRPC status codes. This mirrors the REST front end's semantics
//!   while deliberately diverging from its transport-level signaling.

pub mod server;

pub use server::{make_item_service, proto, ItemServiceImpl};
