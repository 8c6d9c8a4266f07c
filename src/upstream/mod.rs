//! Upstream item provider subsystem.
//!
//! # Data Flow
//! ```text
//! front end (REST or RPC)
//!     → client.rs (one GET per lookup, connect/total timeouts)
//!     → outcome.rs (classified result: payload, transport, or status)
//!     → item translator
//! ```
//!
//! # Design Decisions
//! - The client never returns Err: every failure mode is an outcome variant
//! - One pooled HTTP client, built at startup, shared by all lookups
//! - No retries; each lookup is a single attempt

pub mod client;
pub mod outcome;

pub use client::UpstreamClient;
pub use outcome::{ItemPayload, UpstreamOutcome};
