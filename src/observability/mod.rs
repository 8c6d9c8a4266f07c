//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing dispatcher; components emit events,
//!   binaries install a subscriber, tests that install none get no-op logs
//! - Request ID flows through the HTTP middleware into handler spans

pub mod logging;
