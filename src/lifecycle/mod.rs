//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Build upstream client → bind + start RPC → bind + start REST → run
//!
//! Shutdown (shutdown.rs):
//!     Trigger → both listeners drain → supervisor joins tasks → Stopped
//! ```
//!
//! # Design Decisions
//! - Ordered startup: the RPC listener is fully up before REST binds
//! - Fail fast: any startup error is fatal, no partial service
//! - A listener exiting on its own triggers shutdown of the other

pub mod shutdown;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{LifecycleState, Supervisor, SupervisorError};
