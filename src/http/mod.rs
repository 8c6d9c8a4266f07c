//! REST/JSON front end subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routing)
//!     → request.rs (add request ID)
//!     → upstream client → item translator
//!     → JSON response (item on 200, {"error": ...} otherwise)
//! ```

pub mod request;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::HttpServer;
