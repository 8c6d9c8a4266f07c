//! Dual-Protocol Item Gateway
//!
//! A gateway process that exposes one logical resource ("item") through two
//! independent front ends sharing a single upstream fetch path.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌────────────────────────────────────────────┐
//!                  │                 GATEWAY                     │
//!                  │                                             │
//!   REST client ───┼─▶ http (axum) ──┐                          │
//!                  │                 ├─▶ upstream ──▶ item      │
//!   gRPC client ───┼─▶ rpc (tonic) ──┘    client    translator  │
//!                  │                                             │
//!                  │  ┌───────────────────────────────────────┐ │
//!                  │  │        Cross-Cutting Concerns          │ │
//!                  │  │  config   lifecycle   observability    │ │
//!                  │  └───────────────────────────────────────┘ │
//!                  └────────────────────────────────────────────┘
//!                                      │
//!                                      ▼
//!                            upstream item provider
//!                          (GET <base_url><item_id>)
//! ```
//!
//! Both front ends resolve lookups by driving the same pipeline: one HTTP GET
//! against the upstream provider, classified into an [`upstream::UpstreamOutcome`],
//! then mapped by the pure [`item::translate`] function. Only the final
//! serialization differs per protocol.

// Core subsystems
pub mod config;
pub mod http;
pub mod item;
pub mod rpc;
pub mod upstream;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::{Shutdown, Supervisor};
