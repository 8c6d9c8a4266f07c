//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the shared upstream client
//! - Bring up the RPC listener fully (bind + start) before the REST listener
//! - Run until the shutdown signal fires, then join both listener tasks
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listeners are bound here so a taken port fails before traffic starts
//! - Each listener triggers shutdown when it exits, so an unexpected
//!   listener death drains the sibling instead of leaving half a gateway

use thiserror::Error;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;

use crate::config::GatewayConfig;
use crate::http::HttpServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::rpc::make_item_service;
use crate::upstream::UpstreamClient;

/// Supervisor states, in startup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Init,
    RpcStarting,
    RpcReady,
    RestStarting,
    RestReady,
    Running,
    Draining,
    Stopped,
}

/// Errors that end the gateway's life, at startup or after.
#[derive(Debug, Error)]
pub enum SupervisorError {
    #[error("failed to build upstream client: {0}")]
    UpstreamClient(#[from] reqwest::Error),

    #[error("failed to bind {listener} listener on {addr}: {source}")]
    Bind {
        listener: &'static str,
        addr: String,
        source: std::io::Error,
    },

    #[error("RPC listener terminated: {0}")]
    Rpc(#[from] tonic::transport::Error),

    #[error("REST listener terminated: {0}")]
    Rest(std::io::Error),

    #[error("{0} listener task panicked")]
    ListenerPanic(&'static str),
}

/// Single entry point that owns both listeners for the process lifetime.
pub struct Supervisor {
    config: GatewayConfig,
    state: LifecycleState,
}

impl Supervisor {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            state: LifecycleState::Init,
        }
    }

    fn transition(&mut self, next: LifecycleState) {
        tracing::info!(from = ?self.state, to = ?next, "lifecycle transition");
        self.state = next;
    }

    /// Bring up both front ends and run until shutdown triggers.
    ///
    /// The RPC listener is bound and serving before the REST listener binds.
    pub async fn run(mut self, shutdown: &Shutdown) -> Result<(), SupervisorError> {
        // Subscribed before any task can trigger, so no signal is missed.
        let mut drain = shutdown.subscribe();

        let upstream = UpstreamClient::new(&self.config.upstream, &self.config.timeouts)?;

        self.transition(LifecycleState::RpcStarting);
        let rpc_addr = format!(
            "{}:{}",
            self.config.listener.host, self.config.listener.rpc_port
        );
        let rpc_listener =
            TcpListener::bind(&rpc_addr)
                .await
                .map_err(|source| SupervisorError::Bind {
                    listener: "rpc",
                    addr: rpc_addr.clone(),
                    source,
                })?;

        let rpc_service = make_item_service(upstream.clone());
        let mut rpc_signal = shutdown.subscribe();
        let rpc_done = shutdown.clone();
        let rpc_task = tokio::spawn(async move {
            let result = tonic::transport::Server::builder()
                .add_service(rpc_service)
                .serve_with_incoming_shutdown(TcpListenerStream::new(rpc_listener), async move {
                    let _ = rpc_signal.recv().await;
                })
                .await;
            rpc_done.trigger();
            result
        });
        tracing::info!(address = %rpc_addr, "gRPC server started");
        self.transition(LifecycleState::RpcReady);

        self.transition(LifecycleState::RestStarting);
        let rest_addr = format!(
            "{}:{}",
            self.config.listener.host, self.config.listener.rest_port
        );
        let rest_listener =
            TcpListener::bind(&rest_addr)
                .await
                .map_err(|source| SupervisorError::Bind {
                    listener: "rest",
                    addr: rest_addr.clone(),
                    source,
                })?;

        let rest_server = HttpServer::new(upstream);
        let rest_signal = shutdown.subscribe();
        let rest_done = shutdown.clone();
        let rest_task = tokio::spawn(async move {
            let result = rest_server.run(rest_listener, rest_signal).await;
            rest_done.trigger();
            result
        });
        tracing::info!(address = %rest_addr, "HTTP server started");
        self.transition(LifecycleState::RestReady);

        self.transition(LifecycleState::Running);
        let _ = drain.recv().await;

        self.transition(LifecycleState::Draining);
        let (rpc_result, rest_result) = tokio::join!(rpc_task, rest_task);
        rpc_result.map_err(|_| SupervisorError::ListenerPanic("rpc"))??;
        rest_result
            .map_err(|_| SupervisorError::ListenerPanic("rest"))?
            .map_err(SupervisorError::Rest)?;

        self.transition(LifecycleState::Stopped);
        Ok(())
    }
}
