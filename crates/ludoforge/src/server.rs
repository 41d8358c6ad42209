//! `LudoServer` builder and server loop.
//!
//! This is the entry point for running a Ludoforge game server. It ties
//! together the layers: HTTP (axum) → gateway → store / registry.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use ludo_game::GameConfig;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::handler::router;
use crate::{LudoError, SessionGateway};

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Process-level server settings.
///
/// The bind address is the only knob; everything else about a game is
/// fixed by [`GameConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to listen on, e.g. `0.0.0.0:5000`. Port 0 picks a free
    /// port, which [`LudoServer::local_addr`] then reports.
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

/// Builder for configuring and starting a Ludoforge server.
///
/// # Example
///
/// ```rust,ignore
/// let server = LudoServer::builder()
///     .bind("0.0.0.0:5000")
///     .build()
///     .await?;
/// server.run().await
/// ```
pub struct LudoServerBuilder {
    config: ServerConfig,
    game_config: GameConfig,
}

impl LudoServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
            game_config: GameConfig::default(),
        }
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.config.bind_addr = addr.to_string();
        self
    }

    /// Replaces the whole server configuration.
    pub fn config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the configuration every new game is created with.
    pub fn game_config(mut self, config: GameConfig) -> Self {
        self.game_config = config;
        self
    }

    /// Binds the listener and builds the server.
    ///
    /// # Errors
    /// Returns [`LudoError::Bind`] if the address can't be bound.
    pub async fn build(self) -> Result<LudoServer, LudoError> {
        let addr = self.config.bind_addr;
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| LudoError::Bind {
                addr: addr.clone(),
                source,
            })?;
        tracing::info!(%addr, "HTTP listener bound");

        Ok(LudoServer {
            listener,
            gateway: Arc::new(SessionGateway::with_config(self.game_config)),
        })
    }
}

impl Default for LudoServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A bound Ludoforge server.
///
/// Call [`run()`](Self::run) to start serving requests.
pub struct LudoServer {
    listener: TcpListener,
    gateway: Arc<SessionGateway>,
}

impl LudoServer {
    /// Creates a new builder.
    pub fn builder() -> LudoServerBuilder {
        LudoServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Returns the gateway shared by all request handlers.
    pub fn gateway(&self) -> Arc<SessionGateway> {
        Arc::clone(&self.gateway)
    }

    /// Serves requests until the process is terminated.
    pub async fn run(self) -> Result<(), LudoError> {
        self.run_until(std::future::pending()).await
    }

    /// Serves requests until `shutdown` resolves, then lets in-flight
    /// requests finish.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), LudoError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!("Ludoforge server running");

        axum::serve(self.listener, router(self.gateway))
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(LudoError::Serve)?;

        tracing::info!("Ludoforge server stopped");
        Ok(())
    }
}
