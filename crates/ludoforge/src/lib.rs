//! # Ludoforge
//!
//! HTTP game server for turn-based Ludo sessions.
//!
//! Clients create a game, join it until all four seats are taken, then
//! move pieces in strict turn order. The server keeps every game in
//! memory, each behind its own lock, so unrelated games never wait on
//! each other.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ludoforge::prelude::*;
//!
//! # async fn start() -> Result<(), LudoError> {
//! let server = LudoServer::builder()
//!     .bind("0.0.0.0:5000")
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```

mod error;
mod gateway;
mod handler;
mod server;

pub use error::LudoError;
pub use gateway::SessionGateway;
pub use handler::router;
pub use server::{DEFAULT_BIND_ADDR, LudoServer, LudoServerBuilder, ServerConfig};

/// Everything needed to embed or drive a Ludoforge server.
pub mod prelude {
    pub use crate::{
        LudoError, LudoServer, LudoServerBuilder, ServerConfig, SessionGateway,
    };
    pub use ludo_game::{GameConfig, GameError};
    pub use ludo_protocol::{
        CreateGameResponse, ErrorBody, ErrorKind, GameId, GameStateView,
        GameStatus, JoinGameResponse, MakeMoveRequest, MakeMoveResponse,
        PlayerId,
    };
    pub use ludo_registry::RegistryError;
}
