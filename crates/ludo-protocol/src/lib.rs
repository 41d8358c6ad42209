//! Wire protocol for Ludoforge.
//!
//! This crate defines the "language" that HTTP clients and the server
//! speak:
//!
//! - **Identifiers** ([`GameId`], [`PlayerId`]): opaque, globally
//!   unique handles generated by the server.
//! - **Types** ([`GameStatus`], [`GameStateView`], request and response
//!   bodies): the JSON shapes that travel on the wire.
//! - **Errors** ([`ErrorKind`], [`ErrorBody`]): the structured error
//!   payload every failed request carries.
//!
//! # Architecture
//!
//! The protocol layer sits below the game and registry layers. It
//! doesn't know about locks, stores or HTTP status codes. It only
//! describes data.
//!
//! ```text
//! HTTP (axum) → Protocol (JSON bodies) → Game / Registry (state)
//! ```

mod ids;
mod types;

pub use ids::{GameId, PlayerId};
pub use types::{
    CreateGameResponse, ErrorBody, ErrorKind, GameStateView, GameStatus,
    JoinGameResponse, MakeMoveRequest, MakeMoveResponse,
};
