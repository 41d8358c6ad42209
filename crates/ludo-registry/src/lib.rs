//! Player registry for Ludoforge.
//!
//! Every player belongs to exactly one game. This crate keeps the
//! inverse index (player → game) so that a move request carrying only
//! a player id can be routed to the right session.
//!
//! # How it fits in the stack
//!
//! ```text
//! Gateway (above)  ← resolves a player before touching any session
//!     ↕
//! Registry (this crate)  ← player id → game id
//!     ↕
//! Protocol (below)  ← provides PlayerId, GameId
//! ```

mod error;
mod registry;

pub use error::RegistryError;
pub use registry::PlayerRegistry;
