//! Game session management for Ludoforge.
//!
//! Each game is a [`GameSession`], a plain synchronous state machine,
//! kept behind its own lock inside the [`SessionStore`]. Sessions never
//! share a lock, so unrelated games proceed independently.
//!
//! # Key types
//!
//! - [`GameSession`]: one game's authoritative state and rules
//! - [`SessionStore`]: creates sessions and looks them up by id
//! - [`SessionHandle`]: exclusive access to one stored session
//! - [`GameConfig`]: seat count, pieces per player, board size
//! - [`GameError`]: everything a session operation can reject

mod config;
mod error;
mod session;
mod store;

pub use config::GameConfig;
pub use error::GameError;
pub use session::{GameSession, Player};
pub use store::{SessionHandle, SessionStore};
