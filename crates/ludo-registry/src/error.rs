//! Error types for the registry layer.

use ludo_protocol::{ErrorKind, PlayerId};

/// Errors that can occur while resolving players.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No game has ever admitted a player with this id.
    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),
}

impl RegistryError {
    /// The wire-level category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PlayerNotFound(_) => ErrorKind::PlayerNotFound,
        }
    }
}
