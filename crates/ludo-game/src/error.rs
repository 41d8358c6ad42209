//! Error types for the game layer.

use ludo_protocol::{ErrorKind, GameId, PlayerId};

/// Errors that can occur during game session operations.
///
/// All of these are expected, recoverable conditions. Retrying without
/// a change in game state reproduces the same error.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// No session exists with this id.
    #[error("game {0} not found")]
    NotFound(GameId),

    /// The session has left the waiting state and admits no one.
    /// A full table reports this too.
    #[error("game {0} is not accepting players")]
    NotJoinable(GameId),

    /// Moves are only accepted while the game is in progress.
    #[error("game {0} is not in progress")]
    NotInProgress(GameId),

    /// The player tried to move while another player holds the turn.
    #[error("it is not player {0}'s turn")]
    OutOfTurn(PlayerId),

    /// The piece index is outside `0..pieces_per_player`.
    #[error("invalid piece index {0}")]
    InvalidPieceIndex(i64),
}

impl GameError {
    /// The wire-level category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::GameNotFound,
            Self::NotJoinable(_) => ErrorKind::GameNotJoinable,
            Self::NotInProgress(_) => ErrorKind::GameNotInProgress,
            Self::OutOfTurn(_) => ErrorKind::OutOfTurn,
            Self::InvalidPieceIndex(_) => ErrorKind::InvalidPieceIndex,
        }
    }
}
