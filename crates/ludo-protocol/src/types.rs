//! Core protocol types for Ludoforge's HTTP API.
//!
//! Every type here is a JSON body: either something a client posts, or
//! something the server answers with. Field names match the wire format
//! exactly, so renaming a field is a breaking protocol change.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{GameId, PlayerId};

// ---------------------------------------------------------------------------
// GameStatus
// ---------------------------------------------------------------------------

/// The lifecycle status of a game session.
///
/// ```text
/// Waiting ──(4th player joins)──→ InProgress ──→ Finished
/// ```
///
/// - **Waiting**: Session exists and is accepting joins.
/// - **InProgress**: All seats are filled. Players move in turn order.
/// - **Finished**: Reserved. No operation transitions into it yet.
///
/// `#[serde(rename_all = "snake_case")]` gives `"waiting"`,
/// `"in_progress"` and `"finished"` on the wire.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Waiting,
    InProgress,
    Finished,
}

impl GameStatus {
    /// Returns `true` if the session is accepting new players.
    pub fn is_joinable(&self) -> bool {
        matches!(self, Self::Waiting)
    }

    /// Returns `true` if players can currently make moves.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Waiting => write!(f, "waiting"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Finished => write!(f, "finished"),
        }
    }
}

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

/// Response to `POST /create_game`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGameResponse {
    pub game_id: GameId,
}

/// Response to `POST /join_game/{game_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinGameResponse {
    pub player_id: PlayerId,
}

/// Body of `POST /make_move`.
///
/// `piece_index` is signed so that a negative index reaches the game
/// layer and is reported as an invalid piece, rather than failing to
/// decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeMoveRequest {
    pub player_id: PlayerId,
    pub piece_index: i64,
    pub steps: i64,
}

/// Response to a successful `POST /make_move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeMoveResponse {
    pub success: bool,
    pub new_position: i64,
}

impl MakeMoveResponse {
    /// A successful move that left the piece at `new_position`.
    pub fn moved(new_position: i64) -> Self {
        Self {
            success: true,
            new_position,
        }
    }
}

/// A read-only view of a game session, returned by
/// `GET /game_state/{game_id}`.
///
/// `players` is in join order. `current_turn` is `null` unless the game
/// is in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateView {
    pub game_id: GameId,
    pub players: Vec<PlayerId>,
    pub status: GameStatus,
    pub current_turn: Option<PlayerId>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Machine-readable error category carried in every error body.
///
/// Clients should branch on this, not on the human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    GameNotFound,
    GameNotJoinable,
    GameNotInProgress,
    OutOfTurn,
    InvalidPieceIndex,
    PlayerNotFound,
}

impl ErrorKind {
    /// The human-readable message sent alongside this kind.
    pub fn message(&self) -> &'static str {
        match self {
            Self::GameNotFound => "Game not found",
            Self::GameNotJoinable => "Unable to join game",
            Self::GameNotInProgress => "Game is not in progress",
            Self::OutOfTurn => "Not your turn",
            Self::InvalidPieceIndex => "Invalid piece",
            Self::PlayerNotFound => "Player not found",
        }
    }
}

/// JSON body of every failed request: `{"error": "...", "kind": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: ErrorKind,
}

impl From<ErrorKind> for ErrorBody {
    fn from(kind: ErrorKind) -> Self {
        Self {
            error: kind.message().to_owned(),
            kind,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
