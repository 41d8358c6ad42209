//! Game configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a game session.
///
/// The defaults describe a standard Ludo table: four seats, four pieces
/// each, a 15×15 board. The server always uses the defaults; smaller
/// tables exist for tests and tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seats at the table. The game starts the moment the last seat
    /// is taken, and no one can join after that.
    pub max_players: usize,

    /// Pieces each player controls. Valid piece indices are
    /// `0..pieces_per_player`.
    pub pieces_per_player: usize,

    /// Side length of the (reserved) square board grid.
    pub board_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_players: 4,
            pieces_per_player: 4,
            board_size: 15,
        }
    }
}
