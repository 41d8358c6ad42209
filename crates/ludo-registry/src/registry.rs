//! The player registry: which game does each player belong to?
//!
//! # Concurrency note
//!
//! The map sits behind a `tokio::sync::RwLock`. Lookups take the read
//! lock and registrations the write lock, each only for the duration of
//! a single map operation. No caller ever holds it across a game
//! operation.

use std::collections::HashMap;

use ludo_protocol::{GameId, PlayerId};
use tokio::sync::RwLock;

use crate::RegistryError;

/// Maps every admitted player to the game they joined.
///
/// Entries are only ever added: players can't leave a game, and games
/// are never destroyed.
pub struct PlayerRegistry {
    players: RwLock<HashMap<PlayerId, GameId>>,
}

impl PlayerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            players: RwLock::new(HashMap::new()),
        }
    }

    /// Records that `player_id` belongs to `game_id`.
    ///
    /// Player ids are freshly generated at join time, so there is no
    /// duplicate to detect.
    pub async fn register(&self, player_id: PlayerId, game_id: GameId) {
        tracing::debug!(%player_id, %game_id, "player registered");
        self.players.write().await.insert(player_id, game_id);
    }

    /// Returns the game a player belongs to.
    ///
    /// # Errors
    /// Returns [`RegistryError::PlayerNotFound`] for an unknown player.
    pub async fn resolve(&self, player_id: &PlayerId) -> Result<GameId, RegistryError> {
        self.players
            .read()
            .await
            .get(player_id)
            .cloned()
            .ok_or_else(|| RegistryError::PlayerNotFound(player_id.clone()))
    }

    /// Returns the number of registered players.
    pub async fn len(&self) -> usize {
        self.players.read().await.len()
    }

    /// Returns `true` if no player has been registered.
    pub async fn is_empty(&self) -> bool {
        self.players.read().await.is_empty()
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
