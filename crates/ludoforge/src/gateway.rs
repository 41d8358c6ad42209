//! The session gateway: the four operations the outside world can ask for.
//!
//! Each operation resolves its target session, takes that session's lock
//! for exactly one game operation, and returns a plain result. The
//! gateway knows nothing about HTTP; the handlers in `handler.rs` wrap
//! it.

use ludo_game::{GameConfig, SessionStore};
use ludo_protocol::{GameId, GameStateView, PlayerId};
use ludo_registry::PlayerRegistry;

use crate::LudoError;

/// Composes the session store and the player registry.
///
/// Lock order is always session → registry, and the registry lock is
/// never held while waiting for a session, so the two can't deadlock.
pub struct SessionGateway {
    sessions: SessionStore,
    players: PlayerRegistry,
}

impl SessionGateway {
    /// Creates a gateway for standard four-player games.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Creates a gateway whose games use `config`.
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            sessions: SessionStore::with_config(config),
            players: PlayerRegistry::new(),
        }
    }

    /// Creates an empty game and returns its id.
    pub async fn create_session(&self) -> GameId {
        self.sessions.create().await
    }

    /// Seats a new player in `game_id` and returns their fresh id.
    ///
    /// The player is registered while the session lock is still held,
    /// so no one can observe a seated player the registry doesn't know.
    ///
    /// # Errors
    /// - [`GameError::NotFound`](ludo_game::GameError::NotFound)
    /// - [`GameError::NotJoinable`](ludo_game::GameError::NotJoinable)
    pub async fn join_session(
        &self,
        game_id: &GameId,
    ) -> Result<PlayerId, LudoError> {
        let player_id = PlayerId::generate();
        let handle = self.sessions.get(game_id).await?;

        let mut session = handle.lock().await;
        session.add_player(player_id.clone())?;
        self.players
            .register(player_id.clone(), game_id.clone())
            .await;

        Ok(player_id)
    }

    /// Moves one of `player_id`'s pieces and returns its new position.
    ///
    /// # Errors
    /// - [`RegistryError::PlayerNotFound`](ludo_registry::RegistryError::PlayerNotFound)
    /// - [`GameError::NotFound`](ludo_game::GameError::NotFound)
    /// - [`GameError::NotInProgress`](ludo_game::GameError::NotInProgress)
    /// - [`GameError::OutOfTurn`](ludo_game::GameError::OutOfTurn)
    /// - [`GameError::InvalidPieceIndex`](ludo_game::GameError::InvalidPieceIndex)
    pub async fn make_move(
        &self,
        player_id: &PlayerId,
        piece_index: i64,
        steps: i64,
    ) -> Result<i64, LudoError> {
        let game_id = self.players.resolve(player_id).await?;
        let handle = self.sessions.get(&game_id).await?;
        let position = handle.make_move(player_id, piece_index, steps).await?;
        Ok(position)
    }

    /// Returns a snapshot of `game_id`.
    pub async fn get_state(
        &self,
        game_id: &GameId,
    ) -> Result<GameStateView, LudoError> {
        let handle = self.sessions.get(game_id).await?;
        Ok(handle.state().await)
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }
}

impl Default for SessionGateway {
    fn default() -> Self {
        Self::new()
    }
}
