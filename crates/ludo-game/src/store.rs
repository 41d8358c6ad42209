//! Session store: creates, tracks and hands out access to game sessions.
//!
//! # Concurrency note
//!
//! Two levels of locking, never nested in the other direction:
//!
//! 1. The store's map sits behind an `RwLock` that is held only long
//!    enough to insert a new session or clone a handle out of the map.
//! 2. Each session sits behind its own `Mutex`. Every operation on a
//!    session goes through its [`SessionHandle`], so joins and moves on
//!    the same session run one at a time, while different sessions never
//!    wait on each other.

use std::collections::HashMap;
use std::sync::Arc;

use ludo_protocol::{GameId, GameStateView, PlayerId};
use tokio::sync::{Mutex, MutexGuard, RwLock};

use crate::{GameConfig, GameError, GameSession};

/// Handle to one stored session.
///
/// This is cheap to clone: it's just an `Arc` around the session's
/// lock. Callers clone a handle out of the store, drop the store lock,
/// and only then lock the session.
#[derive(Clone)]
pub struct SessionHandle {
    game_id: GameId,
    session: Arc<Mutex<GameSession>>,
}

impl SessionHandle {
    /// Returns the session's unique ID.
    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    /// Waits for exclusive access to the session.
    ///
    /// Use this when several reads and writes must happen as one step.
    /// The single-operation helpers below are built on it.
    pub async fn lock(&self) -> MutexGuard<'_, GameSession> {
        self.session.lock().await
    }

    /// Seats a player. See [`GameSession::add_player`].
    pub async fn join(&self, player_id: PlayerId) -> Result<(), GameError> {
        self.lock().await.add_player(player_id)
    }

    /// Applies a move. See [`GameSession::make_move`].
    pub async fn make_move(
        &self,
        player_id: &PlayerId,
        piece_index: i64,
        steps: i64,
    ) -> Result<i64, GameError> {
        self.lock().await.make_move(player_id, piece_index, steps)
    }

    /// Returns a snapshot of the session.
    pub async fn state(&self) -> GameStateView {
        self.lock().await.state()
    }
}

/// Owns every game session in the process.
///
/// Sessions are never removed; they live until the process exits.
pub struct SessionStore {
    /// Active sessions, keyed by game ID.
    sessions: RwLock<HashMap<GameId, SessionHandle>>,

    /// Configuration applied to every new session.
    config: GameConfig,
}

impl SessionStore {
    /// Creates an empty store that builds standard four-player games.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Creates an empty store with a custom game configuration.
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Creates a new empty session and returns its ID.
    pub async fn create(&self) -> GameId {
        let game_id = GameId::generate();
        let handle = SessionHandle {
            game_id: game_id.clone(),
            session: Arc::new(Mutex::new(GameSession::new(
                game_id.clone(),
                self.config.clone(),
            ))),
        };
        self.sessions.write().await.insert(game_id.clone(), handle);
        tracing::info!(%game_id, "game created");
        game_id
    }

    /// Looks up a session by ID.
    ///
    /// # Errors
    /// Returns [`GameError::NotFound`] if no such session exists.
    pub async fn get(&self, game_id: &GameId) -> Result<SessionHandle, GameError> {
        self.sessions
            .read()
            .await
            .get(game_id)
            .cloned()
            .ok_or_else(|| GameError::NotFound(game_id.clone()))
    }

    /// Returns the number of sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Returns `true` if no session has been created yet.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// The configuration new sessions are created with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
