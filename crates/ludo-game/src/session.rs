//! The game session: one table's authoritative state.
//!
//! A `GameSession` is plain data plus the rules that mutate it. It does
//! no locking of its own. Callers reach it through a
//! [`SessionHandle`](crate::SessionHandle), which guarantees that at most
//! one operation runs against a given session at a time.

use std::collections::HashMap;

use ludo_protocol::{GameId, GameStateView, GameStatus, PlayerId};

use crate::{GameConfig, GameError};

/// Per-player game state.
///
/// `home` and `goal` are reserved counters: they start at 0 and no rule
/// updates them yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pieces: Vec<i64>,
    home: u32,
    goal: u32,
}

impl Player {
    fn new(pieces: usize) -> Self {
        Self {
            pieces: vec![0; pieces],
            home: 0,
            goal: 0,
        }
    }

    /// Piece positions, indexed by piece.
    pub fn pieces(&self) -> &[i64] {
        &self.pieces
    }

    pub fn home(&self) -> u32 {
        self.home
    }

    pub fn goal(&self) -> u32 {
        self.goal
    }
}

/// A single game of Ludo.
///
/// ## Invariants
///
/// - `turn_order` holds exactly the keys of `players`, in join order.
/// - Once the status leaves `Waiting`, `current_turn` is a valid index
///   into `turn_order`.
/// - Players are only admitted while the status is `Waiting`.
#[derive(Debug, Clone)]
pub struct GameSession {
    game_id: GameId,
    config: GameConfig,
    /// Reserved board grid; no rule reads or writes it.
    board: Vec<Vec<Option<PlayerId>>>,
    players: HashMap<PlayerId, Player>,
    turn_order: Vec<PlayerId>,
    current_turn: usize,
    status: GameStatus,
}

impl GameSession {
    /// Creates an empty session in the `Waiting` state.
    pub fn new(game_id: GameId, config: GameConfig) -> Self {
        let board = vec![vec![None; config.board_size]; config.board_size];
        Self {
            game_id,
            config,
            board,
            players: HashMap::new(),
            turn_order: Vec::new(),
            current_turn: 0,
            status: GameStatus::Waiting,
        }
    }

    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &[Vec<Option<PlayerId>>] {
        &self.board
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.turn_order.len()
    }

    /// Looks up a seated player's state.
    pub fn player(&self, player_id: &PlayerId) -> Option<&Player> {
        self.players.get(player_id)
    }

    /// Seated players in join order.
    pub fn turn_order(&self) -> &[PlayerId] {
        &self.turn_order
    }

    /// Returns the player whose turn it is, if the game is in progress.
    pub fn current_player(&self) -> Option<&PlayerId> {
        if self.status.is_active() {
            self.turn_order.get(self.current_turn)
        } else {
            None
        }
    }

    /// Seats a player at the table.
    ///
    /// Taking the last seat starts the game in the same step: the status
    /// becomes `InProgress` and the first joiner holds the turn.
    ///
    /// # Errors
    /// Returns [`GameError::NotJoinable`] once the game has left the
    /// `Waiting` state, which includes every join after the table fills.
    pub fn add_player(&mut self, player_id: PlayerId) -> Result<(), GameError> {
        if !self.status.is_joinable() {
            return Err(GameError::NotJoinable(self.game_id.clone()));
        }
        debug_assert!(
            !self.players.contains_key(&player_id),
            "player ids are freshly generated"
        );

        self.players.insert(
            player_id.clone(),
            Player::new(self.config.pieces_per_player),
        );
        self.turn_order.push(player_id.clone());
        tracing::info!(
            game_id = %self.game_id,
            %player_id,
            players = self.turn_order.len(),
            "player joined"
        );

        if self.turn_order.len() >= self.config.max_players {
            self.status = GameStatus::InProgress;
            self.current_turn = 0;
            tracing::info!(
                game_id = %self.game_id,
                players = self.turn_order.len(),
                "game started"
            );
        }

        Ok(())
    }

    /// Moves one of the current player's pieces by `steps` and passes the
    /// turn to the next seat.
    ///
    /// `steps` is applied as-is, including zero and negative values.
    /// Positions saturate at the `i64` bounds. Returns the piece's new
    /// position.
    ///
    /// # Errors
    /// - [`GameError::NotInProgress`]: the game hasn't started
    /// - [`GameError::OutOfTurn`]: another player holds the turn
    /// - [`GameError::InvalidPieceIndex`]: no such piece
    ///
    /// A rejected move changes nothing, including the turn.
    pub fn make_move(
        &mut self,
        player_id: &PlayerId,
        piece_index: i64,
        steps: i64,
    ) -> Result<i64, GameError> {
        if !self.status.is_active() {
            return Err(GameError::NotInProgress(self.game_id.clone()));
        }
        if self.turn_order.get(self.current_turn) != Some(player_id) {
            return Err(GameError::OutOfTurn(player_id.clone()));
        }

        let pieces = self.config.pieces_per_player;
        let index = usize::try_from(piece_index)
            .ok()
            .filter(|i| *i < pieces)
            .ok_or(GameError::InvalidPieceIndex(piece_index))?;

        let player = self
            .players
            .get_mut(player_id)
            .ok_or_else(|| GameError::OutOfTurn(player_id.clone()))?;
        let position = &mut player.pieces[index];
        *position = position.saturating_add(steps);
        let new_position = *position;

        self.current_turn = (self.current_turn + 1) % self.turn_order.len();

        tracing::debug!(
            game_id = %self.game_id,
            %player_id,
            piece = index,
            steps,
            new_position,
            "move applied"
        );
        Ok(new_position)
    }

    /// Returns a snapshot of the session for clients.
    pub fn state(&self) -> GameStateView {
        GameStateView {
            game_id: self.game_id.clone(),
            players: self.turn_order.clone(),
            status: self.status,
            current_turn: self.current_player().cloned(),
        }
    }
}
