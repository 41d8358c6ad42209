//! HTTP handlers: decode the request, call the gateway, encode the reply.
//!
//! Routes:
//!
//! ```text
//! POST /create_game            → CreateGameResponse
//! POST /join_game/{game_id}    → JoinGameResponse
//! POST /make_move              → MakeMoveResponse
//! GET  /game_state/{game_id}   → GameStateView
//! ```
//!
//! Failures come back as [`LudoError`], whose `IntoResponse` impl picks
//! the status code and the JSON error body.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use ludo_protocol::{
    CreateGameResponse, GameId, GameStateView, JoinGameResponse,
    MakeMoveRequest, MakeMoveResponse,
};

use crate::{LudoError, SessionGateway};

/// Builds the router for all game routes.
pub fn router(gateway: Arc<SessionGateway>) -> Router {
    Router::new()
        .route("/create_game", post(create_game))
        .route("/join_game/{game_id}", post(join_game))
        .route("/make_move", post(make_move))
        .route("/game_state/{game_id}", get(game_state))
        .with_state(gateway)
}

/// POST /create_game
async fn create_game(
    State(gateway): State<Arc<SessionGateway>>,
) -> Json<CreateGameResponse> {
    let game_id = gateway.create_session().await;
    Json(CreateGameResponse { game_id })
}

/// POST /join_game/{game_id}
async fn join_game(
    State(gateway): State<Arc<SessionGateway>>,
    Path(game_id): Path<GameId>,
) -> Result<Json<JoinGameResponse>, LudoError> {
    let player_id = gateway.join_session(&game_id).await?;
    Ok(Json(JoinGameResponse { player_id }))
}

/// POST /make_move
async fn make_move(
    State(gateway): State<Arc<SessionGateway>>,
    Json(req): Json<MakeMoveRequest>,
) -> Result<Json<MakeMoveResponse>, LudoError> {
    let new_position = gateway
        .make_move(&req.player_id, req.piece_index, req.steps)
        .await?;
    Ok(Json(MakeMoveResponse::moved(new_position)))
}

/// GET /game_state/{game_id}
async fn game_state(
    State(gateway): State<Arc<SessionGateway>>,
    Path(game_id): Path<GameId>,
) -> Result<Json<GameStateView>, LudoError> {
    let view = gateway.get_state(&game_id).await?;
    Ok(Json(view))
}
