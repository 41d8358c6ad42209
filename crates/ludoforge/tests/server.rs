//! Integration tests for the Ludoforge HTTP server.

use std::time::Duration;

use ludoforge::prelude::*;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

// =========================================================================
// Helpers
// =========================================================================

/// Starts a server on a random port and returns its base URL.
async fn start_server() -> String {
    let server = LudoServer::builder()
        .bind("127.0.0.1:0")
        .build()
        .await
        .expect("server should build");

    let addr = server.local_addr().expect("should have local addr");

    tokio::spawn(async move {
        let _ = server.run().await;
    });

    // Give the accept loop a moment to start.
    tokio::time::sleep(Duration::from_millis(10)).await;
    format!("http://{addr}")
}

async fn create_game(client: &Client, base: &str) -> String {
    let body: CreateGameResponse = client
        .post(format!("{base}/create_game"))
        .send()
        .await
        .expect("create request")
        .json()
        .await
        .expect("create body");
    body.game_id.to_string()
}

async fn join_game(client: &Client, base: &str, game_id: &str) -> String {
    let resp = client
        .post(format!("{base}/join_game/{game_id}"))
        .send()
        .await
        .expect("join request");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: JoinGameResponse = resp.json().await.expect("join body");
    body.player_id.to_string()
}

async fn make_move(
    client: &Client,
    base: &str,
    player_id: &str,
    piece_index: i64,
    steps: i64,
) -> (StatusCode, Value) {
    let resp = client
        .post(format!("{base}/make_move"))
        .json(&json!({
            "player_id": player_id,
            "piece_index": piece_index,
            "steps": steps,
        }))
        .send()
        .await
        .expect("move request");
    let status = resp.status();
    (status, resp.json().await.expect("move body"))
}

async fn game_state(client: &Client, base: &str, game_id: &str) -> (StatusCode, Value) {
    let resp = client
        .get(format!("{base}/game_state/{game_id}"))
        .send()
        .await
        .expect("state request");
    let status = resp.status();
    (status, resp.json().await.expect("state body"))
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_create_game_then_state_is_waiting() {
    let base = start_server().await;
    let client = Client::new();

    let game_id = create_game(&client, &base).await;
    let (status, body) = game_state(&client, &base, &game_id).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "game_id": game_id,
            "players": [],
            "status": "waiting",
            "current_turn": null,
        })
    );
}

#[tokio::test]
async fn test_join_unknown_game_returns_404() {
    let base = start_server().await;
    let client = Client::new();

    let resp = client
        .post(format!("{base}/join_game/does-not-exist"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = resp.json().await.unwrap();
    assert_eq!(body.error, "Game not found");
    assert_eq!(body.kind, ErrorKind::GameNotFound);
}

#[tokio::test]
async fn test_fifth_join_returns_400() {
    let base = start_server().await;
    let client = Client::new();
    let game_id = create_game(&client, &base).await;
    for _ in 0..4 {
        join_game(&client, &base, &game_id).await;
    }

    let resp = client
        .post(format!("{base}/join_game/{game_id}"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = resp.json().await.unwrap();
    assert_eq!(body.error, "Unable to join game");
    assert_eq!(body.kind, ErrorKind::GameNotJoinable);
}

#[tokio::test]
async fn test_full_game_scenario() {
    let base = start_server().await;
    let client = Client::new();
    let game_id = create_game(&client, &base).await;

    let mut players = Vec::new();
    for _ in 0..4 {
        players.push(join_game(&client, &base, &game_id).await);
    }

    let (_, state) = game_state(&client, &base, &game_id).await;
    assert_eq!(state["status"], "in_progress");
    assert_eq!(state["current_turn"], players[0].as_str());
    assert_eq!(state["players"], json!(players));

    let (status, body) = make_move(&client, &base, &players[0], 0, 3).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "new_position": 3}));

    let (_, state) = game_state(&client, &base, &game_id).await;
    assert_eq!(state["current_turn"], players[1].as_str());

    let (status, body) = make_move(&client, &base, &players[2], 0, 3).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["kind"], "out_of_turn");
    assert_eq!(body["error"], "Not your turn");
}

#[tokio::test]
async fn test_make_move_unknown_player_returns_404() {
    let base = start_server().await;
    let client = Client::new();

    let (status, body) = make_move(&client, &base, "ghost", 0, 1).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Player not found");
    assert_eq!(body["kind"], "player_not_found");
}

#[tokio::test]
async fn test_make_move_before_start_returns_error_status() {
    let base = start_server().await;
    let client = Client::new();
    let game_id = create_game(&client, &base).await;
    let player = join_game(&client, &base, &game_id).await;

    let (status, body) = make_move(&client, &base, &player, 0, 1).await;

    assert!(!status.is_success());
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Game is not in progress");
    assert_eq!(body["kind"], "game_not_in_progress");
}

#[tokio::test]
async fn test_make_move_invalid_piece_returns_400_and_keeps_turn() {
    let base = start_server().await;
    let client = Client::new();
    let game_id = create_game(&client, &base).await;
    let mut players = Vec::new();
    for _ in 0..4 {
        players.push(join_game(&client, &base, &game_id).await);
    }

    for index in [-1, 4] {
        let (status, body) = make_move(&client, &base, &players[0], index, 2).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid piece");
        assert_eq!(body["kind"], "invalid_piece_index");
    }

    let (_, state) = game_state(&client, &base, &game_id).await;
    assert_eq!(state["current_turn"], players[0].as_str());
}

#[tokio::test]
async fn test_game_state_unknown_game_returns_404() {
    let base = start_server().await;
    let client = Client::new();

    let (status, body) = game_state(&client, &base, "missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "game_not_found");
}

#[tokio::test]
async fn test_malformed_move_body_is_rejected() {
    let base = start_server().await;
    let client = Client::new();

    let resp = client
        .post(format!("{base}/make_move"))
        .json(&json!({"player_id": "p", "piece_index": "zero"}))
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn test_graceful_shutdown_stops_server() {
    let server = LudoServer::builder()
        .bind("127.0.0.1:0")
        .build()
        .await
        .unwrap();
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();

    let task = tokio::spawn(server.run_until(async {
        let _ = rx.await;
    }));
    tx.send(()).unwrap();

    let result = tokio::time::timeout(Duration::from_secs(5), task)
        .await
        .expect("server should stop")
        .expect("task should not panic");
    assert!(result.is_ok());
}
