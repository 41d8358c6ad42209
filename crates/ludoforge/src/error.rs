//! Unified error type for the Ludoforge server.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ludo_game::GameError;
use ludo_protocol::{ErrorBody, ErrorKind};
use ludo_registry::RegistryError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant auto-generates `From` impls,
/// so the `?` operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum LudoError {
    /// A game-level error (not found, not joinable, out of turn, ...).
    #[error(transparent)]
    Game(#[from] GameError),

    /// A registry-level error (unknown player).
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

impl LudoError {
    /// The wire-level category, for errors a client can cause.
    ///
    /// Returns `None` for server-side failures.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Game(e) => Some(e.kind()),
            Self::Registry(e) => Some(e.kind()),
            Self::Bind { .. } | Self::Serve(_) => None,
        }
    }

    /// The HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            Some(kind) => status_for(kind),
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Every client-caused error maps to a non-2xx status.
fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::GameNotFound | ErrorKind::PlayerNotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorKind::GameNotJoinable | ErrorKind::InvalidPieceIndex => {
            StatusCode::BAD_REQUEST
        }
        ErrorKind::GameNotInProgress | ErrorKind::OutOfTurn => {
            StatusCode::CONFLICT
        }
    }
}

impl IntoResponse for LudoError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self.kind() {
            Some(kind) => {
                tracing::debug!(error = %self, %status, "request rejected");
                (status, Json(ErrorBody::from(kind))).into_response()
            }
            None => {
                tracing::error!(error = %self, "internal error");
                status.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ludo_protocol::{GameId, PlayerId};

    use super::*;

    #[test]
    fn test_from_game_error() {
        let err: LudoError = GameError::NotFound(GameId::from("g")).into();
        assert!(matches!(err, LudoError::Game(_)));
        assert_eq!(err.kind(), Some(ErrorKind::GameNotFound));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_from_registry_error() {
        let err: LudoError =
            RegistryError::PlayerNotFound(PlayerId::from("p")).into();
        assert!(matches!(err, LudoError::Registry(_)));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_session_errors_are_never_success() {
        let errors: Vec<LudoError> = vec![
            GameError::NotJoinable(GameId::from("g")).into(),
            GameError::NotInProgress(GameId::from("g")).into(),
            GameError::OutOfTurn(PlayerId::from("p")).into(),
            GameError::InvalidPieceIndex(4).into(),
        ];
        for err in errors {
            let status = err.status_code();
            assert!(status.is_client_error(), "{err} mapped to {status}");
        }
    }

    #[test]
    fn test_transparent_display_keeps_inner_message() {
        let err: LudoError = GameError::InvalidPieceIndex(7).into();
        assert_eq!(err.to_string(), "invalid piece index 7");
    }

    #[test]
    fn test_bind_error_is_internal() {
        let err = LudoError::Bind {
            addr: "bad".into(),
            source: std::io::Error::other("nope"),
        };
        assert_eq!(err.kind(), None);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
