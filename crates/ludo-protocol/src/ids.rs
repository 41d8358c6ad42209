//! Identity types for games and players.
//!
//! Both identifiers are "newtype wrappers" around a `String`. You can't
//! accidentally pass a `PlayerId` where a `GameId` is expected, even
//! though both are strings underneath.
//!
//! Fresh identifiers are random v4 UUIDs in hyphenated form. Clients
//! treat them as opaque: any string can be parsed back into an id, and
//! an unknown id simply fails the lookup that uses it.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// GameId
// ---------------------------------------------------------------------------

/// A unique identifier for a game session.
///
/// `#[serde(transparent)]` serializes this as the bare string, so a
/// game id on the wire is `"3f2b..."`, not `{ "0": "3f2b..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Generates a fresh, globally unique game id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for GameId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for GameId {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// PlayerId
// ---------------------------------------------------------------------------

/// A unique identifier for a player, minted when they join a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Generates a fresh, globally unique player id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PlayerId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for PlayerId {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_id_generate_is_unique() {
        assert_ne!(GameId::generate(), GameId::generate());
    }

    #[test]
    fn test_game_id_generate_is_hyphenated_uuid() {
        let id = GameId::generate();
        assert_eq!(id.as_str().len(), 36);
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_player_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&PlayerId::from("p-1")).unwrap();
        assert_eq!(json, "\"p-1\"");
    }

    #[test]
    fn test_player_id_deserializes_from_plain_string() {
        let pid: PlayerId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(pid, PlayerId::from("abc"));
    }

    #[test]
    fn test_game_id_display_is_raw_value() {
        assert_eq!(GameId::from("g-7").to_string(), "g-7");
    }
}
