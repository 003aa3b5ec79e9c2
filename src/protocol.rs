//! Wire types for the two exchanges with the game server.

use crate::board::Board;
use serde::{Deserialize, Serialize};

/// Game outcome as reported by the server.
///
/// The server is the sole authority on outcome; the client only classifies
/// the string it receives. Statuses it does not recognize are carried
/// verbatim so the status line can still fall back sensibly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameStatus {
    /// Game continues; it is the player's turn after each response.
    Ongoing,
    /// The local player has five in a row.
    PlayerWin,
    /// The remote opponent has five in a row.
    AiWin,
    /// Board is full with no winner.
    Draw,
    /// A status string this client does not know.
    Other(String),
}

impl GameStatus {
    /// Whether this status ends the game.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GameStatus::PlayerWin | GameStatus::AiWin | GameStatus::Draw
        )
    }
}

impl From<String> for GameStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ongoing" => GameStatus::Ongoing,
            "player_win" => GameStatus::PlayerWin,
            "ai_win" => GameStatus::AiWin,
            "draw" => GameStatus::Draw,
            _ => GameStatus::Other(value),
        }
    }
}

impl From<GameStatus> for String {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::Ongoing => "ongoing".to_string(),
            GameStatus::PlayerWin => "player_win".to_string(),
            GameStatus::AiWin => "ai_win".to_string(),
            GameStatus::Draw => "draw".to_string(),
            GameStatus::Other(value) => value,
        }
    }
}

/// Success payload of both `/start` and `/move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerUpdate {
    /// Complete replacement board.
    pub board: Board,
    /// Outcome after the exchange.
    pub status: GameStatus,
    /// Optional human-readable status message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Request body for `/move`. `/start` takes an empty object.
#[derive(Debug, Clone, Serialize)]
pub struct MoveRequest {
    /// The entire current board as the client knows it.
    pub board: Board,
    /// Target row.
    pub row: usize,
    /// Target column.
    pub col: usize,
}

/// Error body of a non-success response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    /// Error descriptor, surfaced to the user verbatim.
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BOARD_SIZE, Cell, Coord};

    #[test]
    fn status_parses_known_strings() {
        assert_eq!(GameStatus::from("ongoing".to_string()), GameStatus::Ongoing);
        assert_eq!(
            GameStatus::from("player_win".to_string()),
            GameStatus::PlayerWin
        );
        assert_eq!(GameStatus::from("ai_win".to_string()), GameStatus::AiWin);
        assert_eq!(GameStatus::from("draw".to_string()), GameStatus::Draw);
    }

    #[test]
    fn unknown_status_is_carried_verbatim() {
        let status = GameStatus::from("abandoned".to_string());
        assert_eq!(status, GameStatus::Other("abandoned".to_string()));
        assert!(!status.is_terminal());
    }

    #[test]
    fn terminal_statuses() {
        assert!(!GameStatus::Ongoing.is_terminal());
        assert!(GameStatus::PlayerWin.is_terminal());
        assert!(GameStatus::AiWin.is_terminal());
        assert!(GameStatus::Draw.is_terminal());
    }

    #[test]
    fn server_update_decodes_without_message() {
        let json = serde_json::json!({
            "board": vec![vec![0u8; BOARD_SIZE]; BOARD_SIZE],
            "status": "ongoing",
        });
        let update: ServerUpdate = serde_json::from_value(json).unwrap();
        assert_eq!(update.status, GameStatus::Ongoing);
        assert_eq!(update.message, None);
        assert_eq!(update.board.stone_count(), 0);
    }

    #[test]
    fn move_request_carries_full_board() {
        let board = Board::with_stones(&[(Coord::new(7, 7), Cell::Player)]);
        let request = MoveRequest {
            board,
            row: 7,
            col: 8,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["row"], 7);
        assert_eq!(json["col"], 8);
        assert_eq!(json["board"].as_array().unwrap().len(), BOARD_SIZE);
        assert_eq!(json["board"][7][7], 1);
    }
}
