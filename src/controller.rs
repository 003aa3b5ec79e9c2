//! Client-side game state machine.
//!
//! The controller is transport-free: it consumes intents and exchange
//! results, and emits the requests the driver should issue. Exactly one
//! exchange may be outstanding; `pending` is the authority on that, not the
//! transport. Board and status only ever change wholesale, from a successful
//! server response.

use crate::board::{Board, Coord};
use crate::client::ServiceError;
use crate::protocol::{GameStatus, ServerUpdate};
use tracing::debug;

/// A user-originated signal, prior to validation.
///
/// Pointer clicks and keyboard activation both arrive as `CellActivated`;
/// the controller does not care about input modality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Start (or restart) a game.
    NewGame,
    /// Place a stone at the given cell.
    CellActivated(Coord),
}

/// Which exchange is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exchange {
    /// A `/start` round-trip.
    Start,
    /// A `/move` round-trip.
    Move,
}

/// A request the driver must issue on behalf of an accepted intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundRequest {
    /// Begin a fresh game.
    Start,
    /// Submit a move, carrying the entire current board.
    Move {
        /// Snapshot of the board the move is played on.
        board: Board,
        /// Target row.
        row: usize,
        /// Target column.
        col: usize,
    },
}

/// Owns the client-side game state.
///
/// One instance per game view; nothing here is global, so independent games
/// and deterministic tests both come for free.
#[derive(Debug)]
pub struct GameController {
    board: Option<Board>,
    status: GameStatus,
    pending: Option<Exchange>,
    game_over: bool,
    status_line: String,
}

impl GameController {
    /// Creates a controller with no game in progress.
    pub fn new() -> Self {
        Self {
            board: None,
            status: GameStatus::Ongoing,
            pending: None,
            game_over: false,
            status_line: "Press 'n' to start a game.".to_string(),
        }
    }

    /// Last known board, if a game has been started.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Last status received from the server.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Whether an exchange is outstanding. True for the entire duration of a
    /// round-trip and at no other time.
    pub fn is_locked(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the last received status was terminal.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Current status line text.
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// Validates an intent against local preconditions.
    ///
    /// Returns the request to issue when accepted, or `None` when the intent
    /// is dropped. Drops are silent no-ops guarding against stale UI events:
    /// anything while locked, and cell activation when the game is over, the
    /// board is uninitialized, the coordinate is out of range, or the cell is
    /// occupied.
    pub fn handle_intent(&mut self, intent: Intent) -> Option<OutboundRequest> {
        if self.is_locked() {
            debug!(?intent, "Dropping intent while exchange outstanding");
            return None;
        }

        match intent {
            Intent::NewGame => {
                self.pending = Some(Exchange::Start);
                self.status_line = "Starting game…".to_string();
                Some(OutboundRequest::Start)
            }
            Intent::CellActivated(coord) => {
                if self.game_over {
                    debug!(?coord, "Dropping move intent, game over");
                    return None;
                }
                let Some(board) = &self.board else {
                    debug!(?coord, "Dropping move intent, no board yet");
                    return None;
                };
                if !board.is_empty(coord) {
                    debug!(?coord, "Dropping move intent, cell not empty");
                    return None;
                }
                self.pending = Some(Exchange::Move);
                self.status_line = "AI thinking…".to_string();
                Some(OutboundRequest::Move {
                    board: board.clone(),
                    row: coord.row,
                    col: coord.col,
                })
            }
        }
    }

    /// Applies the result of the outstanding exchange.
    ///
    /// On success the board and status are replaced wholesale and `game_over`
    /// recomputed. On failure nothing changes except the status line, which
    /// surfaces the error descriptor; the attempted move never took effect
    /// locally, so there is no partial state to undo.
    pub fn complete_exchange(&mut self, result: Result<ServerUpdate, ServiceError>) {
        let Some(exchange) = self.pending.take() else {
            // A response with nothing outstanding means the driver misbehaved.
            debug!("Ignoring exchange result with no exchange pending");
            return;
        };

        match result {
            Ok(update) => {
                self.game_over = update.status.is_terminal();
                self.status_line = match exchange {
                    Exchange::Start => update
                        .message
                        .clone()
                        .unwrap_or_else(|| "Your turn.".to_string()),
                    Exchange::Move => status_text(&update.status, update.message.as_deref()),
                };
                self.board = Some(update.board);
                self.status = update.status;
            }
            Err(error) => {
                debug!(%error, ?exchange, "Exchange failed, state unchanged");
                self.status_line = format!("Error: {error}");
            }
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a game status (and optional server message) to status line text.
pub fn status_text(status: &GameStatus, message: Option<&str>) -> String {
    match status {
        GameStatus::Ongoing => message.unwrap_or("Your turn.").to_string(),
        GameStatus::PlayerWin => "You win! Press 'n' to play again.".to_string(),
        GameStatus::AiWin => "AI wins. Press 'n' to try again.".to_string(),
        GameStatus::Draw => "Draw. Press 'n' to play again.".to_string(),
        GameStatus::Other(_) => message.unwrap_or("Done.").to_string(),
    }
}
