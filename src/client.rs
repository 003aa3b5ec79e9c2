//! HTTP client for the Gomoku game server.

use crate::board::Board;
use crate::protocol::{ErrorBody, MoveRequest, ServerUpdate};
use async_trait::async_trait;
use derive_more::{Display, Error, From};
use tracing::{debug, instrument, warn};

/// Failure of one exchange with the server.
///
/// Every variant is recoverable: the controller reverts to idle with game
/// state untouched and the user may retry.
#[derive(Debug, Display, Error, From)]
pub enum ServiceError {
    /// Server answered non-success and supplied an error descriptor.
    #[display("{descriptor}")]
    Rejected {
        /// Descriptor string from the error body, or an `HTTP {status}`
        /// fallback when the body carried none.
        descriptor: String,
    },
    /// Request never completed (connection refused, timeout, ...).
    #[display("{_0}")]
    Transport(reqwest::Error),
    /// Success response that did not decode as a [`ServerUpdate`].
    #[display("malformed server response: {_0}")]
    Decode(serde_json::Error),
}

/// The remote opponent-decision boundary.
///
/// The server is a black box: it receives the whole board and answers with a
/// whole board. Tests substitute a mock implementation.
#[async_trait]
pub trait GameService: Send + Sync {
    /// Begins a fresh game.
    async fn start(&self) -> Result<ServerUpdate, ServiceError>;

    /// Submits the player's move at (row, col) on `board` and waits for the
    /// opponent's reply.
    async fn play(
        &self,
        board: Board,
        row: usize,
        col: usize,
    ) -> Result<ServerUpdate, ServiceError>;
}

/// reqwest-backed [`GameService`] implementation.
#[derive(Debug, Clone)]
pub struct HttpGameClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpGameClient {
    /// Creates a client for the server at `base_url` (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Posts `payload` to `path` and decodes the response.
    async fn post<T: serde::Serialize>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<ServerUpdate, ServiceError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Sending exchange");

        let response = self.client.post(&url).json(payload).send().await?;
        let status = response.status();

        if !status.is_success() {
            // Error bodies are best-effort JSON; fall back to the HTTP status.
            let descriptor = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            warn!(status = %status, descriptor = %descriptor, "Server rejected exchange");
            return Err(ServiceError::Rejected { descriptor });
        }

        let body = response.text().await?;
        let update = serde_json::from_str::<ServerUpdate>(&body)?;
        debug!(status = ?update.status, stones = update.board.stone_count(), "Exchange succeeded");
        Ok(update)
    }
}

#[async_trait]
impl GameService for HttpGameClient {
    #[instrument(skip(self))]
    async fn start(&self) -> Result<ServerUpdate, ServiceError> {
        self.post("/start", &serde_json::json!({})).await
    }

    #[instrument(skip(self, board))]
    async fn play(
        &self,
        board: Board,
        row: usize,
        col: usize,
    ) -> Result<ServerUpdate, ServiceError> {
        self.post("/move", &MoveRequest { board, row, col }).await
    }
}
