//! Gomoku client library.
//!
//! A terminal client for a 15x15 Gomoku game played against a remote
//! opponent-decision service over HTTP. The server is the sole source of
//! truth for board legality and game outcome; this crate owns the
//! client-side synchronization protocol around it.
//!
//! # Architecture
//!
//! - **Board**: immutable 15x15 snapshots, replaced wholesale from each
//!   server response
//! - **GameController**: the state machine gating move submission behind a
//!   single-outstanding-exchange lock
//! - **GameService**: the request/response boundary (`/start`, `/move`),
//!   implemented over HTTP and mockable in tests
//! - **tui**: the ratatui event loop and grid projection

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod board;
pub mod cli;
pub mod client;
pub mod controller;
pub mod protocol;
pub mod tui;

pub use board::{BOARD_SIZE, Board, Cell, Coord};
pub use client::{GameService, HttpGameClient, ServiceError};
pub use controller::{GameController, Intent, OutboundRequest, status_text};
pub use protocol::{GameStatus, ServerUpdate};
