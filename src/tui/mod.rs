//! Terminal UI for the Gomoku client.
//!
//! One event loop serializes everything: keyboard and mouse events from
//! crossterm, and exchange completions delivered back over an mpsc channel
//! by spawned request tasks. The controller's lock, not the transport,
//! decides whether an intent may go out.

mod input;
mod ui;

use crate::board::Coord;
use crate::client::{GameService, HttpGameClient, ServiceError};
use crate::controller::{GameController, Intent, OutboundRequest};
use crate::protocol::ServerUpdate;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::path::Path;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

/// Runs the TUI client against the server at `server_url`.
pub async fn run_tui(server_url: String, log_file: &Path) -> Result<()> {
    // Log to a file so tracing output does not fight the TUI for the
    // terminal.
    let log_file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(server_url = %server_url, "Starting Gomoku TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let client = HttpGameClient::new(server_url);
    let res = run_app(&mut terminal, client).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}

#[instrument(skip_all)]
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    service: HttpGameClient,
) -> Result<()> {
    let (result_tx, mut result_rx) = mpsc::unbounded_channel();
    let mut controller = GameController::new();
    let mut cursor = Coord::new(7, 7);

    // Auto-start a game on launch.
    dispatch(&mut controller, Intent::NewGame, &service, &result_tx);

    loop {
        terminal.draw(|frame| ui::draw(frame, &controller, cursor))?;

        // Exchange completions queued since the last turn.
        while let Ok(result) = result_rx.try_recv() {
            controller.complete_exchange(result);
        }

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    info!("User quit");
                    return Ok(());
                }
                KeyCode::Char('n') => {
                    dispatch(&mut controller, Intent::NewGame, &service, &result_tx);
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    dispatch(
                        &mut controller,
                        Intent::CellActivated(cursor),
                        &service,
                        &result_tx,
                    );
                }
                code => {
                    cursor = input::move_cursor(cursor, code);
                }
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                if let Some(coord) = ui::cell_at(area, mouse.column, mouse.row) {
                    cursor = coord;
                    dispatch(
                        &mut controller,
                        Intent::CellActivated(coord),
                        &service,
                        &result_tx,
                    );
                }
            }
            _ => {}
        }
    }
}

/// Validates an intent and, when accepted, spawns the exchange.
///
/// The result comes back through the channel so the loop stays responsive
/// while the server thinks.
fn dispatch(
    controller: &mut GameController,
    intent: Intent,
    service: &HttpGameClient,
    result_tx: &mpsc::UnboundedSender<Result<ServerUpdate, ServiceError>>,
) {
    let Some(request) = controller.handle_intent(intent) else {
        return;
    };

    let service = service.clone();
    let result_tx = result_tx.clone();
    tokio::spawn(async move {
        let result = match request {
            OutboundRequest::Start => service.start().await,
            OutboundRequest::Move { board, row, col } => service.play(board, row, col).await,
        };
        // Receiver gone means the loop already exited.
        let _ = result_tx.send(result);
    });
}
