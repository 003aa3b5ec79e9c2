//! Stateless grid projection for the Gomoku board.
//!
//! Every frame is a full rebuild from the controller's board snapshot; there
//! is no incremental patching, so the displayed grid can never diverge from
//! the authoritative one.

use crate::board::{BOARD_SIZE, Cell, Coord};
use crate::controller::GameController;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

// Each cell renders as a glyph plus a spacer column.
const CELL_WIDTH: u16 = 2;

/// Renders the whole screen: title, board grid, status line.
pub fn draw(frame: &mut Frame, controller: &GameController, cursor: Coord) {
    let area = frame.area();
    let chunks = split_screen(area);

    let title = Paragraph::new("Gomoku - Five in a Row")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_grid(frame, chunks[1], controller, cursor);

    let status = Paragraph::new(controller.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

/// The screen rectangle occupied by the board block (borders included).
///
/// Pure so the event loop can hit-test mouse clicks against the same
/// geometry the renderer uses.
pub fn grid_area(area: Rect) -> Rect {
    let chunks = split_screen(area);
    center_rect(
        chunks[1],
        BOARD_SIZE as u16 * CELL_WIDTH + 2,
        BOARD_SIZE as u16 + 2,
    )
}

/// Maps a screen position to the board cell under it, if any.
pub fn cell_at(area: Rect, x: u16, y: u16) -> Option<Coord> {
    let grid = grid_area(area);
    // Inner area, inside the block borders.
    let inner_x = x.checked_sub(grid.x + 1)?;
    let inner_y = y.checked_sub(grid.y + 1)?;
    let coord = Coord::new(inner_y as usize, (inner_x / CELL_WIDTH) as usize);
    coord.in_bounds().then_some(coord)
}

fn split_screen(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(BOARD_SIZE as u16 + 2),
            Constraint::Length(3),
        ])
        .split(area)
}

fn draw_grid(frame: &mut Frame, area: Rect, controller: &GameController, cursor: Coord) {
    let grid = center_rect(
        area,
        BOARD_SIZE as u16 * CELL_WIDTH + 2,
        BOARD_SIZE as u16 + 2,
    );

    let border_style = if controller.is_game_over() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let block = Block::default().borders(Borders::ALL).style(border_style);

    let Some(board) = controller.board() else {
        let placeholder = Paragraph::new("No game in progress")
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, grid);
        return;
    };

    // Cursor highlight only while the board is interactive.
    let cursor = (!controller.is_game_over()).then_some(cursor);
    let lines: Vec<Line> = board
        .rows()
        .iter()
        .enumerate()
        .map(|(row, cells)| grid_line(cells, row, cursor))
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, grid);
}

fn grid_line<'a>(cells: &[Cell], row: usize, cursor: Option<Coord>) -> Line<'a> {
    let spans: Vec<Span> = cells
        .iter()
        .enumerate()
        .map(|(col, cell)| {
            let (glyph, style) = match cell {
                Cell::Empty => ("· ", Style::default().fg(Color::DarkGray)),
                Cell::Player => (
                    "● ",
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                ),
                Cell::Opponent => (
                    "○ ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
            };
            let style = if cursor == Some(Coord::new(row, col)) {
                style.bg(Color::White).fg(Color::Black)
            } else {
                style
            };
            Span::styled(glyph, style)
        })
        .collect();
    Line::from(spans)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
