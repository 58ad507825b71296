//! Rules module - spawning, moves, and terminal-state queries
//!
//! All functions here are pure over [`Board`] values: they take a board by
//! reference and return a new one. The only outside input is the injected
//! [`TileSource`] used for spawns.

use tracing::{debug, instrument, trace, warn};

use crate::board::Board;
use crate::error::BoardError;
use crate::rng::TileSource;
use crate::slide::slide;
use crate::types::{Cell, Direction, SPAWN_BAG, STARTING_TILES, WIN_VALUE};

/// Create a fresh board with [`STARTING_TILES`] random tiles
///
/// # Examples
///
/// ```
/// use tui_2048_core::{create_board, rng::seeded};
///
/// let board = create_board(4, 4, &mut seeded(1)).unwrap();
/// assert_eq!(board.tile_count(), 2);
/// ```
pub fn create_board<S: TileSource + ?Sized>(
    width: usize,
    height: usize,
    source: &mut S,
) -> Result<Board, BoardError> {
    let board = Board::empty(width, height)?;
    Ok(seed_tiles(&board, source))
}

/// Spawn the starting tiles onto `board`
pub(crate) fn seed_tiles<S: TileSource + ?Sized>(board: &Board, source: &mut S) -> Board {
    (0..STARTING_TILES).fold(board.clone(), |b, _| spawn_random_tile(&b, source))
}

/// Place one new tile (2 or 4) on a random empty cell
///
/// The value is drawn first, uniformly from [`SPAWN_BAG`], then the cell,
/// uniformly from the empty cells in row-major order. A board with no empty
/// cell is returned unchanged.
#[instrument(level = "trace", skip_all, fields(empty = board.empty_count()))]
pub fn spawn_random_tile<S: TileSource + ?Sized>(board: &Board, source: &mut S) -> Board {
    let empty = board.empty_points();
    if empty.is_empty() {
        warn!("spawn requested on a full board; leaving it unchanged");
        return board.clone();
    }

    let value = SPAWN_BAG[source.pick(SPAWN_BAG.len())];
    let point = empty[source.pick(empty.len())];
    trace!(row = point.row, col = point.col, value, "spawned tile");

    // `point` came from the board's own empty cells, so it is in bounds.
    board.with_cell(point, value).unwrap_or_else(|| board.clone())
}

/// Check whether no slide in any direction can free a cell
///
/// Sums the empty cells of all four slide results; the board is blocked when
/// that sum is zero. Any merge empties a cell, so a zero sum means the board
/// is full and nothing can merge.
#[instrument(level = "trace", skip_all)]
pub fn is_blocked(board: &Board) -> bool {
    Direction::ALL
        .iter()
        .map(|&direction| slide(direction, board).empty_count())
        .sum::<usize>()
        == 0
}

/// Check whether any tile has reached `target`
pub fn has_reached_target(board: &Board, target: Cell) -> bool {
    board.contains_value(target)
}

/// [`has_reached_target`] with the standard [`WIN_VALUE`]
pub fn has_won(board: &Board) -> bool {
    has_reached_target(board, WIN_VALUE)
}

/// Slide in `direction`, then spawn a tile if anything moved
///
/// A slide that leaves the board unchanged returns the input as-is and
/// consumes nothing from `source`.
#[instrument(level = "trace", skip(board, source))]
pub fn apply_move<S: TileSource + ?Sized>(
    board: &Board,
    direction: Direction,
    source: &mut S,
) -> Board {
    let slid = slide(direction, board);
    if slid == *board {
        trace!("slide changed nothing; no spawn");
        return board.clone();
    }
    debug!(
        %direction,
        freed = slid.empty_count().saturating_sub(board.empty_count()),
        "move accepted"
    );
    spawn_random_tile(&slid, source)
}

/// Dispatch a key identifier (`ArrowLeft`, ...) to [`apply_move`]
///
/// Unrecognized keys leave the board unchanged and spawn nothing.
///
/// # Examples
///
/// ```
/// use tui_2048_core::{apply_key, rng::seeded, Board};
///
/// let board = Board::from_rows(&[[0, 2], [0, 0]]).unwrap();
/// assert_eq!(apply_key(&board, "KeyX", &mut seeded(1)), board);
/// assert_ne!(apply_key(&board, "ArrowLeft", &mut seeded(1)), board);
/// ```
pub fn apply_key<S: TileSource + ?Sized>(board: &Board, key: &str, source: &mut S) -> Board {
    match Direction::from_key(key) {
        Some(direction) => apply_move(board, direction, source),
        None => {
            trace!(key, "ignoring unrecognized key");
            board.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Scripted;
    use crate::types::Point;

    #[test]
    fn test_spawn_picks_value_then_cell() {
        let board = Board::from_rows(&[[2, 0], [0, 0]]).unwrap();
        // value index 6 -> 4, cell index 2 -> third empty cell (1, 1)
        let mut source = Scripted::new([6, 2]);
        let next = spawn_random_tile(&board, &mut source);
        assert_eq!(next.to_rows(), vec![vec![2, 0], vec![0, 4]]);
        assert_eq!(source.consumed(), 2);
    }

    #[test]
    fn test_spawn_on_full_board_is_identity() {
        let board = Board::from_rows(&[[2, 4], [8, 16]]).unwrap();
        let mut source = Scripted::new([0]);
        assert_eq!(spawn_random_tile(&board, &mut source), board);
        assert_eq!(source.consumed(), 0);
    }

    #[test]
    fn test_create_board_seeds_two_tiles() {
        let mut source = Scripted::new([0, 0, 0, 0]);
        let board = create_board(3, 2, &mut source).unwrap();
        assert_eq!(board.get(Point::new(0, 0)), Some(2));
        assert_eq!(board.get(Point::new(0, 1)), Some(2));
        assert_eq!(board.tile_count(), 2);
    }

    #[test]
    fn test_create_board_zero_width_fails() {
        let mut source = Scripted::new([0]);
        assert!(create_board(0, 4, &mut source).is_err());
    }

    #[test]
    fn test_blocked_single_cell() {
        assert!(is_blocked(&Board::from_rows(&[[2]]).unwrap()));
        assert!(!is_blocked(&Board::from_rows(&[[0]]).unwrap()));
    }

    #[test]
    fn test_apply_move_noop_consumes_nothing() {
        let board = Board::from_rows(&[[2, 0], [4, 0]]).unwrap();
        let mut source = Scripted::new([0]);
        assert_eq!(apply_move(&board, Direction::Left, &mut source), board);
        assert_eq!(source.consumed(), 0);
    }

    #[test]
    fn test_apply_move_spawns_into_freed_cell() {
        let board = Board::from_rows(&[[2, 2], [4, 8]]).unwrap();
        let mut source = Scripted::new([0, 0]);
        let next = apply_move(&board, Direction::Left, &mut source);
        assert_eq!(next.to_rows(), vec![vec![4, 2], vec![4, 8]]);
    }
}
