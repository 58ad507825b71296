//! Slide module - compaction and merge
//!
//! Every direction is reduced to one row primitive, [`slide_row`], which moves
//! tiles towards index 0:
//!
//! 1. drop the empty cells, keeping tile order
//! 2. scan left to right; when a tile equals its right neighbour, double it and
//!    empty the neighbour (a tile merges at most once per slide, and a pair at
//!    the top of the cell range never merges)
//! 3. drop the emptied cells again and pad with zeros to the original length
//!
//! The other directions are compositions of that primitive:
//!
//! | Direction | Composition |
//! |-----------|-------------|
//! | Left  | slide each row |
//! | Right | mirror, Left, mirror |
//! | Up    | transpose, Left, transpose |
//! | Down  | transpose, Right, transpose |

use tracing::instrument;

use crate::board::Board;
use crate::types::{Cell, Direction};

/// Slide a single row towards index 0
///
/// # Examples
///
/// ```
/// use tui_2048_core::slide::slide_row;
///
/// assert_eq!(slide_row(&[0, 2, 0, 2]), vec![4, 0, 0, 0]);
/// assert_eq!(slide_row(&[2, 2, 2, 2]), vec![4, 4, 0, 0]);
/// assert_eq!(slide_row(&[4, 4, 8, 0]), vec![8, 8, 0, 0]);
/// ```
pub fn slide_row(row: &[Cell]) -> Vec<Cell> {
    let mut tiles: Vec<Cell> = row.iter().copied().filter(|&v| v != 0).collect();

    for i in 1..tiles.len() {
        // A slot emptied by the previous merge never matches, so no tile merges twice.
        if tiles[i - 1] == 0 || tiles[i - 1] != tiles[i] {
            continue;
        }
        // Tiles whose double does not fit in a cell stay apart.
        if let Some(doubled) = tiles[i - 1].checked_mul(2) {
            tiles[i - 1] = doubled;
            tiles[i] = 0;
        }
    }

    tiles.retain(|&v| v != 0);
    tiles.resize(row.len(), 0);
    tiles
}

fn slide_left(board: &Board) -> Board {
    Board::from_row_vecs(board.width(), board.rows().map(slide_row))
}

/// Slide every tile on the board in `direction`
///
/// The result has the same dimensions and the same cell sum as the input.
#[instrument(level = "trace", skip(board), fields(width = board.width(), height = board.height()))]
pub fn slide(direction: Direction, board: &Board) -> Board {
    match direction {
        Direction::Left => slide_left(board),
        Direction::Right => slide_left(&board.mirror()).mirror(),
        Direction::Up => slide(Direction::Left, &board.transpose()).transpose(),
        Direction::Down => slide(Direction::Right, &board.transpose()).transpose(),
    }
}
