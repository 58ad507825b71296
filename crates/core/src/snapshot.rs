use crate::board::Board;
use crate::types::{Cell, GameStatus};

/// Everything a view needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: Board,
    pub status: GameStatus,
    pub target: Cell,
    pub moves: u32,
    pub episode: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Largest tile on the board
    pub fn best_tile(&self) -> Cell {
        self.board.max_tile()
    }
}
