//! Game module - the playing/won/lost session around one board
//!
//! [`Game`] owns the single mutable piece of state in the program: the current
//! board. Every accepted input replaces it with the value returned by the pure
//! rules; nothing edits a board in place.
//!
//! # Lifecycle
//!
//! ```text
//!            move / no-op
//!           ┌──────────┐
//!           ▼          │
//!  new ──► Playing ────┘
//!           │   │
//!  blocked  │   │ target reached
//!           ▼   ▼
//!         Lost  Won ──(any action)──► fresh board, Playing
//! ```
//!
//! The status is checked before each input (blocked first, then target) and
//! again after each accepted move, so a view always shows the terminal state
//! as soon as the move that caused it lands.

use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::error::BoardError;
use crate::rng::TileSource;
use crate::rules::{apply_move, has_reached_target, is_blocked, seed_tiles};
use crate::snapshot::GameSnapshot;
use crate::types::{
    is_valid_target, Cell, Direction, GameAction, GameStatus, DEFAULT_HEIGHT, DEFAULT_WIDTH,
    WIN_VALUE,
};

/// Board dimensions and win target for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub width: usize,
    pub height: usize,
    pub target: Cell,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            target: WIN_VALUE,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct Game<S> {
    settings: Settings,
    board: Board,
    status: GameStatus,
    /// Accepted moves on the current board.
    moves: u32,
    /// Monotonic board id (increments on restart).
    episode: u32,
    source: S,
}

impl<S: TileSource> Game<S> {
    /// Start a session on a fresh board
    ///
    /// Fails on a zero dimension or a target rejected by [`is_valid_target`].
    pub fn new(settings: Settings, mut source: S) -> Result<Self, BoardError> {
        check_target(settings.target)?;
        let board = seed_tiles(&Board::empty(settings.width, settings.height)?, &mut source);
        Self::with_board(settings, board, source)
    }

    /// Resume a session from an existing board
    ///
    /// `settings.width`/`height` are taken from `board`.
    pub fn with_board(settings: Settings, board: Board, source: S) -> Result<Self, BoardError> {
        check_target(settings.target)?;
        let settings = Settings {
            width: board.width(),
            height: board.height(),
            ..settings
        };
        let status = evaluate(&board, settings.target);
        Ok(Self {
            settings,
            board,
            status,
            moves: 0,
            episode: 0,
            source,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    /// Replace the board with a fresh one and return to `Playing`
    #[instrument(skip(self), fields(episode = self.episode))]
    pub fn restart(&mut self) {
        self.board = seed_tiles(&self.board.cleared(), &mut self.source);
        self.moves = 0;
        self.episode = self.episode.wrapping_add(1);
        self.status = evaluate(&self.board, self.settings.target);
        info!(episode = self.episode, "new board");
    }

    /// Apply one player action
    ///
    /// Returns true if the board or the status changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.status.is_terminal() {
            // Any input after a finished game starts the next one.
            self.restart();
            return true;
        }

        match action {
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::Move(direction) => self.apply_direction(direction),
        }
    }

    /// Apply a key identifier (`ArrowLeft`, ...)
    ///
    /// After a finished game any key, recognized or not, starts the next one.
    /// While playing, unknown keys are no-ops.
    pub fn apply_key(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(direction) => self.apply_action(GameAction::Move(direction)),
            None => self.apply_unmapped(),
        }
    }

    /// Handle input that maps to no action
    ///
    /// Restarts a finished game; otherwise changes nothing.
    pub fn apply_unmapped(&mut self) -> bool {
        if !self.status.is_terminal() {
            return false;
        }
        self.restart();
        true
    }

    fn apply_direction(&mut self, direction: Direction) -> bool {
        if self.refresh_status() {
            return true;
        }

        let next = apply_move(&self.board, direction, &mut self.source);
        if next == self.board {
            return false;
        }

        self.board = next;
        self.moves = self.moves.saturating_add(1);
        self.refresh_status();
        true
    }

    /// Re-evaluate the status; returns true if it became terminal.
    fn refresh_status(&mut self) -> bool {
        let status = evaluate(&self.board, self.settings.target);
        if status != self.status {
            info!(
                from = self.status.as_str(),
                to = status.as_str(),
                moves = self.moves,
                max_tile = self.board.max_tile(),
                "status changed"
            );
            self.status = status;
        }
        debug!(status = self.status.as_str(), "status checked");
        self.status.is_terminal()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            status: self.status,
            target: self.settings.target,
            moves: self.moves,
            episode: self.episode,
        }
    }
}

fn check_target(target: Cell) -> Result<(), BoardError> {
    if is_valid_target(target) {
        Ok(())
    } else {
        Err(BoardError::InvalidTarget { target })
    }
}

/// Blocked wins over target when both hold.
fn evaluate(board: &Board, target: Cell) -> GameStatus {
    if is_blocked(board) {
        GameStatus::Lost
    } else if has_reached_target(board, target) {
        GameStatus::Won
    } else {
        GameStatus::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Scripted;

    fn game_from(rows: &[[Cell; 4]], picks: &[usize]) -> Game<Scripted> {
        Game::with_board(
            Settings::default(),
            Board::from_rows(rows).unwrap(),
            Scripted::new(picks.iter().copied()),
        )
        .unwrap()
    }

    #[test]
    fn test_new_game_is_playing() {
        let game = Game::new(Settings::default(), Scripted::new([0, 5])).unwrap();
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.board().tile_count(), 2);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_new_game_rejects_zero_height() {
        let settings = Settings {
            height: 0,
            ..Settings::default()
        };
        assert!(Game::new(settings, Scripted::new([0])).is_err());
    }

    #[test]
    fn test_noop_move_does_not_count() {
        let mut game = game_from(&[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]], &[0]);
        assert!(!game.apply_action(GameAction::Move(Direction::Left)));
        assert!(!game.apply_action(GameAction::Move(Direction::Up)));
        assert_eq!(game.moves(), 0);
        assert!(game.apply_action(GameAction::Move(Direction::Right)));
        assert_eq!(game.moves(), 1);
        assert_eq!(game.board().tile_count(), 2);
    }

    #[test]
    fn test_winning_move_flips_status_immediately() {
        let mut game = game_from(&[[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]], &[0]);
        assert!(game.apply_action(GameAction::Move(Direction::Left)));
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn test_any_action_after_loss_restarts() {
        let mut game = game_from(
            &[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]],
            &[0, 0],
        );
        assert_eq!(game.status(), GameStatus::Lost);
        assert!(game.apply_action(GameAction::Move(Direction::Up)));
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.board().tile_count(), 2);
        assert_eq!(game.episode(), 1);
    }

    #[test]
    fn test_new_game_rejects_bad_target() {
        for target in [0, 2, 3, 1000] {
            let settings = Settings {
                target,
                ..Settings::default()
            };
            assert_eq!(
                Game::new(settings, Scripted::new([0])).err(),
                Some(BoardError::InvalidTarget { target })
            );
            let board = Board::empty(4, 4).unwrap();
            assert!(Game::with_board(settings, board, Scripted::new([0])).is_err());
        }
    }

    #[test]
    fn test_unknown_key_restarts_finished_game() {
        let mut game = game_from(
            &[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]],
            &[0, 0],
        );
        assert_eq!(game.status(), GameStatus::Lost);
        assert!(game.apply_key("Enter"));
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.episode(), 1);
    }

    #[test]
    fn test_unknown_key_is_noop() {
        let mut game = game_from(&[[2, 0, 0, 2], [0; 4], [0; 4], [0; 4]], &[0]);
        let before = game.board().clone();
        assert!(!game.apply_key("Enter"));
        assert_eq!(game.board(), &before);
        assert!(game.apply_key("ArrowLeft"));
        assert_eq!(game.board().get(crate::types::Point::new(0, 0)), Some(4));
    }
}
