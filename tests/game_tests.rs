//! Game session tests - status transitions, restarts and determinism

use tui_2048::core::{seeded, Board, BoardError, Game, Scripted, Settings};
use tui_2048::types::{Direction, GameAction, GameStatus};

fn play_until_terminal(game: &mut Game<impl tui_2048::core::TileSource>, limit: usize) -> usize {
    for i in 0..limit {
        if game.status().is_terminal() {
            return i;
        }
        let direction = Direction::ALL[i % Direction::ALL.len()];
        game.apply_action(GameAction::Move(direction));
    }
    limit
}

#[test]
fn test_seeded_game_reaches_terminal_state() {
    let mut game = Game::new(Settings::default(), seeded(42)).unwrap();
    let actions = play_until_terminal(&mut game, 40_000);
    assert!(actions < 40_000, "game never ended");
    assert!(game.status().is_terminal());
    assert!(game.moves() > 0);
}

#[test]
fn test_small_board_with_low_target_can_be_won() {
    let settings = Settings {
        width: 3,
        height: 1,
        target: 4,
    };
    // [2, 2, 0] merges to 4 on the first move and leaves room for the spawn.
    let board = Board::from_rows(&[[2, 2, 0]]).unwrap();
    let mut game = Game::with_board(settings, board, Scripted::new([0])).unwrap();
    assert_eq!(game.status(), GameStatus::Playing);
    assert!(game.apply_action(GameAction::Move(Direction::Right)));
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.moves(), 1);
}

#[test]
fn test_status_evaluated_on_resume() {
    let won = Board::from_rows(&[[2048, 0], [0, 0]]).unwrap();
    let game = Game::with_board(Settings::default(), won, Scripted::new([0])).unwrap();
    assert_eq!(game.status(), GameStatus::Won);

    let lost = Board::from_rows(&[[2, 4], [4, 2]]).unwrap();
    let game = Game::with_board(Settings::default(), lost, Scripted::new([0])).unwrap();
    assert_eq!(game.status(), GameStatus::Lost);
}

#[test]
fn test_blocked_takes_priority_over_target() {
    let board = Board::from_rows(&[[2048, 4], [4, 2048]]).unwrap();
    let game = Game::with_board(Settings::default(), board, Scripted::new([0])).unwrap();
    assert_eq!(game.status(), GameStatus::Lost);
}

#[test]
fn test_with_board_takes_dimensions_from_board() {
    let board = Board::from_rows(&[[2, 0, 0], [0, 0, 0]]).unwrap();
    let game = Game::with_board(Settings::default(), board, Scripted::new([0])).unwrap();
    assert_eq!((game.settings().width, game.settings().height), (3, 2));
    assert_eq!(game.settings().target, 2048);
}

#[test]
fn test_restart_resets_board_and_counts() {
    let mut game = Game::new(Settings::default(), seeded(3)).unwrap();
    play_until_terminal(&mut game, 8);
    let moves_before = game.moves();
    assert!(moves_before > 0);

    assert!(game.apply_action(GameAction::Restart));
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.moves(), 0);
    assert_eq!(game.episode(), 1);
    assert_eq!(game.board().tile_count(), 2);
}

#[test]
fn test_terminal_game_restarts_on_any_action() {
    let board = Board::from_rows(&[[2048, 2], [0, 0]]).unwrap();
    let mut game = Game::with_board(Settings::default(), board, Scripted::new([0, 1])).unwrap();
    assert_eq!(game.status(), GameStatus::Won);

    assert!(game.apply_action(GameAction::Move(Direction::Left)));
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.episode(), 1);
    assert_eq!(game.board().tile_count(), 2);
    assert!(!game.board().contains_value(2048));
}

#[test]
fn test_same_seed_same_game() {
    let mut a = Game::new(Settings::default(), seeded(77)).unwrap();
    let mut b = Game::new(Settings::default(), seeded(77)).unwrap();
    assert_eq!(a.board(), b.board());
    for i in 0..100 {
        let action = GameAction::Move(Direction::ALL[i % 4]);
        assert_eq!(a.apply_action(action), b.apply_action(action));
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

#[test]
fn test_apply_key_drives_session() {
    let board = Board::from_rows(&[[0, 2, 0, 2], [0; 4], [0; 4], [0; 4]]).unwrap();
    let mut game = Game::with_board(Settings::default(), board, Scripted::new([0, 0])).unwrap();
    assert!(!game.apply_key("Space"));
    assert_eq!(game.moves(), 0);
    assert!(game.apply_key("ArrowLeft"));
    assert_eq!(game.board().row(0), Some(&[4, 2, 0, 0][..]));
    assert_eq!(game.moves(), 1);
}

#[test]
fn test_snapshot_reflects_state() {
    let board = Board::from_rows(&[[2, 0], [0, 128]]).unwrap();
    let game = Game::with_board(
        Settings {
            target: 256,
            ..Settings::default()
        },
        board,
        Scripted::new([0]),
    )
    .unwrap();
    let snap = game.snapshot();
    assert_eq!(snap.board, *game.board());
    assert_eq!(snap.status, GameStatus::Playing);
    assert_eq!(snap.target, 256);
    assert_eq!(snap.best_tile(), 128);
    assert!(snap.playable());
}

#[test]
fn test_any_key_restarts_lost_game() {
    let lost = Board::from_rows(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();
    let mut game = Game::with_board(Settings::default(), lost, Scripted::new([0, 3])).unwrap();
    assert_eq!(game.status(), GameStatus::Lost);

    assert!(game.apply_key("Enter"));
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.episode(), 1);
    assert_eq!(game.board().tile_count(), 2);
}

#[test]
fn test_unmapped_input_only_matters_after_game_end() {
    let board = Board::from_rows(&[[2, 0], [0, 0]]).unwrap();
    let mut game =
        Game::with_board(Settings::default(), board.clone(), Scripted::new([0])).unwrap();
    assert!(!game.apply_unmapped());
    assert_eq!(game.board(), &board);
    assert_eq!(game.episode(), 0);

    let won = Board::from_rows(&[[2048, 0], [0, 0]]).unwrap();
    let mut game = Game::with_board(Settings::default(), won, Scripted::new([0])).unwrap();
    assert!(game.apply_unmapped());
    assert_eq!(game.status(), GameStatus::Playing);
}

#[test]
fn test_session_rejects_invalid_target() {
    for target in [0, 2, 1000] {
        let settings = Settings {
            target,
            ..Settings::default()
        };
        assert_eq!(
            Game::new(settings, seeded(1)).err(),
            Some(BoardError::InvalidTarget { target })
        );
    }
}
