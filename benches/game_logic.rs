use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{apply_move, is_blocked, seeded, slide, slide_row, Board, Game, Settings};
use tui_2048::types::{Direction, GameAction};

fn mid_game_board() -> Board {
    Board::from_rows(&[
        [2, 4, 8, 16],
        [0, 2, 2, 4],
        [64, 0, 32, 32],
        [2, 2, 4, 0],
    ])
    .unwrap()
}

fn bench_slide_row(c: &mut Criterion) {
    let row = [2, 2, 0, 4, 4, 0, 8, 8];
    c.bench_function("slide_row_8", |b| b.iter(|| slide_row(black_box(&row))));
}

fn bench_slide_all_directions(c: &mut Criterion) {
    let board = mid_game_board();
    c.bench_function("slide_4_directions", |b| {
        b.iter(|| {
            for direction in Direction::ALL {
                black_box(slide(direction, black_box(&board)));
            }
        })
    });
}

fn bench_is_blocked(c: &mut Criterion) {
    let full = Board::from_rows(&[
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ])
    .unwrap();
    c.bench_function("is_blocked_full_board", |b| {
        b.iter(|| is_blocked(black_box(&full)))
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let board = mid_game_board();
    let mut rng = seeded(12345);
    c.bench_function("apply_move_left", |b| {
        b.iter(|| apply_move(black_box(&board), Direction::Left, &mut rng))
    });
}

fn bench_game_action(c: &mut Criterion) {
    let mut game = Game::new(Settings::default(), seeded(12345)).unwrap();
    let mut i = 0usize;
    c.bench_function("game_apply_action", |b| {
        b.iter(|| {
            let direction = Direction::ALL[i % Direction::ALL.len()];
            i += 1;
            game.apply_action(GameAction::Move(direction))
        })
    });
}

criterion_group!(
    benches,
    bench_slide_row,
    bench_slide_all_directions,
    bench_is_blocked,
    bench_apply_move,
    bench_game_action
);
criterion_main!(benches);
