use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pocket_tetris::core::{Board, GameSnapshot, GameState, Phase, Session};
use pocket_tetris::term::{FrameBuffer, GameView, Viewport};
use pocket_tetris::types::{Button, GameAction, Options, PieceKind, TICK_MS};

fn bench_session_tick(c: &mut Criterion) {
    let mut session = Session::new(&Options {
        seed: Some(12345),
        ..Options::default()
    });
    session.press(Button::Start);

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            if !session.tick(black_box(TICK_MS)) && session.phase() != Phase::Playing {
                session.press(Button::Start);
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let game = GameState::new(12345);

    c.bench_function("hard_drop", |b| b.iter(|| black_box(game.hard_drop())));
}

fn bench_move(c: &mut Criterion) {
    let game = GameState::new(12345);

    c.bench_function("move_right", |b| {
        b.iter(|| black_box(game.apply_action(GameAction::MoveRight)))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let game = GameState::new(12345);

    c.bench_function("rotate", |b| b.iter(|| black_box(game.rotate())));
}

fn bench_render(c: &mut Criterion) {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    GameState::new(12345).hard_drop().snapshot_into(&mut snap);
    let viewport = Viewport::new(80, 30);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("render_playing_frame", |b| {
        b.iter(|| view.render_into(black_box(&snap), Phase::Playing, viewport, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_session_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_move,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
