//! Benchmarks for board core operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chess_core::board::{Board, Color, Occupant, Piece, Square, START_FEN};

const MIDDLEGAME: &str = "R1BQK2R/PPPP1PPP/2N2N2/2B1P3/2b1p3/2n2n2/pppp1ppp/r1bqk2r";

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.pseudo_moves(Color::White)))
    });

    let middlegame = Board::from_fen(MIDDLEGAME);
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.pseudo_moves(Color::White)))
    });

    let queen = Board::from_fen("8/8/8/3Q4/8/8/8/8");
    let center = Square(3, 3);
    group.bench_function("lone_queen", |b| {
        b.iter(|| black_box(queen.queen_targets(center, Color::White)))
    });

    group.finish();
}

fn bench_validate_apply(c: &mut Criterion) {
    let board = Board::new();
    let pawn = Occupant::new(Color::White, Piece::Pawn);
    let (e2, e4) = (Square(1, 4), Square(3, 4));

    c.bench_function("can_move", |b| {
        b.iter(|| black_box(board.can_move(pawn, &e2, &e4, Color::White)))
    });

    c.bench_function("apply_move", |b| {
        b.iter_batched(
            || board.clone(),
            |mut b| b.apply_move(pawn, &e2, &e4),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_codec(c: &mut Criterion) {
    let board = Board::from_fen(START_FEN);
    c.bench_function("state_string", |b| {
        b.iter(|| black_box(board.state_string()))
    });
    c.bench_function("from_fen", |b| {
        b.iter(|| Board::from_fen(black_box(START_FEN)))
    });
}

criterion_group!(benches, bench_movegen, bench_validate_apply, bench_codec);
criterion_main!(benches);
