#[macro_use]
extern crate criterion;
use criterion::Criterion;
use nqueens::{Board, PriorityQueue, SearchParams, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_strategy(c: &mut Criterion, name: &str, strategy: Strategy, n: usize) {
    let params = SearchParams::default().with_seed(7);
    c.bench_function(name, |b| b.iter(|| strategy.search(n, &params).unwrap()));
}

fn _1_random_with_propagation_8(c: &mut Criterion) {
    bench_strategy(c, "_1_random_with_propagation_8", Strategy::RandomWithPropagation, 8);
}

fn _2_blind_intermediate_6(c: &mut Criterion) {
    bench_strategy(c, "_2_blind_intermediate_6", Strategy::BlindIntermediate, 6);
}

fn _2_blind_advanced_8(c: &mut Criterion) {
    bench_strategy(c, "_2_blind_advanced_8", Strategy::BlindAdvanced, 8);
}

fn _3_minimum_conflict_8(c: &mut Criterion) {
    bench_strategy(c, "_3_minimum_conflict_8", Strategy::MinimumConflict, 8);
}

fn _3_heuristic_search_8(c: &mut Criterion) {
    bench_strategy(c, "_3_heuristic_search_8", Strategy::HeuristicSearch, 8);
}

fn _4_fill_and_clear_board(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
	c.bench_function("_4_fill_and_clear_board", |b| b.iter(|| {
		let mut board = Board::with_one_queen_per_column(32, &mut rng);
		let queens: Vec<_> = board.queens().collect();
		for queen in queens {
			board.remove_queen(queen.x, queen.y).unwrap();
		}
		board
	}));
}

fn _4_priority_queue_of_boards(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let boards: Vec<_> = (0..100)
        .map(|_| Board::with_one_queen_per_column(16, &mut rng))
        .collect();
	c.bench_function("_4_priority_queue_of_boards", |b| b.iter(|| {
		let mut queue = PriorityQueue::new(Board::by_fewest_conflicts);
		for board in &boards {
			queue.add(board.clone());
		}
		while queue.remove_max().is_ok() {}
	}));
}

criterion_group!(
    benches,
    _1_random_with_propagation_8,
    _2_blind_intermediate_6,
    _2_blind_advanced_8,
    _3_minimum_conflict_8,
    _3_heuristic_search_8,
    _4_fill_and_clear_board,
    _4_priority_queue_of_boards
);
criterion_main!(benches);
