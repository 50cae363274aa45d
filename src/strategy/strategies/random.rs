// Random placement
//
// A single board is filled with queens on uniformly drawn cells until it is full or
// no safe cell is left. An incomplete board is cleared and filled again from scratch.

use super::prelude::*;

/// What to do when a draw lands on an occupied or attacked cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OnCollision {
    /// Throw the board away
    Restart,
    /// Discard the draw and draw again
    Redraw,
}

pub(crate) fn place<O, R>(
    on_collision: OnCollision,
    run: &mut SearchRun<'_, O>,
    rng: &mut R,
) -> Result<Outcome, SearchError>
where
    O: Observer + ?Sized,
    R: Rng + ?Sized,
{
    let n = run.n();
    let mut board = Board::new(n);

    loop {
        if run.out_of_time() {
            return Ok(Outcome::TimedOut);
        }
        run.count_configuration();

        while board.contains_valid_spot() {
            let x = rng.gen_range(0..n);
            let y = rng.gen_range(0..n);

            if !board.contains_queen(x, y)? && board.is_safe(x, y)? {
                board.add_queen(x, y)?;
            } else if on_collision == OnCollision::Restart {
                break;
            }
        }

        // every queen went onto a safe cell
        if board.total_queens() == n {
            return Ok(Outcome::Solved(board));
        }

        log::debug!("gave up on a board with {} of {} queens", board.total_queens(), n);
        run.trace(&board);
        board.clear();
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::strategy::{SearchParams, Strategy};
    use std::time::Duration;

    // boards given up on, in the order they were abandoned
    fn abandoned(strategy: Strategy, n: usize, seed: u64) -> Vec<Board> {
        let mut boards = Vec::new();
        {
            let mut collect = |board: &Board| boards.push(board.clone());
            let params = SearchParams::default().with_seed(seed).debug(true);
            let report = strategy.search_observed(n, &params, &mut collect).unwrap();
            assert!(report.found());
        }
        boards
    }

    #[test]
    fn restart_gives_up_while_safe_cells_remain() {
        let boards = abandoned(Strategy::CompletelyRandom, 5, 2024);
        assert!(boards.iter().any(|board| board.contains_valid_spot()));
    }

    #[test]
    fn redraw_only_gives_up_on_blocked_boards() {
        let mut total = 0;
        for seed in 0..10 {
            let boards = abandoned(Strategy::RandomWithPropagation, 8, seed);
            assert!(boards.iter().all(|board| !board.contains_valid_spot()));
            assert!(boards.iter().all(|board| board.total_queens() < 8));
            total += boards.len();
        }
        assert!(total > 0);
    }

    #[test]
    fn same_seed_same_run() {
        // pure chance rarely fills more than a handful of queens
        for &(strategy, n) in &[(Strategy::CompletelyRandom, 5), (Strategy::RandomWithPropagation, 8)] {
            let params = SearchParams::default().with_seed(2024);
            let first = strategy.search(n, &params).unwrap();
            let second = strategy.search(n, &params).unwrap();
            assert!(first.found(), "{}", strategy);
            assert_eq!(first.solution(), second.solution());
            assert_eq!(first.configurations, second.configurations);
            assert_eq!(first.seed, Some(2024));
        }
    }

    #[test]
    fn propagation_handles_larger_boards() {
        let params = SearchParams::default().with_seed(9);
        let report = Strategy::RandomWithPropagation.search(16, &params).unwrap();
        assert!(report.solution().unwrap().is_solution());
        assert_eq!(report.local_optima, None);
    }

    #[test]
    fn time_limit_is_honoured() {
        // 30 queens placed by pure chance never happens in practice
        let params = SearchParams::default()
            .with_seed(1)
            .with_time_limit(Duration::from_millis(50));
        let report = Strategy::CompletelyRandom.search(30, &params).unwrap();
        assert!(!report.found());
    }
}
