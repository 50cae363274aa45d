// Minimum conflict repair
//
// Starts with all queens on the diagonal. Every step moves the most attacked queen to
// the least attacked row of its own column. Revisiting a configuration means the
// repair is going in circles: the board is replaced by a random one with one queen
// per row and column.
//
// The moving queen leaves the board before its column is scored, so its own
// attacks on the other rows of the column do not count against them.

use super::prelude::*;
use std::cmp::Ordering;

/// A cell and the number of queens attacking it, captured at construction time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Square {
    location: Location,
    attackers: usize,
}

impl Square {
    fn on(board: &Board, location: Location) -> Self {
        Square {
            location,
            attackers: board.attackers_at(location.x, location.y),
        }
    }
}

fn most_attackers(a: &Square, b: &Square) -> Ordering {
    a.attackers.cmp(&b.attackers)
}

fn fewest_attackers(a: &Square, b: &Square) -> Ordering {
    b.attackers.cmp(&a.attackers)
}

pub(crate) fn repair<O, R>(run: &mut SearchRun<'_, O>, rng: &mut R) -> Result<Outcome, SearchError>
where
    O: Observer + ?Sized,
    R: Rng + ?Sized,
{
    let n = run.n();
    let mut visited: HashSet<CanonicalKey> = HashSet::new();
    let mut board = Board::with_queens_on_diagonal(n);

    while board.queens_under_attack() != 0 {
        if run.out_of_time() {
            return Ok(Outcome::TimedOut);
        }

        if !visited.insert(board.canonical_key()) {
            board = Board::with_one_queen_per_column(n, rng);
            run.local_optimum(&board);
            continue;
        }

        run.count_configuration();
        run.trace(&board);

        move_most_attacked_queen(&mut board)?;
    }
    Ok(Outcome::Solved(board))
}

fn move_most_attacked_queen(board: &mut Board) -> Result<(), SearchError> {
    let mut queens = PriorityQueue::new(most_attackers);
    for queen in board.queens() {
        queens.add(Square::on(board, queen));
    }
    let queen = queens.remove_max()?.location;

    if board.is_safe(queen.x, queen.y)? {
        return Ok(());
    }
    board.remove_queen(queen.x, queen.y)?;

    let mut column = PriorityQueue::new(fewest_attackers);
    for y in 0..board.size() {
        column.add(Square::on(board, Location::new(queen.x, y)));
    }
    let target = column.remove_max()?.location;
    board.add_queen(target.x, target.y)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{SearchParams, Strategy};
    use std::time::Duration;

    #[test]
    fn moves_the_most_attacked_queen_to_a_better_row() {
        // (0, 0) and (1, 1) share a diagonal, (3, 0) shares a row with (0, 0)
        let mut board = Board::from_queens(4, vec![(0, 0), (1, 1), (2, 3), (3, 0)]).unwrap();
        let before = board.queens_under_attack();
        move_most_attacked_queen(&mut board).unwrap();

        assert_eq!(board.total_queens(), 4);
        assert!(!board.contains_queen(0, 0).unwrap());
        assert!(board.queens_under_attack() < before);
        // after removal (0, 2) has one attacker, every other row two
        assert!(board.contains_queen(0, 2).unwrap());
        // still one queen in column 0
        assert_eq!(board.queens().filter(|q| q.x == 0).count(), 1);
    }

    #[test]
    fn solved_board_is_left_alone() {
        let solved = Board::from_queens(4, vec![(0, 1), (1, 3), (2, 0), (3, 2)]).unwrap();
        let mut board = solved.clone();
        move_most_attacked_queen(&mut board).unwrap();
        assert_eq!(board, solved);
    }

    #[test]
    fn restarts_lead_to_a_solution_for_eight() {
        let params = SearchParams::default()
            .with_seed(8)
            .with_time_limit(Duration::from_secs(60));
        let report = Strategy::MinimumConflict.search(8, &params).unwrap();
        assert!(report.solution().unwrap().is_solution());
        assert!(report.local_optima.is_some());
        assert!(report.steps.unwrap() <= report.configurations);
    }

    #[test]
    fn repair_is_reproducible() {
        let params = SearchParams::default().with_seed(77);
        let first = Strategy::MinimumConflict.search(10, &params).unwrap();
        let second = Strategy::MinimumConflict.search(10, &params).unwrap();
        assert_eq!(first.solution(), second.solution());
        assert_eq!(first.local_optima, second.local_optima);
    }
}
