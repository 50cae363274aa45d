// Heuristic search with many children per step
//
// Instead of committing to one move, each step derives CHILDREN boards from the best
// board so far. In a child every attacked queen is moved to the first safe row of
// its column, or a random row if there is none. All children go into one priority
// queue and the least conflicted board is expanded next. The restart handling is the
// same as for the minimum conflict repair.

use super::prelude::*;

const CHILDREN: usize = 10;

pub(crate) fn search<O, R>(run: &mut SearchRun<'_, O>, rng: &mut R) -> Result<Outcome, SearchError>
where
    O: Observer + ?Sized,
    R: Rng + ?Sized,
{
    let n = run.n();
    let mut visited: HashSet<CanonicalKey> = HashSet::new();
    let mut frontier = PriorityQueue::new(Board::by_fewest_conflicts);
    frontier.add(Board::with_queens_on_diagonal(n));

    while !frontier.is_empty() {
        if run.out_of_time() {
            return Ok(Outcome::TimedOut);
        }

        let board = frontier.remove_max()?;
        if !visited.insert(board.canonical_key()) {
            frontier.clear();
            let fresh = Board::with_one_queen_per_column(n, rng);
            run.local_optimum(&fresh);
            frontier.add(fresh);
            continue;
        }

        run.count_configuration();
        run.trace(&board);

        if board.queens_under_attack() == 0 {
            return Ok(Outcome::Solved(board));
        }

        for _ in 0..CHILDREN {
            frontier.add(repaired_child(&board, rng)?);
        }
    }
    Ok(Outcome::Exhausted)
}

fn repaired_child<R: Rng + ?Sized>(parent: &Board, rng: &mut R) -> Result<Board, BoardError> {
    let n = parent.size();
    let mut child = parent.clone();

    for queen in parent.queens() {
        if child.is_safe(queen.x, queen.y)? {
            continue;
        }
        child.remove_queen(queen.x, queen.y)?;

        // drawn even if a safe row exists, which keeps the random sequence independent of the board
        let mut y = (queen.y + rng.gen_range(0..n)) % n;
        for row in 0..n {
            if child.is_safe(queen.x, row)? {
                y = row;
                break;
            }
        }
        child.add_queen(queen.x, y)?;
    }
    Ok(child)
}
