// Blind depth first searches
//
// All three variants share one loop over an explicit stack of boards. They only
// differ in how a popped board is judged and which cells the next queen may take.
// Backtracking happens by popping the next board, boards are never undone.

use super::prelude::*;

pub(crate) enum Verdict {
    Goal,
    DeadEnd,
    Expand,
}

#[derive(Clone, Copy)]
pub(crate) struct Expansion {
    judge: fn(&Board) -> Verdict,
    next_queens: fn(&Board) -> Result<Vec<Location>, BoardError>,
}

/// Any free cell, attacked or not
pub(crate) const NAIVE: Expansion = Expansion {
    judge: judge_by_queen_count,
    next_queens: any_free_cell,
};

/// The rows of the leftmost column without a queen
pub(crate) const INTERMEDIATE: Expansion = Expansion {
    judge: judge_by_queen_count,
    next_queens: first_free_column,
};

/// Safe cells only
pub(crate) const ADVANCED: Expansion = Expansion {
    judge: judge_by_valid_spots,
    next_queens: safe_cells,
};

pub(crate) fn depth_first<O: Observer + ?Sized>(
    expansion: Expansion,
    run: &mut SearchRun<'_, O>,
) -> Result<Outcome, SearchError> {
    let mut visited: HashSet<CanonicalKey> = HashSet::new();
    let mut stack = vec![Board::new(run.n())];

    while let Some(board) = stack.pop() {
        if run.out_of_time() {
            return Ok(Outcome::TimedOut);
        }
        run.count_configuration();

        if !visited.insert(board.canonical_key()) {
            continue;
        }
        run.trace(&board);

        match (expansion.judge)(&board) {
            Verdict::Goal => return Ok(Outcome::Solved(board)),
            Verdict::DeadEnd => continue,
            Verdict::Expand => {}
        }

        for loc in (expansion.next_queens)(&board)? {
            let mut child = board.clone();
            child.add_queen(loc.x, loc.y)?;
            stack.push(child);
        }
    }
    Ok(Outcome::Exhausted)
}

// a full board is either the goal or a dead end
fn judge_by_queen_count(board: &Board) -> Verdict {
    match board.total_queens() == board.size() {
        false => Verdict::Expand,
        true if board.queens_under_attack() == 0 => Verdict::Goal,
        true => Verdict::DeadEnd,
    }
}

// only safe cells are ever filled, so the search ends where no safe cell is left
fn judge_by_valid_spots(board: &Board) -> Verdict {
    if board.contains_valid_spot() {
        Verdict::Expand
    } else if board.total_queens() == board.size() {
        Verdict::Goal
    } else {
        Verdict::DeadEnd
    }
}

fn any_free_cell(board: &Board) -> Result<Vec<Location>, BoardError> {
    Ok(board.available_positions())
}

fn safe_cells(board: &Board) -> Result<Vec<Location>, BoardError> {
    Ok(board.available_safe_positions())
}

fn first_free_column(board: &Board) -> Result<Vec<Location>, BoardError> {
    let size = board.size();
    let column = match (0..size).find(|&x| board.queens().all(|queen| queen.x != x)) {
        Some(column) => column,
        None => return Ok(vec![]),
    };

    let mut rows = Vec::with_capacity(size);
    for y in 0..size {
        if !board.contains_queen(column, y)? {
            rows.push(Location::new(column, y));
        }
    }
    Ok(rows)
}
