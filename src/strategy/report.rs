use super::Strategy;
use crate::board::Board;
use std::fmt;
use std::time::Duration;

/// How a search ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A full board without conflicts was found
    Solved(Board),
    /// Every reachable configuration was explored without finding a solution
    Exhausted,
    /// The time limit ran out first
    TimedOut,
}

/// Result and statistics of a single search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Strategy that produced this report
    pub strategy: Strategy,
    /// Board size and number of queens
    pub n: usize,
    #[allow(missing_docs)]
    pub outcome: Outcome,
    /// Wall time of the search. `None` for debug runs, which are not measured.
    pub elapsed: Option<Duration>,
    /// Configurations attempted, not counting the starting configuration
    pub configurations: usize,
    /// Local optima that forced a restart. `None` for strategies that never restart.
    pub local_optima: Option<usize>,
    /// Steps from the last restart to the final configuration.
    /// `None` for strategies that never restart.
    pub steps: Option<usize>,
    /// Seed of the random number generator, for strategies that use one
    pub seed: Option<u64>,
}

impl SearchReport {
    /// Returns true if a solution was found.
    pub fn found(&self) -> bool {
        self.solution().is_some()
    }

    /// Returns the solved board, if any.
    pub fn solution(&self) -> Option<&Board> {
        match &self.outcome {
            Outcome::Solved(board) => Some(board),
            _ => None,
        }
    }

    /// Consumes the report, returning the solved board, if any.
    pub fn into_solution(self) -> Option<Board> {
        match self.outcome {
            Outcome::Solved(board) => Some(board),
            _ => None,
        }
    }
}

struct OrNa<T>(Option<T>);

impl<T: fmt::Display> fmt::Display for OrNa<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("n/a"),
        }
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Strategy:\t\t\t{}", self.strategy)?;
        writeln!(f, "N = {}", self.n)?;
        match self.elapsed {
            Some(elapsed) => writeln!(f, "Time Elapsed:\t\t\t{:.3} seconds", elapsed.as_secs_f64())?,
            None => writeln!(f, "Time Elapsed:\t\t\tdebug mode, not measured")?,
        }
        writeln!(f, "Configurations Attempted:\t{}", self.configurations)?;
        writeln!(f, "Local Optimums Encountered:\t{}", OrNa(self.local_optima))?;
        writeln!(f, "Steps for Global Optimum:\t{}", OrNa(self.steps))?;
        match self.seed {
            Some(seed) => writeln!(f, "Seed used:\t\t\t{}", seed)?,
            None => writeln!(f, "Seed used:\t\t\tnone")?,
        }
        match &self.outcome {
            Outcome::Solved(board) => write!(f, "{}", board),
            Outcome::Exhausted => writeln!(f, "No solution found"),
            Outcome::TimedOut => writeln!(f, "Exceeded the time limit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(outcome: Outcome) -> SearchReport {
        SearchReport {
            strategy: Strategy::BlindNaive,
            n: 4,
            outcome,
            elapsed: None,
            configurations: 12,
            local_optima: None,
            steps: None,
            seed: None,
        }
    }

    #[test]
    fn display_marks_missing_statistics() {
        let text = report(Outcome::Exhausted).to_string();
        assert!(text.contains("N = 4\n"));
        assert!(text.contains("debug mode, not measured"));
        assert!(text.contains("Configurations Attempted:\t12\n"));
        assert!(text.contains("Local Optimums Encountered:\tn/a\n"));
        assert!(text.contains("Steps for Global Optimum:\tn/a\n"));
        assert!(text.contains("Seed used:\t\t\tnone\n"));
        assert!(text.ends_with("No solution found\n"));
    }

    #[test]
    fn display_ends_with_solution() {
        let board = Board::from_queens(4, vec![(0, 1), (1, 3), (2, 0), (3, 2)]).unwrap();
        let mut report = report(Outcome::Solved(board.clone()));
        report.seed = Some(7);
        report.local_optima = Some(0);
        let text = report.to_string();
        assert!(text.contains("Seed used:\t\t\t7\n"));
        assert!(text.contains("Local Optimums Encountered:\t0\n"));
        assert!(text.ends_with(&board.to_string()));
        assert!(report.found());
        assert_eq!(report.into_solution(), Some(board));
    }
}
