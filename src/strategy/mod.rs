//! The search strategies and everything they share.
//!
//! A [`Strategy`] is picked together with the board size and some [`SearchParams`].
//! Every search returns a [`SearchReport`] that holds the [`Outcome`] and run statistics.
//! Running out of time is a normal outcome, not an error. Errors are only returned for
//! unsupported board sizes or if a strategy broke the board's contract.
//!
//! ```
//! use nqueens::{SearchParams, Strategy};
//!
//! let params = SearchParams::default().with_seed(1);
//! let report = Strategy::HeuristicSearch.search(8, &params).unwrap();
//! assert!(report.found());
//! println!("{}", report);
//! ```

mod observer;
mod params;
mod report;
mod seed;
pub(crate) mod strategies;

pub use self::observer::{Observer, PacedPrinter, Quiet, DEBUG_DELAY};
pub use self::params::{SearchParams, DEFAULT_TIME_LIMIT};
pub use self::report::{Outcome, SearchReport};
pub use self::seed::find_seed;

use self::strategies::{blind, heuristic, min_conflict, random, SearchRun};
use crate::errors::{SearchError, UnsupportedSize};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Smallest board any strategy accepts
pub const MIN_SIZE: usize = 4;

/// The available search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum Strategy {
    /// Places queens on random cells. Landing on an occupied or attacked cell
    /// throws the whole board away.
    CompletelyRandom,
    /// Places queens on random cells. Invalid draws are redrawn, the board is only
    /// thrown away when no safe cell is left before all queens are placed.
    RandomWithPropagation,
    /// Depth first search trying every free cell for the next queen
    BlindNaive,
    /// Depth first search filling the columns from left to right
    BlindIntermediate,
    /// Depth first search that only places queens on safe cells
    BlindAdvanced,
    /// Moves the most attacked queen to the least attacked row of its column,
    /// restarting from a random board on local optima
    MinimumConflict,
    /// Repairs every attacked queen of the best board to create 10 children per step,
    /// restarting from a random board on local optima
    HeuristicSearch,
}

impl Strategy {
    /// All strategies, ordered from blind to informed
    pub const ALL: &'static [Strategy] = &[
        Strategy::CompletelyRandom,
        Strategy::RandomWithPropagation,
        Strategy::BlindNaive,
        Strategy::BlindIntermediate,
        Strategy::BlindAdvanced,
        Strategy::MinimumConflict,
        Strategy::HeuristicSearch,
    ];

    /// Returns true if the strategy draws from a random number generator.
    pub fn uses_seed(self) -> bool {
        use self::Strategy::*;
        match self {
            CompletelyRandom | RandomWithPropagation | MinimumConflict | HeuristicSearch => true,
            BlindNaive | BlindIntermediate | BlindAdvanced => false,
        }
    }

    /// Returns true if the strategy restarts on local optima and therefore reports
    /// [`local_optima`](SearchReport::local_optima) and [`steps`](SearchReport::steps).
    pub fn restarts_on_local_optima(self) -> bool {
        match self {
            Strategy::MinimumConflict | Strategy::HeuristicSearch => true,
            _ => false,
        }
    }

    /// Searches a solution for `n` queens.
    pub fn search(self, n: usize, params: &SearchParams) -> Result<SearchReport, SearchError> {
        self.search_observed(n, params, &mut Quiet)
    }

    /// Like [`search`](Strategy::search), but passes the visited configurations of
    /// a debug run to `observer`.
    pub fn search_observed<O: Observer + ?Sized>(
        self,
        n: usize,
        params: &SearchParams,
        observer: &mut O,
    ) -> Result<SearchReport, SearchError> {
        if n < MIN_SIZE {
            return Err(UnsupportedSize(n).into());
        }

        let seed = match self.uses_seed() {
            true => Some(params.seed.unwrap_or_else(|| rand::thread_rng().gen())),
            false => None,
        };
        let mut run = SearchRun::new(self, n, params, seed, observer);
        let mut rng = StdRng::seed_from_u64(seed.unwrap_or_default());

        use self::Strategy::*;
        let outcome = match self {
            CompletelyRandom => random::place(random::OnCollision::Restart, &mut run, &mut rng)?,
            RandomWithPropagation => random::place(random::OnCollision::Redraw, &mut run, &mut rng)?,
            BlindNaive => blind::depth_first(blind::NAIVE, &mut run)?,
            BlindIntermediate => blind::depth_first(blind::INTERMEDIATE, &mut run)?,
            BlindAdvanced => blind::depth_first(blind::ADVANCED, &mut run)?,
            MinimumConflict => min_conflict::repair(&mut run, &mut rng)?,
            HeuristicSearch => heuristic::search(&mut run, &mut rng)?,
        };
        Ok(run.finish(outcome))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::Strategy::*;
        let name = match self {
            CompletelyRandom => "random search",
            RandomWithPropagation => "random search with propagation",
            BlindNaive => "naive blind search",
            BlindIntermediate => "intermediate blind search",
            BlindAdvanced => "advanced blind search",
            MinimumConflict => "minimum conflict repair",
            HeuristicSearch => "heuristic search",
        };
        f.write_str(name)
    }
}
