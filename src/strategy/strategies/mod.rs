pub(crate) mod blind;
pub(crate) mod heuristic;
pub(crate) mod min_conflict;
mod prelude;
pub(crate) mod random;

use super::params::{Budget, SearchParams};
use super::{Observer, Outcome, SearchReport, Strategy};
use crate::board::Board;

/// Bookkeeping of a single search: time budget, counters and the debug observer.
pub(crate) struct SearchRun<'o, O: ?Sized> {
    strategy: Strategy,
    n: usize,
    seed: Option<u64>,
    budget: Budget,
    debug: bool,
    observer: &'o mut O,
    // raw counters, both include the starting configuration
    configurations: usize,
    steps: usize,
    local_optima: usize,
}

impl<'o, O: Observer + ?Sized> SearchRun<'o, O> {
    pub fn new(
        strategy: Strategy,
        n: usize,
        params: &SearchParams,
        seed: Option<u64>,
        observer: &'o mut O,
    ) -> Self {
        SearchRun {
            strategy,
            n,
            seed,
            budget: Budget::start(params),
            debug: params.debug,
            observer,
            configurations: 0,
            steps: 0,
            local_optima: 0,
        }
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Checks the time budget, logging when it ran out.
    pub fn out_of_time(&self) -> bool {
        let exceeded = self.budget.is_exceeded();
        if exceeded {
            log::info!(
                "{} for n = {} exceeded {:?} after {} configurations",
                self.strategy,
                self.n,
                self.budget.limit().unwrap_or_default(),
                self.configurations,
            );
        }
        exceeded
    }

    /// Counts one attempted configuration and one step since the last restart.
    pub fn count_configuration(&mut self) {
        self.configurations += 1;
        self.steps += 1;
    }

    /// Hands a configuration to the observer of a debug run.
    pub fn trace(&mut self, board: &Board) {
        log::trace!(
            "configuration {}: {} queens, {} under attack",
            self.configurations,
            board.total_queens(),
            board.queens_under_attack()
        );
        if self.debug {
            self.observer.visit(board);
        }
    }

    /// Records a local optimum. The search continues from `fresh`.
    pub fn local_optimum(&mut self, fresh: &Board) {
        self.local_optima += 1;
        self.steps = 0;
        log::debug!(
            "{}: local optimum #{} after {} configurations, restarting",
            self.strategy,
            self.local_optima,
            self.configurations
        );
        if self.debug {
            self.observer.restarted(fresh);
        }
    }

    pub fn finish(self, outcome: Outcome) -> SearchReport {
        if let Outcome::Solved(_) = outcome {
            log::info!(
                "{} solved n = {} after {} configurations",
                self.strategy,
                self.n,
                self.configurations
            );
        }
        let restarts = self.strategy.restarts_on_local_optima();
        SearchReport {
            strategy: self.strategy,
            n: self.n,
            outcome,
            elapsed: self.budget.elapsed_for_report(),
            // the starting configuration does not count
            configurations: self.configurations.saturating_sub(1),
            local_optima: if restarts { Some(self.local_optima) } else { None },
            steps: if restarts { Some(self.steps.saturating_sub(1)) } else { None },
            seed: self.seed,
        }
    }
}
