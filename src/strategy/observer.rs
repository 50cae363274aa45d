use crate::board::Board;
use std::thread;
use std::time::Duration;

/// Pause inserted by [`PacedPrinter`] after every configuration
pub const DEBUG_DELAY: Duration = Duration::from_millis(250);

/// Receives the configurations of a debug run.
///
/// Observers are only called when [`SearchParams::debug`](crate::SearchParams::debug) is set.
/// Any `FnMut(&Board)` closure is an observer.
pub trait Observer {
    /// Called with every configuration the search visits, before it continues.
    fn visit(&mut self, board: &Board);

    /// Called when a search gives up on its current board and starts over from `fresh`.
    fn restarted(&mut self, _fresh: &Board) {}
}

impl<F: FnMut(&Board)> Observer for F {
    fn visit(&mut self, board: &Board) {
        self(board)
    }
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct Quiet;

impl Observer for Quiet {
    fn visit(&mut self, _: &Board) {}
}

/// Prints every configuration to stdout and waits a little, so a human can follow the search.
#[derive(Debug, Clone, Copy)]
pub struct PacedPrinter {
    delay: Duration,
}

impl PacedPrinter {
    /// Printer pausing for [`DEBUG_DELAY`]
    pub fn new() -> Self {
        Self::with_delay(DEBUG_DELAY)
    }

    /// Printer pausing for `delay` after each board
    pub fn with_delay(delay: Duration) -> Self {
        PacedPrinter { delay }
    }
}

impl Default for PacedPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for PacedPrinter {
    fn visit(&mut self, board: &Board) {
        println!("{}", board);
        thread::sleep(self.delay);
    }

    fn restarted(&mut self, _: &Board) {
        println!("Stuck at local optimum. Board was reset.\n");
    }
}
