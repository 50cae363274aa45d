use std::time::{Duration, Instant};

/// Time limit used by [`SearchParams::default`]
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(20);

/// Parameters shared by all strategies.
///
/// ```
/// use nqueens::SearchParams;
/// use std::time::Duration;
///
/// let params = SearchParams::default()
///     .with_seed(42)
///     .with_time_limit(Duration::from_secs(5));
/// assert_eq!(params.seed, Some(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchParams {
    /// Seed for the strategies that use randomness. A random seed is drawn if `None`.
    /// Strategies without randomness ignore it.
    pub seed: Option<u64>,
    /// Wall time after which a search gives up. `None` searches until it succeeds or
    /// runs out of configurations, which may never happen for the random strategies.
    pub time_limit: Option<Duration>,
    /// Pass every visited configuration to the observer and ignore the time limit.
    pub debug: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            seed: None,
            time_limit: Some(DEFAULT_TIME_LIMIT),
            debug: false,
        }
    }
}

impl SearchParams {
    /// Sets the seed for the random number generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the time limit.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Removes the time limit.
    pub fn without_time_limit(mut self) -> Self {
        self.time_limit = None;
        self
    }

    /// Turns debug tracing on or off.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Wall clock budget of a single search.
///
/// Polled once per iteration of a strategy's outer loop, so a single expensive
/// iteration can overrun the limit.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Budget {
    start: Instant,
    limit: Option<Duration>,
    debug: bool,
}

impl Budget {
    pub fn start(params: &SearchParams) -> Self {
        Budget {
            start: Instant::now(),
            limit: params.time_limit,
            debug: params.debug,
        }
    }

    pub fn limit(&self) -> Option<Duration> {
        self.limit
    }

    // debug runs are never cut short
    pub fn is_exceeded(&self) -> bool {
        match self.limit {
            Some(limit) if !self.debug => self.start.elapsed() >= limit,
            _ => false,
        }
    }

    // tracing slows debug runs down, their time is meaningless
    pub fn elapsed_for_report(&self) -> Option<Duration> {
        if self.debug {
            None
        } else {
            Some(self.start.elapsed())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_limit_is_exceeded() {
        let params = SearchParams::default().with_time_limit(Duration::from_secs(0));
        let budget = Budget::start(&params);
        std::thread::sleep(Duration::from_millis(2));
        assert!(budget.is_exceeded());
        assert!(budget.elapsed_for_report().is_some());
    }

    #[test]
    fn debug_ignores_limit() {
        let params = SearchParams::default()
            .with_time_limit(Duration::from_secs(0))
            .debug(true);
        let budget = Budget::start(&params);
        std::thread::sleep(Duration::from_millis(2));
        assert!(!budget.is_exceeded());
        assert_eq!(budget.elapsed_for_report(), None);
    }

    #[test]
    fn no_limit_never_expires() {
        let budget = Budget::start(&SearchParams::default().without_time_limit());
        assert!(!budget.is_exceeded());
        assert_eq!(budget.limit(), None);
    }
}
