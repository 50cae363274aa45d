use super::{SearchParams, Strategy};
use crate::errors::SearchError;
use rand::Rng;
use std::time::Duration;

/// Looks for a seed with which the heuristic search solves `n` queens within `time_limit`.
///
/// Draws up to `max_attempts` random seeds and returns the first one that works, or
/// `None` if all of them ran out of time.
///
/// ```
/// use nqueens::{find_seed, SearchParams, Strategy};
/// use std::time::Duration;
///
/// if let Some(seed) = find_seed(8, Duration::from_secs(5), 10).unwrap() {
///     let params = SearchParams::default().with_seed(seed);
///     assert!(Strategy::HeuristicSearch.search(8, &params).unwrap().found());
/// }
/// ```
pub fn find_seed(n: usize, time_limit: Duration, max_attempts: usize) -> Result<Option<u64>, SearchError> {
    let mut rng = rand::thread_rng();
    for attempt in 1..=max_attempts {
        let seed: u64 = rng.gen();
        let params = SearchParams::default()
            .with_seed(seed)
            .with_time_limit(time_limit);
        let report = Strategy::HeuristicSearch.search(n, &params)?;
        log::info!(
            "seed attempt {}/{} for n = {}: seed {} {}",
            attempt,
            max_attempts,
            n,
            seed,
            if report.found() { "solved" } else { "failed" }
        );
        if report.found() {
            return Ok(Some(seed));
        }
    }
    Ok(None)
}
