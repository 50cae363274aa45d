#![warn(missing_docs)]
#![cfg_attr(feature = "cargo-clippy", allow(match_bool))]
//! The N-Queens library
//!
//! ## Overview
//!
//! Places `n` queens on an `n x n` chessboard so that no two queens share a row,
//! column or diagonal. The library compares several ways of getting there: random
//! placement, blind depth first searches and local repair strategies guided by the
//! number of attacks on each queen.
//!
//! ## Example
//!
//! ```
//! use nqueens::{Board, SearchParams, Strategy};
//! use std::time::Duration;
//!
//! // Boards track how many queens attack every cell
//! let mut board = Board::new(4);
//! board.add_queen(0, 1).unwrap();
//! board.add_queen(1, 3).unwrap();
//! assert_eq!(board.attackers_at(2, 3), 2);
//! assert!(board.is_safe(2, 0).unwrap());
//!
//! // Searches report their outcome together with some statistics
//! let params = SearchParams::default()
//!     .with_seed(5)
//!     .with_time_limit(Duration::from_secs(10));
//! let report = Strategy::BlindAdvanced.search(8, &params).unwrap();
//! if let Some(solution) = report.solution() {
//!     println!("{}", solution);
//!     println!("{}", solution.display_scores());
//! }
//! println!("{}", report);
//! ```

mod board;
mod errors;
mod priority_queue;
mod strategy;

pub use crate::board::{Board, CanonicalKey, Location, Scores};
pub use crate::errors::{BoardError, EmptyQueueError, SearchError, UnsupportedSize};
pub use crate::priority_queue::PriorityQueue;
pub use crate::strategy::{
    find_seed, Observer, Outcome, PacedPrinter, Quiet, SearchParams, SearchReport, Strategy,
    DEBUG_DELAY, DEFAULT_TIME_LIMIT, MIN_SIZE,
};
