//! Errors raised by misuse of the board and priority queue APIs
#[cfg(doc)]
use crate::{Board, PriorityQueue};

use crate::board::Location;

/// Error for the mutating and querying methods of [`Board`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum BoardError {
    /// Coordinate lies outside of `[0, size)` in at least one dimension
    #[error("location ({x}, {y}) is outside of a {size}x{size} board")]
    OutOfBounds {
        #[allow(missing_docs)]
        x: usize,
        #[allow(missing_docs)]
        y: usize,
        #[allow(missing_docs)]
        size: usize,
    },
    /// A queen already occupies this location
    #[error("a queen already occupies {0}")]
    DuplicateQueen(Location),
    /// There is no queen at the location that should be freed
    #[error("no queen at {0}")]
    NoQueenHere(Location),
}

/// Error for [`PriorityQueue::remove_max`] and [`PriorityQueue::peek`] on an empty queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("priority queue is empty")]
pub struct EmptyQueueError;

/// Boards smaller than 4x4 are rejected by every strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("board size {0} is not supported, at least 4 queens are required")]
pub struct UnsupportedSize(pub usize);

/// Error returned by the search strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum SearchError {
    /// Requested board is too small
    #[error(transparent)]
    UnsupportedSize(#[from] UnsupportedSize),
    /// A strategy violated the board contract
    #[error(transparent)]
    Board(#[from] BoardError),
    /// A strategy popped from an exhausted frontier
    #[error(transparent)]
    EmptyQueue(#[from] EmptyQueueError),
}
