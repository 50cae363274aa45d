//! The board, its cells and how queens attack them
mod attacks;
mod chessboard;
mod grid_state;
mod location;

pub use self::{
    chessboard::{Board, CanonicalKey},
    grid_state::Scores,
    location::Location,
};
