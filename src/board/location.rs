use std::fmt;

/// A cell of the board, `x` is the column and `y` the row.
///
/// Both coordinates start at `0` in the top left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct Location {
    pub x: usize,
    pub y: usize,
}

impl Location {
    /// Constructs a new location. Bounds are checked by the board, not here.
    #[inline]
    pub fn new(x: usize, y: usize) -> Self {
        Location { x, y }
    }

    /// Index into a row-major array of cells for a board of width `size`
    #[inline]
    pub(crate) fn as_index(self, size: usize) -> usize {
        self.y * size + self.x
    }
}

impl From<(usize, usize)> for Location {
    fn from((x, y): (usize, usize)) -> Self {
        Location { x, y }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
