// Queen move geometry
//
// A queen reaches every cell along its row, its column and both diagonals
// regardless of other queens standing in between. The rays below walk
// outwards from the queen and stop at the board edge; the queen's own cell
// is never yielded.

use super::Location;

// (dx, dy), orthogonal directions first
static DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

/// All cells attacked by a queen at `queen` on a `size`x`size` board
pub(crate) fn attacked_from(queen: Location, size: usize) -> impl Iterator<Item = Location> {
    DIRECTIONS.iter().flat_map(move |&(dx, dy)| Ray {
        size,
        x: queen.x,
        y: queen.y,
        dx,
        dy,
    })
}

struct Ray {
    size: usize,
    x: usize,
    y: usize,
    dx: isize,
    dy: isize,
}

impl Iterator for Ray {
    type Item = Location;

    #[inline]
    fn next(&mut self) -> Option<Location> {
        let x = step(self.x, self.dx, self.size)?;
        let y = step(self.y, self.dy, self.size)?;
        self.x = x;
        self.y = y;
        Some(Location::new(x, y))
    }
}

#[inline(always)]
fn step(coord: usize, delta: isize, size: usize) -> Option<usize> {
    match delta {
        0 => Some(coord),
        1 if coord + 1 < size => Some(coord + 1),
        1 => None,
        -1 => coord.checked_sub(1),
        _ => unreachable!(),
    }
}

impl Location {
    /// Returns true if both locations are distinct and share a row, column or diagonal.
    pub fn shares_line(self, other: Location) -> bool {
        if self == other {
            return false;
        }
        let dx = (self.x as isize - other.x as isize).abs();
        let dy = (self.y as isize - other.y as isize).abs();
        dx == 0 || dy == 0 || dx == dy
    }
}
