use super::attacks::attacked_from;
use super::Location;
use crate::errors::BoardError;

use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

/// An NxN board holding queens and the number of queens attacking every cell.
///
/// The board does not keep a grid of pieces. It keeps the set of queen locations
/// and one attack counter per cell. Queens attack through each other, so for three
/// queens lined up in a row each of them is reached by both of the others.
///
/// The conflict heuristic used by the local searches is
/// [`queens_under_attack`](Board::queens_under_attack): the sum of the attack
/// counts on all queen cells. A full board with zero conflicts is a solution.
#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    // ordered, so that every strategy visits queens in the same order for the same seed
    queens: BTreeSet<Location>,
    // attack_counts[cell.as_index(size)], a queen never counts towards its own cell
    attack_counts: Vec<u32>,
    // number of cells with a nonzero attack count
    n_attacked: usize,
}

/// Order-independent identifier of a board's queen set.
///
/// Used to detect configurations that a search has already visited.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalKey(Vec<Location>);

impl Board {
    /// Constructs an empty `size`x`size` board.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            queens: BTreeSet::new(),
            attack_counts: vec![0; size * size],
            n_attacked: 0,
        }
    }

    /// Constructs a board with one queen on every cell of the main diagonal, i.e. at `(i, i)`.
    pub fn with_queens_on_diagonal(size: usize) -> Self {
        let mut board = Board::new(size);
        for i in 0..size {
            board.insert(Location::new(i, i));
        }
        board
    }

    /// Constructs a board with one queen per column.
    ///
    /// The rows are a random permutation of `0..size` so no two queens share a row.
    /// Diagonal conflicts are still possible.
    pub fn with_one_queen_per_column<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut rows: Vec<usize> = (0..size).collect();
        rows.shuffle(rng);

        let mut board = Board::new(size);
        for (x, y) in rows.into_iter().enumerate() {
            board.insert(Location::new(x, y));
        }
        board
    }

    /// Constructs a board with queens on the given locations.
    ///
    /// Fails on the first location that [`add_queen`](Board::add_queen) would reject.
    pub fn from_queens<I, L>(size: usize, queens: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = L>,
        L: Into<Location>,
    {
        let mut board = Board::new(size);
        for loc in queens {
            let loc = loc.into();
            board.add_queen(loc.x, loc.y)?;
        }
        Ok(board)
    }

    /// Removes all queens.
    pub fn clear(&mut self) {
        self.queens.clear();
        for count in &mut self.attack_counts {
            *count = 0;
        }
        self.n_attacked = 0;
    }

    /// Places a queen at `(x, y)` and records the cells it attacks.
    pub fn add_queen(&mut self, x: usize, y: usize) -> Result<(), BoardError> {
        let loc = self.checked(x, y)?;
        if self.queens.contains(&loc) {
            return Err(BoardError::DuplicateQueen(loc));
        }
        self.insert(loc);
        Ok(())
    }

    /// Takes the queen at `(x, y)` off the board and withdraws its attacks.
    pub fn remove_queen(&mut self, x: usize, y: usize) -> Result<(), BoardError> {
        let loc = self.checked(x, y)?;
        if !self.queens.remove(&loc) {
            return Err(BoardError::NoQueenHere(loc));
        }
        for cell in attacked_from(loc, self.size) {
            let count = &mut self.attack_counts[cell.as_index(self.size)];
            debug_assert!(*count > 0);
            *count -= 1;
            if *count == 0 {
                self.n_attacked -= 1;
            }
        }
        Ok(())
    }

    /// Returns true if no queen attacks `(x, y)`. Occupied cells can be safe.
    pub fn is_safe(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        let loc = self.checked(x, y)?;
        Ok(self.count_at(loc) == 0)
    }

    /// Returns true if there is a queen at `(x, y)`.
    pub fn contains_queen(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        let loc = self.checked(x, y)?;
        Ok(self.queens.contains(&loc))
    }

    /// Number of queens that can reach `(x, y)`. A queen standing on the cell does not count.
    ///
    /// Cells outside of the board have no attackers.
    pub fn attackers_at(&self, x: usize, y: usize) -> usize {
        match self.checked(x, y) {
            Ok(loc) => self.count_at(loc) as usize,
            Err(_) => 0,
        }
    }

    /// Sum of the attack counts of all queen cells.
    ///
    /// Three queens alone in a row score `2 + 2 + 2`.
    /// Zero together with a full board means the board is solved.
    pub fn queens_under_attack(&self) -> usize {
        self.queens
            .iter()
            .map(|&queen| self.count_at(queen) as usize)
            .sum()
    }

    /// Number of queens on the board
    #[inline]
    pub fn total_queens(&self) -> usize {
        self.queens.len()
    }

    /// Width and height of the board
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if all `size` queens are placed and none of them is attacked.
    pub fn is_solution(&self) -> bool {
        self.total_queens() == self.size && self.queens_under_attack() == 0
    }

    /// Returns true if at least one cell is neither occupied nor attacked.
    pub fn contains_valid_spot(&self) -> bool {
        let unattacked_queens = self
            .queens
            .iter()
            .filter(|&&queen| self.count_at(queen) == 0)
            .count();
        self.size * self.size - self.n_attacked - unattacked_queens != 0
    }

    /// Iterator over the queen locations, ordered by column, then row.
    pub fn queens(&self) -> impl Iterator<Item = Location> + '_ {
        self.queens.iter().copied()
    }

    /// All cells without a queen, attacked or not. Ordered row by row.
    pub fn available_positions(&self) -> Vec<Location> {
        self.cells()
            .filter(|loc| !self.queens.contains(loc))
            .collect()
    }

    /// All cells that are neither occupied nor attacked. Ordered row by row.
    pub fn available_safe_positions(&self) -> Vec<Location> {
        self.cells()
            .filter(|&loc| self.count_at(loc) == 0 && !self.queens.contains(&loc))
            .collect()
    }

    /// Identifier of the current queen set.
    pub fn canonical_key(&self) -> CanonicalKey {
        CanonicalKey(self.queens().collect())
    }

    /// Orders boards so that the board with fewer conflicts is the greater one.
    ///
    /// Meant as comparator for a [`PriorityQueue`](crate::PriorityQueue)
    /// that should surface the best board first.
    pub fn by_fewest_conflicts(a: &Board, b: &Board) -> Ordering {
        b.queens_under_attack().cmp(&a.queens_under_attack())
    }

    ////////////////////////////////////////////////////////////////////////////

    fn checked(&self, x: usize, y: usize) -> Result<Location, BoardError> {
        if x >= self.size || y >= self.size {
            return Err(BoardError::OutOfBounds { x, y, size: self.size });
        }
        Ok(Location::new(x, y))
    }

    #[inline]
    pub(crate) fn has_queen(&self, loc: Location) -> bool {
        self.queens.contains(&loc)
    }

    #[inline]
    pub(crate) fn count_at(&self, loc: Location) -> u32 {
        self.attack_counts[loc.as_index(self.size)]
    }

    // location must be in bounds and free
    fn insert(&mut self, queen: Location) {
        debug_assert!(queen.x < self.size && queen.y < self.size);
        let is_new = self.queens.insert(queen);
        debug_assert!(is_new);
        for cell in attacked_from(queen, self.size) {
            let count = &mut self.attack_counts[cell.as_index(self.size)];
            if *count == 0 {
                self.n_attacked += 1;
            }
            *count += 1;
        }
    }

    fn cells(&self) -> impl Iterator<Item = Location> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Location::new(x, y)))
    }
}

// attack counts follow from the queens
impl PartialEq for Board {
    fn eq(&self, other: &Board) -> bool {
        self.size == other.size && self.queens == other.queens
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.queens.hash(state);
    }
}
