use super::{Board, Location};
use std::fmt;

/* Example output for a 4x4 board with queens at (0, 1) and (2, 2)

* * * -
Q * * *
* * Q *
* * * *

`Q` marks a queen, `*` an empty attacked cell and `-` an empty safe cell.
*/
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_grid(f, self.size(), |loc| {
            if self.has_queen(loc) {
                'Q'
            } else if self.count_at(loc) != 0 {
                '*'
            } else {
                '-'
            }
        })
    }
}

/// Grid of attack counts, created by [`Board::display_scores`] and [`Board::display_queen_scores`]
pub struct Scores<'a> {
    board: &'a Board,
    queens_only: bool,
}

impl Board {
    /// Returns a [`Display`](fmt::Display) wrapper printing the number of attackers of every cell.
    pub fn display_scores(&self) -> Scores<'_> {
        Scores {
            board: self,
            queens_only: false,
        }
    }

    /// Like [`display_scores`](Board::display_scores), but only queen cells show their count.
    /// All other cells are printed as `-`.
    pub fn display_queen_scores(&self) -> Scores<'_> {
        Scores {
            board: self,
            queens_only: true,
        }
    }
}

impl fmt::Display for Scores<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let board = self.board;
        let width = board.size().to_string().len();
        for y in 0..board.size() {
            for x in 0..board.size() {
                if x != 0 {
                    write!(f, " ")?;
                }
                let loc = Location::new(x, y);
                if self.queens_only && !board.has_queen(loc) {
                    write!(f, "{:>width$}", '-', width = width)?;
                } else {
                    write!(f, "{:>width$}", board.count_at(loc), width = width)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn write_grid(
    f: &mut fmt::Formatter,
    size: usize,
    mut symbol: impl FnMut(Location) -> char,
) -> fmt::Result {
    for y in 0..size {
        for x in 0..size {
            if x != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", symbol(Location::new(x, y)))?;
        }
        writeln!(f)?;
    }
    Ok(())
}

#[test]
fn board_display() {
    let board = Board::from_queens(4, vec![(0, 1), (2, 2)]).unwrap();
    let expected = "\
* * * -
Q * * *
* * Q *
* * * *
";
    assert_eq!(format!("{}", board), expected);
}

#[test]
fn score_display() {
    let board = Board::from_queens(4, vec![(0, 0), (3, 0)]).unwrap();
    let expected = "\
1 2 2 1
1 1 1 1
1 1 1 1
2 0 0 2
";
    assert_eq!(format!("{}", board.display_scores()), expected);

    let expected = "\
1 - - 1
- - - -
- - - -
- - - -
";
    assert_eq!(format!("{}", board.display_queen_scores()), expected);
}
