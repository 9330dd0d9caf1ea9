//! Constraint grid-fill puzzles
//!
//! The board is an n-by-n grid, n one of 4, 9, 16, or 25. Each cell is empty
//! or holds one of the first n uppercase letters. The puzzle is solved when
//! every row, column, and sqrt(n)-by-sqrt(n) subsquare contains each letter
//! exactly once.

use std::fmt::{self, Display, Formatter};

use crate::collections::{Coord, Square};
use crate::error::{InvalidMove, InvalidPuzzle};
use crate::puzzle::{Puzzle, PuzzleState, SearchStrategy};

/// A grid cell: empty or one letter
pub type Cell = Option<char>;

const VALID_WIDTHS: [usize; 4] = [4, 9, 16, 25];

/// An immutable grid puzzle state
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GridPuzzle {
    grid: Square<Cell>,
    box_width: usize,
}

impl GridPuzzle {
    /// Creates a puzzle from a grid of cells.
    ///
    /// The grid width must be 4, 9, 16, or 25 and every filled cell must hold
    /// one of the first n letters of the alphabet. Conflicts between filled
    /// cells are representable; such a grid is a dead end for the solver, not
    /// an error.
    pub fn new(grid: Square<Cell>) -> Result<Self, InvalidPuzzle> {
        let width = grid.width();
        if !VALID_WIDTHS.contains(&width) {
            return Err(InvalidPuzzle::new(format!(
                "grid width must be 4, 9, 16, or 25, not {}",
                width
            )));
        }
        let box_width = (width as f64).sqrt() as usize;
        let last_letter = letter(width - 1);
        for (coord, cell) in grid.iter_coord() {
            if let Some(l) = *cell {
                if !('A'..=last_letter).contains(&l) {
                    return Err(InvalidPuzzle::new(format!(
                        "letter {} at ({}, {}) is not available on a {}-wide board",
                        l, coord.row, coord.col, width
                    )));
                }
            }
        }
        Ok(Self { grid, box_width })
    }

    /// Parses a puzzle from text, one row per line, `.` for an empty cell
    pub fn parse(s: &str) -> Result<Self, InvalidPuzzle> {
        let rows: Vec<&str> = s.lines().filter(|line| !line.trim().is_empty()).collect();
        let width = rows.len();
        if width == 0 {
            return Err(InvalidPuzzle::new("empty grid"));
        }
        let mut grid = Square::with_width_and_value(width, None);
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.trim().chars().collect();
            if cells.len() != width {
                return Err(InvalidPuzzle::new(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    cells.len(),
                    width
                )));
            }
            for (col, c) in cells.into_iter().enumerate() {
                grid[Coord::new(row, col)] = match c {
                    '.' => None,
                    'A'..='Z' => Some(c),
                    _ => {
                        return Err(InvalidPuzzle::new(format!(
                            "unexpected character {:?} at ({}, {})",
                            c, row, col
                        )))
                    }
                };
            }
        }
        Self::new(grid)
    }

    /// Returns the width (and height) of the board
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Returns the cell at a position
    pub fn cell(&self, coord: Coord) -> Cell {
        self.grid[coord]
    }

    /// Describe the move from `self` to `other`, which must be one move away
    pub fn describe_move(&self, other: &GridPuzzle) -> String {
        let (coord, letter) = self
            .grid
            .iter_coord()
            .zip(other.grid.iter())
            .find(|((_, a), b)| a != b)
            .map(|((coord, _), b)| (coord, b.unwrap()))
            .expect("states do not differ");
        format!("({}, {}) -> {}", coord.row, coord.col, letter)
    }

    /// The letters that may legally fill a cell: the board's alphabet minus
    /// any letter present in the cell's row, column, or subsquare
    fn candidates(&self, coord: Coord) -> Vec<char> {
        (0..self.width())
            .map(letter)
            .filter(|&l| {
                !self.row_contains(coord.row, l)
                    && !self.col_contains(coord.col, l)
                    && !self.box_contains(coord, l)
            })
            .collect()
    }

    fn row_contains(&self, row: usize, letter: char) -> bool {
        (0..self.width()).any(|col| self.grid[Coord::new(row, col)] == Some(letter))
    }

    fn col_contains(&self, col: usize, letter: char) -> bool {
        (0..self.width()).any(|row| self.grid[Coord::new(row, col)] == Some(letter))
    }

    fn box_contains(&self, coord: Coord, letter: char) -> bool {
        let m = self.box_width;
        let top = coord.row - coord.row % m;
        let left = coord.col - coord.col % m;
        (top..top + m)
            .any(|row| (left..left + m).any(|col| self.grid[Coord::new(row, col)] == Some(letter)))
    }

    /// The first empty cell in row-major order
    fn first_empty(&self) -> Option<Coord> {
        self.grid
            .iter_coord()
            .find(|(_, cell)| cell.is_none())
            .map(|(coord, _)| coord)
    }

    fn extend(&self, coord: Coord, letter: char) -> GridPuzzle {
        let mut grid = self.grid.clone();
        grid[coord] = Some(letter);
        GridPuzzle {
            grid,
            box_width: self.box_width,
        }
    }

    fn unit_is_complete(&self, unit: impl Iterator<Item = Cell>) -> bool {
        let mut letters: Vec<char> = match unit.collect::<Option<Vec<char>>>() {
            Some(letters) => letters,
            None => return false,
        };
        letters.sort_unstable();
        letters.into_iter().eq((0..self.width()).map(letter))
    }
}

fn letter(index: usize) -> char {
    (b'A' + index as u8) as char
}

impl PuzzleState for GridPuzzle {
    fn is_solved(&self) -> bool {
        let n = self.width();
        let m = self.box_width;
        let rows =
            (0..n).all(|row| self.unit_is_complete((0..n).map(|col| self.grid[Coord::new(row, col)])));
        let cols =
            (0..n).all(|col| self.unit_is_complete((0..n).map(|row| self.grid[Coord::new(row, col)])));
        let boxes = (0..n).step_by(m).all(|top| {
            (0..n).step_by(m).all(|left| {
                self.unit_is_complete(
                    (top..top + m)
                        .flat_map(|row| (left..left + m).map(move |col| Coord::new(row, col)))
                        .map(|coord| self.grid[coord]),
                )
            })
        });
        rows && cols && boxes
    }

    fn extensions(&self) -> Vec<Puzzle> {
        // A full grid has no successors even if it violates constraints
        let coord = match self.first_empty() {
            Some(coord) => coord,
            None => return Vec::new(),
        };
        self.candidates(coord)
            .into_iter()
            .map(|letter| self.extend(coord, letter).into())
            .collect()
    }

    fn apply_move(&self, text: &str) -> Result<Puzzle, InvalidMove> {
        let (row, col, letter) =
            parse_move(text).ok_or_else(|| InvalidMove::Malformed(text.to_string()))?;
        if row >= self.width() || col >= self.width() {
            return Err(InvalidMove::OutOfRange(row, col));
        }
        let coord = Coord::new(row, col);
        if self.grid[coord].is_some() {
            return Err(InvalidMove::CellFilled(row, col));
        }
        if !self.candidates(coord).contains(&letter) {
            return Err(InvalidMove::LetterConflict(letter, row, col));
        }
        Ok(self.extend(coord, letter).into())
    }

    fn strategy(&self) -> SearchStrategy {
        SearchStrategy::DepthFirst
    }

    fn search_key(&self) -> String {
        self.to_string()
    }
}

/// Parse `"(row, col) -> letter"`
fn parse_move(text: &str) -> Option<(usize, usize, char)> {
    let rest = text.trim().strip_prefix('(')?;
    let (coords, rest) = {
        let mut parts = rest.splitn(2, ')');
        (parts.next()?, parts.next()?)
    };
    let (row, col) = {
        let mut parts = coords.splitn(2, ',');
        (parts.next()?, parts.next()?)
    };
    let row = row.trim().parse().ok()?;
    let col = col.trim().parse().ok()?;
    let letter = rest.trim().strip_prefix("->")?.trim();
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Some((row, col, letter)),
        _ => None,
    }
}

impl Display for GridPuzzle {
    /// Renders the board with row and column labels cycling 0-9 and
    /// subsquare dividers:
    ///
    /// ```text
    ///   01|23
    ///  ------
    /// 0|AB|CD
    /// 1|DC|BA
    ///  ------
    /// 2| D|
    /// 3|  |
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let n = self.width();
        let m = self.box_width;
        let divider = "-".repeat(n + m);
        write!(f, "  ")?;
        for col in 0..n {
            write!(f, "{}", col % 10)?;
            if (col + 1) % m == 0 && col + 1 != n {
                write!(f, "|")?;
            }
        }
        writeln!(f)?;
        writeln!(f, " {}", divider)?;
        for (row_index, row) in self.grid.rows().enumerate() {
            let mut line = format!("{}|", row_index % 10);
            for (col_index, cell) in row.iter().enumerate() {
                line.push(cell.unwrap_or(' '));
                if (col_index + 1) % m == 0 && col_index + 1 != n {
                    line.push('|');
                }
            }
            writeln!(f, "{}", line.trim_end())?;
            if (row_index + 1) % m == 0 && row_index + 1 != n {
                writeln!(f, " {}", divider)?;
            }
        }
        Ok(())
    }
}
