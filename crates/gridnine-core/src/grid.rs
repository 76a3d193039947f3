//! The 9x9 puzzle grid and its constraint queries.

use std::{
    fmt::{self, Display, Write as _},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{digit::Digit, digit_set::DigitSet, house::House, position::Position};

/// A 9x9 sudoku grid.
///
/// Each cell holds `Some(Digit)` when filled or `None` when empty. The grid
/// itself never enforces uniqueness constraints on mutation; it only answers
/// questions about them ([`candidates_at`], [`check_consistency`]), so a
/// solver can place and un-place digits freely while searching.
///
/// # Text format
///
/// [`FromStr`] reads 81 cells: digits `1`-`9` fill a cell, while `0`, `.`,
/// and `_` leave it empty. Whitespace is ignored, so grids can be laid out
/// for readability:
///
/// ```
/// use gridnine_core::{Digit, Grid, Position};
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid[Position::new(2, 0)], None);
/// assert_eq!(grid.filled_count(), 30);
///
/// // Display output round-trips through FromStr.
/// assert_eq!(grid.to_string().parse::<Grid>()?, grid);
/// # Ok::<(), gridnine_core::ParseGridError>(())
/// ```
///
/// [`candidates_at`]: Self::candidates_at
/// [`check_consistency`]: Self::check_consistency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the first empty cell in row-major order, if any.
    ///
    /// Row-major means row 0 left to right, then row 1, and so on. This scan
    /// order is what makes the backtracking search deterministic, so it is
    /// fixed rather than an implementation choice.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::all().find(|&pos| self[pos].is_none())
    }

    /// Returns the set of digits currently placed in a house.
    #[must_use]
    pub fn digits_in(&self, house: House) -> DigitSet {
        house
            .positions()
            .filter_map(|pos| self[pos])
            .collect()
    }

    /// Returns the digits that can be placed at `pos` without clashing with
    /// any filled cell in the same row, column, or box.
    ///
    /// The set is recomputed from the current grid on every call; nothing is
    /// cached across mutations.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        let [row, column, boxed] = House::containing(pos);
        let used = self.digits_in(row) | self.digits_in(column) | self.digits_in(boxed);
        DigitSet::FULL.difference(used)
    }

    /// Checks that no house contains the same digit twice.
    ///
    /// Empty cells are allowed; this validates only what is already placed.
    ///
    /// # Errors
    ///
    /// Returns a [`ConsistencyError`] naming the first duplicated digit and
    /// the house it appears in.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        for house in House::ALL {
            let mut seen = DigitSet::EMPTY;
            for pos in house.positions() {
                if let Some(digit) = self[pos]
                    && !seen.insert(digit)
                {
                    return Err(ConsistencyError { digit, house });
                }
            }
        }
        Ok(())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[usize::from(pos.index())]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Option<Digit> {
        &mut self.cells[usize::from(pos.index())]
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut cells = Vec::with_capacity(81);
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            match c {
                '0' | '.' | '_' => cells.push(None),
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = c as u8 - b'0';
                    cells.push(Digit::try_from_value(value));
                }
                _ => return Err(ParseGridError::UnexpectedChar { found: c }),
            }
        }
        if cells.len() != 81 {
            return Err(ParseGridError::CellCount { found: cells.len() });
        }

        let mut grid = Self::new();
        for (pos, cell) in Position::all().zip(cells) {
            grid[pos] = cell;
        }
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            for x in 0..9 {
                if x == 3 || x == 6 {
                    f.write_char(' ')?;
                }
                match self[Position::new(x, y)] {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_char('_')?,
                }
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

/// Errors from parsing grid text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The text contains a character that is neither a digit, an empty-cell
    /// marker (`0`, `.`, `_`), nor whitespace.
    #[display("unexpected character {found:?} in grid text")]
    UnexpectedChar {
        /// The offending character.
        found: char,
    },
    /// The text does not describe exactly 81 cells.
    #[display("expected 81 cells, found {found}")]
    CellCount {
        /// The number of cells found.
        found: usize,
    },
}

/// A digit placed more than once in a single house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("digit {digit} appears more than once in {house}")]
pub struct ConsistencyError {
    /// The duplicated digit.
    pub digit: Digit,
    /// The house containing the duplicate.
    pub house: House,
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_fills_cells_row_major() {
        let grid = grid(
            "
            123 456 789
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ __5
        ",
        );

        for x in 0..9 {
            assert_eq!(
                grid[Position::new(x, 0)],
                Some(Digit::from_value(x + 1)),
                "cell ({x}, 0)"
            );
        }
        assert_eq!(grid[Position::new(8, 8)], Some(Digit::D5));
        assert_eq!(grid.filled_count(), 10);
    }

    #[test]
    fn test_parse_accepts_all_empty_markers() {
        let dots = grid(&".".repeat(81));
        let zeros = grid(&"0".repeat(81));
        let underscores = grid(&"_".repeat(81));
        assert_eq!(dots, Grid::new());
        assert_eq!(zeros, Grid::new());
        assert_eq!(underscores, Grid::new());
    }

    #[test]
    fn test_parse_rejects_unexpected_character() {
        let text = format!("x{}", ".".repeat(80));
        assert_eq!(
            text.parse::<Grid>(),
            Err(ParseGridError::UnexpectedChar { found: 'x' })
        );
    }

    #[test]
    fn test_parse_rejects_wrong_cell_count() {
        assert_eq!(
            ".".repeat(80).parse::<Grid>(),
            Err(ParseGridError::CellCount { found: 80 })
        );
        assert_eq!(
            ".".repeat(82).parse::<Grid>(),
            Err(ParseGridError::CellCount { found: 82 })
        );
    }

    #[test]
    fn test_first_empty_is_row_major() {
        let mut grid = Grid::new();
        assert_eq!(grid.first_empty(), Some(Position::new(0, 0)));

        for x in 0..9 {
            grid[Position::new(x, 0)] = Some(Digit::from_value(x + 1));
        }
        assert_eq!(grid.first_empty(), Some(Position::new(0, 1)));

        // A later gap is ignored while an earlier one exists.
        grid[Position::new(4, 0)] = None;
        assert_eq!(grid.first_empty(), Some(Position::new(4, 0)));
    }

    #[test]
    fn test_first_empty_on_complete_grid() {
        let mut grid = Grid::new();
        for pos in Position::all() {
            grid[pos] = Some(Digit::D1);
        }
        assert_eq!(grid.first_empty(), None);
        assert!(grid.is_complete());
    }

    #[test]
    fn test_digits_in() {
        let grid = grid(
            "
            12_ ___ ___
            ___ ___ ___
            __3 ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            4__ ___ ___
        ",
        );

        assert_eq!(
            grid.digits_in(House::Row { y: 0 }),
            DigitSet::from_iter([Digit::D1, Digit::D2])
        );
        assert_eq!(
            grid.digits_in(House::Column { x: 0 }),
            DigitSet::from_iter([Digit::D1, Digit::D4])
        );
        assert_eq!(
            grid.digits_in(House::Box { index: 0 }),
            DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3])
        );
    }

    #[test]
    fn test_candidates_exclude_row_column_and_box() {
        let grid = grid(
            "
            1__ ___ ___
            _2_ ___ ___
            ___ ___ ___
            3__ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            _4_ ___ ___
        ",
        );

        // (0, 8) shares a column with 1 and 3, and a row (and box) with 4.
        let candidates = grid.candidates_at(Position::new(0, 8));
        assert!(!candidates.contains(Digit::D1));
        assert!(!candidates.contains(Digit::D3));
        assert!(!candidates.contains(Digit::D4));
        assert_eq!(candidates.len(), 6);

        // (0, 0) is filled; its own digit blocks itself via its houses.
        let candidates = grid.candidates_at(Position::new(0, 0));
        assert!(!candidates.contains(Digit::D1));
        assert!(!candidates.contains(Digit::D2));
    }

    #[test]
    fn test_candidates_on_empty_grid() {
        let grid = Grid::new();
        for pos in Position::all() {
            assert_eq!(grid.candidates_at(pos), DigitSet::FULL);
        }
    }

    #[test]
    fn test_check_consistency_accepts_valid_grids() {
        assert_eq!(Grid::new().check_consistency(), Ok(()));

        let partial = grid(
            "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        ",
        );
        assert_eq!(partial.check_consistency(), Ok(()));
    }

    #[test]
    fn test_check_consistency_reports_row_duplicate() {
        let mut grid = Grid::new();
        grid[Position::new(0, 2)] = Some(Digit::D5);
        grid[Position::new(7, 2)] = Some(Digit::D5);

        let err = grid.check_consistency().unwrap_err();
        assert_eq!(err.digit, Digit::D5);
        assert_eq!(err.house, House::Row { y: 2 });
        assert_eq!(err.to_string(), "digit 5 appears more than once in row 2");
    }

    #[test]
    fn test_check_consistency_reports_column_duplicate() {
        let mut grid = Grid::new();
        grid[Position::new(4, 0)] = Some(Digit::D9);
        grid[Position::new(4, 8)] = Some(Digit::D9);

        let err = grid.check_consistency().unwrap_err();
        assert_eq!(err.digit, Digit::D9);
        assert_eq!(err.house, House::Column { x: 4 });
    }

    #[test]
    fn test_check_consistency_reports_box_duplicate() {
        let mut grid = Grid::new();
        // Same box, different row and column.
        grid[Position::new(3, 3)] = Some(Digit::D2);
        grid[Position::new(5, 4)] = Some(Digit::D2);

        let err = grid.check_consistency().unwrap_err();
        assert_eq!(err.digit, Digit::D2);
        assert_eq!(err.house, House::Box { index: 4 });
    }

    #[test]
    fn test_display_layout() {
        let mut grid = Grid::new();
        grid[Position::new(0, 0)] = Some(Digit::D5);
        grid[Position::new(8, 0)] = Some(Digit::D9);

        let rendered = grid.to_string();
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("5__ ___ __9"));
        assert_eq!(lines.clone().count(), 8);
        assert!(lines.all(|line| line == "___ ___ ___"));
    }

    proptest! {
        #[test]
        fn prop_display_round_trips(values in proptest::collection::vec(0_u8..=9, 81)) {
            let mut grid = Grid::new();
            for (pos, value) in Position::all().zip(values) {
                grid[pos] = Digit::try_from_value(value);
            }

            let rendered = grid.to_string();
            let parsed: Grid = rendered.parse().unwrap();
            prop_assert_eq!(parsed, grid);
        }
    }
}
