use gridnine_core::Grid;

/// Outcome of a solve attempt.
///
/// There is no partial or intermediate variant: a solve call either produces
/// a full grid satisfying every row, column, and box constraint, or proves
/// that none exists for the given clues.
///
/// # Examples
///
/// ```
/// use gridnine_core::Grid;
/// use gridnine_solver::{BacktrackSolver, Solution};
///
/// let conflict: Grid = "
///     55_ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
/// "
/// .parse()?;
///
/// let solution = BacktrackSolver::new().solve(&conflict);
/// assert!(solution.is_unsolvable());
/// assert_eq!(solution.solved(), None);
/// # Ok::<(), gridnine_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Solution {
    /// A completed grid. Every cell is filled, every house holds each digit
    /// exactly once, and every clue from the input is unchanged.
    Solved(Grid),
    /// No assignment of the empty cells satisfies all constraints.
    Unsolvable,
}

impl Solution {
    /// Returns the completed grid, or `None` if the puzzle was unsolvable.
    #[must_use]
    pub fn solved(self) -> Option<Grid> {
        match self {
            Self::Solved(grid) => Some(grid),
            Self::Unsolvable => None,
        }
    }
}

/// A depth-first backtracking solver.
///
/// The search visits empty cells in row-major order and tries candidate
/// digits in ascending order, recursing after each tentative placement and
/// undoing it when the branch dead-ends. Both orders are fixed, which makes
/// the solver deterministic: when a puzzle has several solutions it always
/// returns the lexicographically first one under that exploration order.
///
/// Validity is recomputed from the whole current grid at every visited cell.
/// No candidate caches survive across placements, so the solver state is the
/// grid itself and one clone of the input is the only allocation a solve
/// performs.
///
/// The input grid is never mutated; callers keep their copy. A grid whose
/// clues already break a uniqueness constraint is reported as
/// [`Solution::Unsolvable`] up front, since no completion could repair it.
///
/// Worst-case running time is exponential in the number of empty cells and
/// there is no timeout or iteration cap; callers that need cancellation must
/// layer it on top. Recursion depth is bounded by the 81 cells of the board.
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackSolver;

impl BacktrackSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        BacktrackSolver
    }

    /// Searches for a completion of `givens`.
    ///
    /// Returns [`Solution::Solved`] with the first completion found under
    /// the fixed search order, or [`Solution::Unsolvable`] after exhausting
    /// the search space.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridnine_core::{Digit, Grid, Position};
    /// use gridnine_solver::BacktrackSolver;
    ///
    /// let mut puzzle = Grid::new();
    /// puzzle[Position::new(0, 0)] = Some(Digit::D5);
    ///
    /// let solved = BacktrackSolver::new().solve(&puzzle).solved().unwrap();
    /// assert!(solved.is_complete());
    /// assert_eq!(solved[Position::new(0, 0)], Some(Digit::D5));
    /// ```
    #[must_use]
    pub fn solve(&self, givens: &Grid) -> Solution {
        if givens.check_consistency().is_err() {
            return Solution::Unsolvable;
        }

        let mut grid = givens.clone();
        if self.fill(&mut grid) {
            Solution::Solved(grid)
        } else {
            Solution::Unsolvable
        }
    }

    /// Fills the first empty cell and recurses; `true` means the grid is
    /// complete on return, `false` means it is restored to its entry state.
    fn fill(&self, grid: &mut Grid) -> bool {
        let Some(pos) = grid.first_empty() else {
            return true;
        };

        for digit in grid.candidates_at(pos) {
            grid[pos] = Some(digit);
            if self.fill(grid) {
                return true;
            }
            grid[pos] = None;
        }
        false
    }
}
