//! Backtracking search engine for 9x9 sudoku grids.
//!
//! The entry point is [`BacktrackSolver::solve`], which takes a partially
//! filled [`Grid`](gridnine_core::Grid) and returns a [`Solution`]: either
//! the completed grid or a definitive [`Unsolvable`](Solution::Unsolvable).
//! The search is exhaustive, so `Unsolvable` means no completion exists, not
//! that the solver gave up.
//!
//! # Examples
//!
//! ```
//! use gridnine_core::Grid;
//! use gridnine_solver::{BacktrackSolver, Solution};
//!
//! let puzzle: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! let solver = BacktrackSolver::new();
//! match solver.solve(&puzzle) {
//!     Solution::Solved(grid) => assert!(grid.is_complete()),
//!     Solution::Unsolvable => unreachable!("this puzzle has a solution"),
//! }
//! # Ok::<(), gridnine_core::ParseGridError>(())
//! ```

pub use self::backtrack::{BacktrackSolver, Solution};

mod backtrack;
