//! Core data structures for the gridnine sudoku solver.
//!
//! This crate provides the types shared by the solving engine and the
//! command-line front end:
//!
//! - [`Digit`]: type-safe representation of the digits 1-9
//! - [`DigitSet`]: a 9-bit set of digits with ascending iteration order
//! - [`Position`]: board coordinates with row-major ordering
//! - [`House`]: rows, columns, and 3x3 boxes as one unit type
//! - [`Grid`]: the 9x9 grid, its text format, and its constraint queries
//!
//! The grid deliberately separates *representation* from *rules*: cells can
//! be mutated freely, and uniqueness constraints are only ever checked on
//! demand. That split is what lets a backtracking search place and un-place
//! digits without fighting the data model.
//!
//! # Examples
//!
//! ```
//! use gridnine_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! grid[Position::new(4, 4)] = Some(Digit::D5);
//!
//! // 5 can no longer go anywhere else in row 4.
//! let candidates = grid.candidates_at(Position::new(0, 4));
//! assert!(!candidates.contains(Digit::D5));
//! assert!(grid.check_consistency().is_ok());
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{ConsistencyError, Grid, ParseGridError},
    house::House,
    position::Position,
};
