//! Constraint-satisfaction Sudoku engine.
//!
//! Solves classic 9×9 puzzles with a depth-first backtracking search guided
//! by minimum-remaining-values cell selection (with an only-choice
//! short-circuit), forward-checked domains, and least-constraining-value
//! ordering. The search mutates one grid in place with explicit undo, so a
//! solve allocates little beyond the per-frame bookkeeping.
//!
//! The typed entry point is [`Solver::solve`], which distinguishes
//! conflicting input from unsatisfiable puzzles. The [`solve`] free function
//! keeps the flat signed-matrix contract expected by existing front-ends:
//! any failure comes back as the all-(-1) [`SENTINEL_GRID`].
//!
//! ```
//! use sudoku_csp::{Grid, Solver};
//!
//! let puzzle = Grid::from_string(
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
//! )?;
//! let solution = Solver::new().solve(&puzzle).expect("puzzle is solvable");
//! assert!(solution.is_complete());
//! # Ok::<(), sudoku_csp::GridError>(())
//! ```

mod batch;
mod grid;
mod solver;

pub use batch::solve_batch;
pub use grid::{Grid, GridError, Position};
pub use solver::{
    is_consistent, is_valid, legal_values, solve, SolveError, Solver, SolverConfig, Strategy,
    SENTINEL_GRID,
};
