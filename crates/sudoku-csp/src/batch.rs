//! Parallel fan-out over independent puzzles.

use log::debug;
use rayon::prelude::*;

use crate::grid::Grid;
use crate::solver::{SolveError, Solver};

/// Solve every grid independently on the rayon thread pool.
///
/// Each puzzle is solved on its own private copy with no shared mutable
/// state; results come back in input order, one per input grid.
pub fn solve_batch(solver: &Solver, grids: &[Grid]) -> Vec<Result<Grid, SolveError>> {
    debug!("solving batch of {} puzzles", grids.len());
    grids.par_iter().map(|grid| solver.solve(grid)).collect()
}
