//! Solver orchestration.
//!
//! Validates the whole grid once, then dispatches to the backtracking
//! engine. The exact-cover strategy is declared in the public vocabulary but
//! has no implementation; selecting it reports an explicit error rather
//! than guessing at one.

mod backtrack;
mod consistency;
mod domain;
mod heuristics;
mod types;

use log::debug;

use crate::grid::Grid;

pub use consistency::{is_consistent, is_valid};
pub use domain::legal_values;
pub use types::{SolveError, Strategy};

/// Engine configuration, owned by the caller and passed in explicitly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Which solving strategy `solve` dispatches to
    pub strategy: Strategy,
    /// Optional cap on trial assignments before a search gives up;
    /// `None` searches without bound
    pub node_limit: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::DepthFirst,
            node_limit: None,
        }
    }
}

/// Sudoku solver driving the constraint-satisfaction search
pub struct Solver {
    config: SolverConfig,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a solver with the default configuration
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Create a solver with custom configuration
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve the puzzle, returning the completed grid or the failure cause.
    ///
    /// The input is checked as a whole before any search; a grid with
    /// conflicting givens is rejected without exploring a single branch.
    /// On success every pre-filled cell keeps its value.
    pub fn solve(&self, grid: &Grid) -> Result<Grid, SolveError> {
        match self.config.strategy {
            Strategy::DepthFirst => self.depth_first(grid),
            Strategy::ExactCover => {
                debug!("exact-cover requested; no implementation available");
                Err(SolveError::Unsupported(Strategy::ExactCover))
            }
        }
    }

    fn depth_first(&self, grid: &Grid) -> Result<Grid, SolveError> {
        if !is_valid(grid) {
            debug!("rejecting grid with conflicting givens");
            return Err(SolveError::InvalidInput);
        }

        let mut working = *grid;
        let unassigned = working.unassigned_positions();
        let mut budget = backtrack::Budget::new(self.config.node_limit);
        let outcome = backtrack::search(&mut working, &unassigned, &mut budget)?;
        debug!(
            "depth-first search finished after {} assignments: {:?}",
            budget.nodes(),
            outcome
        );
        match outcome {
            backtrack::Outcome::Solved => Ok(working),
            backtrack::Outcome::DeadEnd => Err(SolveError::NoSolution),
        }
    }
}

/// The all-(-1) grid returned by [`solve`] for every failure
pub const SENTINEL_GRID: [[i8; 9]; 9] = [[-1; 9]; 9];

/// Flat matrix interface: solve `cells` with `strategy`.
///
/// Returns the solved matrix, or [`SENTINEL_GRID`] when the input is
/// malformed or conflicting, the puzzle is unsatisfiable, or the strategy
/// is unimplemented. Callers that need to distinguish those cases should
/// use [`Solver::solve`].
pub fn solve(strategy: Strategy, cells: [[i8; 9]; 9]) -> [[i8; 9]; 9] {
    let Ok(grid) = Grid::from_matrix(&cells) else {
        return SENTINEL_GRID;
    };
    let solver = Solver::with_config(SolverConfig {
        strategy,
        node_limit: None,
    });
    match solver.solve(&grid) {
        Ok(solution) => solution.to_matrix(),
        Err(_) => SENTINEL_GRID,
    }
}
