//! Depth-first backtracking engine.
//!
//! Assignments are made in place and undone on failure; each recursive call
//! owns a reduced copy of the unassigned set, so sibling branches never see
//! each other's bookkeeping. Depth is bounded by the 81 cells and every
//! call strictly shrinks the set, so the search always terminates.

use log::{debug, trace};

use crate::grid::{Grid, Position};
use crate::solver::types::SolveError;
use crate::solver::{consistency, domain, heuristics};

/// Result of exploring one search frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// No unassigned cells remain; the grid is a complete solution
    Solved,
    /// Every value for the selected cell failed; the caller must undo
    DeadEnd,
}

/// Counts trial assignments against an optional cap
pub(crate) struct Budget {
    limit: Option<u64>,
    nodes: u64,
}

impl Budget {
    pub(crate) fn new(limit: Option<u64>) -> Self {
        Self { limit, nodes: 0 }
    }

    pub(crate) fn nodes(&self) -> u64 {
        self.nodes
    }

    fn charge(&mut self) -> Result<(), SolveError> {
        self.nodes += 1;
        match self.limit {
            Some(limit) if self.nodes > limit => {
                debug!("giving up after {} trial assignments", limit);
                Err(SolveError::NodeLimitExceeded(limit))
            }
            _ => Ok(()),
        }
    }
}

/// Recursively extend `grid` until every cell in `unassigned` is filled.
///
/// The grid must already be consistent for the assignments made so far; on
/// `Solved` it holds the completed solution, on `DeadEnd` it is restored to
/// the state it was passed in.
pub(crate) fn search(
    grid: &mut Grid,
    unassigned: &[Position],
    budget: &mut Budget,
) -> Result<Outcome, SolveError> {
    let Some(cell) = heuristics::select_cell(grid, unassigned) else {
        return Ok(Outcome::Solved);
    };
    let rest: Vec<Position> = unassigned.iter().copied().filter(|&p| p != cell).collect();

    let mut pruned = domain::legal_values(grid, cell);
    while let Some(value) = heuristics::least_constraining(grid, cell, &pruned) {
        pruned.retain(|&v| v != value);
        budget.charge()?;

        grid.set(cell, value);
        if consistency::is_consistent(grid, cell) {
            if let Outcome::Solved = search(grid, &rest, budget)? {
                return Ok(Outcome::Solved);
            }
        }
        trace!("undoing {} at ({}, {})", value, cell.row, cell.col);
        grid.clear(cell);
    }

    Ok(Outcome::DeadEnd)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_empty_unassigned_set_is_solved() {
        let mut grid = Grid::from_string(SOLUTION).unwrap();
        let mut budget = Budget::new(None);
        assert_eq!(search(&mut grid, &[], &mut budget).unwrap(), Outcome::Solved);
        assert_eq!(budget.nodes(), 0);
    }

    #[test]
    fn test_dead_end_restores_grid() {
        // The open corner has an empty domain: row 0 holds 1-8 and the 9
        // sits in the same box
        let puzzle =
            "123456780000000090000000000000000000000000000000000000000000000000000000000000000";
        let mut grid = Grid::from_string(puzzle).unwrap();
        let before = grid;
        let corner = Position::new(0, 8);
        let mut budget = Budget::new(None);

        let outcome = search(&mut grid, &[corner], &mut budget).unwrap();
        assert_eq!(outcome, Outcome::DeadEnd);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_budget_charges_per_assignment() {
        let mut grid = Grid::from_string(SOLUTION).unwrap();
        let last = Position::new(8, 8);
        grid.clear(last);

        let mut budget = Budget::new(None);
        let outcome = search(&mut grid, &[last], &mut budget).unwrap();
        assert_eq!(outcome, Outcome::Solved);
        assert_eq!(budget.nodes(), 1);
        assert_eq!(grid.get(last), 9);
    }

    #[test]
    fn test_exhausted_budget_aborts() {
        let mut grid = Grid::empty();
        let unassigned = grid.unassigned_positions();
        let mut budget = Budget::new(Some(5));
        assert_eq!(
            search(&mut grid, &unassigned, &mut budget),
            Err(SolveError::NodeLimitExceeded(5))
        );
    }
}
