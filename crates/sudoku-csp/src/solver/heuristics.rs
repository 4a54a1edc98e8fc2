//! Variable and value ordering for the backtracking search.
//!
//! Both heuristics break ties by first strict improvement in traversal
//! order: a later candidate merely equalling the best seen so far never
//! replaces it. Search order is therefore fully deterministic.

use crate::grid::{Grid, Position};
use crate::solver::domain::legal_values;

/// Pick the next cell to assign: the unassigned cell whose row, column and
/// box hold the fewest open cells in total (minimum remaining values).
///
/// A count of one is the theoretical minimum and short-circuits the scan
/// (only choice). Returns `None` only for an empty set.
pub(crate) fn select_cell(grid: &Grid, unassigned: &[Position]) -> Option<Position> {
    let mut pick = None;
    let mut fewest = u32::MAX;
    for &pos in unassigned {
        let open = open_unit_cells(grid, pos);
        if open == 1 {
            return Some(pos);
        }
        if open < fewest {
            fewest = open;
            pick = Some(pos);
        }
    }
    pick
}

/// Pick the next value to try for `pos`: the candidate leaving its row,
/// column and box neighbors the most legal values afterwards
/// (least constraining value).
///
/// Candidates are weighed by assigning them on a scratch copy and summing
/// domain sizes over all 27 unit slots; overlap cells and the assigned cell
/// itself are counted as-is. Single-candidate domains skip the scan.
pub(crate) fn least_constraining(grid: &Grid, pos: Position, domain: &[u8]) -> Option<u8> {
    match domain {
        [] => None,
        [only] => Some(*only),
        _ => {
            let mut pick = None;
            let mut most_freedom = 0;
            for &value in domain {
                let mut scratch = *grid;
                scratch.set(pos, value);
                let freedom = neighbor_freedom(&scratch, pos);
                if pick.is_none() || freedom > most_freedom {
                    most_freedom = freedom;
                    pick = Some(value);
                }
            }
            pick
        }
    }
}

/// Unassigned cells across `pos`'s row, column and box. The cell itself is
/// unassigned and so contributes to all three unit counts.
fn open_unit_cells(grid: &Grid, pos: Position) -> u32 {
    let mut open = 0;
    for k in 0..9 {
        if grid.is_unassigned(Position::new(pos.row, k)) {
            open += 1;
        }
        if grid.is_unassigned(Position::new(k, pos.col)) {
            open += 1;
        }
    }
    let (box_row, box_col) = pos.box_origin();
    for row in box_row..box_row + 3 {
        for col in box_col..box_col + 3 {
            if grid.is_unassigned(Position::new(row, col)) {
                open += 1;
            }
        }
    }
    open
}

/// Sum of domain sizes over the 27 unit slots around `pos`.
fn neighbor_freedom(grid: &Grid, pos: Position) -> usize {
    let mut freedom = 0;
    for k in 0..9 {
        freedom += legal_values(grid, Position::new(pos.row, k)).len();
        freedom += legal_values(grid, Position::new(k, pos.col)).len();
    }
    let (box_row, box_col) = pos.box_origin();
    for row in box_row..box_row + 3 {
        for col in box_col..box_col + 3 {
            freedom += legal_values(grid, Position::new(row, col)).len();
        }
    }
    freedom
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_select_cell_prefers_most_constrained() {
        // (0, 0) sits in a nearly full neighborhood, (8, 7) and (8, 8) share
        // a much more open one
        let mut grid = Grid::from_string(SOLUTION).unwrap();
        let tight = Position::new(0, 0);
        let loose_a = Position::new(8, 7);
        let loose_b = Position::new(8, 8);
        grid.clear(tight);
        grid.clear(loose_a);
        grid.clear(loose_b);

        let unassigned = grid.unassigned_positions();
        assert_eq!(select_cell(&grid, &unassigned), Some(tight));
    }

    #[test]
    fn test_select_cell_tie_keeps_first() {
        let mut grid = Grid::from_string(SOLUTION).unwrap();
        let loose_a = Position::new(8, 7);
        let loose_b = Position::new(8, 8);
        grid.clear(loose_a);
        grid.clear(loose_b);

        // Both cells score identically; the earlier one in traversal order
        // must win
        assert_eq!(select_cell(&grid, &[loose_a, loose_b]), Some(loose_a));
        assert_eq!(select_cell(&grid, &[loose_b, loose_a]), Some(loose_b));
    }

    #[test]
    fn test_select_cell_on_full_puzzle() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        let unassigned = grid.unassigned_positions();
        assert_eq!(select_cell(&grid, &unassigned), Some(Position::new(4, 4)));
    }

    #[test]
    fn test_select_cell_empty_set() {
        let grid = Grid::from_string(SOLUTION).unwrap();
        assert_eq!(select_cell(&grid, &[]), None);
    }

    #[test]
    fn test_single_candidate_shortcut() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        assert_eq!(least_constraining(&grid, Position::new(0, 2), &[7]), Some(7));
    }

    #[test]
    fn test_least_constraining_pick_is_deterministic() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        let pos = Position::new(0, 2);
        let domain = legal_values(&grid, pos);
        assert_eq!(domain, vec![1, 2, 4]);

        let first = least_constraining(&grid, pos, &domain);
        assert_eq!(first, Some(1));
        assert_eq!(least_constraining(&grid, pos, &domain), first);
    }

    #[test]
    fn test_least_constraining_empty_domain() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        assert_eq!(least_constraining(&grid, Position::new(0, 2), &[]), None);
    }
}
