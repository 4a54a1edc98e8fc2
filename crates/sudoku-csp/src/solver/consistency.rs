use crate::grid::{Grid, Position};

/// Check that the row, column and box containing `pos` hold no duplicate
/// digits. Unassigned cells are skipped; only placed digits participate.
pub fn is_consistent(grid: &Grid, pos: Position) -> bool {
    let (box_row, box_col) = pos.box_origin();
    unit_unique(grid, (0..9).map(|col| Position::new(pos.row, col)))
        && unit_unique(grid, (0..9).map(|row| Position::new(row, pos.col)))
        && unit_unique(
            grid,
            (box_row..box_row + 3)
                .flat_map(|row| (box_col..box_col + 3).map(move |col| Position::new(row, col))),
        )
}

/// Whole-grid pre-check: every placed digit unique within its units.
///
/// Run once before search starts. Cell range validity is already guaranteed
/// by `Grid` construction, so only constraint violations can fail here.
pub fn is_valid(grid: &Grid) -> bool {
    Position::all().all(|pos| is_consistent(grid, pos))
}

fn unit_unique(grid: &Grid, unit: impl Iterator<Item = Position>) -> bool {
    let mut seen: u16 = 0;
    for pos in unit {
        let value = grid.get(pos);
        if value == 0 {
            continue;
        }
        let bit = 1u16 << value;
        if seen & bit != 0 {
            return false;
        }
        seen |= bit;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_consistent_partial_grid() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        assert!(Position::all().all(|pos| is_consistent(&grid, pos)));
    }

    #[test]
    fn test_row_duplicate_detected() {
        let mut grid = Grid::from_string(PUZZLE).unwrap();
        // Row 0 already has a 5 at (0, 0)
        grid.set(Position::new(0, 8), 5);
        assert!(!is_consistent(&grid, Position::new(0, 8)));
        assert!(!is_consistent(&grid, Position::new(0, 0)));
    }

    #[test]
    fn test_column_duplicate_detected() {
        let mut grid = Grid::from_string(PUZZLE).unwrap();
        // Column 0 already has a 6 at (1, 0)
        grid.set(Position::new(8, 0), 6);
        assert!(!is_consistent(&grid, Position::new(8, 0)));
    }

    #[test]
    fn test_box_duplicate_detected() {
        let mut grid = Grid::from_string(PUZZLE).unwrap();
        // Box 0 already has a 9 at (2, 1)
        grid.set(Position::new(1, 2), 9);
        assert!(!is_consistent(&grid, Position::new(0, 0)));
    }

    #[test]
    fn test_unassigned_cells_ignored() {
        // Many zeros in every unit, no placed duplicates
        let grid = Grid::from_string(PUZZLE).unwrap();
        assert!(is_valid(&grid));
        assert!(is_valid(&Grid::empty()));
    }

    #[test]
    fn test_corrupted_solution_rejected() {
        let solved = Grid::from_string(SOLUTION).unwrap();
        assert!(is_valid(&solved));

        // One cell changed to conflict with its row flips the whole-grid check
        let mut corrupted = solved;
        corrupted.set(Position::new(8, 8), 1);
        assert!(!is_valid(&corrupted));
    }
}
