use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A cell coordinate on the 9×9 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position (row and col in 0..9)
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Index of the 3×3 box containing this position (0..9, row-major)
    pub fn box_index(&self) -> usize {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Top-left corner of the 3×3 box containing this position
    pub fn box_origin(&self) -> (usize, usize) {
        ((self.row / 3) * 3, (self.col / 3) * 3)
    }

    /// Iterate over all 81 positions in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..9).flat_map(|row| (0..9).map(move |col| Position::new(row, col)))
    }
}

/// Reasons a raw puzzle cannot become a [`Grid`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A cell holds a value outside 0-9
    #[error("cell ({row}, {col}) holds {value}; expected 0-9")]
    CellOutOfRange { row: usize, col: usize, value: i32 },
    /// The puzzle string does not have exactly 81 cells
    #[error("expected 81 cells, got {0}")]
    WrongLength(usize),
    /// The puzzle string contains something other than digits or '.'
    #[error("unexpected character {0:?} in puzzle string")]
    BadCharacter(char),
}

/// A 9×9 Sudoku grid: 0 marks an unassigned cell, 1-9 a placed digit.
///
/// Construction always validates the cell range, so a `Grid` value never
/// holds anything outside 0-9. Consistency of the placed digits is checked
/// separately by the solver's pre-search validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; 9]; 9],
}

impl Grid {
    /// An all-unassigned grid
    pub fn empty() -> Self {
        Self { cells: [[0; 9]; 9] }
    }

    /// Build a grid from raw cells, rejecting values above 9
    pub fn from_cells(cells: [[u8; 9]; 9]) -> Result<Self, GridError> {
        for (row, line) in cells.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value > 9 {
                    return Err(GridError::CellOutOfRange {
                        row,
                        col,
                        value: value as i32,
                    });
                }
            }
        }
        Ok(Self { cells })
    }

    /// Build a grid from a signed matrix, the representation used at the
    /// flat interface boundary. Anything outside 0-9 (the failure sentinel
    /// included) is rejected.
    pub fn from_matrix(matrix: &[[i8; 9]; 9]) -> Result<Self, GridError> {
        let mut cells = [[0u8; 9]; 9];
        for (row, line) in matrix.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if !(0..=9).contains(&value) {
                    return Err(GridError::CellOutOfRange {
                        row,
                        col,
                        value: value as i32,
                    });
                }
                cells[row][col] = value as u8;
            }
        }
        Ok(Self { cells })
    }

    /// Parse an 81-character puzzle string, row-major; '0' or '.' marks an
    /// empty cell. Surrounding whitespace is ignored.
    pub fn from_string(input: &str) -> Result<Self, GridError> {
        let trimmed = input.trim();
        let count = trimmed.chars().count();
        if count != 81 {
            return Err(GridError::WrongLength(count));
        }
        let mut cells = [[0u8; 9]; 9];
        for (idx, ch) in trimmed.chars().enumerate() {
            let value = match ch {
                '.' => 0,
                '0'..='9' => ch as u8 - b'0',
                other => return Err(GridError::BadCharacter(other)),
            };
            cells[idx / 9][idx % 9] = value;
        }
        Ok(Self { cells })
    }

    /// Value at `pos`; 0 when unassigned
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Place `value` at `pos`
    pub fn set(&mut self, pos: Position, value: u8) {
        debug_assert!(value <= 9, "digit out of range: {value}");
        self.cells[pos.row][pos.col] = value;
    }

    /// Reset `pos` to unassigned
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = 0;
    }

    /// Whether `pos` has no digit yet
    pub fn is_unassigned(&self, pos: Position) -> bool {
        self.cells[pos.row][pos.col] == 0
    }

    /// All unassigned positions in row-major order
    pub fn unassigned_positions(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.is_unassigned(pos)).collect()
    }

    /// Whether every cell holds a digit
    pub fn is_complete(&self) -> bool {
        Position::all().all(|pos| !self.is_unassigned(pos))
    }

    /// The grid as a signed matrix for the flat interface boundary
    pub fn to_matrix(&self) -> [[i8; 9]; 9] {
        let mut matrix = [[0i8; 9]; 9];
        for pos in Position::all() {
            matrix[pos.row][pos.col] = self.get(pos) as i8;
        }
        matrix
    }

    /// The grid as an 81-character string, '0' for unassigned cells
    pub fn as_line(&self) -> String {
        Position::all()
            .map(|pos| char::from(b'0' + self.get(pos)))
            .collect()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..9 {
            for col in 0..9 {
                let value = self.cells[row][col];
                if value == 0 {
                    write!(f, ". ")?;
                } else {
                    write!(f, "{} ", value)?;
                }
                if col % 3 == 2 && col < 8 {
                    write!(f, "| ")?;
                }
            }
            writeln!(f)?;
            if row % 3 == 2 && row < 8 {
                writeln!(f, "------+-------+------")?;
            }
        }
        Ok(())
    }
}
