//! Grid container and validation.
//!
//! A grid is a rectangular matrix of binary cells stored as a flat
//! row-major array with indexing: [row * cols + col].

use serde::{Deserialize, Serialize};

/// State of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    /// True if the cell is alive.
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Convert from the 0/1 byte encoding. Any other value is invalid.
    #[inline]
    pub fn from_bit(value: u8) -> Option<Cell> {
        match value {
            0 => Some(Cell::Dead),
            1 => Some(Cell::Alive),
            _ => None,
        }
    }

    /// The 0/1 byte encoding of this cell.
    #[inline]
    pub fn to_bit(self) -> u8 {
        match self {
            Cell::Dead => 0,
            Cell::Alive => 1,
        }
    }

    /// The opposite state.
    #[inline]
    pub fn toggled(self) -> Cell {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

/// Rectangular grid of cells.
///
/// Invariant: `cells.len() == rows * cols`. The canonical empty grid has
/// `rows == 0 && cols == 0` and is the only grid with no cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

/// Grid construction and parse errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid must contain at least one row with at least one cell")]
    EmptyGrid,
    #[error("Row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Cell ({row}, {col}) has value {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },
}

impl Grid {
    /// The canonical empty grid. Stepping it yields itself.
    pub fn empty() -> Self {
        Self {
            cells: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// All-dead grid of the given dimensions.
    ///
    /// Zero in either dimension yields the canonical empty grid.
    pub fn new_dead(rows: usize, cols: usize) -> Self {
        if rows == 0 || cols == 0 {
            return Self::empty();
        }
        Self {
            cells: vec![Cell::Dead; rows * cols],
            rows,
            cols,
        }
    }

    /// Build a grid from rows of 0/1 bytes.
    ///
    /// Fails on zero usable rows, unequal row lengths, or any byte other
    /// than 0 or 1. No partially built grid is observable on failure.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        if rows.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        let cols = rows[0].len();
        if cols == 0 {
            return Err(GridError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected: cols,
                    actual: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                let cell = Cell::from_bit(value).ok_or(GridError::InvalidCell {
                    row: r,
                    col: c,
                    value,
                })?;
                cells.push(cell);
            }
        }

        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    /// Assemble a grid from an already-validated flat buffer.
    pub(crate) fn from_parts(cells: Vec<Cell>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { cells, rows, cols }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True for the canonical empty grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Convert (row, col) coordinates to flat index.
    #[inline]
    pub(crate) fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Cell at (row, col).
    ///
    /// # Panics
    /// Panics if the coordinates are out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.rows && col < self.cols, "cell out of range");
        self.cells[self.idx(row, col)]
    }

    /// Set the cell at (row, col).
    ///
    /// # Panics
    /// Panics if the coordinates are out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(row < self.rows && col < self.cols, "cell out of range");
        let idx = self.idx(row, col);
        self.cells[idx] = cell;
    }

    /// Flip the cell at (row, col) between dead and alive.
    pub fn toggle(&mut self, row: usize, col: usize) {
        let cell = self.get(row, col);
        self.set(row, col, cell.toggled());
    }

    /// Count of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Flat row-major view of all cells.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable access to the backing buffer, for the stepper's buffer swap.
    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut Vec<Cell> {
        &mut self.cells
    }
}

impl std::fmt::Display for Grid {
    /// Canonical 0/1 rendering, one line per row.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, line) in crate::schema::render_grid(self).iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
