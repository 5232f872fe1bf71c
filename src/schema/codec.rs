//! Textual grid codec.
//!
//! Parses human-readable multi-line grid text and renders grids back to
//! the canonical 0/1 form. Decoding is total: the marker set maps to
//! alive and every other character maps to dead, so parse failures can
//! only come from grid validation (empty or ragged input).

use super::{Cell, Grid, GridError};

/// Characters decoded as a live cell. Everything else decodes as dead,
/// including '0', '.', and whitespace inside a line.
pub const ALIVE_MARKERS: [char; 4] = ['1', '#', '*', 'X'];

/// Parse a grid from lines of marker characters.
///
/// Lines are trimmed of surrounding whitespace; blank lines are skipped
/// entirely rather than treated as zero-length rows. The remaining rows
/// must be non-empty and of equal length.
pub fn parse_grid<I, S>(lines: I) -> Result<Grid, GridError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cells: Vec<Cell> = Vec::new();
    let mut rows = 0usize;
    let mut cols = None;

    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }

        let start = cells.len();
        cells.extend(line.chars().map(|ch| {
            if ALIVE_MARKERS.contains(&ch) {
                Cell::Alive
            } else {
                Cell::Dead
            }
        }));
        let len = cells.len() - start;

        let expected = *cols.get_or_insert(len);
        if len != expected {
            return Err(GridError::RaggedRow {
                row: rows,
                expected,
                actual: len,
            });
        }
        rows += 1;
    }

    // A trimmed non-blank line always has at least one character, so
    // `cols` is non-zero whenever any row was accepted.
    match cols {
        Some(cols) => Ok(Grid::from_parts(cells, rows, cols)),
        None => Err(GridError::EmptyGrid),
    }
}

/// Render a grid as canonical 0/1 lines, top to bottom.
pub fn render_grid(grid: &Grid) -> Vec<String> {
    render_grid_with(grid, '1', '0')
}

/// Render a grid with caller-chosen alive/dead characters.
pub fn render_grid_with(grid: &Grid, alive: char, dead: char) -> Vec<String> {
    grid.cells()
        .chunks(grid.cols().max(1))
        .map(|row| {
            row.iter()
                .map(|cell| if cell.is_alive() { alive } else { dead })
                .collect()
        })
        .collect()
}
