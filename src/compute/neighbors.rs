//! Moore-neighborhood counting under a chosen edge policy.

use crate::schema::{EdgePolicy, Grid};

/// The 8 Moore-neighborhood offsets around a cell.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count live neighbors of (row, col) in the current generation.
///
/// Bounded policy excludes out-of-range coordinates from the count;
/// Toroidal wraps them with Euclidean modulo before lookup, so the
/// backing storage is never indexed out of range.
///
/// # Panics
/// Panics if (row, col) itself is out of range.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize, policy: EdgePolicy) -> u8 {
    assert!(
        row < grid.rows() && col < grid.cols(),
        "cell out of range"
    );

    let rows = grid.rows() as i64;
    let cols = grid.cols() as i64;
    let mut count = 0u8;

    for (dr, dc) in NEIGHBOR_OFFSETS {
        let r = row as i64 + dr;
        let c = col as i64 + dc;

        let (r, c) = match policy {
            EdgePolicy::Bounded => {
                if r < 0 || r >= rows || c < 0 || c >= cols {
                    continue;
                }
                (r, c)
            }
            EdgePolicy::Toroidal => (r.rem_euclid(rows), c.rem_euclid(cols)),
        };

        count += grid.get(r as usize, c as usize).is_alive() as u8;
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::parse_grid;

    #[test]
    fn test_interior_cell_counts_all_eight() {
        let grid = parse_grid(["111", "101", "111"]).unwrap();
        assert_eq!(count_live_neighbors(&grid, 1, 1, EdgePolicy::Bounded), 8);
        assert_eq!(count_live_neighbors(&grid, 1, 1, EdgePolicy::Toroidal), 8);
    }

    #[test]
    fn test_bounded_corner_excludes_outside() {
        let grid = parse_grid(["11", "11"]).unwrap();
        // Corner cell sees only the other three cells of the block.
        assert_eq!(count_live_neighbors(&grid, 0, 0, EdgePolicy::Bounded), 3);
    }

    #[test]
    fn test_toroidal_wraps_diagonally() {
        // Live cells at (0,0) and (N-1,N-1) are diagonal neighbors on the
        // torus but not on the bounded grid.
        let grid = parse_grid(["1000", "0000", "0000", "0001"]).unwrap();
        assert_eq!(count_live_neighbors(&grid, 0, 0, EdgePolicy::Toroidal), 1);
        assert_eq!(count_live_neighbors(&grid, 0, 0, EdgePolicy::Bounded), 0);
    }

    #[test]
    fn test_toroidal_one_by_one_sees_itself_eight_times() {
        let grid = parse_grid(["1"]).unwrap();
        assert_eq!(count_live_neighbors(&grid, 0, 0, EdgePolicy::Toroidal), 8);
        assert_eq!(count_live_neighbors(&grid, 0, 0, EdgePolicy::Bounded), 0);
    }

    #[test]
    fn test_count_stays_within_bounds() {
        let grid = parse_grid(["111", "111", "111"]).unwrap();
        for policy in [EdgePolicy::Bounded, EdgePolicy::Toroidal] {
            for r in 0..3 {
                for c in 0..3 {
                    let n = count_live_neighbors(&grid, r, c, policy);
                    assert!(n <= 8, "count {} out of range at ({}, {})", n, r, c);
                }
            }
        }
    }
}
