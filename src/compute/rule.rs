//! The B3/S23 transition rule.

use crate::schema::Cell;

/// Next state of a cell given its live-neighbor count.
///
/// Total over all (cell, count) inputs and free of side effects. The
/// stepper never embeds this table, so a different rule could be swapped
/// in here without touching it.
#[inline]
pub fn next_state(current: Cell, live_neighbors: u8) -> Cell {
    match (current, live_neighbors) {
        // Survival: a live cell with 2 or 3 live neighbors stays alive.
        (Cell::Alive, 2 | 3) => Cell::Alive,
        // Birth: a dead cell with exactly 3 live neighbors comes alive.
        (Cell::Dead, 3) => Cell::Alive,
        // Everything else dies or stays dead.
        _ => Cell::Dead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_total_over_all_inputs() {
        // Exactly four (cell, count) combinations produce a live cell.
        let mut alive_cases = Vec::new();
        for cell in [Cell::Dead, Cell::Alive] {
            for n in 0..=8u8 {
                if next_state(cell, n) == Cell::Alive {
                    alive_cases.push((cell, n));
                }
            }
        }
        assert_eq!(
            alive_cases,
            vec![(Cell::Dead, 3), (Cell::Alive, 2), (Cell::Alive, 3)]
        );
    }

    #[test]
    fn test_survival() {
        assert_eq!(next_state(Cell::Alive, 2), Cell::Alive);
        assert_eq!(next_state(Cell::Alive, 3), Cell::Alive);
    }

    #[test]
    fn test_isolation_and_overpopulation() {
        assert_eq!(next_state(Cell::Alive, 0), Cell::Dead);
        assert_eq!(next_state(Cell::Alive, 1), Cell::Dead);
        assert_eq!(next_state(Cell::Alive, 4), Cell::Dead);
        assert_eq!(next_state(Cell::Alive, 8), Cell::Dead);
    }

    #[test]
    fn test_birth() {
        assert_eq!(next_state(Cell::Dead, 3), Cell::Alive);
        assert_eq!(next_state(Cell::Dead, 2), Cell::Dead);
        assert_eq!(next_state(Cell::Dead, 4), Cell::Dead);
    }
}
