// rule.rs - Conway's survival/birth/death rule

/// Returns the next state of a cell that is currently `alive` and has
/// `neighbors` live neighbors.
///
/// Exactly two neighbors echoes the current state rather than forcing the cell
/// alive, so a dead cell with two neighbors stays dead.
pub fn next(alive: bool, neighbors: u8) -> bool {
    match neighbors {
        2 => alive,          // Survival, or stays dead
        n if n > 3 => false, // Overcrowding
        n => n > 1,          // Birth on 3, loneliness on 0 or 1
    }
}

#[cfg(test)]
mod tests {
    use super::next;

    #[test]
    fn two_neighbors_echo_current_state() {
        assert!(next(true, 2));
        assert!(!next(false, 2));
    }

    #[test]
    fn three_neighbors_always_live() {
        assert!(next(true, 3));
        assert!(next(false, 3));
    }

    #[test]
    fn lonely_and_crowded_cells_die() {
        for alive in [true, false] {
            for n in [0, 1, 4, 5, 6, 7, 8] {
                assert!(!next(alive, n), "alive={alive} neighbors={n}");
            }
        }
    }
}
