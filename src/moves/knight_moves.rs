//! Knight jumps.
//!
//! The only movement rule that ignores blockers. Targets are raw offsets;
//! the move generator drops off-board squares and decides quiet versus
//! capture by occupancy.

use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::Position;

/// Every knight jump from `from`. Jumps ignore blockers, and neither bounds
/// nor occupancy are checked here.
pub fn knight_targets(from: Position) -> Vec<Position> {
    KNIGHT_OFFSETS
        .iter()
        .map(|&(d_file, d_rank)| from.offset(d_file, d_rank))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::knight_targets;
    use crate::game_state::chess_types::Position;

    #[test]
    fn knight_always_yields_eight_targets() {
        assert_eq!(knight_targets(Position::new(4, 4)).len(), 8);
        let corner = knight_targets(Position::new(0, 0));
        assert_eq!(corner.len(), 8);
        assert!(corner.contains(&Position::new(-2, -1)));
        assert!(corner.contains(&Position::new(1, 2)));
    }
}
