//! Growth invariant: each snapshot adds exactly one mark, alternating X, O.

use super::Invariant;
use crate::{GameHistory, Mark};

/// Invariant: every entry after the first is its predecessor plus one mark.
///
/// The mark placed to reach entry `i` is the one whose turn it was at
/// entry `i - 1`, so the sequence alternates X, O, X, ... and no cell is
/// ever overwritten.
pub struct SingleStepGrowthInvariant;

impl Invariant<GameHistory> for SingleStepGrowthInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .entries()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                pair[1]
                    .move_from(&pair[0])
                    .is_some_and(|mov| mov.mark == Mark::for_step(i))
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark for the player whose turn it was"
    }
}
