//! Phase progress invariant: each move advances the turn by one step or ends the game.

use super::{Invariant, Transition};

/// Invariant: the phase after a move is the next phase in the cycle, or a
/// win phase.
pub struct PhaseProgressInvariant;

impl Invariant<Transition<'_>> for PhaseProgressInvariant {
    fn holds(transition: &Transition<'_>) -> bool {
        let before = transition.before.phase();
        let after = transition.after.phase();
        !before.is_terminal() && (after == before.next() || after.is_terminal())
    }

    fn description() -> &'static str {
        "Each move advances the phase by one step or ends the game"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::neutrino::{Board, Phase};

    #[test]
    fn test_cycle_step_holds() {
        let before = Board::new_standard();
        let mut after = before;
        after.set_phase(Phase::Player1PieceMove);
        assert!(PhaseProgressInvariant::holds(&Transition::new(&before, &after)));
        after.set_phase(Phase::Player2Win);
        assert!(PhaseProgressInvariant::holds(&Transition::new(&before, &after)));
    }

    #[test]
    fn test_skipped_phase_violates() {
        let before = Board::new_standard();
        let mut after = before;
        after.set_phase(Phase::Player2NeutralMove);
        assert!(!PhaseProgressInvariant::holds(&Transition::new(&before, &after)));
    }
}
