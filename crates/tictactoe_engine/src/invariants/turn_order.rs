//! Turn order invariant: the player opens and the sides alternate.

use super::Invariant;
use crate::engine::GameSnapshot;
use crate::types::{Mark, Phase};

/// Invariant: history reads Player, Ai, Player, ... and an ongoing game is
/// waiting on whoever is next.
pub struct TurnOrderInvariant;

impl Invariant<GameSnapshot> for TurnOrderInvariant {
    fn holds(snapshot: &GameSnapshot) -> bool {
        let history = snapshot.history();

        let alternates = history.iter().enumerate().all(|(ply, mv)| {
            let expected = if ply % 2 == 0 { Mark::Player } else { Mark::Ai };
            mv.mark == expected
        });
        if !alternates {
            return false;
        }

        match snapshot.phase() {
            Phase::PlayerTurn => history.len() % 2 == 0,
            Phase::AiThinking => history.len() % 2 == 1,
            Phase::Ended(_) => true,
        }
    }

    fn description() -> &'static str {
        "Player opens and turns alternate (Player, Ai, Player, ...)"
    }
}
