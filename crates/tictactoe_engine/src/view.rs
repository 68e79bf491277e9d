//! Notifications from the engine to whatever renders the game.

use crate::position::Position;
use crate::types::{Mark, Outcome, Phase};
use serde::{Deserialize, Serialize};

/// Receiver of engine notifications.
///
/// A view only ever sees deltas; it never holds a reference into the
/// engine's board.
pub trait GameView {
    /// A new game started with an empty board.
    fn on_reset(&mut self, generation: u64);

    /// A cell received a mark. Sent once per mutation.
    fn on_cell_changed(&mut self, position: Position, mark: Mark);

    /// The state machine moved to `phase`. Sent on every transition.
    fn on_turn_changed(&mut self, phase: Phase);

    /// The game finished. Sent exactly once per game.
    fn on_game_ended(&mut self, outcome: Outcome);
}

/// Engine notification as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// See [`GameView::on_reset`].
    Reset {
        /// New game generation.
        generation: u64,
    },
    /// See [`GameView::on_cell_changed`].
    CellChanged {
        /// Cell that changed.
        position: Position,
        /// Mark now in the cell.
        mark: Mark,
    },
    /// See [`GameView::on_turn_changed`].
    TurnChanged {
        /// New phase.
        phase: Phase,
    },
    /// See [`GameView::on_game_ended`].
    GameEnded {
        /// Final outcome.
        outcome: Outcome,
    },
}

impl GameView for () {
    fn on_reset(&mut self, _generation: u64) {}
    fn on_cell_changed(&mut self, _position: Position, _mark: Mark) {}
    fn on_turn_changed(&mut self, _phase: Phase) {}
    fn on_game_ended(&mut self, _outcome: Outcome) {}
}

/// Records every notification in order.
impl GameView for Vec<GameEvent> {
    fn on_reset(&mut self, generation: u64) {
        self.push(GameEvent::Reset { generation });
    }

    fn on_cell_changed(&mut self, position: Position, mark: Mark) {
        self.push(GameEvent::CellChanged { position, mark });
    }

    fn on_turn_changed(&mut self, phase: Phase) {
        self.push(GameEvent::TurnChanged { phase });
    }

    fn on_game_ended(&mut self, outcome: Outcome) {
        self.push(GameEvent::GameEnded { outcome });
    }
}
