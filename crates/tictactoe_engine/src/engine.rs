//! Game state machine: human against computer.
//!
//! ```text
//!              apply_player_move            request_ai_move(ticket)
//!  PlayerTurn ───────────────────> AiThinking ───────────────────> PlayerTurn
//!      │                               │
//!      └──── line or full board ───────┴──────> Ended(outcome)
//! ```
//!
//! `reset()` returns to `PlayerTurn` from anywhere and invalidates any ticket
//! handed out before it.

use crate::action::{Move, MoveError};
use crate::ai::AiSelector;
use crate::config::EngineConfig;
use crate::invariants::assert_invariants;
use crate::position::Position;
use crate::rules;
use crate::scheduler::{AiTicket, Scheduler};
use crate::types::{Board, Mark, Outcome, Phase, Turn};
use crate::view::GameView;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Immutable copy of a game's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    board: Board,
    phase: Phase,
    history: Vec<Move>,
    generation: u64,
}

impl GameSnapshot {
    /// Builds a snapshot from parts.
    pub fn new(board: Board, phase: Phase, history: Vec<Move>, generation: u64) -> Self {
        Self {
            board,
            phase,
            history,
            generation,
        }
    }

    /// Snapshot of a game that has just been reset.
    pub fn fresh(generation: u64) -> Self {
        Self::new(Board::new(), Phase::PlayerTurn, Vec::new(), generation)
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// State-machine phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whose move it is, `None` once ended.
    pub fn turn(&self) -> Option<Turn> {
        self.phase.turn()
    }

    /// Outcome so far.
    pub fn outcome(&self) -> Outcome {
        self.phase.outcome()
    }

    /// Moves of this game in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Game generation (bumped by every reset).
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Owns one game and drives every mutation of it.
///
/// `V` receives notifications, `S` delivers the computer's move after the
/// thinking delay, `R` feeds the computer's random choices.
#[derive(Debug, Clone)]
pub struct GameEngine<V, S, R> {
    board: Board,
    phase: Phase,
    history: Vec<Move>,
    generation: u64,
    pending: Option<AiTicket>,
    selector: AiSelector,
    think_delay: Duration,
    view: V,
    scheduler: S,
    rng: R,
}

impl<V, S, R> GameEngine<V, S, R>
where
    V: GameView,
    S: Scheduler,
    R: Rng,
{
    /// Creates an engine and starts the first game.
    #[instrument(skip_all, fields(think_delay_ms = config.think_delay_ms()))]
    pub fn new(config: &EngineConfig, view: V, scheduler: S, rng: R) -> Self {
        let mut engine = Self {
            board: Board::new(),
            phase: Phase::PlayerTurn,
            history: Vec::new(),
            generation: 0,
            pending: None,
            selector: AiSelector::new(*config.random_move_probability()),
            think_delay: config.think_delay(),
            view,
            scheduler,
            rng,
        };
        engine.reset();
        engine
    }

    /// Starts a new game from any state.
    ///
    /// Any AI move scheduled before the reset is invalidated.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.phase = Phase::PlayerTurn;
        self.generation += 1;
        if let Some(stale) = self.pending.take() {
            debug!(?stale, "Dropping pending AI move");
        }

        info!(generation = self.generation, "New game");
        self.view.on_reset(self.generation);
        self.view.on_turn_changed(self.phase);
        assert_invariants(&self.snapshot());
    }

    /// Places the player's mark at `index` (0-8).
    ///
    /// On success returns the new phase: `AiThinking` with the computer's
    /// move scheduled, or `Ended` if this move finished the game.
    ///
    /// # Errors
    ///
    /// Rejected moves leave the game untouched:
    /// - [`MoveError::OutOfRange`] if `index` is not 0-8
    /// - [`MoveError::GameAlreadyEnded`] once the game is over
    /// - [`MoveError::NotPlayerTurn`] while the computer is thinking
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn apply_player_move(&mut self, index: usize) -> Result<Phase, MoveError> {
        let position = self.check_player_move(index).inspect_err(|e| {
            debug!(error = %e, "Rejected player move");
        })?;

        self.place(Move::new(Mark::Player, position));

        if !self.finish_if_over() {
            let ticket = AiTicket {
                generation: self.generation,
                ply: self.history.len(),
            };
            self.pending = Some(ticket);
            self.transition(Phase::AiThinking);
            debug!(?ticket, delay = ?self.think_delay, "Scheduling AI move");
            self.scheduler.schedule_ai_move(ticket, self.think_delay);
        }

        assert_invariants(&self.snapshot());
        Ok(self.phase)
    }

    /// Plays the computer's move for a ticket issued by this engine.
    ///
    /// Returns the cell played, or `None` if the ticket is stale (issued
    /// before a reset, or already used) or the engine is not waiting on the
    /// computer. Stale deliveries change nothing.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn request_ai_move(&mut self, ticket: AiTicket) -> Option<Position> {
        if self.phase != Phase::AiThinking {
            debug!("Ignoring AI move request outside AiThinking");
            return None;
        }
        if self.pending != Some(ticket) {
            debug!(pending = ?self.pending, "Ignoring stale AI ticket");
            return None;
        }
        self.pending = None;

        let position = self.selector.choose_move(&self.board, &mut self.rng);
        self.place(Move::new(Mark::Ai, position));

        if !self.finish_if_over() {
            self.transition(Phase::PlayerTurn);
        }

        assert_invariants(&self.snapshot());
        Some(position)
    }

    /// Returns true if `apply_player_move(index)` would be accepted.
    pub fn is_legal(&self, index: usize) -> bool {
        self.check_player_move(index).is_ok()
    }

    /// Cells the player may pick right now, ascending.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.phase != Phase::PlayerTurn {
            return Vec::new();
        }
        self.board.empties().collect()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(self.board, self.phase, self.history.clone(), self.generation)
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// State-machine phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whose move it is, `None` once ended.
    pub fn turn(&self) -> Option<Turn> {
        self.phase.turn()
    }

    /// Outcome so far.
    pub fn outcome(&self) -> Outcome {
        self.phase.outcome()
    }

    /// Moves of the current game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Game generation (bumped by every reset).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Ticket the engine is waiting on, if any.
    pub fn pending_ticket(&self) -> Option<AiTicket> {
        self.pending
    }

    /// The computer's move selector.
    pub fn selector(&self) -> &AiSelector {
        &self.selector
    }

    /// The attached view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the attached view.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// The attached scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the attached scheduler.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn check_player_move(&self, index: usize) -> Result<Position, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        match self.phase {
            Phase::Ended(_) => return Err(MoveError::GameAlreadyEnded),
            Phase::AiThinking => return Err(MoveError::NotPlayerTurn),
            Phase::PlayerTurn => {}
        }
        if !self.board.is_empty(position) {
            return Err(MoveError::CellOccupied(position));
        }
        Ok(position)
    }

    fn place(&mut self, mv: Move) {
        debug_assert!(self.board.is_empty(mv.position), "cell written twice");
        self.board.set(mv.position, mv.mark);
        self.history.push(mv);
        debug!(%mv, "Mark placed");
        self.view.on_cell_changed(mv.position, mv.mark);
    }

    fn transition(&mut self, phase: Phase) {
        debug!(from = ?self.phase, to = ?phase, "Phase transition");
        self.phase = phase;
        self.view.on_turn_changed(phase);
    }

    /// Ends the game if the board is decided. Returns true if it did.
    fn finish_if_over(&mut self) -> bool {
        let outcome = rules::outcome(&self.board);
        if !outcome.is_terminal() {
            return false;
        }
        self.transition(Phase::Ended(outcome));
        info!(%outcome, moves = self.history.len(), "Game over");
        self.view.on_game_ended(outcome);
        true
    }
}
