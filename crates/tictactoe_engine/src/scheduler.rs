//! Deferred delivery of the computer's move.
//!
//! The engine never sleeps. When the player has moved it mints an
//! [`AiTicket`] and hands it to a [`Scheduler`] with the thinking delay; the
//! scheduler's owner later passes the ticket back to
//! [`GameEngine::request_ai_move`](crate::GameEngine::request_ai_move).
//! Tickets from an earlier game, or ones already used, are ignored there.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;
use tracing::instrument;

/// Token bound to one scheduled computer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AiTicket {
    /// Game generation the ticket was minted in.
    pub generation: u64,
    /// Number of marks on the board when it was minted.
    pub ply: usize,
}

/// Capability to run the computer's move after a delay.
pub trait Scheduler {
    /// Arranges for `ticket` to be delivered back to the engine after `delay`.
    fn schedule_ai_move(&mut self, ticket: AiTicket, delay: Duration);
}

/// A scheduled delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledMove {
    /// Ticket to deliver.
    pub ticket: AiTicket,
    /// Requested delay.
    pub delay: Duration,
}

/// Scheduler that only records requests.
///
/// Nothing fires on its own: the host pops entries and delivers them when it
/// likes, which makes the engine fully synchronous and testable.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    queue: VecDeque<ScheduledMove>,
}

impl ManualScheduler {
    /// Creates an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the oldest request.
    #[instrument(skip(self))]
    pub fn pop(&mut self) -> Option<ScheduledMove> {
        self.queue.pop_front()
    }

    /// Number of requests not yet popped.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns true if nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_ai_move(&mut self, ticket: AiTicket, delay: Duration) {
        self.queue.push_back(ScheduledMove { ticket, delay });
    }
}
