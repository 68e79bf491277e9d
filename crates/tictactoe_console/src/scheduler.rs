//! Timer-backed delivery of the computer's move.

use std::time::Duration;
use tictactoe_engine::{AiTicket, Scheduler};
use tokio::time::{Instant, sleep_until};
use tracing::debug;

/// Holds the next AI move and when it is due.
///
/// A new request replaces an older one. Tickets left over from before a
/// reset still fire; the engine ignores them.
#[derive(Debug, Default)]
pub struct TimerScheduler {
    pending: Option<(AiTicket, Instant)>,
}

impl TimerScheduler {
    /// The waiting ticket and its deadline.
    pub fn next_due(&self) -> Option<(AiTicket, Instant)> {
        self.pending
    }

    /// Removes the waiting ticket.
    pub fn take(&mut self) -> Option<AiTicket> {
        self.pending.take().map(|(ticket, _)| ticket)
    }
}

impl Scheduler for TimerScheduler {
    fn schedule_ai_move(&mut self, ticket: AiTicket, delay: Duration) {
        if let Some((replaced, _)) = self.pending {
            debug!(?replaced, "Replacing scheduled AI move");
        }
        self.pending = Some((ticket, Instant::now() + delay));
    }
}

/// Resolves with the ticket once its deadline passes; never resolves when
/// nothing is scheduled.
pub async fn wait_for(due: Option<(AiTicket, Instant)>) -> AiTicket {
    match due {
        Some((ticket, deadline)) => {
            sleep_until(deadline).await;
            ticket
        }
        None => std::future::pending().await,
    }
}
