//! Main loop: reads commands and fires the computer's move when it is due.

use crate::input::{Command, HELP};
use crate::scheduler::{self, TimerScheduler};
use crate::view::ConsoleView;
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{Stdout, Write};
use tictactoe_engine::{EngineConfig, GameEngine};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, instrument};

type ConsoleEngine<W> = GameEngine<ConsoleView<W>, TimerScheduler, StdRng>;

/// Runs one console session until `quit` or end of input.
#[instrument(skip(config), fields(seed = ?config.seed()))]
pub async fn run(config: EngineConfig, json: bool) -> Result<()> {
    let rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };

    let mut view = ConsoleView::new(std::io::stdout(), json);
    if !json {
        view.message(HELP);
    }
    let mut engine: ConsoleEngine<Stdout> =
        GameEngine::new(&config, view, TimerScheduler::default(), rng);

    drive(&mut engine, BufReader::new(tokio::io::stdin())).await?;

    info!(generation = engine.generation(), "Session finished");
    Ok(())
}

/// Feeds `input` to the engine line by line and delivers the computer's
/// moves as they fall due.
///
/// Input is not read while a computer move is pending, so piped moves wait
/// their turn and end of input never cuts off the computer's reply.
async fn drive<W, I>(engine: &mut ConsoleEngine<W>, input: I) -> Result<()>
where
    W: Write,
    I: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    loop {
        let due = engine.scheduler().next_due();
        tokio::select! {
            ticket = scheduler::wait_for(due) => {
                engine.scheduler_mut().take();
                if engine.request_ai_move(ticket).is_none() {
                    debug!(?ticket, "Timer fired for a stale ticket");
                }
            }
            line = lines.next_line(), if due.is_none() => {
                let Some(line) = line.context("Failed to read input")? else {
                    info!("End of input");
                    return Ok(());
                };
                if !handle_line(engine, &line) {
                    return Ok(());
                }
            }
        }
    }
}

/// Applies one line of input. Returns false when the session should end.
fn handle_line<W: Write>(engine: &mut ConsoleEngine<W>, line: &str) -> bool {
    let command = match Command::parse(line) {
        Ok(Some(command)) => command,
        Ok(None) => return true,
        Err(message) => {
            engine.view_mut().message(&message);
            return true;
        }
    };
    debug!(?command, "Command");

    match command {
        Command::Place(position) => {
            if let Err(e) = engine.apply_player_move(position.to_index()) {
                engine.view_mut().message(&e.to_string());
            }
        }
        Command::Reset => engine.reset(),
        Command::Board => engine.view_mut().draw_board(),
        Command::Help => engine.view_mut().message(HELP),
        Command::Quit => return false,
    }
    true
}
