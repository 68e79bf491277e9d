//! Tic-tac-toe against the computer.
//!
//! The crate is the game core only: the board, the turn state machine with
//! its artificial "thinking" pause, win/draw detection, and a minimax
//! opponent blended with random play. Rendering and input live elsewhere and
//! talk to the core through two seams:
//!
//! - [`GameView`] receives notifications (cell changes, phase changes, the
//!   final outcome).
//! - [`Scheduler`] delivers the computer's move after the thinking delay.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tictactoe_engine::{EngineConfig, GameEngine, ManualScheduler, Phase};
//!
//! let config = EngineConfig::default().with_random_move_probability(0.0);
//! let mut engine = GameEngine::new(&config, (), ManualScheduler::new(), StdRng::seed_from_u64(7));
//!
//! assert_eq!(engine.apply_player_move(4), Ok(Phase::AiThinking));
//!
//! // Normally a timer fires this after the thinking delay.
//! let scheduled = engine.scheduler_mut().pop().expect("AI move scheduled");
//! engine.request_ai_move(scheduled.ticket);
//! assert_eq!(engine.phase(), Phase::PlayerTurn);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod ai;
mod config;
mod engine;
mod position;
mod scheduler;
mod types;
mod view;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use ai::{AiSelector, DEFAULT_RANDOM_MOVE_PROBABILITY, minimax};
pub use config::{ConfigError, EngineConfig};
pub use engine::{GameEngine, GameSnapshot};
pub use position::Position;
pub use scheduler::{AiTicket, ManualScheduler, ScheduledMove, Scheduler};
pub use types::{Board, Mark, Outcome, Phase, Turn};
pub use view::{GameEvent, GameView};
