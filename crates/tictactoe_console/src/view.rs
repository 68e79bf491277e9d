//! Console rendering of engine notifications.

use std::io::Write;
use tictactoe_engine::{Board, GameEvent, GameView, Mark, Outcome, Phase, Position};
use tracing::warn;

/// Draws the game as text, or emits one JSON object per event.
///
/// Keeps its own copy of the board, rebuilt from cell notifications.
#[derive(Debug)]
pub struct ConsoleView<W> {
    out: W,
    json: bool,
    board: Board,
}

impl<W: Write> ConsoleView<W> {
    /// Creates a view writing to `out`.
    pub fn new(out: W, json: bool) -> Self {
        Self {
            out,
            json,
            board: Board::new(),
        }
    }

    /// Shows a message to the player.
    pub fn message(&mut self, text: &str) {
        if self.json {
            let value = serde_json::json!({ "event": "message", "text": text });
            self.write_line(&value.to_string());
        } else {
            self.write_line(text);
        }
    }

    /// Redraws the board; in JSON mode emits the nine cells instead.
    pub fn draw_board(&mut self) {
        if self.json {
            let value = serde_json::json!({ "event": "board", "cells": self.board.cells() });
            self.write_line(&value.to_string());
        } else {
            let grid = self.board().display();
            self.write_line(&grid);
        }
    }

    /// The board as this view has seen it.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The underlying writer.
    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }

    fn emit(&mut self, event: GameEvent) {
        match serde_json::to_string(&event) {
            Ok(line) => self.write_line(&line),
            Err(e) => warn!(error = %e, ?event, "Failed to serialize event"),
        }
    }

    fn write_line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            warn!(error = %e, "Failed to write to console");
        }
    }
}

impl<W: Write> GameView for ConsoleView<W> {
    fn on_reset(&mut self, generation: u64) {
        self.board = Board::new();
        if self.json {
            self.emit(GameEvent::Reset { generation });
            return;
        }
        self.write_line("");
        self.write_line(&format!(
            "New game. You are {}, the computer is {}.",
            Mark::Player.symbol(),
            Mark::Ai.symbol()
        ));
        self.draw_board();
    }

    fn on_cell_changed(&mut self, position: Position, mark: Mark) {
        self.board.set(position, mark);
        if self.json {
            self.emit(GameEvent::CellChanged { position, mark });
            return;
        }
        let who = match mark {
            Mark::Player => "You play",
            Mark::Ai => "Computer plays",
            Mark::Empty => "Cleared",
        };
        self.write_line(&format!("{} {}.", who, position));
        self.draw_board();
    }

    fn on_turn_changed(&mut self, phase: Phase) {
        if self.json {
            self.emit(GameEvent::TurnChanged { phase });
            return;
        }
        match phase {
            Phase::PlayerTurn => self.write_line("Your move:"),
            Phase::AiThinking => self.write_line("Computer is thinking..."),
            Phase::Ended(_) => {}
        }
    }

    fn on_game_ended(&mut self, outcome: Outcome) {
        if self.json {
            self.emit(GameEvent::GameEnded { outcome });
            return;
        }
        match outcome.winner() {
            Some(mark) => self.write_line(&format!("WIN: {} ({})", outcome, mark.symbol())),
            None => self.write_line("A DRAW!!!"),
        }
        self.write_line("Type `reset` to play again.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(view: &ConsoleView<Vec<u8>>) -> String {
        String::from_utf8(view.output().clone()).unwrap()
    }

    #[test]
    fn test_text_mode_tracks_board() {
        let mut view = ConsoleView::new(Vec::new(), false);
        view.on_reset(1);
        view.on_cell_changed(Position::Center, Mark::Player);
        view.on_turn_changed(Phase::AiThinking);
        view.on_cell_changed(Position::TopLeft, Mark::Ai);

        assert_eq!(view.board().get(Position::Center), Mark::Player);
        assert_eq!(view.board().get(Position::TopLeft), Mark::Ai);
        let out = text(&view);
        assert!(out.contains("You play Center."));
        assert!(out.contains("Computer is thinking..."));
        assert!(out.contains("X|2|3\n-+-+-\n4|O|6"));
    }

    #[test]
    fn test_text_mode_outcomes() {
        let mut view = ConsoleView::new(Vec::new(), false);
        view.on_game_ended(Outcome::Draw);
        view.on_game_ended(Outcome::AiWin);
        let out = text(&view);
        assert!(out.contains("A DRAW!!!"));
        assert!(out.contains("WIN: Computer wins (X)"));
    }

    #[test]
    fn test_reset_clears_mirror() {
        let mut view = ConsoleView::new(Vec::new(), true);
        view.on_cell_changed(Position::Center, Mark::Player);
        view.on_reset(2);
        assert_eq!(*view.board(), Board::new());
    }

    #[test]
    fn test_json_mode_board_lists_cells() {
        let mut view = ConsoleView::new(Vec::new(), true);
        view.on_cell_changed(Position::Center, Mark::Player);
        view.on_cell_changed(Position::TopLeft, Mark::Ai);
        view.draw_board();

        let out = text(&view);
        let last: serde_json::Value = serde_json::from_str(out.lines().last().unwrap()).unwrap();
        assert_eq!(last["event"], "board");
        let cells = last["cells"].as_array().unwrap();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], "Ai");
        assert_eq!(cells[4], "Player");
        assert_eq!(cells[8], "Empty");
    }

    #[test]
    fn test_json_mode_one_object_per_line() {
        let mut view = ConsoleView::new(Vec::new(), true);
        view.on_reset(1);
        view.on_cell_changed(Position::Center, Mark::Player);
        view.on_turn_changed(Phase::Ended(Outcome::PlayerWin));
        view.message("hello");

        let out = text(&view);
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0]["event"], "reset");
        assert_eq!(lines[1]["position"], "Center");
        assert_eq!(lines[2]["phase"]["Ended"], "PlayerWin");
        assert_eq!(lines[3]["text"], "hello");
    }
}
