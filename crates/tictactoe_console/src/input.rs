//! Parsing of console commands.

use tictactoe_engine::Position;

/// A line typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark.
    Place(Position),
    /// Start a new game.
    Reset,
    /// Redraw the board.
    Board,
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Help text shown on start and on `help`.
pub const HELP: &str = "\
Commands:
  1-9            place your mark (numbers as shown on the board)
  <label>        place by name, e.g. `center` or `top-left`
  reset, r       start a new game
  board, b       redraw the board
  help, h        show this help
  quit, q        leave";

impl Command {
    /// Parses one input line. Returns `None` for blank lines.
    ///
    /// # Errors
    ///
    /// Returns a message for the player when the line is not a command.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let input = line.trim();
        if input.is_empty() {
            return Ok(None);
        }

        let command = match input.to_lowercase().as_str() {
            "reset" | "r" | "new" => Command::Reset,
            "board" | "b" => Command::Board,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => {
                if let Ok(number) = other.parse::<usize>() {
                    // Board shows cells 1-9.
                    let position = number
                        .checked_sub(1)
                        .and_then(Position::from_index)
                        .ok_or_else(|| format!("No cell {}; pick 1-9", number))?;
                    Command::Place(position)
                } else {
                    let position = Position::from_label(other)
                        .ok_or_else(|| format!("Unknown command '{}'; type help", input))?;
                    Command::Place(position)
                }
            }
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_one_based() {
        assert_eq!(
            Command::parse("1"),
            Ok(Some(Command::Place(Position::TopLeft)))
        );
        assert_eq!(
            Command::parse(" 9 "),
            Ok(Some(Command::Place(Position::BottomRight)))
        );
        assert!(Command::parse("0").is_err());
        assert!(Command::parse("10").is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            Command::parse("Center"),
            Ok(Some(Command::Place(Position::Center)))
        );
        assert_eq!(
            Command::parse("bottom left"),
            Ok(Some(Command::Place(Position::BottomLeft)))
        );
    }

    #[test]
    fn test_keywords() {
        assert_eq!(Command::parse("r"), Ok(Some(Command::Reset)));
        assert_eq!(Command::parse("QUIT"), Ok(Some(Command::Quit)));
        assert_eq!(Command::parse("b"), Ok(Some(Command::Board)));
        assert_eq!(Command::parse("?"), Ok(Some(Command::Help)));
        assert_eq!(Command::parse("   "), Ok(None));
        assert!(Command::parse("castle").is_err());
    }
}
