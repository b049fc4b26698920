use std::io::{self, BufRead};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GUICommand {
    NewGame(Option<String>),   // new [players]
    Show,                      // show
    Moves(String),             // moves <pawn>
    Move(String, String),      // move <pawn> <square>
    Go,                        // go
    Undo,                      // undo
    Eval,                      // eval
    Perft(String),             // perft <depth>
    Save(String),              // save <file>
    Load(String),              // load <file>
    SetOption(String, String), // setoption name <name> value <value>
    Help,                      // help
    Quit,                      // quit the program

    Invalid(String), // placeholder for invalid commands so we can pattern match
}

impl GUICommand {
    /// Reads one command from stdin, `None` once the input is closed.
    pub fn receive() -> Option<GUICommand> {
        let mut input = String::new();

        match io::stdin().lock().read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(Self::parse(&input)),
            Err(e) => {
                log::error!("failed to read command: {}", e);
                None
            }
        }
    }

    pub fn parse(input: &str) -> GUICommand {
        let parts = input.split_whitespace().collect::<Vec<_>>();

        match parts.as_slice() {
            ["new"] => GUICommand::NewGame(None),
            ["new", players] => GUICommand::NewGame(Some(players.to_string())),
            ["show"] | ["d"] => GUICommand::Show,
            ["moves", pawn] => GUICommand::Moves(pawn.to_string()),
            ["move", pawn, square] => GUICommand::Move(pawn.to_string(), square.to_string()),
            ["go"] => GUICommand::Go,
            ["undo"] => GUICommand::Undo,
            ["eval"] => GUICommand::Eval,
            ["perft", depth] => GUICommand::Perft(depth.to_string()),
            ["save", path] => GUICommand::Save(path.to_string()),
            ["load", path] => GUICommand::Load(path.to_string()),
            ["setoption", "name", name_and_rest @ ..] if !name_and_rest.is_empty() => {
                Self::parse_setoption(name_and_rest)
            }
            ["help"] => GUICommand::Help,
            ["quit"] | ["exit"] => GUICommand::Quit,
            _ => GUICommand::Invalid(input.trim().to_string()),
        }
    }

    fn parse_setoption(parts: &[&str]) -> GUICommand {
        // Everything before "value" is the option name, everything after it the value
        match parts.iter().position(|&part| part == "value") {
            Some(value_pos) => {
                let name = parts[..value_pos].join(" ");
                let value = parts[value_pos + 1..].join(" ");

                if !name.is_empty() && !value.is_empty() {
                    GUICommand::SetOption(name, value)
                } else {
                    GUICommand::Invalid(format!("setoption name {} value {}", name, value))
                }
            }
            None => GUICommand::Invalid(format!("setoption name {} without a value", parts.join(" "))),
        }
    }
}

pub const HELP: &str = "\
commands:
  new [rgyb]                     start a game with the given players (default all four)
  show                           print the board
  moves <pawn>                   list and highlight the moves of a pawn
  move <pawn> <square>           move a pawn, e.g. 'move 1 c3'
  go                             let the computer move for the player on turn
  undo                           take back the last move
  eval                           static and searched evaluation
  perft <depth>                  count move sequences
  save <file> / load <file>      store or restore the game as JSON
  setoption name <n> value <v>   Difficulty (easy|normal|hard), MoveTime (ms), Depth
  quit                           leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_game_commands() {
        assert_eq!(GUICommand::parse("new\n"), GUICommand::NewGame(None));
        assert_eq!(GUICommand::parse("new ry"), GUICommand::NewGame(Some("ry".to_string())));
        assert_eq!(
            GUICommand::parse("  move 1   c3 "),
            GUICommand::Move("1".to_string(), "c3".to_string())
        );
        assert_eq!(GUICommand::parse("moves 4"), GUICommand::Moves("4".to_string()));
        assert_eq!(GUICommand::parse("perft 3"), GUICommand::Perft("3".to_string()));
        assert_eq!(GUICommand::parse("quit"), GUICommand::Quit);
    }

    #[test]
    fn parses_multi_word_options() {
        assert_eq!(
            GUICommand::parse("setoption name Move Time value 250"),
            GUICommand::SetOption("Move Time".to_string(), "250".to_string())
        );
        assert!(matches!(
            GUICommand::parse("setoption name Difficulty"),
            GUICommand::Invalid(_)
        ));
    }

    #[test]
    fn unknown_input_is_invalid() {
        assert_eq!(GUICommand::parse("move 1"), GUICommand::Invalid("move 1".to_string()));
        assert_eq!(GUICommand::parse(""), GUICommand::Invalid(String::new()));
    }
}
