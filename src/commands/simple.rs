//! Simple interactive CLI mode
//!
//! Text-based game without the TUI. Each line is either a command or a guess;
//! a guess may be prefixed with a position code (`RCM modric`) or goes to the
//! focused position.

use crate::core::NameGuess;
use crate::game::{GameActions, GameStore, GuessError};
use crate::lineup::PositionId;
use crate::output::display::{
    print_feedback, print_game_board, print_game_summary, print_match_list,
};
use std::io::{self, Write};

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Help,
    Board,
    Matches,
    SelectMatch(u32),
    Focus(PositionId),
    Guess {
        position: Option<PositionId>,
        text: String,
    },
    Reset,
    Quit,
}

/// What happened after applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Help,
    Board,
    Matches,
    MatchChanged(u32),
    Focused(PositionId),
    Scored(PositionId, NameGuess),
    Reset,
    Quit,
}

/// Parse one input line
///
/// # Errors
/// Returns a message for an empty line, a bad match id or an unknown position code.
pub fn parse_command(line: &str) -> Result<SimpleCommand, String> {
    let line = line.trim();
    let (head, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(h, r)| (h, r.trim()));

    let command = match head.to_ascii_lowercase().as_str() {
        "" => return Err("Type a guess or 'help'".to_string()),
        "help" | "h" | "?" => SimpleCommand::Help,
        "board" | "b" => SimpleCommand::Board,
        "matches" => SimpleCommand::Matches,
        "reset" | "r" => SimpleCommand::Reset,
        "quit" | "q" | "exit" => SimpleCommand::Quit,
        "match" | "m" => {
            let id = rest
                .parse()
                .map_err(|_| format!("'{rest}' is not a match id"))?;
            SimpleCommand::SelectMatch(id)
        }
        "pos" | "p" => SimpleCommand::Focus(rest.parse()?),
        _ => match head.parse::<PositionId>() {
            Ok(position) if !rest.is_empty() => SimpleCommand::Guess {
                position: Some(position),
                text: rest.to_string(),
            },
            _ => SimpleCommand::Guess {
                position: None,
                text: line.to_string(),
            },
        },
    };
    Ok(command)
}

/// Apply a command to the store
///
/// # Errors
/// Returns a message when the command could not be applied; the store is
/// unchanged in that case.
pub fn apply_command(store: &mut GameStore, command: SimpleCommand) -> Result<Reply, String> {
    match command {
        SimpleCommand::Help => Ok(Reply::Help),
        SimpleCommand::Board => Ok(Reply::Board),
        SimpleCommand::Matches => Ok(Reply::Matches),
        SimpleCommand::Quit => Ok(Reply::Quit),
        SimpleCommand::Reset => {
            store.reset_game();
            Ok(Reply::Reset)
        }
        SimpleCommand::SelectMatch(id) => {
            if store.catalog().find(id).is_none() {
                return Err(format!("No match with id {id}"));
            }
            store.select_match(id);
            Ok(Reply::MatchChanged(id))
        }
        SimpleCommand::Focus(position) => {
            if store.state().position(position).is_none() {
                return Err(GuessError::UnknownPosition(position).to_string());
            }
            store.set_active_position(Some(position));
            Ok(Reply::Focused(position))
        }
        SimpleCommand::Guess { position, text } => {
            let position = position
                .or_else(|| store.state().active_position_id())
                .ok_or("Pick a position first: 'pos <code>' or '<code> <name>'")?;
            let guess = store
                .submit_guess(position, &text)
                .map_err(|e| e.to_string())?;
            let playable = store.state().position(position).is_some_and(|p| p.can_guess())
                && !store.state().is_finished();
            if playable {
                store.set_active_position(Some(position));
            } else if store.state().active_position_id() == Some(position) {
                store.set_active_position(None);
            }
            Ok(Reply::Scored(position, guess))
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(store: &mut GameStore) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Lineup Wordle - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();
    print_game_board(store.state());

    loop {
        let prompt = store
            .state()
            .active_position_id()
            .map_or_else(|| "Guess".to_string(), |p| format!("Guess [{p}]"));
        let line = get_user_input(&prompt)?;

        let reply = match parse_command(&line).and_then(|c| apply_command(store, c)) {
            Ok(reply) => reply,
            Err(message) => {
                println!("❌ {message}\n");
                continue;
            }
        };

        match reply {
            Reply::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Reply::Help => print_help(),
            Reply::Matches => {
                print_match_list(store.catalog(), store.state().current_match().match_id);
            }
            Reply::Focused(position) => {
                let lives = store
                    .state()
                    .position(position)
                    .map_or(0, |p| p.lives_remaining());
                println!("🎯 {position} selected, {lives} lives left\n");
            }
            Reply::Scored(position, guess) => {
                print_feedback(position, &guess);
                if store.state().is_finished() {
                    print_game_summary(store.state());
                    println!("Type 'reset' to replay or 'match <id>' for another match.\n");
                }
            }
            Reply::Board | Reply::Reset | Reply::MatchChanged(_) => {
                print_game_board(store.state());
            }
        }
    }
}

fn print_help() {
    println!("Guess the starting eleven, one name per position.");
    println!("  <CODE> <name>   guess a name for a position, e.g. 'RCM modric'");
    println!("  pos <CODE>      focus a position, then type names directly");
    println!("  board           show the pitch");
    println!("  matches         list matches, 'match <id>' to switch");
    println!("  reset           start this match over");
    println!("  quit            leave\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::StoreConfig;
    use crate::lineup::loader::embedded_catalog;

    fn store() -> GameStore {
        GameStore::new(embedded_catalog().unwrap(), StoreConfig::new()).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("help"), Ok(SimpleCommand::Help));
        assert_eq!(parse_command(" Q "), Ok(SimpleCommand::Quit));
        assert_eq!(parse_command("match 2"), Ok(SimpleCommand::SelectMatch(2)));
        assert_eq!(parse_command("pos rcm"), Ok(SimpleCommand::Focus(PositionId::Rcm)));
        assert!(parse_command("match two").is_err());
        assert!(parse_command("pos XYZ").is_err());
        assert!(parse_command("   ").is_err());
    }

    #[test]
    fn parses_guesses_with_and_without_position() {
        assert_eq!(
            parse_command("LW vinicius jr"),
            Ok(SimpleCommand::Guess {
                position: Some(PositionId::Lw),
                text: "vinicius jr".to_string(),
            })
        );
        assert_eq!(
            parse_command("rui costa"),
            Ok(SimpleCommand::Guess {
                position: None,
                text: "rui costa".to_string(),
            })
        );
        // A bare position code is a guess, not a focus
        assert_eq!(
            parse_command("st"),
            Ok(SimpleCommand::Guess {
                position: None,
                text: "st".to_string(),
            })
        );
    }

    #[test]
    fn guess_needs_a_position() {
        let mut store = store();
        let command = parse_command("modric").unwrap();
        assert!(apply_command(&mut store, command).is_err());

        apply_command(&mut store, SimpleCommand::Focus(PositionId::Rcm)).unwrap();
        let reply = apply_command(&mut store, parse_command("modric").unwrap()).unwrap();
        match reply {
            Reply::Scored(position, guess) => {
                assert_eq!(position, PositionId::Rcm);
                assert!(guess.is_correct());
            }
            other => panic!("unexpected reply {other:?}"),
        }
    }

    #[test]
    fn guess_focus_follows_playable_position() {
        let mut store = store();
        apply_command(&mut store, parse_command("LB mandy").unwrap()).unwrap();
        assert_eq!(store.state().active_position_id(), Some(PositionId::Lb));

        apply_command(&mut store, parse_command("mendy").unwrap()).unwrap();
        assert!(store.state().position(PositionId::Lb).unwrap().is_solved());
        assert!(store.state().active_position_id().is_none());
    }

    #[test]
    fn refused_guess_is_reported() {
        let mut store = store();
        let err = apply_command(&mut store, parse_command("RCM kroos").unwrap()).unwrap_err();
        assert!(err.contains("6 letters"));
    }

    #[test]
    fn match_and_reset_commands() {
        let mut store = store();
        assert!(apply_command(&mut store, SimpleCommand::SelectMatch(42)).is_err());
        assert_eq!(
            apply_command(&mut store, SimpleCommand::SelectMatch(3)),
            Ok(Reply::MatchChanged(3))
        );
        assert_eq!(store.state().current_match().match_id, 3);

        apply_command(&mut store, parse_command("LM giggs").unwrap()).unwrap();
        apply_command(&mut store, SimpleCommand::Reset).unwrap();
        assert!(store.state().position(PositionId::Lm).unwrap().guesses().is_empty());
    }

    #[test]
    fn focus_on_missing_position_fails() {
        let mut store = store();
        assert!(apply_command(&mut store, SimpleCommand::Focus(PositionId::Cam)).is_err());
    }
}
