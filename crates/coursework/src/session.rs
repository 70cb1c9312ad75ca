//! Interactive tic-tac-toe sessions and the scripted demo.

use crate::config::GameSettings;
use crate::console::Console;
use anyhow::{Context, Result};
use coursework_tictactoe::{
    Game, InputError, Player, RoundResult, Symbol, TurnOutcome, parse_play_again,
};
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// What happened during one console session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Results of the rounds that finished, in order.
    pub rounds: Vec<RoundResult>,
    /// True if input ended before the players chose to stop.
    pub interrupted: bool,
}

impl SessionSummary {
    fn interrupted(rounds: Vec<RoundResult>) -> Self {
        Self {
            rounds,
            interrupted: true,
        }
    }
}

/// Builds the two players from settings and resolved names.
fn players(settings: &GameSettings, names: [String; 2]) -> Result<[Player; 2]> {
    let [first, second] = names;
    let x = Symbol::new(*settings.symbol_x()).context("Invalid symbol_x in config")?;
    let o = Symbol::new(*settings.symbol_o()).context("Invalid symbol_o in config")?;
    Ok([Player::new(first, x), Player::new(second, o)])
}

/// Resolves a player name from the command line, the config, or the console.
fn resolve_name<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    given: Option<String>,
    number: usize,
) -> Option<String> {
    let fallback = format!("Player {}", number);
    let name = match given {
        Some(name) => name,
        None => console.prompt(&format!("Enter Player {} name: ", number))?,
    };
    let name = name.trim();
    Some(if name.is_empty() {
        fallback
    } else {
        name.to_string()
    })
}

/// Runs rounds at the console until the players decline another one or input ends.
///
/// # Errors
///
/// Fails only if the configured symbols are unusable.
#[instrument(skip(console, settings))]
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &GameSettings,
    player_x: Option<String>,
    player_o: Option<String>,
) -> Result<SessionSummary> {
    console.say("Welcome to Tic-Tac-Toe!");
    console.say("Enter moves as row,col (e.g., 1,2 for row 1, column 2)");

    let given_x = player_x.or_else(|| settings.player_x().clone());
    let given_o = player_o.or_else(|| settings.player_o().clone());
    let Some(first) = resolve_name(console, given_x, 1) else {
        console.say("\nGame interrupted. Goodbye!");
        return Ok(SessionSummary::interrupted(Vec::new()));
    };
    let Some(second) = resolve_name(console, given_o, 2) else {
        console.say("\nGame interrupted. Goodbye!");
        return Ok(SessionSummary::interrupted(Vec::new()));
    };

    let [x, o] = players(settings, [first, second])?;
    console.say(&format!(
        "\n{} is {}, {} is {}",
        x.name(),
        x.symbol(),
        o.name(),
        o.symbol()
    ));
    console.say("Let's start the game!");
    let mut game = Game::new([x, o])?;

    let mut rounds = Vec::new();
    loop {
        match game.play_round(console) {
            Ok(result) => {
                console.say(&game.board().to_string());
                match &result {
                    RoundResult::Winner(player) => console.say(&format!(
                        "Congratulations {}! You won!",
                        player.name()
                    )),
                    RoundResult::Draw => console.say("It's a draw! Well played both players!"),
                }
                info!(?result, round = rounds.len() + 1, "Round finished");
                rounds.push(result);
            }
            Err(InputError::Interrupted) => {
                console.say("\nGame interrupted. Goodbye!");
                return Ok(SessionSummary::interrupted(rounds));
            }
        }

        loop {
            let Some(answer) = console.prompt("\nWould you like to play again? (y/n): ") else {
                console.say("\nGame interrupted. Goodbye!");
                return Ok(SessionSummary::interrupted(rounds));
            };
            match parse_play_again(&answer) {
                Some(true) => {
                    game.restart();
                    break;
                }
                Some(false) => {
                    console.say("Thanks for playing! Goodbye!");
                    return Ok(SessionSummary {
                        rounds,
                        interrupted: false,
                    });
                }
                None => console.say("Please enter 'y' for yes or 'n' for no."),
            }
        }
    }
}

/// Moves of the demo game: Alice (X) completes the middle row.
const DEMO_MOVES: [(i32, i32); 5] = [(1, 1), (0, 0), (1, 0), (0, 1), (1, 2)];

/// Plays the scripted demo game, printing the board after every move.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
#[instrument(skip(out))]
pub fn run_demo<W: Write>(out: &mut W) -> Result<RoundResult> {
    writeln!(out, "=== Tic-Tac-Toe Game Demo ===\n")?;
    let alice = Player::new("Alice", Symbol::new('X')?);
    let bob = Player::new("Bob", Symbol::new('O')?);
    writeln!(out, "Players added: Alice (X) and Bob (O)\n")?;

    let mut game = Game::new([alice, bob])?;
    writeln!(out, "Empty board:\n{}", game.board())?;

    for (row, col) in DEMO_MOVES {
        let mover = game.current_player().name().to_string();
        let outcome = game.submit_move(row, col)?;
        writeln!(out, "After {}'s move ({},{}):\n{}", mover, row, col, game.board())?;
        match outcome {
            TurnOutcome::Won(symbol) => {
                let name = game.player_with(symbol).map(Player::name).unwrap_or("Nobody");
                writeln!(out, "{} wins with 3 in a row!", name)?;
                writeln!(out, "\n=== Demo Complete ===")?;
                return Ok(RoundResult::Winner(game.current_player().clone()));
            }
            TurnOutcome::Draw => {
                writeln!(out, "It's a draw!")?;
                return Ok(RoundResult::Draw);
            }
            TurnOutcome::Continue { .. } | TurnOutcome::Retry(_) => {}
        }
    }

    anyhow::bail!("Demo script ended before the round finished")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str, names: [Option<&str>; 2]) -> (SessionSummary, String) {
        let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());
        let [x, o] = names.map(|n| n.map(str::to_string));
        let summary = run_session(&mut console, &GameSettings::default(), x, o).unwrap();
        (summary, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn test_session_win_then_quit() {
        let input = "Alice\nBob\n0,0\n1,0\n0,1\n1,1\n0,2\nn\n";
        let (summary, out) = session(input, [None, None]);

        assert!(!summary.interrupted);
        assert_eq!(summary.rounds.len(), 1);
        assert!(matches!(&summary.rounds[0], RoundResult::Winner(p) if p.name() == "Alice"));
        assert!(out.contains("Alice is X, Bob is O"));
        assert!(out.contains("Congratulations Alice! You won!"));
        assert!(out.contains("Thanks for playing! Goodbye!"));
    }

    #[test]
    fn test_blank_names_fall_back() {
        let (summary, out) = session("\n   \n", [None, None]);
        assert!(summary.interrupted);
        assert!(out.contains("Player 1 is X, Player 2 is O"));
    }

    #[test]
    fn test_names_from_arguments_skip_prompt() {
        let (_, out) = session("", [Some("Ann"), Some("Ben")]);
        assert!(!out.contains("Enter Player 1 name"));
        assert!(out.contains("Ann is X, Ben is O"));
        assert!(out.contains("Game interrupted. Goodbye!"));
    }

    #[test]
    fn test_bad_input_and_replay() {
        let input = concat!(
            "hello\n", "0,0\n", "0,0\n", "9,9\n", "1,1\n", // X, then O retries twice
            "0,1\n", "0,2\n", "2,0\n", "1,0\n", "1,2\n", "2,1\n", "2,2\n", // draw
            "maybe\n", "y\n",
            "2,2\n", "1,1\n", // interrupted in round two
        );
        let (summary, out) = session(input, [Some("A"), Some("B")]);

        assert!(summary.interrupted);
        assert_eq!(summary.rounds, vec![RoundResult::Draw]);
        // Round two starts on an empty board, so 2,2 is accepted again.
        let round_two = out
            .rsplit_once("Would you like to play again?")
            .map(|(_, rest)| rest)
            .unwrap_or_default();
        assert!(round_two.contains("A (X), enter your move (row,col): "));
        assert!(round_two.contains("B (O), enter your move (row,col): "));
        assert!(!round_two.contains("Invalid move!"));
        assert!(round_two.contains("Game interrupted. Goodbye!"));
        assert!(out.contains("Invalid input! Please enter row,col (e.g., 1,2)"));
        assert_eq!(
            out.matches("Invalid move! Cell is already occupied or out of bounds.")
                .count(),
            2
        );
        assert!(out.contains("It's a draw! Well played both players!"));
        assert!(out.contains("Please enter 'y' for yes or 'n' for no."));
    }

    #[test]
    fn test_demo_alice_wins() {
        let mut out = Vec::new();
        let result = run_demo(&mut out).unwrap();
        assert!(matches!(result, RoundResult::Winner(p) if p.name() == "Alice"));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("After Bob's move (0,1):"));
        assert!(text.contains("Alice wins with 3 in a row!"));
    }
}
