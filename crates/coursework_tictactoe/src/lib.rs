//! Console tic-tac-toe for two players.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid, validates and applies moves, detects a winner or a full board
//! - **Player**: name and symbol, pulls moves from an injected [`MoveSource`]
//! - **Game**: owns the board and both players, drives the turn state machine
//!
//! The state machine never loops on bad input by itself. [`Game::submit_move`]
//! answers every request with a [`TurnOutcome`], and a rejected move comes back
//! as [`TurnOutcome::Retry`] so the caller decides how to ask again.
//!
//! # Example
//!
//! ```
//! use coursework_tictactoe::{Game, Player, Symbol, TurnOutcome};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let x = Player::new("Alice", Symbol::new('X')?);
//! let o = Player::new("Bob", Symbol::new('O')?);
//! let mut game = Game::new([x, o])?;
//!
//! assert_eq!(game.submit_move(1, 1)?, TurnOutcome::Continue { next: 1 });
//! assert!(matches!(game.submit_move(1, 1)?, TurnOutcome::Retry(_)));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod input;
mod player;
mod rules;
mod types;

pub use action::{GameError, InputError, Move, MoveRejection};
pub use game::{Game, INVALID_MOVE_MESSAGE, Phase, RoundResult, TurnOutcome};
pub use input::{MoveParseError, parse_move, parse_play_again};
pub use player::{INVALID_INPUT_MESSAGE, MoveSource, Player, ScriptedMoves};
pub use rules::{check_winner, is_full};
pub use types::{BOARD_SIZE, Board, Cell, Symbol, SymbolError};
