//! Turn state machine for a two-player round.
//!
//! ```text
//! AwaitingMove(i) --legal move--> AwaitingMove((i + 1) % 2)
//!                 --winning move--> Won(symbol)
//!                 --filling move--> Draw
//!                 --illegal move--> AwaitingMove(i)   (Retry)
//! ```

use super::{Board, GameError, InputError, Move, MoveRejection, MoveSource, Player, Symbol};
use tracing::{debug, info, instrument, warn};

/// Feedback sent to the source after a move the board refused.
pub const INVALID_MOVE_MESSAGE: &str = "Invalid move! Cell is already occupied or out of bounds.";

/// Where the round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the player at this index to move.
    AwaitingMove(usize),
    /// Round ended with a complete line of this symbol.
    Won(Symbol),
    /// Round ended with a full board and no line.
    Draw,
}

impl Phase {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Phase::AwaitingMove(_))
    }
}

/// Answer to a single move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Move applied, the player at `next` is up.
    Continue {
        /// Index of the player to move next.
        next: usize,
    },
    /// Move refused. The same player must supply another one.
    Retry(MoveRejection),
    /// Move applied and completed a line.
    Won(Symbol),
    /// Move applied and filled the board without a line.
    Draw,
}

/// How a finished round ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundResult {
    /// This player completed a line.
    Winner(Player),
    /// Board filled without a line.
    Draw,
}

/// Tic-tac-toe game engine: one board, two players, whose turn it is.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    turn: usize,
    phase: Phase,
    history: Vec<Move>,
}

impl Game {
    /// Creates a game with an empty board and the first player to move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DuplicateSymbol`] if both players use the same symbol.
    #[instrument(skip(players), fields(first = %players[0].name(), second = %players[1].name()))]
    pub fn new(players: [Player; 2]) -> Result<Self, GameError> {
        if players[0].symbol() == players[1].symbol() {
            warn!(symbol = %players[0].symbol(), "Players share a symbol");
            return Err(GameError::DuplicateSymbol(players[0].symbol()));
        }
        Ok(Self {
            board: Board::new(),
            players,
            turn: 0,
            phase: Phase::AwaitingMove(0),
            history: Vec::new(),
        })
    }

    /// Rebuilds a game by applying recorded `(row, col)` moves in order.
    ///
    /// Moves after the one that ends the round are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalReplay`] for a move the board refuses.
    #[instrument(skip(players))]
    pub fn replay(players: [Player; 2], moves: &[(i32, i32)]) -> Result<Self, GameError> {
        let mut game = Self::new(players)?;
        for (n, &(row, col)) in moves.iter().enumerate() {
            match game.submit_move(row, col)? {
                TurnOutcome::Retry(rejection) => {
                    return Err(GameError::IllegalReplay(n, rejection));
                }
                TurnOutcome::Won(_) | TurnOutcome::Draw => break,
                TurnOutcome::Continue { .. } => {}
            }
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players in turn order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Index of the player to move, or of the last mover once the round is over.
    pub fn current_index(&self) -> usize {
        self.turn
    }

    /// The player at [`Game::current_index`].
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    /// Returns the phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Moves applied this round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Looks up the player who marks with `symbol`.
    pub fn player_with(&self, symbol: Symbol) -> Option<&Player> {
        self.players.iter().find(|p| p.symbol() == symbol)
    }

    /// Applies a move for the current player.
    ///
    /// A move the board refuses comes back as [`TurnOutcome::Retry`] and
    /// leaves the turn where it was.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RoundOver`] once the round has ended.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn submit_move(&mut self, row: i32, col: i32) -> Result<TurnOutcome, GameError> {
        let Phase::AwaitingMove(index) = self.phase else {
            return Err(GameError::RoundOver);
        };
        let symbol = self.players[index].symbol();

        if !self.board.make_move(row, col, symbol) {
            let rejection = match self.board.cell(row, col) {
                None => MoveRejection::OutOfBounds(row, col),
                Some(_) => MoveRejection::Occupied(row, col),
            };
            debug!(%rejection, "Move refused");
            return Ok(TurnOutcome::Retry(rejection));
        }
        self.history.push(Move::new(row, col, symbol));

        if let Some(winner) = self.board.check_winner() {
            info!(%winner, moves = self.history.len(), "Round won");
            self.phase = Phase::Won(winner);
            return Ok(TurnOutcome::Won(winner));
        }

        if self.board.is_full() {
            info!("Round drawn");
            self.phase = Phase::Draw;
            return Ok(TurnOutcome::Draw);
        }

        let next = (index + 1) % self.players.len();
        self.turn = next;
        self.phase = Phase::AwaitingMove(next);
        debug!(next, "Turn passed");
        Ok(TurnOutcome::Continue { next })
    }

    /// Outcome matching a terminal phase.
    fn terminal_outcome(&self) -> Option<TurnOutcome> {
        match self.phase {
            Phase::AwaitingMove(_) => None,
            Phase::Won(symbol) => Some(TurnOutcome::Won(symbol)),
            Phase::Draw => Some(TurnOutcome::Draw),
        }
    }

    /// Plays one turn against `source`, asking again until the board accepts a move.
    ///
    /// Never returns [`TurnOutcome::Retry`]. On a finished round it
    /// returns the final outcome without reading input.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Interrupted`] when the source runs dry.
    #[instrument(skip(self, source), fields(player = %self.current_player().name()))]
    pub fn play_turn<S: MoveSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<TurnOutcome, InputError> {
        if let Some(outcome) = self.terminal_outcome() {
            return Ok(outcome);
        }
        source.show_board(&self.board);

        loop {
            let (row, col) = self.players[self.turn].get_move(source)?;
            match self.submit_move(row, col) {
                Ok(TurnOutcome::Retry(_)) => source.notify(INVALID_MOVE_MESSAGE),
                Ok(outcome) => return Ok(outcome),
                Err(e) => {
                    debug!(error = %e, "Round ended before the move");
                    if let Some(outcome) = self.terminal_outcome() {
                        return Ok(outcome);
                    }
                }
            }
        }
    }

    /// Plays turns until the round ends.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Interrupted`] when the source runs dry. The
    /// board keeps the moves made so far.
    #[instrument(skip(self, source))]
    pub fn play_round<S: MoveSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<RoundResult, InputError> {
        loop {
            match self.play_turn(source)? {
                TurnOutcome::Won(_) => {
                    return Ok(RoundResult::Winner(self.players[self.turn].clone()));
                }
                TurnOutcome::Draw => return Ok(RoundResult::Draw),
                TurnOutcome::Continue { .. } | TurnOutcome::Retry(_) => {}
            }
        }
    }

    /// Starts a new round with the same players: empty board, first player to move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting round");
        self.board = Board::new();
        self.turn = 0;
        self.phase = Phase::AwaitingMove(0);
        self.history.clear();
    }
}
