//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board), kept apart from board
//! storage so the game loop and the board share one definition of a win.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_winner;
