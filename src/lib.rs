//! Tic-tac-toe where pieces vanish: once six marks have been placed, every
//! new placement clears the oldest piece still on the board.

pub mod bot;
pub mod controller;
pub mod game;
pub mod history;
pub mod placement;
pub mod tic_tac_toe;

pub use bot::Bot;
pub use controller::{GameController, MoveOutcome};
pub use game::{GameResult, GameState, Placement, Rejection};
pub use history::MoveHistory;
pub use placement::{PlacementQueue, VANISH_AFTER};
pub use tic_tac_toe::{check_winner, Board, Player, Spot, LINES};
