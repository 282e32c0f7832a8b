use std::fmt;

use log::debug;

use crate::placement::{PlacementQueue, VANISH_AFTER};
use crate::tic_tac_toe::{check_index, Board, Player, Spot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Winner(Player),
    /// Only reachable if all nine cells fill without a line, which the
    /// six-piece cap rules out.
    Draw,
}

impl GameResult {
    pub fn of(board: &Board) -> Self {
        match board.check_winner() {
            Some(player) => GameResult::Winner(player),
            None if board.is_full() => GameResult::Draw,
            None => GameResult::InProgress,
        }
    }

    pub fn is_over(self) -> bool {
        self != GameResult::InProgress
    }
}

/// Why a move was not applied. State is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Occupied(usize),
    Concluded(GameResult),
    AwaitingBot,
    NotBotTurn,
    NoBotMove,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Occupied(index) => write!(f, "cell {} is already filled", index),
            Rejection::Concluded(result) => write!(f, "game is over ({:?})", result),
            Rejection::AwaitingBot => write!(f, "waiting for the bot to move"),
            Rejection::NotBotTurn => write!(f, "it is not the bot's turn"),
            Rejection::NoBotMove => write!(f, "bot has no move to make"),
        }
    }
}

impl std::error::Error for Rejection {}

/// What a single applied placement did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub index: usize,
    pub player: Player,
    pub evicted: Option<usize>,
}

/// Board, placement order and ply count of one game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    queue: PlacementQueue,
    ply: usize,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn queue(&self) -> &PlacementQueue {
        &self.queue
    }

    /// Total placements made so far, including vanished ones.
    pub fn ply(&self) -> usize {
        self.ply
    }

    pub fn current_player(&self) -> Player {
        Player::for_ply(self.ply)
    }

    pub fn result(&self) -> GameResult {
        GameResult::of(&self.board)
    }

    /// The cell that the next placement will clear, once the cap is active.
    pub fn next_to_vanish(&self) -> Option<usize> {
        if self.ply >= VANISH_AFTER {
            self.queue.oldest()
        } else {
            None
        }
    }

    /// Places the current player's mark at `index`.
    ///
    /// This is the only way the board changes. The vanishing rule is
    /// applied before the new mark is written.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a cell on the board.
    pub fn apply_move(&mut self, index: usize) -> Result<Placement, Rejection> {
        check_index(index);
        let result = self.result();
        if result.is_over() {
            return Err(Rejection::Concluded(result));
        }
        if !self.board.is_empty(index) {
            return Err(Rejection::Occupied(index));
        }

        let player = self.current_player();
        let evicted = self.queue.record(&mut self.board, index, self.ply);
        self.board.set(index, Spot::Filled(player));
        debug!("ply {}: {} takes {}", self.ply, player, index);
        self.ply += 1;

        Ok(Placement {
            index,
            player,
            evicted,
        })
    }

    /// Returns the state after playing `index`, leaving `self` untouched.
    pub fn play(&self, index: usize) -> Result<(GameState, Placement), Rejection> {
        let mut next = self.clone();
        let placement = next.apply_move(index)?;
        Ok((next, placement))
    }
}
