use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::bot::Bot;
use crate::game::{GameResult, GameState, Placement, Rejection};
use crate::history::MoveHistory;
use crate::tic_tac_toe::{Board, Player};

/// Snapshot handed back to the frontend after an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    pub ply: usize,
    pub result: GameResult,
    /// The move that was requested.
    pub placement: Placement,
    /// The bot's reply, when one was played right after.
    pub reply: Option<Placement>,
}

impl MoveOutcome {
    /// Cell cleared by the requested move, if any.
    pub fn evicted(&self) -> Option<usize> {
        self.placement.evicted
    }
}

/// Owns one game: its current state, the move history and, in bot mode,
/// the opponent and its random source.
///
/// Every accepted move builds a new [`GameState`] and swaps it in, so a
/// rejected move never leaves a half-applied state behind.
pub struct GameController<R = ThreadRng> {
    state: GameState,
    history: MoveHistory,
    bot: Option<Bot>,
    rng: R,
}

impl GameController<ThreadRng> {
    pub fn new(bot_mode: bool) -> Self {
        Self::with_rng(bot_mode, rand::thread_rng())
    }
}

impl<R: Rng> GameController<R> {
    pub fn with_rng(bot_mode: bool, rng: R) -> Self {
        Self {
            state: GameState::new(),
            history: MoveHistory::new(),
            bot: bot_mode.then(Bot::default),
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn ply(&self) -> usize {
        self.state.ply()
    }

    pub fn result(&self) -> GameResult {
        self.state.result()
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn is_bot_mode(&self) -> bool {
        self.bot.is_some()
    }

    pub fn is_bot_turn(&self) -> bool {
        matches!(self.bot, Some(bot) if bot.player() == self.state.current_player())
    }

    pub fn status(&self) -> String {
        match self.result() {
            GameResult::Winner(player) => format!("Winner: {}", player),
            GameResult::Draw => "Draw".to_string(),
            GameResult::InProgress => format!("Next player: {}", self.state.current_player()),
        }
    }

    /// Plays `index` for the human whose turn it is.
    ///
    /// Returns `None` and changes nothing when the move is rejected. In bot
    /// mode the bot's reply is applied before this returns.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than 8.
    pub fn player_move(&mut self, index: usize) -> Option<MoveOutcome> {
        self.try_player_move(index)
            .map_err(|rejection| debug!("move at {} rejected: {}", index, rejection))
            .ok()
    }

    pub fn try_player_move(&mut self, index: usize) -> Result<MoveOutcome, Rejection> {
        if self.is_bot_turn() {
            return Err(Rejection::AwaitingBot);
        }
        let placement = self.commit(index)?;
        let reply = if self.is_bot_turn() && !self.result().is_over() {
            self.try_bot_move().ok()
        } else {
            None
        };
        Ok(self.outcome(placement, reply))
    }

    /// Lets the bot move. A no-op unless it is the bot's turn in a game
    /// still in progress.
    pub fn bot_turn(&mut self) -> Option<MoveOutcome> {
        match self.try_bot_move() {
            Ok(placement) => Some(self.outcome(placement, None)),
            Err(rejection) => {
                debug!("bot turn rejected: {}", rejection);
                None
            }
        }
    }

    /// Starts over with an empty board. The finished game is discarded.
    pub fn play_again(&mut self) -> &GameState {
        info!("new game after {} plies ({:?})", self.ply(), self.result());
        self.state = GameState::new();
        self.history.reset();
        &self.state
    }

    fn try_bot_move(&mut self) -> Result<Placement, Rejection> {
        let bot = match self.bot {
            Some(bot) if self.is_bot_turn() => bot,
            _ => return Err(Rejection::NotBotTurn),
        };
        let result = self.result();
        if result.is_over() {
            return Err(Rejection::Concluded(result));
        }
        let index = bot
            .select_move(self.state.board(), &mut self.rng)
            .ok_or(Rejection::NoBotMove)?;
        self.commit(index)
    }

    fn commit(&mut self, index: usize) -> Result<Placement, Rejection> {
        let (next, placement) = self.state.play(index)?;
        self.state = next;
        self.history.append(*self.state.board());
        if let GameResult::Winner(player) = self.result() {
            info!("{} wins at ply {}", player, self.ply());
        }
        Ok(placement)
    }

    fn outcome(&self, placement: Placement, reply: Option<Placement>) -> MoveOutcome {
        MoveOutcome {
            board: *self.state.board(),
            ply: self.ply(),
            result: self.result(),
            placement,
            reply,
        }
    }
}

impl Default for GameController<ThreadRng> {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Which player a human controls in the given mode; `None` means both.
pub fn human_player(bot_mode: bool) -> Option<Player> {
    bot_mode.then(|| Bot::default().player().other())
}
