use log::trace;
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::tic_tac_toe::{Board, Player, Spot, LINES};

/// Greedy one-ply opponent: take a win, else block, else play at random.
///
/// No lookahead past the current move, so forks go unnoticed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bot {
    player: Player,
}

impl Default for Bot {
    fn default() -> Self {
        Self::new(Player::O)
    }
}

impl Bot {
    pub fn new(player: Player) -> Self {
        Self { player }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Picks a cell for the bot on `board`.
    ///
    /// Returns `None` when no cell is empty or the opponent already holds a
    /// line; callers are expected to have checked the game result first.
    pub fn select_move<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<usize> {
        if board.check_winner() == Some(self.player.other()) {
            return None;
        }
        if let Some(index) = completing_cell(board, self.player) {
            trace!("bot {} completes a line at {}", self.player, index);
            return Some(index);
        }
        if let Some(index) = completing_cell(board, self.player.other()) {
            trace!("bot {} blocks at {}", self.player, index);
            return Some(index);
        }
        let index = board.empty_cells().choose(rng);
        trace!("bot {} falls back to random cell {:?}", self.player, index);
        index
    }
}

/// First empty cell, in `LINES` order, that would give `player` three in a row.
pub fn completing_cell(board: &Board, player: Player) -> Option<usize> {
    let mine = Spot::Filled(player);
    LINES.iter().find_map(|line| {
        let owned = line.iter().filter(|&&i| board.get(i) == mine).count();
        let open = line.iter().copied().find(|&i| board.get(i) == Spot::Empty);
        match open {
            Some(index) if owned == 2 => Some(index),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tic_tac_toe::board_from;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_takes_win_over_block() {
        // O holds 0 and 1; X threatens column 2-5-8
        let board = board_from("OO. ..X ..X");
        assert_eq!(Bot::default().select_move(&board, &mut rng()), Some(2));
    }

    #[test]
    fn test_blocks_when_no_win() {
        let board = board_from("X.. X.. ..O");
        assert_eq!(Bot::default().select_move(&board, &mut rng()), Some(6));
    }

    #[test]
    fn test_fills_gap_in_middle_of_line() {
        let board = board_from("X.X .O. ...");
        assert_eq!(Bot::default().select_move(&board, &mut rng()), Some(1));
    }

    #[test]
    fn test_random_fallback_picks_empty_cell() {
        let board = board_from("X.. .O. ..X");
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let index = Bot::default().select_move(&board, &mut rng).unwrap();
            assert!(board.is_empty(index), "seed {} chose occupied cell {}", seed, index);
        }
    }

    #[test]
    fn test_random_fallback_is_reproducible() {
        let board = board_from("X.. ... ...");
        let first = Bot::default().select_move(&board, &mut StdRng::seed_from_u64(42));
        let second = Bot::default().select_move(&board, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_refuses_after_opponent_won() {
        let board = board_from("XXX OO. ...");
        assert_eq!(Bot::default().select_move(&board, &mut rng()), None);
    }

    #[test]
    fn test_no_move_on_full_board() {
        let board = board_from("XOX XOO OXX");
        assert_eq!(Bot::default().select_move(&board, &mut rng()), None);
    }

    #[test]
    fn test_bot_as_x() {
        let board = board_from("OO. XX. ...");
        assert_eq!(Bot::new(Player::X).select_move(&board, &mut rng()), Some(5));
    }
}
