use std::collections::VecDeque;

use log::debug;

use crate::tic_tac_toe::{check_index, Board, Spot};

/// Live pieces allowed on the board before the oldest starts vanishing.
pub const VANISH_AFTER: usize = 6;

/// Occupied cells in the order they were filled, oldest first.
///
/// The queue is shared by both players: eviction always takes the
/// globally oldest piece, whichever mark it carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementQueue {
    order: VecDeque<usize>,
}

impl PlacementQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a placement at `index`, made after `ply` earlier placements.
    ///
    /// Once `ply` reaches [`VANISH_AFTER`] the front of the queue is popped
    /// and that cell is cleared on `board`. The cleared index is returned.
    /// The caller writes the new mark after this returns.
    pub fn record(&mut self, board: &mut Board, index: usize, ply: usize) -> Option<usize> {
        check_index(index);
        let evicted = if ply >= VANISH_AFTER {
            self.order.pop_front()
        } else {
            None
        };
        if let Some(old) = evicted {
            debug!("ply {}: cell {} vanishes", ply, old);
            board.set(old, Spot::Empty);
        }
        self.order.push_back(index);
        evicted
    }

    /// The cell the next placement will clear, if the cap is active.
    pub fn oldest(&self) -> Option<usize> {
        self.order.front().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tic_tac_toe::Player;

    #[test]
    fn test_no_eviction_before_cap() {
        let mut board = Board::new();
        let mut queue = PlacementQueue::new();
        for (ply, index) in [4, 0, 8, 2, 6, 1].into_iter().enumerate() {
            assert_eq!(queue.record(&mut board, index, ply), None);
            board.set(index, Spot::Filled(Player::for_ply(ply)));
        }
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![4, 0, 8, 2, 6, 1]);
        assert_eq!(queue.len(), board.occupied_count());
    }

    #[test]
    fn test_evicts_globally_oldest() {
        let mut board = Board::new();
        let mut queue = PlacementQueue::new();
        for (ply, index) in [0, 1, 2, 3, 4, 5].into_iter().enumerate() {
            queue.record(&mut board, index, ply);
            board.set(index, Spot::Filled(Player::for_ply(ply)));
        }

        assert_eq!(queue.record(&mut board, 8, 6), Some(0));
        board.set(8, Spot::Filled(Player::X));
        assert_eq!(board.get(0), Spot::Empty);

        assert_eq!(board.get(1), Spot::Filled(Player::O));
        assert_eq!(queue.record(&mut board, 7, 7), Some(1));
        board.set(7, Spot::Filled(Player::O));
        assert_eq!(board.get(1), Spot::Empty);

        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![2, 3, 4, 5, 8, 7]);
        assert_eq!(board.occupied_count(), VANISH_AFTER);
        assert_eq!(queue.oldest(), Some(2));
    }
}
