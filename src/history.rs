use crate::tic_tac_toe::Board;

/// One board snapshot per ply, starting from the empty board.
///
/// `current` indexes the snapshot being shown. Appending from an earlier
/// position drops everything after it before pushing the new board, so
/// the log can back a redo-style replay later without changes here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveHistory {
    snapshots: Vec<Board>,
    current: usize,
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, board: Board) {
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(board);
        self.current = self.snapshots.len() - 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn current_move(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Board {
        &self.snapshots[self.current]
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    #[cfg(test)]
    fn rewind_to(&mut self, ply: usize) {
        assert!(ply < self.snapshots.len());
        self.current = ply;
    }
}
