use std::fmt;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// The eight winning triples: rows, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Whose turn it is at a given ply. X moves on even plies.
    pub fn for_ply(ply: usize) -> Player {
        if ply % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spot {
    #[default]
    Empty,
    Filled(Player),
}

/// Row-major 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    spots: [Spot; CELLS],
}

pub(crate) fn check_index(index: usize) {
    assert!(index < CELLS, "cell index {} out of range 0..{}", index, CELLS);
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Spot {
        check_index(index);
        self.spots[index]
    }

    pub(crate) fn set(&mut self, index: usize, spot: Spot) {
        check_index(index);
        self.spots[index] = spot;
    }

    pub fn is_empty(&self, index: usize) -> bool {
        self.get(index) == Spot::Empty
    }

    pub fn spots(&self) -> &[Spot; CELLS] {
        &self.spots
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELLS).filter(|&i| self.spots[i] == Spot::Empty)
    }

    pub fn occupied_count(&self) -> usize {
        self.spots.iter().filter(|s| **s != Spot::Empty).count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count() == CELLS
    }

    // Check if there's a winner
    pub fn check_winner(&self) -> Option<Player> {
        check_winner(self)
    }
}

/// Returns the player holding the first complete line, in `LINES` order.
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        if let Spot::Filled(player) = board.spots[a] {
            if board.spots[b] == Spot::Filled(player) && board.spots[c] == Spot::Filled(player) {
                return Some(player);
            }
        }
    }
    None
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.spots.chunks(3) {
            for spot in row {
                let symbol = match spot {
                    Spot::Empty => ".",
                    Spot::Filled(Player::X) => "X",
                    Spot::Filled(Player::O) => "O",
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn board_from(cells: &str) -> Board {
    let mut board = Board::new();
    for (i, c) in cells.chars().filter(|c| !c.is_whitespace()).enumerate() {
        let spot = match c {
            'X' => Spot::Filled(Player::X),
            'O' => Spot::Filled(Player::O),
            _ => Spot::Empty,
        };
        board.set(i, spot);
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let board = Board::new();
        assert_eq!(board.spots(), &[Spot::Empty; CELLS]);
        assert_eq!(board.empty_cells().count(), 9);
        assert_eq!(Player::for_ply(0), Player::X);
        assert_eq!(Player::for_ply(1), Player::O);
        assert_eq!(Player::for_ply(6), Player::X);
    }

    #[test]
    fn test_check_winner() {
        assert_eq!(Board::new().check_winner(), None);

        let board = board_from("X.. .X. ..X");
        assert_eq!(board.check_winner(), Some(Player::X));

        let board = board_from("..O .O. O..");
        assert_eq!(board.check_winner(), Some(Player::O));

        let board = board_from("O.. O.. O..");
        assert_eq!(board.check_winner(), Some(Player::O));

        let board = board_from("XO. .XO O..");
        assert_eq!(board.check_winner(), None);

        let board = board_from("XXO OOX XOX");
        assert_eq!(board.check_winner(), None);
    }

    #[test]
    fn test_line_order_does_not_matter() {
        let boards = [
            board_from("XXX OO. ..."),
            board_from("X.. XO. XO."),
            board_from("O.X .OX X.O"),
            board_from("XO. OX. ..."),
        ];
        for board in boards {
            let expected = board.check_winner();
            let mut reversed = LINES;
            reversed.reverse();
            let found = reversed.iter().find_map(|&[a, b, c]| match board.get(a) {
                Spot::Filled(p) if board.get(b) == Spot::Filled(p) && board.get(c) == Spot::Filled(p) => Some(p),
                _ => None,
            });
            assert_eq!(found, expected);
        }
    }

    #[test]
    fn test_display() {
        let board = board_from("X.. .O. ...");
        assert_eq!(board.to_string(), "X . . \n. O . \n. . . \n");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_index_panics() {
        Board::new().get(9);
    }
}
