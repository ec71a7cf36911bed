use std::fmt;

use crate::error::{BoardError, MoveError};

use super::player::Player;
use super::rules::CONNECT;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Largest number of rows or columns a board may have.
pub const MAX_DIMENSION: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// The player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }

    fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        }
    }

    fn from_glyph(c: char) -> Result<Cell, BoardError> {
        match c {
            '.' => Ok(Cell::Empty),
            'X' => Ok(Cell::PlayerOne),
            'O' => Ok(Cell::PlayerTwo),
            other => Err(BoardError::UnknownCell(other)),
        }
    }
}

/// Where a dropped piece came to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// A rows x cols grid filled by gravity. Row 0 is the top.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Both dimensions must allow a line of four
    /// and neither may exceed `MAX_DIMENSION`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows < CONNECT || cols < CONNECT {
            return Err(BoardError::TooSmall { rows, cols });
        }
        if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
            return Err(BoardError::TooLarge { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    /// The classic 6x7 board.
    pub fn standard() -> Self {
        Board {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cells: vec![Cell::Empty; DEFAULT_ROWS * DEFAULT_COLS],
        }
    }

    /// Parse a board from one string per row, top row first, using the same
    /// glyphs as `Display` (`.`, `X`, `O`). Whitespace inside a row is ignored.
    pub fn from_rows(lines: &[&str]) -> Result<Self, BoardError> {
        let grid: Vec<Vec<char>> = lines
            .iter()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect())
            .collect();
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        if grid.iter().any(|row| row.len() != cols) {
            return Err(BoardError::RaggedRows);
        }

        let mut board = Board::new(rows, cols)?;
        for (row, glyphs) in grid.iter().enumerate() {
            for (col, &c) in glyphs.iter().enumerate() {
                let idx = board.idx(row, col);
                board.cells[idx] = Cell::from_glyph(c)?;
            }
        }

        // Every occupied cell must sit on another piece or the floor.
        for col in 0..cols {
            let mut occupied_above: Option<usize> = None;
            for row in 0..rows {
                match board.get(row, col) {
                    Cell::Empty => {
                        if let Some(r) = occupied_above {
                            return Err(BoardError::FloatingPiece { row: r, col });
                        }
                    }
                    _ => occupied_above = Some(row),
                }
            }
        }

        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get the cell at a specific position.
    /// Panics if the position is outside the board; see [`Board::cell`].
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.idx(row, col)]
    }

    /// Checked variant of [`Board::get`].
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.get(row, col))
        } else {
            None
        }
    }

    /// True iff `col` is on the board and its top cell is empty.
    pub fn is_column_open(&self, col: usize) -> bool {
        col < self.cols && self.get(0, col) == Cell::Empty
    }

    /// Open columns in ascending order.
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| self.is_column_open(col))
            .collect()
    }

    /// Drop a piece in a column, returns where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<Position, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                cols: self.cols,
            });
        }

        // Find the lowest empty row in this column
        let row = (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
            .ok_or(MoveError::ColumnFull { column: col })?;

        let idx = self.idx(row, col);
        self.cells[idx] = player.to_cell();
        Ok(Position { row, col })
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| !self.is_column_open(col))
    }

    /// Number of cells holding `player`'s piece.
    pub fn count(&self, player: Player) -> usize {
        let cell = player.to_cell();
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Empty every cell, keeping the dimensions.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: Vec<String> = (0..self.cols)
                .map(|col| self.get(row, col).glyph().to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let footer: Vec<String> = (0..self.cols).map(|col| (col % 10).to_string()).collect();
        write!(f, "{}", footer.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_gravity(board: &Board) {
        for col in 0..board.cols() {
            let mut seen_piece = false;
            for row in 0..board.rows() {
                match board.get(row, col) {
                    Cell::Empty => assert!(
                        !seen_piece,
                        "gap under a piece in column {col}:\n{board}"
                    ),
                    _ => seen_piece = true,
                }
            }
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(6, 7).unwrap();
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.valid_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_board_too_small() {
        assert_eq!(
            Board::new(3, 7),
            Err(BoardError::TooSmall { rows: 3, cols: 7 })
        );
        assert_eq!(
            Board::new(6, 2),
            Err(BoardError::TooSmall { rows: 6, cols: 2 })
        );
        assert!(Board::new(4, 4).is_ok());
    }

    #[test]
    fn test_board_too_large() {
        assert!(Board::new(MAX_DIMENSION, MAX_DIMENSION).is_ok());
        assert_eq!(
            Board::new(MAX_DIMENSION + 1, 7),
            Err(BoardError::TooLarge {
                rows: MAX_DIMENSION + 1,
                cols: 7
            })
        );
        assert_eq!(
            Board::new(6, usize::MAX),
            Err(BoardError::TooLarge {
                rows: 6,
                cols: usize::MAX
            })
        );
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::standard();

        // Drop first piece in column 3
        let pos = board.drop_piece(3, Player::One).unwrap();
        assert_eq!(pos, Position { row: 5, col: 3 }); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::PlayerOne);

        // Drop second piece in same column
        let pos = board.drop_piece(3, Player::Two).unwrap();
        assert_eq!(pos.row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::PlayerTwo);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::standard();

        // Fill column 0
        for _ in 0..6 {
            board.drop_piece(0, Player::One).unwrap();
        }

        assert!(!board.is_column_open(0));
        let before = board.clone();
        assert_eq!(
            board.drop_piece(0, Player::Two),
            Err(MoveError::ColumnFull { column: 0 })
        );
        assert_eq!(board, before, "failed drop must not touch the board");
        assert_eq!(board.valid_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::standard();
        assert_eq!(
            board.drop_piece(7, Player::One),
            Err(MoveError::InvalidColumn { column: 7, cols: 7 })
        );
        assert!(!board.is_column_open(7));
        assert_eq!(board.cell(0, 7), None);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(4, 5).unwrap();
        for col in 0..5 {
            for _ in 0..4 {
                board.drop_piece(col, Player::One).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.valid_columns().is_empty());
        assert_eq!(board.count(Player::One), 20);

        board.reset();
        assert_eq!(board, Board::new(4, 5).unwrap());
    }

    #[test]
    fn test_non_square_board_drops() {
        let mut board = Board::new(5, 9).unwrap();
        let pos = board.drop_piece(8, Player::Two).unwrap();
        assert_eq!(pos, Position { row: 4, col: 8 });
        assert_eq!(board.cell(4, 8), Some(Cell::PlayerTwo));
    }

    #[test]
    fn test_gravity_holds_over_random_games() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut board = Board::new(rng.random_range(4..=8), rng.random_range(4..=9)).unwrap();
            let mut player = Player::One;
            loop {
                // Random columns, including full ones which must be rejected.
                let col = rng.random_range(0..board.cols());
                let was_open = board.is_column_open(col);
                let result = board.drop_piece(col, player);
                assert_eq!(result.is_ok(), was_open);
                assert_gravity(&board);
                if board.is_full() {
                    break;
                }
                player = player.other();
            }
        }
    }

    #[test]
    fn test_display_and_parse_agree() {
        let mut board = Board::standard();
        board.drop_piece(3, Player::One).unwrap();
        board.drop_piece(3, Player::Two).unwrap();
        board.drop_piece(0, Player::One).unwrap();

        let text = board.to_string();
        let mut lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.pop(), Some("0 1 2 3 4 5 6"));
        assert_eq!(lines[4], ". . . O . . .");
        assert_eq!(lines[5], "X . . X . . .");
        assert_eq!(Board::from_rows(&lines).unwrap(), board);
    }

    #[test]
    fn test_parse_rejects_floating_piece() {
        let err = Board::from_rows(&["....", "..X.", "....", "...."]).unwrap_err();
        assert_eq!(err, BoardError::FloatingPiece { row: 1, col: 2 });
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            Board::from_rows(&["....", "...", "....", "...."]),
            Err(BoardError::RaggedRows)
        );
        assert_eq!(
            Board::from_rows(&["....", "....", "....", "..Z."]),
            Err(BoardError::UnknownCell('Z'))
        );
        assert_eq!(
            Board::from_rows(&["....", "....", "...."]),
            Err(BoardError::TooSmall { rows: 3, cols: 4 })
        );
    }
}
