//! Win and draw detection, plus the window enumeration shared with the
//! evaluator.

use super::board::{Board, Cell};
use super::player::Player;

/// Length of a winning line.
pub const CONNECT: usize = 4;

/// Horizontal, vertical, `\` diagonal, `/` diagonal.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

impl Board {
    fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.cell(row as usize, col as usize)
    }

    fn window(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<[Cell; CONNECT]> {
        let mut cells = [Cell::Empty; CONNECT];
        for (i, slot) in cells.iter_mut().enumerate() {
            let step = i as isize;
            *slot = self.cell_at(row as isize + dr * step, col as isize + dc * step)?;
        }
        Some(cells)
    }

    /// Every run of four cells on the board along all four axes. Windows that
    /// would leave the grid are skipped.
    pub fn windows(&self) -> impl Iterator<Item = [Cell; CONNECT]> + '_ {
        AXES.iter().flat_map(move |&(dr, dc)| {
            (0..self.rows()).flat_map(move |row| {
                (0..self.cols()).filter_map(move |col| self.window(row, col, dr, dc))
            })
        })
    }

    /// Full-board scan: does `player` own any complete window?
    pub fn has_four_in_a_row(&self, player: Player) -> bool {
        let cell = player.to_cell();
        self.windows()
            .any(|window| window.iter().all(|&c| c == cell))
    }

    /// Consecutive `player` cells starting at (row, col) and walking (dr, dc).
    /// The origin itself is counted.
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, player: Player) -> usize {
        let cell = player.to_cell();
        let mut r = row as isize;
        let mut c = col as isize;
        let mut count = 0;
        while self.cell_at(r, c) == Some(cell) {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    /// Incremental check around the piece at (row, col): true if it is part
    /// of a line of four `player` pieces. False when the cell is off the
    /// board or does not hold `player`.
    pub fn wins_from(&self, row: usize, col: usize, player: Player) -> bool {
        AXES.iter().any(|&(dr, dc)| {
            let forward = self.run_length(row, col, dr, dc, player);
            let backward = self.run_length(row, col, -dr, -dc, player);
            (forward + backward).saturating_sub(1) >= CONNECT
        })
    }

    /// The player owning a line of four, if any.
    pub fn winner(&self) -> Option<Player> {
        [Player::One, Player::Two]
            .into_iter()
            .find(|&p| self.has_four_in_a_row(p))
    }

    /// Full board with no line of four for either side.
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }
}
