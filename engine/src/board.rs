use crate::types::Mark;

pub const CELL_COUNT: usize = 9;

/// A 3x3 board stored as a flat array, indexed 0..9 row by row.
///
/// Cells are only ever written by placing a mark into an empty cell or
/// by clearing a cell back to empty; marks are never overwritten. The
/// search engine relies on `set`/`clear` pairs to speculate on a move
/// and restore the exact prior state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, cell: usize) -> Mark {
        self.cells[cell]
    }

    pub fn set(&mut self, cell: usize, mark: Mark) {
        debug_assert!(self.cells[cell] == Mark::Empty, "cell {} is already marked", cell);
        debug_assert!(mark != Mark::Empty, "use clear() to empty a cell");
        self.cells[cell] = mark;
    }

    pub fn clear(&mut self, cell: usize) {
        self.cells[cell] = Mark::Empty;
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    pub fn is_valid_move(&self, cell: usize) -> bool {
        cell < CELL_COUNT && self.cells[cell] == Mark::Empty
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn available_moves(&self) -> Vec<usize> {
        let mut moves = Vec::new();
        for (cell, &mark) in self.cells.iter().enumerate() {
            if mark == Mark::Empty {
                moves.push(cell);
            }
        }
        moves
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(!board.is_full());
        assert_eq!(board.available_moves().len(), CELL_COUNT);
    }

    #[test]
    fn test_set_then_clear_restores_board_exactly() {
        let mut board = Board::new();
        board.set(4, Mark::X);
        board.set(0, Mark::O);

        let before = board;
        for cell in board.available_moves() {
            board.set(cell, Mark::O);
            board.clear(cell);
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_available_moves_in_index_order() {
        let mut board = Board::new();
        board.set(1, Mark::X);
        board.set(5, Mark::O);

        assert_eq!(board.available_moves(), vec![0, 2, 3, 4, 6, 7, 8]);
    }

    #[test]
    fn test_is_valid_move_rejects_occupied_and_out_of_bounds() {
        let mut board = Board::new();
        board.set(3, Mark::X);

        assert!(!board.is_valid_move(3));
        assert!(!board.is_valid_move(CELL_COUNT));
        assert!(board.is_valid_move(0));
    }

    #[test]
    fn test_reset_clears_all_cells() {
        let mut board = Board::new();
        board.set(0, Mark::X);
        board.set(8, Mark::O);
        board.reset();

        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board = Board::from_cells([
            Mark::X, Mark::O, Mark::X,
            Mark::X, Mark::O, Mark::O,
            Mark::O, Mark::X, Mark::X,
        ]);

        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }
}
