use crate::board::Board;
use crate::types::{Mark, Outcome, WinningLine};

/// The 8 possible winning lines: 3 rows, 3 columns, 2 diagonals.
/// Enumeration order is fixed; the first completed line found decides
/// the winner when more than one line is complete.
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

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in LINES {
        let [a, b, c] = line;
        let mark = board.get(a);
        if mark != Mark::Empty && mark == board.get(b) && mark == board.get(c) {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}

pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_win(board) {
        return Outcome::Win(mark);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Undetermined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(cell, mark) in marks {
            board.set(cell, mark);
        }
        board
    }

    #[test]
    fn test_empty_board_is_undetermined() {
        assert_eq!(evaluate(&Board::new()), Outcome::Undetermined);
    }

    #[test]
    fn test_every_line_is_detected_for_both_marks() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let board = board_with(&[(line[0], mark), (line[1], mark), (line[2], mark)]);
                assert_eq!(evaluate(&board), Outcome::Win(mark), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_one_cell_short_of_a_line_is_undetermined() {
        let board = board_with(&[(0, Mark::X), (1, Mark::X)]);
        assert_eq!(evaluate(&board), Outcome::Undetermined);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_cells([
            Mark::X, Mark::X, Mark::O,
            Mark::O, Mark::O, Mark::X,
            Mark::X, Mark::O, Mark::X,
        ]);

        assert_eq!(check_win(&board), None);
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_with(&[(0, Mark::X), (1, Mark::O), (2, Mark::X)]);
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_winning_line_reports_cells() {
        let board = board_with(&[(2, Mark::O), (4, Mark::O), (6, Mark::O), (0, Mark::X), (1, Mark::X)]);

        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, Mark::O);
        assert_eq!(line.cells, [2, 4, 6]);
        assert!(line.contains(4));
        assert!(!line.contains(0));
    }

    #[test]
    fn test_first_line_in_enumeration_order_wins_ties() {
        // Two complete X lines at once; row [0,1,2] precedes column [0,3,6].
        let board = board_with(&[
            (0, Mark::X), (1, Mark::X), (2, Mark::X),
            (3, Mark::X), (6, Mark::X),
        ]);

        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.cells, [0, 1, 2]);
    }

    #[test]
    fn test_line_completed_by_last_empty_cell() {
        // Filling the single remaining cell of each line must flip the
        // outcome to a win for that mark.
        for line in LINES {
            let mut board = board_with(&[(line[0], Mark::O), (line[1], Mark::O)]);
            assert_eq!(evaluate(&board), Outcome::Undetermined);
            board.set(line[2], Mark::O);
            assert_eq!(evaluate(&board), Outcome::Win(Mark::O));
        }
    }
}
