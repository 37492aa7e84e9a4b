use crate::board::{Board, CELL_COUNT};
use crate::types::{GameStatus, Mark, Outcome};
use crate::win_detector::evaluate;

/// One game between a human and the bot. X always opens, matching the
/// classic convention; which side the human plays is chosen at
/// construction.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub human_mark: Mark,
    pub ai_mark: Mark,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
}

impl GameState {
    pub fn new(human_mark: Mark) -> Result<Self, String> {
        let ai_mark = human_mark
            .opponent()
            .ok_or_else(|| "Human mark must be X or O".to_string())?;

        Ok(Self {
            board: Board::new(),
            human_mark,
            ai_mark,
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        })
    }

    pub fn place_mark(&mut self, mark: Mark, cell: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err("Not your turn".to_string());
        }

        if cell >= CELL_COUNT {
            return Err(format!("Cell {} is out of bounds", cell));
        }

        if !self.board.is_valid_move(cell) {
            return Err("Cell is already marked".to_string());
        }

        self.board.set(cell, mark);
        self.last_move = Some(cell);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }

    pub fn is_human_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.human_mark
    }

    pub fn is_ai_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.ai_mark
    }

    pub fn winner_mark(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    fn switch_turn(&mut self) {
        if self.current_mark == Mark::X {
            self.current_mark = Mark::O;
        } else {
            self.current_mark = Mark::X;
        }
    }

    fn check_game_over(&mut self) {
        match evaluate(&self.board) {
            Outcome::Win(Mark::X) => self.status = GameStatus::XWon,
            Outcome::Win(Mark::O) => self.status = GameStatus::OWon,
            Outcome::Win(Mark::Empty) => unreachable!(),
            Outcome::Draw => self.status = GameStatus::Draw,
            Outcome::Undetermined => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_with_x() {
        let state = GameState::new(Mark::X).unwrap();
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.status, GameStatus::InProgress);
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_human_playing_o_waits_for_ai_opening() {
        let state = GameState::new(Mark::O).unwrap();
        assert_eq!(state.ai_mark, Mark::X);
        assert!(state.is_ai_turn());
    }

    #[test]
    fn test_empty_human_mark_is_rejected() {
        assert!(GameState::new(Mark::Empty).is_err());
    }

    #[test]
    fn test_place_mark_switches_turn() {
        let mut state = GameState::new(Mark::X).unwrap();
        state.place_mark(Mark::X, 4).unwrap();

        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.last_move, Some(4));
        assert!(state.is_ai_turn());
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_mutation() {
        let mut state = GameState::new(Mark::X).unwrap();
        state.place_mark(Mark::X, 4).unwrap();

        let before = state.board;
        assert!(state.place_mark(Mark::O, 4).is_err());
        assert_eq!(state.board, before);
        assert_eq!(state.current_mark, Mark::O);
    }

    #[test]
    fn test_out_of_turn_move_is_rejected() {
        let mut state = GameState::new(Mark::X).unwrap();
        assert!(state.place_mark(Mark::O, 0).is_err());
    }

    #[test]
    fn test_out_of_bounds_move_is_rejected() {
        let mut state = GameState::new(Mark::X).unwrap();
        assert!(state.place_mark(Mark::X, CELL_COUNT).is_err());
    }

    #[test]
    fn test_win_ends_the_game_and_blocks_further_moves() {
        let mut state = GameState::new(Mark::X).unwrap();
        for (mark, cell) in [
            (Mark::X, 0),
            (Mark::O, 3),
            (Mark::X, 1),
            (Mark::O, 4),
            (Mark::X, 2),
        ] {
            state.place_mark(mark, cell).unwrap();
        }

        assert_eq!(state.status, GameStatus::XWon);
        assert_eq!(state.winner_mark(), Some(Mark::X));
        assert!(state.place_mark(Mark::O, 5).is_err());
    }

    #[test]
    fn test_full_board_without_winner_is_a_draw() {
        let mut state = GameState::new(Mark::X).unwrap();
        // X X O / O O X / X O X, played in a legal order.
        for (mark, cell) in [
            (Mark::X, 0),
            (Mark::O, 2),
            (Mark::X, 1),
            (Mark::O, 3),
            (Mark::X, 5),
            (Mark::O, 4),
            (Mark::X, 6),
            (Mark::O, 7),
            (Mark::X, 8),
        ] {
            state.place_mark(mark, cell).unwrap();
        }

        assert_eq!(state.status, GameStatus::Draw);
        assert_eq!(state.winner_mark(), None);
    }

    #[test]
    fn test_reset_restores_starting_position() {
        let mut state = GameState::new(Mark::O).unwrap();
        state.place_mark(Mark::X, 0).unwrap();
        state.place_mark(Mark::O, 4).unwrap();

        state.reset();

        assert_eq!(state.board, Board::new());
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.last_move, None);
        assert_eq!(state.human_mark, Mark::O);
    }
}
