use serde::{Deserialize, Serialize};

use crate::board::{Board, CELL_COUNT};
use crate::game_state::GameState;
use crate::session_rng::SessionRng;
use crate::types::{Mark, Outcome};
use crate::win_detector::evaluate;

/// Chance that the balanced bot ignores the search result and plays a
/// random empty cell instead. Applies only when no immediate win or
/// block was found.
pub const DEFAULT_RANDOM_MOVE_PROBABILITY: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotType {
    /// Uniformly random legal moves.
    Random,
    /// Win check, block check, then exhaustive minimax. Never loses.
    Minimax,
    /// Like `Minimax`, but the search result is occasionally replaced
    /// by a random move so games do not always play out the same way.
    Balanced,
}

pub struct BotInput {
    pub board: Board,
    pub ai_mark: Mark,
    pub random_move_probability: f64,
}

impl BotInput {
    pub fn from_game_state(state: &GameState, random_move_probability: f64) -> Self {
        Self {
            board: state.board,
            ai_mark: state.ai_mark,
            random_move_probability,
        }
    }
}

/// Picks the bot's move. The returned cell is always empty.
///
/// # Panics
///
/// Panics if the board is full. The session state machine must check
/// the outcome after every placement and never ask for a move in a
/// finished game.
pub fn calculate_move(bot_type: BotType, input: &BotInput, rng: &mut SessionRng) -> usize {
    let available_moves = input.board.available_moves();
    assert!(
        !available_moves.is_empty(),
        "calculate_move called with no empty cells"
    );

    match bot_type {
        BotType::Random => available_moves[rng.random_range(0..available_moves.len())],
        BotType::Minimax => calculate_policy_move(input, 0.0, rng),
        BotType::Balanced => calculate_policy_move(input, input.random_move_probability, rng),
    }
}

fn calculate_policy_move(
    input: &BotInput,
    random_move_probability: f64,
    rng: &mut SessionRng,
) -> usize {
    let ai_mark = input.ai_mark;
    let opponent_mark = ai_mark.opponent().expect("bot mark must be X or O");
    let mut board = input.board;

    if let Some(cell) = find_winning_move(&mut board, ai_mark) {
        return cell;
    }

    if let Some(cell) = find_winning_move(&mut board, opponent_mark) {
        return cell;
    }

    if rng.chance(random_move_probability) {
        let available_moves = board.available_moves();
        return available_moves[rng.random_range(0..available_moves.len())];
    }

    find_best_move(&mut board, ai_mark).expect("non-full board has a best move")
}

/// First empty cell, in index order, whose placement completes a line
/// for `mark`. Used both for the bot's own winning move and, with the
/// opponent's mark, for the blocking move.
pub fn find_winning_move(board: &mut Board, mark: Mark) -> Option<usize> {
    for cell in 0..CELL_COUNT {
        if board.get(cell) != Mark::Empty {
            continue;
        }

        board.set(cell, mark);
        let wins = evaluate(board) == Outcome::Win(mark);
        board.clear(cell);

        if wins {
            return Some(cell);
        }
    }
    None
}

/// Game-theoretically optimal move for `ai_mark`, found by scoring
/// every empty cell with an exhaustive search. Only strictly greater
/// scores replace the current best, so ties go to the lowest index.
pub fn find_best_move(board: &mut Board, ai_mark: Mark) -> Option<usize> {
    let mut best_score = i32::MIN;
    let mut best_move = None;

    for cell in 0..CELL_COUNT {
        if board.get(cell) != Mark::Empty {
            continue;
        }

        board.set(cell, ai_mark);
        let score = minimax(board, false, ai_mark);
        board.clear(cell);

        if score > best_score {
            best_score = score;
            best_move = Some(cell);
        }
    }

    best_move
}

/// Exhaustive minimax over every legal continuation: +1 if `ai_mark`
/// wins, -1 if the opponent wins, 0 for a draw. No pruning and no
/// depth limit; the tree is at most 9 plies deep. Every speculative
/// placement is undone before the next sibling, so the board is left
/// exactly as it was.
pub fn minimax(board: &mut Board, is_maximizing: bool, ai_mark: Mark) -> i32 {
    match evaluate(board) {
        Outcome::Win(mark) => return if mark == ai_mark { 1 } else { -1 },
        Outcome::Draw => return 0,
        Outcome::Undetermined => {}
    }

    if is_maximizing {
        let mut best_score = i32::MIN;
        for cell in 0..CELL_COUNT {
            if board.get(cell) != Mark::Empty {
                continue;
            }
            board.set(cell, ai_mark);
            let score = minimax(board, false, ai_mark);
            board.clear(cell);
            best_score = best_score.max(score);
        }
        best_score
    } else {
        let opponent_mark = ai_mark.opponent().expect("bot mark must be X or O");
        let mut best_score = i32::MAX;
        for cell in 0..CELL_COUNT {
            if board.get(cell) != Mark::Empty {
                continue;
            }
            board.set(cell, opponent_mark);
            let score = minimax(board, true, ai_mark);
            board.clear(cell);
            best_score = best_score.min(score);
        }
        best_score
    }
}
