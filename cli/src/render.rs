use tictactoe_engine::board::CELL_COUNT;
use tictactoe_engine::session::{GameResult, SessionPhase, StateSnapshot};
use tictactoe_engine::types::Mark;

/// Draws the board with empty cells showing their index, so the player
/// can type the digit of the cell they want.
pub fn draw_board(snapshot: &StateSnapshot) {
    println!();
    for row in 0..3 {
        let mut line = String::new();
        for col in 0..3 {
            let cell = row * 3 + col;
            line.push(' ');
            line.push(cell_char(snapshot, cell));
            line.push(' ');
            if col < 2 {
                line.push('|');
            }
        }
        println!("{}", line);
        if row < 2 {
            println!("---+---+---");
        }
    }
    println!();
    println!("{}", status_text(snapshot));
}

fn cell_char(snapshot: &StateSnapshot, cell: usize) -> char {
    debug_assert!(cell < CELL_COUNT);
    match snapshot.board.get(cell) {
        Mark::Empty => char::from_digit(cell as u32, 10).unwrap_or('?'),
        mark => mark.as_char(),
    }
}

fn status_text(snapshot: &StateSnapshot) -> String {
    match snapshot.phase {
        SessionPhase::AwaitingHumanMove => {
            format!("It's your turn ({})", snapshot.human_mark.as_char())
        }
        SessionPhase::AwaitingAiMove => "AI is thinking...".to_string(),
        SessionPhase::GameOver(GameResult::HumanWin) => "You win!".to_string(),
        SessionPhase::GameOver(GameResult::AiWin) => "AI wins!".to_string(),
        SessionPhase::GameOver(GameResult::Draw) => "Draw!".to_string(),
    }
}

pub fn draw_game_over(snapshot: &StateSnapshot) {
    if let Some(line) = snapshot.winning_line {
        println!(
            "Winning line: {} across cells {}, {}, {}",
            line.mark.as_char(),
            line.cells[0],
            line.cells[1],
            line.cells[2]
        );
    }
    println!("Press r to play again or q to quit.");
}
