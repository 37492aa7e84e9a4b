use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, Notify};

use crate::board::Board;
use crate::bot_controller::{BotInput, BotType, DEFAULT_RANDOM_MOVE_PROBABILITY, calculate_move};
use crate::game_state::GameState;
use crate::log;
use crate::session_rng::SessionRng;
use crate::types::{GameStatus, Mark, WinningLine};
use crate::win_detector::check_win_with_line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    HumanWin,
    AiWin,
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingHumanMove,
    AwaitingAiMove,
    GameOver(GameResult),
}

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub human_mark: Mark,
    pub bot_type: BotType,
    pub random_move_probability: f64,
    pub ai_think_delay: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
            bot_type: BotType::Balanced,
            random_move_probability: DEFAULT_RANDOM_MOVE_PROBABILITY,
            ai_think_delay: Duration::from_millis(500),
        }
    }
}

/// Read-only view of the session handed to the front-end after every
/// transition.
#[derive(Debug, Clone, Copy)]
pub struct StateSnapshot {
    pub board: Board,
    pub phase: SessionPhase,
    pub last_move: Option<usize>,
    pub human_mark: Mark,
    pub winning_line: Option<WinningLine>,
}

pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: StateSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, snapshot: StateSnapshot) -> impl Future<Output = ()> + Send;
}

/// One human-vs-bot game. The board is owned by the session; the
/// front-end only ever sees snapshots and feeds cell selections in
/// through `handle_human_move`.
#[derive(Clone)]
pub struct SessionState {
    pub settings: SessionSettings,
    pub game_state: Arc<Mutex<GameState>>,
    pub rng: Arc<Mutex<SessionRng>>,
    pub turn_notify: Arc<Notify>,
}

impl SessionState {
    pub fn create(settings: SessionSettings, seed: u64) -> Result<Self, String> {
        if !(0.0..=1.0).contains(&settings.random_move_probability) {
            return Err(format!(
                "Random move probability must be within [0, 1], got {}",
                settings.random_move_probability
            ));
        }

        let game_state = GameState::new(settings.human_mark)?;

        Ok(Self {
            settings,
            game_state: Arc::new(Mutex::new(game_state)),
            rng: Arc::new(Mutex::new(SessionRng::new(seed))),
            turn_notify: Arc::new(Notify::new()),
        })
    }

    /// Applies a human cell selection. Selections of occupied cells,
    /// selections out of turn and selections after the game is over
    /// are ignored, as clicking a dead cell in the UI should be.
    pub async fn handle_human_move(&self, cell: usize) {
        let mut game_state = self.game_state.lock().await;
        let mark = game_state.human_mark;

        if let Err(reason) = game_state.place_mark(mark, cell) {
            log!("Ignoring move to cell {}: {}", cell, reason);
            return;
        }
        drop(game_state);

        self.turn_notify.notify_one();
    }

    /// Restarts the game: all cells empty, X to move. Wakes the game
    /// loop if it is waiting on the human, without leaving a stored
    /// permit behind when nothing is waiting.
    pub async fn reset(&self) {
        let mut game_state = self.game_state.lock().await;
        game_state.reset();
        drop(game_state);

        self.turn_notify.notify_waiters();
    }

    pub async fn snapshot(&self) -> StateSnapshot {
        let game_state = self.game_state.lock().await;
        build_snapshot(&game_state)
    }
}

fn build_snapshot(game_state: &GameState) -> StateSnapshot {
    let winning_line = match game_state.status {
        GameStatus::XWon | GameStatus::OWon => check_win_with_line(&game_state.board),
        _ => None,
    };

    StateSnapshot {
        board: game_state.board,
        phase: phase_of(game_state),
        last_move: game_state.last_move,
        human_mark: game_state.human_mark,
        winning_line,
    }
}

fn phase_of(game_state: &GameState) -> SessionPhase {
    match game_state.status {
        GameStatus::InProgress => {
            if game_state.current_mark == game_state.human_mark {
                SessionPhase::AwaitingHumanMove
            } else {
                SessionPhase::AwaitingAiMove
            }
        }
        GameStatus::Draw => SessionPhase::GameOver(GameResult::Draw),
        GameStatus::XWon | GameStatus::OWon => {
            let human_won = game_state.winner_mark() == Some(game_state.human_mark);
            SessionPhase::GameOver(if human_won {
                GameResult::HumanWin
            } else {
                GameResult::AiWin
            })
        }
    }
}

pub struct TicTacToeSession;

impl TicTacToeSession {
    /// Drives the game to completion: broadcasts a snapshot after every
    /// transition, waits for human moves, and plays the bot's turn
    /// after the configured thinking delay.
    pub async fn run(state: SessionState, broadcaster: impl GameBroadcaster) -> GameResult {
        loop {
            let snapshot = state.snapshot().await;
            broadcaster.broadcast_state(snapshot).await;

            match snapshot.phase {
                SessionPhase::GameOver(result) => {
                    log!("Game over: {:?}", result);
                    broadcaster.broadcast_game_over(snapshot).await;
                    return result;
                }
                SessionPhase::AwaitingAiMove => play_ai_turn(&state).await,
                SessionPhase::AwaitingHumanMove => state.turn_notify.notified().await,
            }
        }
    }
}

async fn play_ai_turn(state: &SessionState) {
    // The delay is presentation only; the search itself completes
    // synchronously.
    tokio::time::sleep(state.settings.ai_think_delay).await;

    let (input, ai_mark) = {
        let game_state = state.game_state.lock().await;
        if !game_state.is_ai_turn() {
            // A reset slipped in while the bot was "thinking".
            return;
        }
        (
            BotInput::from_game_state(&game_state, state.settings.random_move_probability),
            game_state.ai_mark,
        )
    };

    let cell = {
        let mut rng = state.rng.lock().await;
        calculate_move(state.settings.bot_type, &input, &mut rng)
    };

    let mut game_state = state.game_state.lock().await;
    if let Err(reason) = game_state.place_mark(ai_mark, cell) {
        log!("Bot move to cell {} rejected: {}", cell, reason);
    }
}
