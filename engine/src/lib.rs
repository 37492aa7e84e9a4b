pub mod board;
pub mod bot_controller;
pub mod config;
pub mod game_state;
pub mod logger;
pub mod session;
pub mod session_rng;
pub mod types;
pub mod win_detector;

pub use board::Board;
pub use session_rng::SessionRng;
pub use types::{GameStatus, Mark, Outcome, WinningLine};
