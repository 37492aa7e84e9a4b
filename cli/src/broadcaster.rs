use tictactoe_engine::session::{GameBroadcaster, StateSnapshot};

use crate::render;

/// Renders session snapshots to the terminal. The stdout grid is the
/// whole UI; log lines go to stderr via the logger.
#[derive(Clone)]
pub struct TerminalBroadcaster;

impl GameBroadcaster for TerminalBroadcaster {
    async fn broadcast_state(&self, snapshot: StateSnapshot) {
        render::draw_board(&snapshot);
    }

    async fn broadcast_game_over(&self, snapshot: StateSnapshot) {
        render::draw_game_over(&snapshot);
    }
}
