use serde::{Deserialize, Serialize};
use tictactoe_engine::bot_controller::{BotType, DEFAULT_RANDOM_MOVE_PROBABILITY};
use tictactoe_engine::config::{FileContentConfigProvider, Validate, load_config};
use tictactoe_engine::types::Mark;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub human_mark: Mark,
    pub bot_type: BotType,
    pub random_move_probability: f64,
    pub ai_think_delay_ms: u64,
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
            bot_type: BotType::Balanced,
            random_move_probability: DEFAULT_RANDOM_MOVE_PROBABILITY,
            ai_think_delay_ms: 500,
            seed: None,
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), String> {
        if self.human_mark == Mark::Empty {
            return Err("human_mark must be x or o".to_string());
        }
        if !(0.0..=1.0).contains(&self.random_move_probability) {
            return Err(format!(
                "random_move_probability must be within [0, 1], got {}",
                self.random_move_probability
            ));
        }
        Ok(())
    }
}

pub fn load_app_config(path: &str) -> Result<AppConfig, String> {
    load_config(&FileContentConfigProvider::new(path.to_string()))
}
