mod broadcaster;
mod config;
mod render;

use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use tictactoe_engine::board::CELL_COUNT;
use tictactoe_engine::bot_controller::BotType;
use tictactoe_engine::session::{SessionSettings, SessionState, TicTacToeSession};
use tictactoe_engine::session_rng::SessionRng;
use tictactoe_engine::{log, logger};

use broadcaster::TerminalBroadcaster;

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// Path to the YAML config file.
    #[arg(long, default_value = "tictactoe.yaml")]
    config: String,

    /// Fixed RNG seed, for reproducible games. Overrides the config.
    #[arg(long)]
    seed: Option<u64>,

    /// Bot type: random, minimax or balanced. Overrides the config.
    #[arg(long)]
    bot: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

enum Command {
    Place(usize),
    Restart,
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    match trimmed {
        "q" | "quit" => Command::Quit,
        "r" | "restart" => Command::Restart,
        _ => match trimmed.parse::<usize>() {
            Ok(cell) if cell < CELL_COUNT => Command::Place(cell),
            _ => Command::Unknown,
        },
    }
}

fn parse_bot_type(name: &str) -> Result<BotType, String> {
    match name.to_lowercase().as_str() {
        "random" => Ok(BotType::Random),
        "minimax" => Ok(BotType::Minimax),
        "balanced" => Ok(BotType::Balanced),
        other => Err(format!(
            "Unknown bot type '{}', expected random, minimax or balanced",
            other
        )),
    }
}

async fn read_input(tx: mpsc::UnboundedSender<String>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        if tx.send(line).is_err() {
            break;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = config::load_app_config(&args.config)?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(bot) = &args.bot {
        config.bot_type = parse_bot_type(bot)?;
    }

    let seed = config.seed.unwrap_or_else(|| SessionRng::from_random().seed());
    let settings = SessionSettings {
        human_mark: config.human_mark,
        bot_type: config.bot_type,
        random_move_probability: config.random_move_probability,
        ai_think_delay: Duration::from_millis(config.ai_think_delay_ms),
    };

    log!("Starting game: bot {:?}, seed {}", settings.bot_type, seed);
    println!("Pick a cell by typing its number (0-8). r restarts, q quits.");

    let state = SessionState::create(settings, seed)?;

    let (input_tx, mut input_rx) = mpsc::unbounded_channel();
    tokio::spawn(read_input(input_tx));

    loop {
        let mut game = tokio::spawn(TicTacToeSession::run(state.clone(), TerminalBroadcaster));

        let result = loop {
            tokio::select! {
                result = &mut game => break result?,
                command = input_rx.recv() => match command {
                    Some(line) => match parse_command(&line) {
                        Command::Place(cell) => state.handle_human_move(cell).await,
                        Command::Restart => state.reset().await,
                        Command::Quit => {
                            game.abort();
                            return Ok(());
                        }
                        Command::Unknown => {
                            log!("Unknown command {:?}: type 0-8, r or q", line.trim());
                        }
                    },
                    None => {
                        game.abort();
                        return Ok(());
                    }
                },
            }
        };

        log!("Result: {:?}", result);

        loop {
            match input_rx.recv().await {
                Some(line) => match parse_command(&line) {
                    Command::Restart => break,
                    Command::Quit => return Ok(()),
                    _ => log!("Game over. Press r to play again or q to quit."),
                },
                None => return Ok(()),
            }
        }

        state.reset().await;
    }
}
