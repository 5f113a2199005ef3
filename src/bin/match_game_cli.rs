// src/bin/match_game_cli.rs

use clap::Parser;
use tracing::info;

use match_game::engine::scoring::format_standings;
use match_game::engine::GameConfig;
use match_game::infra::{init_tracing, GameRng};
use match_game::play_game;

#[derive(Parser)]
#[command(name = "match_game_cli")]
#[command(about = "Match-suit-or-rank card game: one dealer, N players, message passing only")]
struct Args {
    /// Number of players (1..=10)
    #[arg(short, long, default_value_t = 3)]
    players: usize,

    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Print the full game report as JSON
    #[arg(long)]
    json: bool,

    /// Debug logging: dealt hands, deck state
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = GameConfig {
        players: args.players,
        ..GameConfig::default()
    };
    config.validate()?;

    info!(
        "Starting game with {} players{}",
        config.players,
        args.seed
            .map(|s| format!(" (seed {s})"))
            .unwrap_or_default()
    );

    let rng = GameRng::from_seed(args.seed);
    let report = play_game(config, rng).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!("================ FINAL SCORES =================");
    println!("{}", format_standings(&report.final_standings));
    println!(
        "Rounds played: {} | cards left in deck: {}",
        report.rounds.len(),
        report.cards_left
    );

    Ok(())
}
