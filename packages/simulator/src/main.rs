//! Euchre simulator CLI: runs seeded games in memory and writes per-game metrics.

mod metrics;
mod narration;
mod output;
mod simulator;
mod types;

use std::time::{Duration, Instant};

use clap::Parser;
use euchre::domain::rules::{PLAYERS, TEAMS};
use euchre::domain::scoring::RoundOutcome;
use euchre::RulesConfig;
use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::{SimulatedGame, Simulator};
use tracing::{info, warn};
use types::{AiType, AllPassArg, DeckArg, OutputFormat};

#[derive(Parser)]
#[command(name = "euchre-sim")]
#[command(about = "In-memory Euchre game simulator")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// AI type for all seats
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<AiType>,

    /// AI type for seat 0
    #[arg(long, default_value = "random")]
    seat0: AiType,

    /// AI type for seat 1
    #[arg(long, default_value = "random")]
    seat1: AiType,

    /// AI type for seat 2
    #[arg(long, default_value = "random")]
    seat2: AiType,

    /// AI type for seat 3
    #[arg(long, default_value = "random")]
    seat3: AiType,

    /// Base seed; game N uses seed + N - 1. Random per game when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// House rules as a JSON file (EUCHRE_* environment variables apply otherwise)
    #[arg(long)]
    rules: Option<String>,

    /// Override the winning score
    #[arg(long)]
    winning_score: Option<u16>,

    /// Override what happens when everyone passes twice
    #[arg(long)]
    all_pass: Option<AllPassArg>,

    /// Override the deck
    #[arg(long)]
    deck: Option<DeckArg>,

    /// End a round as a point as soon as the callers take the majority
    #[arg(long)]
    stop_at_majority: bool,

    /// Probability that a caller's seat goes alone
    #[arg(long, default_value = "0.0")]
    go_alone_rate: f64,

    /// Per-decision time limit in milliseconds
    #[arg(long)]
    decision_timeout_ms: Option<u64>,

    /// Print a play-by-play of every game
    #[arg(long)]
    narrate: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress the detailed output with gzip
    #[arg(long)]
    compress: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.json_logs {
        euchre::telemetry::init_tracing(true);
    } else {
        let filter = if args.verbose {
            "debug"
        } else if args.show_output {
            "info"
        } else {
            "warn"
        };
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let rules = load_rules(&args)?;
    let seat_types = match args.seats {
        Some(ai) => [ai; PLAYERS],
        None => [args.seat0, args.seat1, args.seat2, args.seat3],
    };
    let ai_types = seat_types.map(|t| t.registry_name().to_string());

    if args.show_output {
        info!(games = args.games, ?seat_types, ?rules, "starting simulation");
    }

    let simulator = Simulator::new(rules, seat_types)
        .with_go_alone_rate(args.go_alone_rate)
        .with_decision_timeout(args.decision_timeout_ms.map(Duration::from_millis))
        .with_narration(args.narrate);

    let mut output_writer = OutputWriter::new(&args.output_dir, args.output_format, args.compress)?;

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = match args.seed {
            Some(base) => base.wrapping_add(u64::from(game_num - 1)),
            None => rand::random(),
        };

        match simulator.simulate_game(game_seed) {
            Ok(game) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    game_num,
                    ai_types.clone(),
                    args.games,
                    simulator.rules(),
                    &game,
                    duration_ms,
                );
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!(game_num, error = %e, "failed to write metrics");
                }
                if args.verbose {
                    info!(game_num, seed = game_seed, scores = ?game.result.scores, "game completed");
                }
                results.push(game);
            }
            Err(e) => {
                errors += 1;
                warn!(game_num, seed = game_seed, error = %e, "game failed");
            }
        }
    }

    let elapsed = start.elapsed();
    let (detail_path, csv_path) = output_writer.output_paths();
    let (detail_path, csv_path) = (detail_path.to_path_buf(), csv_path.to_path_buf());
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", detail_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, errors, elapsed, args.games);
    }

    Ok(())
}

/// Rules from `--rules` or the environment, then CLI overrides on top.
fn load_rules(args: &Args) -> Result<RulesConfig, Box<dyn std::error::Error>> {
    let mut rules = match &args.rules {
        Some(path) => RulesConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => RulesConfig::from_env()?,
    };
    if let Some(score) = args.winning_score {
        rules.winning_score = score;
    }
    if let Some(policy) = args.all_pass {
        rules.all_pass_policy = policy.into();
    }
    if let Some(deck) = args.deck {
        rules.deck = deck.into();
    }
    if args.stop_at_majority {
        rules.play_out_march = false;
    }
    rules.validate()?;
    Ok(rules)
}

fn print_summary(results: &[SimulatedGame], errors: u32, elapsed: Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let mut wins = [0u32; TEAMS];
    let mut total_scores = [0u64; TEAMS];
    let mut total_rounds = 0u64;
    let mut outcomes = [0u32; 4];
    for game in results {
        wins[game.result.winner as usize] += 1;
        for (team, &score) in game.result.scores.iter().enumerate() {
            total_scores[team] += u64::from(score);
        }
        total_rounds += u64::from(game.result.rounds);
        for round in &game.rounds {
            let idx = match round.outcome {
                RoundOutcome::March => 0,
                RoundOutcome::Point => 1,
                RoundOutcome::Euchre => 2,
                RoundOutcome::Misdeal => 3,
            };
            outcomes[idx] += 1;
        }
    }

    let n = results.len() as f64;
    println!("\n=== Results by Team ===");
    for team in 0..TEAMS {
        println!(
            "Team {} (seats {} & {}): avg score={:.1}, wins={} ({:.1}%)",
            team,
            team,
            team + 2,
            total_scores[team] as f64 / n,
            wins[team],
            f64::from(wins[team]) / n * 100.0
        );
    }
    println!("\nAverage rounds per game: {:.1}", total_rounds as f64 / n);
    println!(
        "Round outcomes: march={}, point={}, euchre={}, misdeal={}",
        outcomes[0], outcomes[1], outcomes[2], outcomes[3]
    );
}
