//! Runs battle episodes with a uniformly random policy.
//!
//! Useful as a smoke test for data tables and as a baseline score for trained
//! policies. Logs go to stderr; `RUST_LOG=rpg_turn_battle=debug` shows every turn.

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rpg_turn_battle::{SetupResult, Simulation, SimulationConfig, Unit};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

/// Random-policy battle runner
#[derive(Parser, Debug)]
#[command(name = "rpg-turn-battle")]
#[command(about = "Run turn-based battle episodes with a random policy", long_about = None)]
#[command(version)]
struct Cli {
    /// RON configuration file; flags below override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding players, enemies and scenarios tables
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Scenario code to play
    #[arg(short, long)]
    scenario: Option<String>,

    /// Seed for both the simulation and the policy
    #[arg(long)]
    seed: Option<u64>,

    /// Number of episodes to run
    #[arg(short = 'n', long, default_value = "1")]
    episodes: u32,

    /// Safety cap on steps per episode
    #[arg(long, default_value = "1000")]
    max_steps: u32,

    /// Print one JSON summary per episode instead of the battle log
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct EpisodeSummary<'a> {
    episode: u32,
    steps: u32,
    total_reward: i32,
    encounters_won: u32,
    finished: bool,
    player: &'a Unit,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rpg_turn_battle=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "simulation setup failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> SetupResult<()> {
    let mut config = match &cli.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if cli.data_dir.is_some() {
        config.data_dir = cli.data_dir.clone();
    }
    if let Some(scenario) = &cli.scenario {
        config.scenario = scenario.clone();
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let mut sim = Simulation::from_config(&config)?;
    let mut policy = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_os_rng(),
    };

    for episode in 1..=cli.episodes {
        sim.reset();
        if !cli.json {
            println!("\n=== Episode {} ===", episode);
            println!("{}", sim.render());
            println!("{}", sim.render_command_list());
        }

        let mut steps = 0;
        let mut total_reward = 0;
        while steps < cli.max_steps {
            let action = policy.random_range(0..sim.action_count());
            let outcome = match sim.step(action) {
                Ok(outcome) => outcome,
                Err(err) => {
                    tracing::warn!(%err, episode, "episode stopped early");
                    break;
                }
            };
            steps += 1;
            total_reward += outcome.reward;
            if !cli.json {
                println!("{}", outcome.message);
                println!("{}", sim.render());
            }
            if outcome.done {
                break;
            }
        }

        let summary = EpisodeSummary {
            episode,
            steps,
            total_reward,
            encounters_won: sim.encounter_count(),
            finished: sim.is_done(),
            player: sim.player(),
        };
        if cli.json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            println!(
                "\nEpisode {}: {} steps, reward {}, {} enemies defeated",
                summary.episode, summary.steps, summary.total_reward, summary.encounters_won
            );
        }
        tracing::info!(episode, steps, total_reward, "episode complete");
    }
    Ok(())
}
