//! `octile`: solve, benchmark and generate 8-puzzle scenarios.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use octile_harness::benchmark::run_benchmark;
use octile_harness::config::{parse_heuristics, HarnessConfig};
use octile_harness::scenario::{random_walk, ScenarioSet};
use octile_harness::session::Session;
use octile_kernel::board::Board;
use octile_kernel::heuristic::HeuristicKind;
use octile_search::policy::SearchPolicy;

/// octile: A* on the 8-puzzle with four heuristics.
#[derive(Parser)]
#[command(name = "octile", version, about)]
struct Cli {
    /// Path to an `octile.toml` config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve one board interactively and replay the path.
    Solve {
        /// Start board as nine comma-separated tiles, 0 for the blank.
        #[arg(long, conflicts_with = "seed")]
        board: Option<String>,
        /// Length of the random walk used when no board is given.
        #[arg(long, default_value_t = 25)]
        moves: usize,
        /// Seed for the random walk; drawn from the OS when absent.
        #[arg(long)]
        seed: Option<u64>,
        /// Skip the prompt and use this heuristic (h1..h4).
        #[arg(long)]
        heuristic: Option<HeuristicKind>,
        /// Override the expansion cap.
        #[arg(long)]
        max_expansions: Option<u64>,
    },
    /// Benchmark heuristics over a scenario set.
    Bench {
        /// Scenario CSV file. Without it, scenarios are generated.
        #[arg(long, conflicts_with = "builtin")]
        scenarios: Option<PathBuf>,
        /// Use the six demonstration boards.
        #[arg(long)]
        builtin: bool,
        /// Number of generated scenarios.
        #[arg(long)]
        count: Option<usize>,
        /// Moves per generated random walk.
        #[arg(long)]
        walk_length: Option<usize>,
        /// Seed for generated scenarios.
        #[arg(long)]
        seed: Option<u64>,
        /// Comma-separated heuristic keys.
        #[arg(long, value_delimiter = ',')]
        heuristics: Option<Vec<String>>,
        /// Override the expansion cap.
        #[arg(long)]
        max_expansions: Option<u64>,
        /// Output as JSON instead of human-readable text.
        #[arg(long)]
        json: bool,
    },
    /// Write a random-walk scenario set as CSV.
    Generate {
        /// Output CSV file.
        #[arg(long)]
        output: PathBuf,
        #[arg(long)]
        count: Option<usize>,
        #[arg(long)]
        walk_length: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = HarnessConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Solve {
            board,
            moves,
            seed,
            heuristic,
            max_expansions,
        } => {
            let start = match board {
                Some(text) => text
                    .parse::<Board>()
                    .with_context(|| format!("invalid --board {text:?}"))?,
                None => {
                    let mut rng = match seed {
                        Some(seed) => StdRng::seed_from_u64(seed),
                        None => StdRng::from_entropy(),
                    };
                    random_walk(&mut rng, moves)
                }
            };
            let policy = policy_for(&config, max_expansions);
            let stdin = io::stdin();
            let mut session = Session::new(stdin.lock(), io::stdout().lock()).with_policy(policy);
            match heuristic {
                Some(kind) => session.run_with(start, kind)?,
                None => session.run(start)?,
            };
        }
        Command::Bench {
            scenarios,
            builtin,
            count,
            walk_length,
            seed,
            heuristics,
            max_expansions,
            json,
        } => {
            let set = if builtin {
                ScenarioSet::builtin()
            } else if let Some(path) = scenarios.as_deref() {
                load_scenarios(path)?
            } else {
                generated(&config, count, walk_length, seed)
            };
            let kinds = match heuristics {
                Some(keys) => parse_heuristics(keys.iter().map(String::as_str))?,
                None => config.benchmark.heuristic_kinds()?,
            };
            let policy = policy_for(&config, max_expansions);
            let report = run_benchmark(&set, &kinds, &policy)?;
            if json {
                println!("{}", report.to_json()?);
            } else {
                print!("{report}");
            }
        }
        Command::Generate {
            output,
            count,
            walk_length,
            seed,
        } => {
            let set = generated(&config, count, walk_length, seed);
            set.write_csv(&output)?;
            tracing::info!(
                path = %output.display(),
                scenarios = set.len(),
                digest = %set.digest(),
                "wrote scenarios"
            );
        }
    }
    Ok(())
}

/// Config file value, overridden by the CLI flag when present.
fn policy_for(config: &HarnessConfig, max_expansions: Option<u64>) -> SearchPolicy {
    match max_expansions {
        Some(limit) => SearchPolicy::with_max_expansions(limit),
        None => config.search.to_policy(),
    }
}

fn generated(
    config: &HarnessConfig,
    count: Option<usize>,
    walk_length: Option<usize>,
    seed: Option<u64>,
) -> ScenarioSet {
    let bench = &config.benchmark;
    ScenarioSet::random_walks(
        count.unwrap_or(bench.scenario_count),
        walk_length.unwrap_or(bench.walk_length),
        seed.unwrap_or(bench.seed),
    )
}

fn load_scenarios(path: &Path) -> anyhow::Result<ScenarioSet> {
    ScenarioSet::load_csv(path).with_context(|| format!("loading {}", path.display()))
}
