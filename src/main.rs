// Simulator entry point.
//
// Startup sequence:
// 1. Parse command line
// 2. Initialize tracing (stderr; results go to stdout)
// 3. Assemble and validate the simulation config
// 4. Load ADP rankings and weekly points CSVs
// 5. Run the Monte Carlo trials
// 6. Print the average season total

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use draft_sim::config::{self, SimConfig};
use draft_sim::data;
use draft_sim::draft::RosterTemplate;
use draft_sim::sim;

/// Monte Carlo fantasy football draft-strategy simulator.
#[derive(Debug, Parser)]
#[command(name = "draftsim", version)]
struct Cli {
    /// Number of simulations to run.
    num_simulations: usize,

    /// Draft order system: snake or linear.
    order_system: String,

    /// Draft strategy for the team under study:
    /// BPA, RB_HEAVY, WR_HEAVY, EARLY_QB, or EARLY_TE.
    strategy: String,

    /// Number of teams in the league.
    num_teams: usize,

    /// ADP rankings CSV.
    #[arg(long, default_value = "data/adp_rankings.csv")]
    adp: PathBuf,

    /// Weekly fantasy points CSV.
    #[arg(long, default_value = "data/weekly_points.csv")]
    points: PathBuf,

    /// Optional league.toml overriding the default roster template.
    #[arg(long)]
    league: Option<PathBuf>,

    /// Base RNG seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing()?;

    let template = match &cli.league {
        Some(path) => config::load_roster_template(path)
            .with_context(|| format!("failed to load roster template from {}", path.display()))?,
        None => RosterTemplate::default(),
    };

    let config = SimConfig::new(
        cli.num_simulations,
        &cli.order_system,
        &cli.strategy,
        cli.num_teams,
        template,
        cli.seed,
    )
    .context("invalid simulation configuration")?;

    let adp = data::load_adp(&cli.adp)
        .with_context(|| format!("failed to load ADP rankings from {}", cli.adp.display()))?;
    info!("Loaded {} ranked players", adp.len());

    let scores = data::load_scores(&cli.points)
        .with_context(|| format!("failed to load weekly points from {}", cli.points.display()))?;
    info!("Loaded weekly points for {} players", scores.len());

    let totals = sim::run_simulations(&config, &adp, &scores)
        .context("simulation run failed")?;

    println!(
        "Average season points over {} simulations: {:.2}",
        totals.len(),
        sim::mean(&totals)
    );

    Ok(())
}

/// Initialize tracing to stderr so stdout carries only the result line.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("draft_sim=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
