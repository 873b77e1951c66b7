// Monte Carlo driver: repeated draft + season-scoring trials.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

use crate::config::SimConfig;
use crate::data::ScoreTable;
use crate::draft::{draft_order, run_draft, DraftError, Player, PlayerPool, Strategy, Team};
use crate::scoring::season_score;

/// Run one draft + season-scoring trial and return the subject team's
/// season total. The subject (team 0) uses the configured strategy; every
/// other team drafts best-player-available.
fn run_trial(
    config: &SimConfig,
    adp: &[Player],
    scores: &ScoreTable,
    rng: &mut ChaCha8Rng,
) -> Result<f64, DraftError> {
    let mut teams: Vec<Team> = std::iter::once(config.strategy)
        .chain(std::iter::repeat(Strategy::Bpa))
        .take(config.num_teams)
        .map(|strategy| Team::new(&config.template, strategy))
        .collect();

    let mut pool = PlayerPool::new(adp.to_vec());
    let order = draft_order(
        config.order,
        config.num_teams,
        config.template.total_slots(),
        rng,
    );
    run_draft(&mut teams, &mut pool, &order)?;

    Ok(season_score(&teams[0].picks, &config.template, scores))
}

/// Run the configured number of independent trials and collect each trial's
/// season total for the subject team.
///
/// Trials share no mutable state (each gets its own pool copy and its own
/// RNG), so they run in parallel. Any trial failure aborts the whole run:
/// silently dropping failed trials would bias the average.
pub fn run_simulations(
    config: &SimConfig,
    adp: &[Player],
    scores: &ScoreTable,
) -> Result<Vec<f64>, DraftError> {
    info!(
        trials = config.trials,
        strategy = %config.strategy,
        order = %config.order,
        teams = config.num_teams,
        "starting simulation run"
    );

    let completed = AtomicUsize::new(0);
    let report_every = (config.trials / 10).max(1);

    let results: Result<Vec<f64>, DraftError> = (0..config.trials)
        .into_par_iter()
        .map(|trial| {
            let mut rng = match config.seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(trial as u64)),
                None => ChaCha8Rng::from_entropy(),
            };
            let score = run_trial(config, adp, scores, &mut rng)?;
            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            if done % report_every == 0 {
                info!("completed {done}/{} trials", config.trials);
            }
            Ok(score)
        })
        .collect();

    let results = results?;
    info!(trials = results.len(), "simulation run finished");
    Ok(results)
}

/// Mean of the collected season totals.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
