//! Replay and house edge simulation for 3 Shot Poker.

mod config;
mod stats;
mod strategy;

pub use config::{Config, ConfigError, ValidatedConfig};
pub use stats::{Report, Stats};
pub use strategy::Strategy;

use rayon::prelude::*;
use threeshot_execution::{deal, settle, GameError, GameRng};
use threeshot_types::casino::RoundResult;
use tracing::info;

/// Deal round `round_id` of a seeded run and settle it under the configured strategy.
pub fn play_seeded(config: &ValidatedConfig, round_id: u64) -> Result<RoundResult, GameError> {
    let mut rng = GameRng::new(config.seed, round_id);
    let cards = deal(&mut rng);
    let decision = config.strategy.decide(cards.hole_cards);
    settle(&cards, config.wagers, decision, &config.paytables)
}

/// Simulate `config.rounds` independent rounds.
///
/// Round `i` is dealt from `GameRng::new(seed, i)`, so the counts and totals
/// in the report do not depend on how rounds are split across threads.
pub fn simulate(config: &ValidatedConfig) -> Result<Report, GameError> {
    info!(
        rounds = config.rounds,
        seed = config.seed,
        strategy = ?config.strategy,
        "starting simulation"
    );
    let report = (0..config.rounds)
        .into_par_iter()
        .map(|round_id| play_seeded(config, round_id))
        .try_fold(Report::default, |mut report, result| {
            report.record(&result?);
            Ok::<_, GameError>(report)
        })
        .try_reduce(Report::default, |mut a, b| {
            a.merge(&b);
            Ok(a)
        })?;
    info!(
        rounds = report.rounds,
        house_edge = report.overall.house_edge(),
        "simulation complete"
    );
    Ok(report)
}
