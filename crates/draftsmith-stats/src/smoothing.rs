//! Confidence-weighted (Bayesian) averaging of raw win-rate aggregates.

/// Sample count at which the observed rate and the prior carry equal weight.
///
/// With `C = 1000`: 100 games read ~91% prior, 1,000 games 50%, 10,000 games
/// ~9%.
pub const CONFIDENCE_GAMES: f64 = 1000.0;

/// Neutral prior used when data is sparse or absent.
pub const NEUTRAL_PRIOR: f64 = 0.5;

/// Smooths an observed rate by its sample size.
///
/// `(games · rate + C · prior) / (games + C)` - at `games = 0` this is
/// exactly the prior, and it approaches the observed rate monotonically as
/// the sample grows.
#[must_use]
pub fn confidence_weighted(games: u64, observed_rate: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let games = games as f64;
    (games * observed_rate + CONFIDENCE_GAMES * NEUTRAL_PRIOR) / (games + CONFIDENCE_GAMES)
}
