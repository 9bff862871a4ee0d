//! Smoothed synergy and counter lookups for hero pairs.

use std::collections::HashMap;

use draftsmith_engine::HeroId;
use serde::{Deserialize, Serialize};

use crate::smoothing::{NEUTRAL_PRIOR, confidence_weighted};

/// Raw aggregate for one hero pair. The observed rate is never handed to
/// scoring directly, only through [`confidence_weighted`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairSample {
    pub games: u64,
    pub observed_rate: f64,
}

impl PairSample {
    #[must_use]
    pub fn smoothed(self) -> f64 {
        confidence_weighted(self.games, self.observed_rate)
    }
}

/// Data-file row: how often `hero` and `ally` won when picked together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynergyRecord {
    pub hero: HeroId,
    pub ally: HeroId,
    pub games: u64,
    pub win_rate: f64,
}

/// Data-file row: how often `hero` won when facing `enemy`. Directional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CounterRecord {
    pub hero: HeroId,
    pub enemy: HeroId,
    pub games: u64,
    pub win_rate: f64,
}

/// In-memory matchup statistics with confidence-weighted reads.
///
/// Synergy is symmetric and stored under the canonical `(min, max)` id pair;
/// counters are directional (`hero` against `enemy`). Every read smooths the
/// raw sample, and missing samples read as the neutral prior.
#[derive(Debug, Clone, Default)]
pub struct MatchupTable {
    synergies: HashMap<(HeroId, HeroId), PairSample>,
    counters: HashMap<(HeroId, HeroId), PairSample>,
}

fn canonical_pair(a: HeroId, b: HeroId) -> (HeroId, HeroId) {
    if a <= b { (a, b) } else { (b, a) }
}

impl MatchupTable {
    /// Builds the table from data-file rows. A duplicate pair keeps the last
    /// row seen.
    #[must_use]
    pub fn from_records(synergies: Vec<SynergyRecord>, counters: Vec<CounterRecord>) -> Self {
        let mut table = Self::default();
        for row in synergies {
            table.insert_synergy(
                row.hero,
                row.ally,
                PairSample {
                    games: row.games,
                    observed_rate: row.win_rate,
                },
            );
        }
        for row in counters {
            table.insert_counter(
                row.hero,
                row.enemy,
                PairSample {
                    games: row.games,
                    observed_rate: row.win_rate,
                },
            );
        }
        table
    }

    pub fn insert_synergy(&mut self, a: HeroId, b: HeroId, sample: PairSample) {
        self.synergies.insert(canonical_pair(a, b), sample);
    }

    pub fn insert_counter(&mut self, hero: HeroId, enemy: HeroId, sample: PairSample) {
        self.counters.insert((hero, enemy), sample);
    }

    /// Smoothed same-team score for two heroes; 0.5 without data.
    #[must_use]
    pub fn synergy_score(&self, a: HeroId, b: HeroId) -> f64 {
        self.synergies
            .get(&canonical_pair(a, b))
            .map_or(NEUTRAL_PRIOR, |sample| sample.smoothed())
    }

    /// Smoothed score for `hero` playing against `enemy`; 0.5 without data.
    #[must_use]
    pub fn counter_score(&self, hero: HeroId, enemy: HeroId) -> f64 {
        self.counters
            .get(&(hero, enemy))
            .map_or(NEUTRAL_PRIOR, |sample| sample.smoothed())
    }

    /// Best synergy partners for a hero, smoothed score descending.
    #[must_use]
    pub fn best_synergies(&self, hero: HeroId, limit: usize) -> Vec<(HeroId, f64)> {
        let scores = self.synergies.iter().filter_map(|(&(a, b), sample)| {
            let partner = if a == hero {
                Some(b)
            } else if b == hero {
                Some(a)
            } else {
                None
            }?;
            Some((partner, sample.smoothed()))
        });
        top_scores(scores, limit)
    }

    /// Enemies this hero counters best, smoothed score descending.
    #[must_use]
    pub fn best_counters(&self, hero: HeroId, limit: usize) -> Vec<(HeroId, f64)> {
        let scores = self
            .counters
            .iter()
            .filter_map(|(&(h, enemy), sample)| (h == hero).then(|| (enemy, sample.smoothed())));
        top_scores(scores, limit)
    }

    /// Enemies that counter this hero hardest: their smoothed score against
    /// it, descending.
    #[must_use]
    pub fn countered_by(&self, hero: HeroId, limit: usize) -> Vec<(HeroId, f64)> {
        let scores = self
            .counters
            .iter()
            .filter_map(|(&(enemy, target), sample)| {
                (target == hero).then(|| (enemy, sample.smoothed()))
            });
        top_scores(scores, limit)
    }
}

fn top_scores(scores: impl Iterator<Item = (HeroId, f64)>, limit: usize) -> Vec<(HeroId, f64)> {
    let mut ranked: Vec<(HeroId, f64)> = scores.collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(limit);
    ranked
}
