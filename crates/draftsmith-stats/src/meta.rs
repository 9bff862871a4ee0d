//! Global meta statistics: per-hero win and pick rates.

use std::collections::HashMap;

use draftsmith_engine::HeroId;
use serde::{Deserialize, Serialize};

use crate::smoothing::NEUTRAL_PRIOR;

/// Data-file row with a hero's current global rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetaRecord {
    pub hero: HeroId,
    pub win_rate: f64,
    pub pick_rate: f64,
}

/// Lookup table over [`MetaRecord`] rows.
///
/// Heroes without a row degrade neutrally: a 50% win rate (consistent with
/// the matchup prior) and a 0% pick rate.
#[derive(Debug, Clone, Default)]
pub struct MetaStats {
    records: HashMap<HeroId, MetaRecord>,
}

impl MetaStats {
    #[must_use]
    pub fn from_records(records: Vec<MetaRecord>) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.hero, r)).collect(),
        }
    }

    /// Global win rate for the hero, 0.5 without data.
    #[must_use]
    pub fn win_rate(&self, hero: HeroId) -> f64 {
        self.records
            .get(&hero)
            .map_or(NEUTRAL_PRIOR, |r| r.win_rate)
    }

    /// Global pick rate for the hero, 0.0 without data.
    #[must_use]
    pub fn pick_rate(&self, hero: HeroId) -> f64 {
        self.records.get(&hero).map_or(0.0, |r| r.pick_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_hero_reads_its_rates() {
        let stats = MetaStats::from_records(vec![MetaRecord {
            hero: HeroId::new(1),
            win_rate: 0.54,
            pick_rate: 0.18,
        }]);
        assert_eq!(stats.win_rate(HeroId::new(1)), 0.54);
        assert_eq!(stats.pick_rate(HeroId::new(1)), 0.18);
    }

    #[test]
    fn test_unknown_hero_degrades_neutrally() {
        let stats = MetaStats::default();
        assert_eq!(stats.win_rate(HeroId::new(42)), 0.5);
        assert_eq!(stats.pick_rate(HeroId::new(42)), 0.0);
    }
}
