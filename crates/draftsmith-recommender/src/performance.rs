use std::collections::HashMap;

use draftsmith_engine::HeroId;
use serde::{Deserialize, Serialize};

/// One player's track record on a single hero.
///
/// `impact_score` and `confidence_score` come from the stats import pipeline:
/// impact condenses per-match metrics into a 0-1 value, confidence discounts
/// records backed by few matches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerHeroPerformance {
    pub matches: u32,
    pub win_rate: f64,
    pub kda_ratio: f64,
    pub impact_score: f64,
    pub confidence_score: f64,
    pub comfort_pick: bool,
}

impl PlayerHeroPerformance {
    /// Combined performance value on a 0-10 scale.
    ///
    /// Win rate counts for six points and impact for four, and the sum is
    /// discounted by the confidence in the underlying sample.
    #[must_use]
    pub fn performance_score(&self) -> f64 {
        (self.win_rate * 6.0 + self.impact_score * 4.0) * self.confidence_score
    }
}

/// Per-hero performance records for the requesting player.
pub type PerformanceMap = HashMap<HeroId, PlayerHeroPerformance>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_score_is_confidence_discounted() {
        let perf = PlayerHeroPerformance {
            matches: 40,
            win_rate: 0.6,
            kda_ratio: 3.2,
            impact_score: 0.8,
            confidence_score: 0.5,
            comfort_pick: true,
        };
        // (0.6 * 6 + 0.8 * 4) * 0.5 = 3.4
        assert!((perf.performance_score() - 3.4).abs() < 1e-12);
    }

    #[test]
    fn test_full_confidence_perfect_record_caps_at_ten() {
        let perf = PlayerHeroPerformance {
            matches: 100,
            win_rate: 1.0,
            kda_ratio: 10.0,
            impact_score: 1.0,
            confidence_score: 1.0,
            comfort_pick: true,
        };
        assert!((perf.performance_score() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_record_parses_from_json() {
        let json = r#"{
            "matches": 25,
            "win_rate": 0.64,
            "kda_ratio": 4.1,
            "impact_score": 0.7,
            "confidence_score": 0.9,
            "comfort_pick": true
        }"#;
        let perf: PlayerHeroPerformance = serde_json::from_str(json).unwrap();
        assert_eq!(perf.matches, 25);
        assert!(perf.comfort_pick);
    }
}
