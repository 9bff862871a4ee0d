use std::collections::HashMap;

use draftsmith_engine::HeroId;
use draftsmith_stats::{matchup::MatchupTable, meta::MetaStats, smoothing::NEUTRAL_PRIOR};

use crate::performance::{PerformanceMap, PlayerHeroPerformance};

/// Base weight of the synergy component.
pub const SYNERGY_WEIGHT: f64 = 0.30;
/// Base weight of the counter component.
pub const COUNTER_WEIGHT: f64 = 0.30;
/// Base weight of the meta component.
pub const META_WEIGHT: f64 = 0.20;
/// Personal-performance weight for a player with no experience on the hero.
pub const PLAYER_WEIGHT_BASE: f64 = 0.20;
/// Extra personal weight earned at full experience.
pub const PLAYER_WEIGHT_MAX_BOOST: f64 = 0.20;
/// Matches on a hero at which the personal weight reaches its maximum.
pub const EXPERIENCE_THRESHOLD: u32 = 20;

/// Blends matchup, meta, and personal signals into one score per hero.
///
/// The three draft-wide weights shrink proportionally as the personal weight
/// grows, so every blend is a convex combination. Without performance data
/// the personal term contributes zero at its base weight.
#[derive(Debug, Clone, Copy)]
pub struct HeroScorer<'a> {
    matchups: &'a MatchupTable,
    meta: &'a MetaStats,
}

impl<'a> HeroScorer<'a> {
    #[must_use]
    pub fn new(matchups: &'a MatchupTable, meta: &'a MetaStats) -> Self {
        Self { matchups, meta }
    }

    /// Average smoothed synergy with the allies picked so far; neutral on an
    /// empty team.
    #[must_use]
    pub fn synergy_component(&self, hero: HeroId, allies: &[HeroId]) -> f64 {
        mean(
            allies
                .iter()
                .map(|&ally| self.matchups.synergy_score(hero, ally)),
        )
    }

    /// Average smoothed counter score against the enemies picked so far;
    /// neutral on an empty team.
    #[must_use]
    pub fn counter_component(&self, hero: HeroId, enemies: &[HeroId]) -> f64 {
        mean(
            enemies
                .iter()
                .map(|&enemy| self.matchups.counter_score(hero, enemy)),
        )
    }

    /// Meta strength, valuing win rate over popularity.
    #[must_use]
    pub fn meta_component(&self, hero: HeroId) -> f64 {
        self.meta.win_rate(hero) * 0.7 + self.meta.pick_rate(hero) * 0.3
    }

    /// Full blended score for one hero in the given draft situation.
    #[must_use]
    pub fn blended_score(
        &self,
        hero: HeroId,
        allies: &[HeroId],
        enemies: &[HeroId],
        performance: Option<&PlayerHeroPerformance>,
    ) -> f64 {
        let synergy = self.synergy_component(hero, allies);
        let counter = self.counter_component(hero, enemies);
        let meta = self.meta_component(hero);

        let mut player_factor = 0.0;
        let mut player_weight = PLAYER_WEIGHT_BASE;
        if let Some(perf) = performance {
            if perf.matches > 0 {
                let experience =
                    (f64::from(perf.matches) / f64::from(EXPERIENCE_THRESHOLD)).min(1.0);
                player_weight = PLAYER_WEIGHT_BASE + PLAYER_WEIGHT_MAX_BOOST * experience;
                // performance_score is on a 0-10 scale.
                player_factor = perf.performance_score() / 10.0;
                if perf.comfort_pick {
                    player_factor *= 1.2;
                }
            }
        }

        let base_total = SYNERGY_WEIGHT + COUNTER_WEIGHT + META_WEIGHT;
        let remaining = 1.0 - player_weight;
        synergy * (SYNERGY_WEIGHT / base_total * remaining)
            + counter * (COUNTER_WEIGHT / base_total * remaining)
            + meta * (META_WEIGHT / base_total * remaining)
            + player_factor * player_weight
    }

    /// Scores every candidate hero for the given draft situation.
    #[must_use]
    pub fn hero_scores(
        &self,
        candidates: &[HeroId],
        allies: &[HeroId],
        enemies: &[HeroId],
        performance: Option<&PerformanceMap>,
    ) -> HashMap<HeroId, f64> {
        candidates
            .iter()
            .map(|&hero| {
                let perf = performance.and_then(|map| map.get(&hero));
                (hero, self.blended_score(hero, allies, enemies, perf))
            })
            .collect()
    }
}

fn mean(scores: impl Iterator<Item = f64>) -> f64 {
    let (count, total) = scores.fold((0_u32, 0.0), |(n, sum), s| (n + 1, sum + s));
    if count == 0 {
        NEUTRAL_PRIOR
    } else {
        total / f64::from(count)
    }
}

#[cfg(test)]
mod tests {
    use draftsmith_stats::matchup::PairSample;

    use super::*;

    fn hero(id: u32) -> HeroId {
        HeroId::new(id)
    }

    fn perf(matches: u32, win_rate: f64, comfort: bool) -> PlayerHeroPerformance {
        PlayerHeroPerformance {
            matches,
            win_rate,
            kda_ratio: 3.0,
            impact_score: win_rate,
            confidence_score: 1.0,
            comfort_pick: comfort,
        }
    }

    #[test]
    fn test_empty_draft_components_are_neutral() {
        let matchups = MatchupTable::default();
        let meta = MetaStats::default();
        let scorer = HeroScorer::new(&matchups, &meta);

        assert_eq!(scorer.synergy_component(hero(1), &[]), 0.5);
        assert_eq!(scorer.counter_component(hero(1), &[]), 0.5);
    }

    #[test]
    fn test_components_average_over_the_team() {
        let mut matchups = MatchupTable::default();
        matchups.insert_synergy(
            hero(1),
            hero(2),
            PairSample {
                games: 100_000_000,
                observed_rate: 0.8,
            },
        );
        matchups.insert_synergy(
            hero(1),
            hero(3),
            PairSample {
                games: 100_000_000,
                observed_rate: 0.6,
            },
        );
        let meta = MetaStats::default();
        let scorer = HeroScorer::new(&matchups, &meta);

        // Huge samples make smoothing negligible: mean of 0.8 and 0.6.
        let synergy = scorer.synergy_component(hero(1), &[hero(2), hero(3)]);
        assert!((synergy - 0.7).abs() < 1e-4);
    }

    #[test]
    fn test_blend_is_convex_for_every_experience_level() {
        let matchups = MatchupTable::default();
        let meta = MetaStats::from_records(vec![draftsmith_stats::meta::MetaRecord {
            hero: hero(1),
            win_rate: 0.5,
            pick_rate: 0.5,
        }]);
        let scorer = HeroScorer::new(&matchups, &meta);

        // With every component pinned to the same value, any convex blend of
        // them must return exactly that value.
        for matches in [1, 5, 10, 20, 100] {
            let mut p = perf(matches, 0.5, false);
            p.impact_score = 0.5;
            // performance_score = (0.5 * 6 + 0.5 * 4) * 1.0 = 5.0, factor 0.5
            let score = scorer.blended_score(hero(1), &[], &[], Some(&p));
            assert!((score - 0.5).abs() < 1e-12, "matches = {matches}");
        }
    }

    #[test]
    fn test_experience_grows_the_personal_share() {
        let matchups = MatchupTable::default();
        let meta = MetaStats::default();
        let scorer = HeroScorer::new(&matchups, &meta);

        // A dominant personal record moves the blend further the more
        // matches back it.
        let novice = scorer.blended_score(hero(1), &[], &[], Some(&perf(2, 0.9, false)));
        let veteran = scorer.blended_score(hero(1), &[], &[], Some(&perf(20, 0.9, false)));
        assert!(veteran > novice);

        // The boost saturates at the experience threshold.
        let beyond = scorer.blended_score(hero(1), &[], &[], Some(&perf(200, 0.9, false)));
        assert!((beyond - veteran).abs() < 1e-12);
    }

    #[test]
    fn test_comfort_flag_boosts_the_blend() {
        let matchups = MatchupTable::default();
        let meta = MetaStats::default();
        let scorer = HeroScorer::new(&matchups, &meta);

        let plain = scorer.blended_score(hero(1), &[], &[], Some(&perf(10, 0.6, false)));
        let comfort = scorer.blended_score(hero(1), &[], &[], Some(&perf(10, 0.6, true)));
        assert!(comfort > plain);
    }

    #[test]
    fn test_zero_match_record_scores_like_no_record() {
        let matchups = MatchupTable::default();
        let meta = MetaStats::default();
        let scorer = HeroScorer::new(&matchups, &meta);

        let without = scorer.blended_score(hero(1), &[], &[], None);
        let with_empty = scorer.blended_score(hero(1), &[], &[], Some(&perf(0, 0.9, true)));
        assert!((without - with_empty).abs() < 1e-12);
    }
}
