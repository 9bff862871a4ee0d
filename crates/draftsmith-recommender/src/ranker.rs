use std::collections::HashMap;

use draftsmith_engine::{Hero, HeroId, Team};
use draftsmith_stats::{matchup::MatchupTable, meta::MetaStats};
use tracing::debug;

use crate::{
    performance::{PerformanceMap, PlayerHeroPerformance},
    scorer::HeroScorer,
};

/// Component value above which a recommendation is labelled with that
/// component's category.
const CATEGORY_THRESHOLD: f64 = 0.7;

/// Personal win rate replaces the global one once this many matches back it.
const PERSONAL_WIN_RATE_MIN_MATCHES: u32 = 5;

/// Why a hero is being suggested. Checked in priority order; the first
/// signal strong enough wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RecommendationCategory {
    #[display("comfort")]
    Comfort,
    #[display("synergy")]
    Synergy,
    #[display("counter")]
    Counter,
    #[display("meta")]
    Meta,
    #[display("balanced")]
    Balanced,
}

/// One scored suggestion, ready for display.
///
/// `score` is the blended score on a 0-10 scale. `win_rate` is the hero's
/// global win rate, replaced by the player's personal one on pick
/// recommendations backed by enough matches.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub hero: Hero,
    pub score: f64,
    pub category: RecommendationCategory,
    pub reason: String,
    pub comfort_pick: bool,
    pub matches_played: u32,
    pub win_rate: f64,
    pub kda_ratio: f64,
}

/// Produces ranked pick and ban suggestions for a draft in progress.
///
/// Holds the full hero pool plus the statistics tables; callers pass the
/// current draft occupancy on every query so one recommender can serve many
/// drafts.
#[derive(Debug, Clone)]
pub struct Recommender {
    pool: Vec<Hero>,
    matchups: MatchupTable,
    meta: MetaStats,
}

impl Recommender {
    #[must_use]
    pub fn new(pool: Vec<Hero>, matchups: MatchupTable, meta: MetaStats) -> Self {
        Self {
            pool,
            matchups,
            meta,
        }
    }

    /// Suggests heroes for `team` to pick, best first.
    #[must_use]
    pub fn recommended_picks(
        &self,
        radiant_picks: &[HeroId],
        dire_picks: &[HeroId],
        banned: &[HeroId],
        team: Team,
        performance: Option<&PerformanceMap>,
        limit: usize,
    ) -> Vec<Recommendation> {
        debug!(
            ?team,
            performance = performance.map_or(0, HashMap::len),
            "scoring pick recommendations"
        );
        let (allies, enemies) = match team {
            Team::Radiant => (radiant_picks, dire_picks),
            Team::Dire => (dire_picks, radiant_picks),
        };
        let candidates = self.available(radiant_picks, dire_picks, banned);
        let scorer = HeroScorer::new(&self.matchups, &self.meta);
        let scores = scorer.hero_scores(&candidates, allies, enemies, performance);
        self.build(&candidates, &scores, allies, enemies, performance, true, limit)
    }

    /// Suggests heroes for `team` to ban, best first.
    ///
    /// Ban value is what the hero would be worth to the opposing team, so the
    /// blend runs from their perspective and the requesting player's personal
    /// record stays out of it. Performance data still flags comfort heroes
    /// worth protecting.
    #[must_use]
    pub fn recommended_bans(
        &self,
        radiant_picks: &[HeroId],
        dire_picks: &[HeroId],
        banned: &[HeroId],
        team: Team,
        performance: Option<&PerformanceMap>,
        limit: usize,
    ) -> Vec<Recommendation> {
        debug!(
            ?team,
            performance = performance.map_or(0, HashMap::len),
            "scoring ban recommendations"
        );
        let (own_picks, opponent_picks) = match team {
            Team::Radiant => (radiant_picks, dire_picks),
            Team::Dire => (dire_picks, radiant_picks),
        };
        let candidates = self.available(radiant_picks, dire_picks, banned);
        let scorer = HeroScorer::new(&self.matchups, &self.meta);
        let scores = scorer.hero_scores(&candidates, opponent_picks, own_picks, None);
        self.build(
            &candidates,
            &scores,
            opponent_picks,
            own_picks,
            performance,
            false,
            limit,
        )
    }

    /// Blended score for every available hero, keyed by id.
    #[must_use]
    pub fn hero_scores(
        &self,
        radiant_picks: &[HeroId],
        dire_picks: &[HeroId],
        banned: &[HeroId],
        team: Team,
        performance: Option<&PerformanceMap>,
    ) -> HashMap<HeroId, f64> {
        let (allies, enemies) = match team {
            Team::Radiant => (radiant_picks, dire_picks),
            Team::Dire => (dire_picks, radiant_picks),
        };
        let candidates = self.available(radiant_picks, dire_picks, banned);
        HeroScorer::new(&self.matchups, &self.meta).hero_scores(
            &candidates,
            allies,
            enemies,
            performance,
        )
    }

    fn available(
        &self,
        radiant_picks: &[HeroId],
        dire_picks: &[HeroId],
        banned: &[HeroId],
    ) -> Vec<HeroId> {
        self.pool
            .iter()
            .map(|hero| hero.id)
            .filter(|id| {
                !radiant_picks.contains(id) && !dire_picks.contains(id) && !banned.contains(id)
            })
            .collect()
    }

    fn hero(&self, id: HeroId) -> Option<&Hero> {
        self.pool.iter().find(|hero| hero.id == id)
    }

    fn hero_name(&self, id: HeroId) -> String {
        self.hero(id)
            .map_or_else(|| id.to_string(), |hero| hero.name.clone())
    }

    #[allow(clippy::too_many_arguments)]
    fn build(
        &self,
        candidates: &[HeroId],
        scores: &HashMap<HeroId, f64>,
        allies: &[HeroId],
        enemies: &[HeroId],
        performance: Option<&PerformanceMap>,
        is_pick: bool,
        limit: usize,
    ) -> Vec<Recommendation> {
        let scorer = HeroScorer::new(&self.matchups, &self.meta);
        let mut recommendations: Vec<Recommendation> = candidates
            .iter()
            .filter_map(|&id| {
                let hero = self.hero(id)?;
                let score = *scores.get(&id)?;
                let perf = performance.and_then(|map| map.get(&id));

                let category = categorize(&scorer, id, is_pick, perf, allies, enemies);
                let reason = self.reason(id, category, is_pick, perf, allies, enemies);

                let mut win_rate = self.meta.win_rate(id);
                let mut comfort_pick = false;
                let mut matches_played = 0;
                let mut kda_ratio = 0.0;
                if let Some(perf) = perf {
                    comfort_pick = perf.comfort_pick;
                    matches_played = perf.matches;
                    kda_ratio = perf.kda_ratio;
                    if is_pick && perf.matches >= PERSONAL_WIN_RATE_MIN_MATCHES {
                        win_rate = perf.win_rate;
                    }
                }

                Some(Recommendation {
                    hero: hero.clone(),
                    score: score * 10.0,
                    category,
                    reason,
                    comfort_pick,
                    matches_played,
                    win_rate,
                    kda_ratio,
                })
            })
            .collect();

        recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
        // Comfort heroes outrank higher-scoring strangers once personal data
        // is in play.
        if performance.is_some_and(|map| !map.is_empty()) {
            recommendations.sort_by(|a, b| {
                b.comfort_pick
                    .cmp(&a.comfort_pick)
                    .then(b.score.total_cmp(&a.score))
            });
        }
        recommendations.truncate(limit);
        recommendations
    }

    fn reason(
        &self,
        hero: HeroId,
        category: RecommendationCategory,
        is_pick: bool,
        perf: Option<&PlayerHeroPerformance>,
        allies: &[HeroId],
        enemies: &[HeroId],
    ) -> String {
        match category {
            RecommendationCategory::Comfort => perf.map_or_else(
                || "Your comfort pick".to_owned(),
                |p| {
                    format!(
                        "Your comfort hero ({:.1}% win rate in {} matches)",
                        p.win_rate * 100.0,
                        p.matches
                    )
                },
            ),
            RecommendationCategory::Synergy => {
                let best = allies
                    .iter()
                    .max_by(|&&a, &&b| {
                        self.matchups
                            .synergy_score(hero, a)
                            .total_cmp(&self.matchups.synergy_score(hero, b))
                    })
                    .copied();
                best.map_or_else(
                    || "Good synergy with your team composition".to_owned(),
                    |ally| format!("Strong synergy with {}", self.hero_name(ally)),
                )
            }
            RecommendationCategory::Counter => {
                let best = enemies
                    .iter()
                    .max_by(|&&a, &&b| {
                        self.matchups
                            .counter_score(hero, a)
                            .total_cmp(&self.matchups.counter_score(hero, b))
                    })
                    .copied();
                match best {
                    Some(enemy) if is_pick => {
                        format!("Counters enemy {}", self.hero_name(enemy))
                    }
                    Some(enemy) => {
                        format!("Strong against your team's {}", self.hero_name(enemy))
                    }
                    None if is_pick => "Effective counter to enemy lineup".to_owned(),
                    None => "Strong against your current draft".to_owned(),
                }
            }
            RecommendationCategory::Meta => {
                format!(
                    "Strong in current meta ({:.1}% win rate)",
                    self.meta.win_rate(hero) * 100.0
                )
            }
            RecommendationCategory::Balanced => "Balanced pick for current draft".to_owned(),
        }
    }
}

fn categorize(
    scorer: &HeroScorer<'_>,
    hero: HeroId,
    is_pick: bool,
    perf: Option<&PlayerHeroPerformance>,
    allies: &[HeroId],
    enemies: &[HeroId],
) -> RecommendationCategory {
    if perf.is_some_and(|p| p.comfort_pick) {
        return RecommendationCategory::Comfort;
    }
    if is_pick && !allies.is_empty() && scorer.synergy_component(hero, allies) > CATEGORY_THRESHOLD
    {
        return RecommendationCategory::Synergy;
    }
    if !enemies.is_empty() && scorer.counter_component(hero, enemies) > CATEGORY_THRESHOLD {
        return RecommendationCategory::Counter;
    }
    if scorer.meta_component(hero) > CATEGORY_THRESHOLD {
        return RecommendationCategory::Meta;
    }
    RecommendationCategory::Balanced
}

#[cfg(test)]
mod tests {
    use draftsmith_stats::{matchup::PairSample, meta::MetaRecord};

    use super::*;

    fn hero_id(id: u32) -> HeroId {
        HeroId::new(id)
    }

    fn pool() -> Vec<Hero> {
        vec![
            Hero::new(hero_id(1), "Anti-Mage"),
            Hero::new(hero_id(2), "Axe"),
            Hero::new(hero_id(3), "Bane"),
            Hero::new(hero_id(4), "Bloodseeker"),
            Hero::new(hero_id(5), "Crystal Maiden"),
            Hero::new(hero_id(6), "Drow Ranger"),
        ]
    }

    // Sample sizes large enough that smoothing barely moves the rate.
    fn strong(observed_rate: f64) -> PairSample {
        PairSample {
            games: 100_000_000,
            observed_rate,
        }
    }

    fn recommender() -> Recommender {
        let mut matchups = MatchupTable::default();
        matchups.insert_synergy(hero_id(3), hero_id(1), strong(0.9));
        matchups.insert_counter(hero_id(4), hero_id(5), strong(0.9));
        matchups.insert_counter(hero_id(6), hero_id(1), strong(0.9));
        let meta = MetaStats::from_records(vec![MetaRecord {
            hero: hero_id(2),
            win_rate: 0.8,
            pick_rate: 0.8,
        }]);
        Recommender::new(pool(), matchups, meta)
    }

    fn comfort_perf() -> PlayerHeroPerformance {
        PlayerHeroPerformance {
            matches: 30,
            win_rate: 0.62,
            kda_ratio: 4.5,
            impact_score: 0.7,
            confidence_score: 0.9,
            comfort_pick: true,
        }
    }

    #[test]
    fn test_empty_draft_ranks_by_meta() {
        let recommender = recommender();
        let picks = recommender.recommended_picks(&[], &[], &[], Team::Radiant, None, 10);

        assert_eq!(picks.len(), 6);
        assert_eq!(picks[0].hero.id, hero_id(2));
        assert_eq!(picks[0].category, RecommendationCategory::Meta);
        assert_eq!(picks[0].reason, "Strong in current meta (80.0% win rate)");
        assert_eq!(picks[1].category, RecommendationCategory::Balanced);
    }

    #[test]
    fn test_picked_and_banned_heroes_are_excluded() {
        let recommender = recommender();
        let picks = recommender.recommended_picks(
            &[hero_id(1)],
            &[hero_id(2)],
            &[hero_id(3)],
            Team::Radiant,
            None,
            10,
        );

        let ids: Vec<HeroId> = picks.iter().map(|r| r.hero.id).collect();
        assert!(!ids.contains(&hero_id(1)));
        assert!(!ids.contains(&hero_id(2)));
        assert!(!ids.contains(&hero_id(3)));
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_strong_ally_pair_yields_synergy_recommendation() {
        let recommender = recommender();
        let picks = recommender.recommended_picks(&[hero_id(1)], &[], &[], Team::Radiant, None, 10);

        assert_eq!(picks[0].hero.id, hero_id(3));
        assert_eq!(picks[0].category, RecommendationCategory::Synergy);
        assert_eq!(picks[0].reason, "Strong synergy with Anti-Mage");
    }

    #[test]
    fn test_enemy_pick_yields_counter_recommendation() {
        let recommender = recommender();
        let picks = recommender.recommended_picks(&[], &[hero_id(5)], &[], Team::Radiant, None, 10);

        assert_eq!(picks[0].hero.id, hero_id(4));
        assert_eq!(picks[0].category, RecommendationCategory::Counter);
        assert_eq!(picks[0].reason, "Counters enemy Crystal Maiden");
    }

    #[test]
    fn test_ban_targets_threats_to_own_picks() {
        let recommender = recommender();
        let bans = recommender.recommended_bans(&[hero_id(1)], &[], &[], Team::Radiant, None, 10);

        assert_eq!(bans[0].hero.id, hero_id(6));
        assert_eq!(bans[0].category, RecommendationCategory::Counter);
        assert_eq!(bans[0].reason, "Strong against your team's Anti-Mage");
    }

    #[test]
    fn test_comfort_hero_is_listed_first() {
        let recommender = recommender();
        let mut performance = PerformanceMap::new();
        performance.insert(hero_id(5), comfort_perf());

        let picks =
            recommender.recommended_picks(&[], &[], &[], Team::Radiant, Some(&performance), 10);

        // Hero 5 has no meta or matchup edge, comfort status alone promotes
        // it past the meta leader.
        assert_eq!(picks[0].hero.id, hero_id(5));
        assert_eq!(picks[0].category, RecommendationCategory::Comfort);
        assert_eq!(
            picks[0].reason,
            "Your comfort hero (62.0% win rate in 30 matches)"
        );
        assert_eq!(picks[1].hero.id, hero_id(2));
    }

    #[test]
    fn test_personal_win_rate_replaces_global_when_experienced() {
        let recommender = recommender();
        let mut performance = PerformanceMap::new();
        performance.insert(hero_id(5), comfort_perf());

        let picks =
            recommender.recommended_picks(&[], &[], &[], Team::Radiant, Some(&performance), 10);
        let comfort = &picks[0];
        assert_eq!(comfort.matches_played, 30);
        assert!((comfort.win_rate - 0.62).abs() < 1e-12);
        assert!((comfort.kda_ratio - 4.5).abs() < 1e-12);
    }

    #[test]
    fn test_ban_keeps_global_win_rate() {
        let recommender = recommender();
        let mut performance = PerformanceMap::new();
        performance.insert(hero_id(2), comfort_perf());

        let bans =
            recommender.recommended_bans(&[], &[], &[], Team::Radiant, Some(&performance), 10);
        let flagged = bans
            .iter()
            .find(|r| r.hero.id == hero_id(2))
            .expect("hero 2 should be available to ban");
        // Personal win rate only replaces the global one on picks.
        assert!((flagged.win_rate - 0.8).abs() < 1e-12);
        assert!(flagged.comfort_pick);
    }

    #[test]
    fn test_limit_truncates_after_sorting() {
        let recommender = recommender();
        let picks = recommender.recommended_picks(&[], &[], &[], Team::Radiant, None, 2);
        assert_eq!(picks.len(), 2);
        assert_eq!(picks[0].hero.id, hero_id(2));
    }
}
