use std::{fs, path::Path};

use anyhow::Context as _;
use draftsmith_engine::{Hero, HeroId};
use draftsmith_recommender::{PerformanceMap, PlayerHeroPerformance};
use draftsmith_stats::{
    matchup::{CounterRecord, MatchupTable, SynergyRecord},
    meta::{MetaRecord, MetaStats},
};
use serde::{Deserialize, Serialize};

/// On-disk draft dataset: the hero pool plus optional statistics tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct DraftData {
    pub(crate) heroes: Vec<Hero>,
    #[serde(default)]
    pub(crate) synergies: Vec<SynergyRecord>,
    #[serde(default)]
    pub(crate) counters: Vec<CounterRecord>,
    #[serde(default)]
    pub(crate) meta: Vec<MetaRecord>,
}

impl DraftData {
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read draft data from {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse draft data in {}", path.display()))
    }

    pub(crate) fn load_or_builtin(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// A statistics-free pool of well-known heroes, enough for a full draft.
    pub(crate) fn builtin() -> Self {
        let names = [
            (1, "Anti-Mage"),
            (2, "Axe"),
            (3, "Bane"),
            (4, "Bloodseeker"),
            (5, "Crystal Maiden"),
            (6, "Drow Ranger"),
            (7, "Earthshaker"),
            (8, "Juggernaut"),
            (9, "Mirana"),
            (10, "Morphling"),
            (11, "Shadow Fiend"),
            (12, "Phantom Lancer"),
            (13, "Puck"),
            (14, "Pudge"),
            (15, "Razor"),
            (16, "Sand King"),
            (17, "Storm Spirit"),
            (18, "Sven"),
            (19, "Tiny"),
            (20, "Vengeful Spirit"),
            (21, "Windranger"),
            (22, "Zeus"),
            (23, "Kunkka"),
            (25, "Lina"),
            (26, "Lion"),
            (27, "Shadow Shaman"),
            (28, "Slardar"),
            (29, "Tidehunter"),
            (30, "Witch Doctor"),
            (31, "Lich"),
        ];
        Self {
            heroes: names
                .into_iter()
                .map(|(id, name)| Hero::new(HeroId::new(id), name))
                .collect(),
            synergies: Vec::new(),
            counters: Vec::new(),
            meta: Vec::new(),
        }
    }

    pub(crate) fn split(self) -> (Vec<Hero>, MatchupTable, MetaStats) {
        let matchups = MatchupTable::from_records(self.synergies, self.counters);
        let meta = MetaStats::from_records(self.meta);
        (self.heroes, matchups, meta)
    }
}

/// One row of a player performance file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PerformanceRecord {
    pub(crate) hero: HeroId,
    #[serde(flatten)]
    pub(crate) performance: PlayerHeroPerformance,
}

pub(crate) fn load_performance(path: &Path) -> anyhow::Result<PerformanceMap> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read performance data from {}", path.display()))?;
    let records: Vec<PerformanceRecord> = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse performance data in {}", path.display()))?;
    Ok(records
        .into_iter()
        .map(|record| (record.hero, record.performance))
        .collect())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_builtin_pool_covers_a_full_draft() {
        let data = DraftData::builtin();
        // 24 turns in a draft; the pool must never run dry.
        assert!(data.heroes.len() >= 24);

        let ids: HashSet<HeroId> = data.heroes.iter().map(|h| h.id).collect();
        assert_eq!(ids.len(), data.heroes.len());
    }

    #[test]
    fn test_draft_data_parses_with_optional_tables_missing() {
        let json = r#"{"heroes": [{"id": 1, "name": "Anti-Mage"}]}"#;
        let data: DraftData = serde_json::from_str(json).unwrap();
        assert_eq!(data.heroes.len(), 1);
        assert!(data.synergies.is_empty());
        assert!(data.meta.is_empty());
    }

    #[test]
    fn test_performance_record_flattens_fields() {
        let json = r#"[{
            "hero": 14,
            "matches": 42,
            "win_rate": 0.57,
            "kda_ratio": 3.1,
            "impact_score": 0.6,
            "confidence_score": 0.9,
            "comfort_pick": true
        }]"#;
        let records: Vec<PerformanceRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].hero, HeroId::new(14));
        assert_eq!(records[0].performance.matches, 42);
    }
}
