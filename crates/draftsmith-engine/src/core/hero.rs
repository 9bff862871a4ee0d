use serde::{Deserialize, Serialize};

/// Stable numeric hero identifier.
///
/// Hero ids are small stable integers assigned by the game; everything inside
/// the draft core references heroes by id only. Display names live in the
/// catalog and are resolved at the presentation edge.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct HeroId(u32);

impl HeroId {
    /// Creates a hero id from its raw numeric value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// A catalog entry pairing a hero id with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
}

impl Hero {
    #[must_use]
    pub fn new(id: HeroId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Read-only source of the hero pool a draft is played over.
///
/// The import pipeline that fills the catalog is an external collaborator;
/// the engine only ever asks for the full list when a draft starts or resets.
pub trait HeroCatalog: Send + Sync {
    /// Returns every hero that can be picked or banned.
    fn all_heroes(&self) -> Vec<Hero>;
}

/// Catalog backed by a fixed in-memory list, for the CLI and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHeroCatalog {
    heroes: Vec<Hero>,
}

impl InMemoryHeroCatalog {
    #[must_use]
    pub fn new(heroes: Vec<Hero>) -> Self {
        Self { heroes }
    }
}

impl HeroCatalog for InMemoryHeroCatalog {
    fn all_heroes(&self) -> Vec<Hero> {
        self.heroes.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_id_serializes_as_plain_integer() {
        let id = HeroId::new(74);
        assert_eq!(serde_json::to_string(&id).unwrap(), "74");

        let back: HeroId = serde_json::from_str("74").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_hero_round_trip() {
        let hero = Hero::new(HeroId::new(1), "Anti-Mage");
        let json = serde_json::to_string(&hero).unwrap();
        let back: Hero = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hero);
    }

    #[test]
    fn test_in_memory_catalog_returns_all_heroes() {
        let heroes = vec![
            Hero::new(HeroId::new(1), "Anti-Mage"),
            Hero::new(HeroId::new(2), "Axe"),
        ];
        let catalog = InMemoryHeroCatalog::new(heroes.clone());
        assert_eq!(catalog.all_heroes(), heroes);
    }
}
