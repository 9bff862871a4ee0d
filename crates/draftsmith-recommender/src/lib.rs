//! Pick and ban recommendations for a Captain's Mode draft in progress.
//!
//! The recommender blends four signals for every available hero:
//!
//! - **Synergy**: average smoothed win rate alongside the allies already
//!   picked
//! - **Counter**: average smoothed win rate against the enemies already
//!   picked
//! - **Meta**: the hero's global win and pick rates
//! - **Personal**: the requesting player's track record on the hero, weighted
//!   by how much experience backs it
//!
//! The base weights are 30/30/20 with a personal share that grows from 20% to
//! 40% as the player's match count on the hero approaches 20; the other three
//! weights shrink proportionally so the total always stays 1. Ban scoring
//! runs the same blend from the opposing team's perspective, without the
//! personal signal.
//!
//! Each [`Recommendation`] carries a category and a human-readable reason so
//! a caller can explain the suggestion, and comfort heroes are surfaced ahead
//! of higher-scoring strangers whenever personal data is supplied.
//!
//! # Examples
//!
//! ```
//! use draftsmith_engine::{Hero, HeroId, Team};
//! use draftsmith_recommender::Recommender;
//! use draftsmith_stats::{matchup::MatchupTable, meta::MetaStats};
//!
//! let pool = vec![
//!     Hero::new(HeroId::new(1), "Anti-Mage"),
//!     Hero::new(HeroId::new(2), "Axe"),
//!     Hero::new(HeroId::new(3), "Bane"),
//! ];
//! let recommender = Recommender::new(pool, MatchupTable::default(), MetaStats::default());
//!
//! let picks = recommender.recommended_picks(&[], &[], &[], Team::Radiant, None, 3);
//! assert_eq!(picks.len(), 3);
//! ```

mod performance;
mod ranker;
mod scorer;

pub use self::{performance::*, ranker::*, scorer::*};
