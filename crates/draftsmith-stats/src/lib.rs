//! Matchup and meta statistics backing the draft recommendations.
//!
//! This crate provides the confidence-weighted statistics lookups the scorer
//! reads:
//!
//! - **Bayesian smoothing** ([`smoothing`]): pulls low-sample observed rates
//!   toward a neutral 0.5 prior so a 3-game 100% sample cannot outrank a
//!   5,000-game 55% one
//! - **Matchup tables** ([`matchup`]): synergy scores for hero pairs
//!   (canonically ordered keys) and directional counter scores
//! - **Meta statistics** ([`meta`]): global per-hero win and pick rates
//!
//! Absence of data is never an error anywhere in this crate: a pair that was
//! never observed reads as the neutral prior, and an unknown hero reads as a
//! 50% win rate with a 0% pick rate. Recommendations can therefore always be
//! produced, even for brand-new heroes.
//!
//! # Examples
//!
//! ## Smoothing raw aggregates
//!
//! ```
//! use draftsmith_stats::smoothing::confidence_weighted;
//!
//! // No data: exactly the neutral prior.
//! assert_eq!(confidence_weighted(0, 1.0), 0.5);
//!
//! // At the confidence threshold the observed rate counts half.
//! let smoothed = confidence_weighted(1000, 0.7);
//! assert!((smoothed - 0.6).abs() < 1e-9);
//! ```
//!
//! ## Looking up matchups
//!
//! ```
//! use draftsmith_engine::HeroId;
//! use draftsmith_stats::matchup::{MatchupTable, SynergyRecord};
//!
//! let table = MatchupTable::from_records(
//!     vec![SynergyRecord {
//!         hero: HeroId::new(1),
//!         ally: HeroId::new(2),
//!         games: 5000,
//!         win_rate: 0.58,
//!     }],
//!     vec![],
//! );
//!
//! // Pair keys are canonical: both orders read the same sample.
//! let ab = table.synergy_score(HeroId::new(1), HeroId::new(2));
//! let ba = table.synergy_score(HeroId::new(2), HeroId::new(1));
//! assert_eq!(ab, ba);
//!
//! // Unknown pairs fall back to the neutral prior.
//! assert_eq!(table.synergy_score(HeroId::new(1), HeroId::new(9)), 0.5);
//! ```

pub mod matchup;
pub mod meta;
pub mod smoothing;
