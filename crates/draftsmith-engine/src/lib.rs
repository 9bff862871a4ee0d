//! Captain's Mode draft engine.
//!
//! This crate implements the formal turn-based drafting procedure used by the
//! recommendation layer:
//!
//! - [`DRAFT_SEQUENCE`] - The fixed 24-turn Captain's Mode order (pure data)
//! - [`DraftState`] - The mutable aggregate describing one in-progress draft
//! - [`CaptainsModeDraft`] - Orchestrator exposing `init_draft` / `select_hero` /
//!   `ban_hero` / `reset_draft`
//! - A per-turn countdown clock with per-team reserve pools and a
//!   forced-random fallback when both are exhausted
//!
//! # Draft Flow
//!
//! 1. Initialize with [`CaptainsModeDraft::init_draft`] (optionally with turn timers)
//! 2. The acting team bans or picks via [`CaptainsModeDraft::ban_hero`] /
//!    [`CaptainsModeDraft::select_hero`]
//! 3. Each accepted action advances to the next of the 24 turns
//! 4. After turn 24 the draft is complete (14 bans, 10 picks)
//!
//! Invalid actions (wrong phase, unavailable hero, draft not running) are not
//! errors: they return `false` and leave the state untouched.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use draftsmith_engine::{
//!     CaptainsModeDraft, DraftMode, Hero, HeroId, InMemoryHeroCatalog,
//! };
//!
//! let heroes = (1..=24)
//!     .map(|id| Hero::new(HeroId::new(id), format!("Hero {id}")))
//!     .collect();
//! let draft = CaptainsModeDraft::new(Arc::new(InMemoryHeroCatalog::new(heroes)));
//!
//! draft.init_draft(DraftMode::CaptainsMode, false).unwrap();
//! assert!(draft.ban_hero(HeroId::new(1)));
//! assert!(!draft.ban_hero(HeroId::new(1))); // already banned
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Error returned by [`CaptainsModeDraft::init_draft`] for draft modes this
/// engine does not implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("draft mode {mode} is not supported by this engine")]
pub struct UnsupportedModeError {
    /// The rejected mode.
    pub mode: DraftMode,
}
