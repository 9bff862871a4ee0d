//! Draft orchestration: mutable state, the turn clock, and the engine.
//!
//! - [`DraftState`] - Aggregate for one in-progress draft (picks, bans,
//!   availability, timer fields)
//! - [`ReserveTime`] - Per-team banked time pools
//! - [`CaptainsModeDraft`] - The orchestrator driving the 24-turn sequence
//! - [`TurnChange`] - Notification payload emitted on every turn transition
//!
//! The clock itself (`clock`) is an implementation detail: it is started
//! and cancelled by the engine and never outlives the turn it was created
//! for.

pub use self::{draft::*, state::*};

mod clock;
mod draft;
mod state;
