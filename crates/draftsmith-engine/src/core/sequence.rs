use serde::{Deserialize, Serialize};

/// One of the two drafting sides.
///
/// Radiant is the first-pick side (team A in the official sequence), Dire the
/// second-pick side (team B).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Team {
    Radiant,
    Dire,
}

impl Team {
    /// Returns the opposing team.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Radiant => Self::Dire,
            Self::Dire => Self::Radiant,
        }
    }
}

/// Draft format selector.
///
/// Only Captain's Mode is implemented by this engine; requesting anything
/// else from [`CaptainsModeDraft::init_draft`] is a configuration error.
///
/// [`CaptainsModeDraft::init_draft`]: crate::CaptainsModeDraft::init_draft
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum DraftMode {
    #[display("Captain's Mode")]
    CaptainsMode,
    #[display("All Pick")]
    AllPick,
}

/// Phase of a Captain's Mode draft.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum DraftPhase {
    #[display("Not started")]
    NotStarted,
    #[display("Ban Phase 1")]
    Ban1,
    #[display("Pick Phase 1")]
    Pick1,
    #[display("Ban Phase 2")]
    Ban2,
    #[display("Pick Phase 2")]
    Pick2,
    #[display("Ban Phase 3")]
    Ban3,
    #[display("Pick Phase 3")]
    Pick3,
    #[display("Completed")]
    Completed,
}

/// One entry of the fixed draft sequence. Never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftTurn {
    pub team: Team,
    pub phase: DraftPhase,
    pub is_ban: bool,
}

const fn turn(team: Team, phase: DraftPhase, is_ban: bool) -> DraftTurn {
    DraftTurn {
        team,
        phase,
        is_ban,
    }
}

/// The canonical Captain's Mode turn order (patch 7.33).
///
/// A = Radiant (first pick), B = Dire (second pick):
///
/// 1. Ban Phase 1: ABBABBA (7 bans)
/// 2. Pick Phase 1: AB (2 picks)
/// 3. Ban Phase 2: AAB (3 bans)
/// 4. Pick Phase 2: BAABBA (6 picks)
/// 5. Ban Phase 3: ABBA (4 bans)
/// 6. Pick Phase 3: AB (2 picks)
///
/// Total: 14 bans (7 per team) and 10 picks (5 per team).
pub const DRAFT_SEQUENCE: [DraftTurn; 24] = [
    // Ban Phase 1: ABBABBA
    turn(Team::Radiant, DraftPhase::Ban1, true),
    turn(Team::Dire, DraftPhase::Ban1, true),
    turn(Team::Dire, DraftPhase::Ban1, true),
    turn(Team::Radiant, DraftPhase::Ban1, true),
    turn(Team::Dire, DraftPhase::Ban1, true),
    turn(Team::Dire, DraftPhase::Ban1, true),
    turn(Team::Radiant, DraftPhase::Ban1, true),
    // Pick Phase 1: AB
    turn(Team::Radiant, DraftPhase::Pick1, false),
    turn(Team::Dire, DraftPhase::Pick1, false),
    // Ban Phase 2: AAB
    turn(Team::Radiant, DraftPhase::Ban2, true),
    turn(Team::Radiant, DraftPhase::Ban2, true),
    turn(Team::Dire, DraftPhase::Ban2, true),
    // Pick Phase 2: BAABBA
    turn(Team::Dire, DraftPhase::Pick2, false),
    turn(Team::Radiant, DraftPhase::Pick2, false),
    turn(Team::Radiant, DraftPhase::Pick2, false),
    turn(Team::Dire, DraftPhase::Pick2, false),
    turn(Team::Dire, DraftPhase::Pick2, false),
    turn(Team::Radiant, DraftPhase::Pick2, false),
    // Ban Phase 3: ABBA
    turn(Team::Radiant, DraftPhase::Ban3, true),
    turn(Team::Dire, DraftPhase::Ban3, true),
    turn(Team::Dire, DraftPhase::Ban3, true),
    turn(Team::Radiant, DraftPhase::Ban3, true),
    // Pick Phase 3: AB
    turn(Team::Radiant, DraftPhase::Pick3, false),
    turn(Team::Dire, DraftPhase::Pick3, false),
];

/// Returns the turn at the given position in the draft sequence, or `None`
/// past the end (a finished draft sits at index 24).
#[must_use]
pub fn turn_at(index: usize) -> Option<DraftTurn> {
    DRAFT_SEQUENCE.get(index).copied()
}
