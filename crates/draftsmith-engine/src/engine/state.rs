use arrayvec::ArrayVec;

use crate::{DraftMode, DraftPhase, HeroId, Team};

/// Reserve time granted to each team at draft start, in seconds.
pub const RESERVE_TIME: u32 = 130;

/// Maximum picks per team in Captain's Mode.
pub const PICKS_PER_TEAM: usize = 5;

/// Total bans in a Captain's Mode draft.
pub const TOTAL_BANS: usize = 14;

/// The mutable aggregate describing one in-progress draft.
///
/// Invariants (upheld by the crate-private mutators, relied on everywhere):
///
/// - `available_heroes` is disjoint from picks and bans
/// - the two pick lists and the ban list are pairwise disjoint
/// - `current_turn_index ∈ [0, 24]`, and `== 24` exactly when
///   `draft_complete`
///
/// External callers only ever see clones of this value, taken under the
/// engine lock.
#[derive(Debug, Clone)]
pub struct DraftState {
    mode: DraftMode,
    current_phase: DraftPhase,
    current_team: Option<Team>,
    timer_enabled: bool,
    remaining_time: u32,
    draft_in_progress: bool,
    draft_complete: bool,
    radiant_picks: ArrayVec<HeroId, PICKS_PER_TEAM>,
    dire_picks: ArrayVec<HeroId, PICKS_PER_TEAM>,
    banned_heroes: ArrayVec<HeroId, TOTAL_BANS>,
    available_heroes: Vec<HeroId>,
    current_turn_index: usize,
}

impl Default for DraftState {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftState {
    /// Creates an empty, not-started draft state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: DraftMode::CaptainsMode,
            current_phase: DraftPhase::NotStarted,
            current_team: None,
            timer_enabled: false,
            remaining_time: 0,
            draft_in_progress: false,
            draft_complete: false,
            radiant_picks: ArrayVec::new(),
            dire_picks: ArrayVec::new(),
            banned_heroes: ArrayVec::new(),
            available_heroes: Vec::new(),
            current_turn_index: 0,
        }
    }

    #[must_use]
    pub fn mode(&self) -> DraftMode {
        self.mode
    }

    #[must_use]
    pub fn current_phase(&self) -> DraftPhase {
        self.current_phase
    }

    /// The team whose turn it is, or `None` outside an active draft.
    #[must_use]
    pub fn current_team(&self) -> Option<Team> {
        self.current_team
    }

    #[must_use]
    pub fn timer_enabled(&self) -> bool {
        self.timer_enabled
    }

    /// Seconds left of the current turn's own countdown budget.
    #[must_use]
    pub fn remaining_time(&self) -> u32 {
        self.remaining_time
    }

    #[must_use]
    pub fn draft_in_progress(&self) -> bool {
        self.draft_in_progress
    }

    #[must_use]
    pub fn draft_complete(&self) -> bool {
        self.draft_complete
    }

    #[must_use]
    pub fn radiant_picks(&self) -> &[HeroId] {
        &self.radiant_picks
    }

    #[must_use]
    pub fn dire_picks(&self) -> &[HeroId] {
        &self.dire_picks
    }

    #[must_use]
    pub fn team_picks(&self, team: Team) -> &[HeroId] {
        match team {
            Team::Radiant => &self.radiant_picks,
            Team::Dire => &self.dire_picks,
        }
    }

    #[must_use]
    pub fn banned_heroes(&self) -> &[HeroId] {
        &self.banned_heroes
    }

    #[must_use]
    pub fn available_heroes(&self) -> &[HeroId] {
        &self.available_heroes
    }

    #[must_use]
    pub fn is_hero_available(&self, hero: HeroId) -> bool {
        self.available_heroes.contains(&hero)
    }

    /// Position in the 24-turn sequence; 24 once the draft is complete.
    #[must_use]
    pub fn current_turn_index(&self) -> usize {
        self.current_turn_index
    }

    /// Puts the state into a fresh in-progress draft over the given pool.
    pub(crate) fn start(&mut self, mode: DraftMode, timer_enabled: bool, pool: Vec<HeroId>) {
        self.clear_selections();
        self.mode = mode;
        self.timer_enabled = timer_enabled;
        self.remaining_time = 0;
        self.draft_in_progress = true;
        self.draft_complete = false;
        self.available_heroes = pool;
        self.current_turn_index = 0;
    }

    /// Returns the state to `NotStarted` over the given pool.
    pub(crate) fn reset(&mut self, pool: Vec<HeroId>) {
        self.clear_selections();
        self.current_phase = DraftPhase::NotStarted;
        self.current_team = None;
        self.remaining_time = 0;
        self.draft_in_progress = false;
        self.draft_complete = false;
        self.available_heroes = pool;
        self.current_turn_index = 0;
    }

    fn clear_selections(&mut self) {
        self.radiant_picks.clear();
        self.dire_picks.clear();
        self.banned_heroes.clear();
        self.available_heroes.clear();
    }

    pub(crate) fn set_current_turn(&mut self, team: Team, phase: DraftPhase) {
        self.current_team = Some(team);
        self.current_phase = phase;
    }

    pub(crate) fn set_current_turn_index(&mut self, index: usize) {
        self.current_turn_index = index;
    }

    pub(crate) fn set_remaining_time(&mut self, seconds: u32) {
        self.remaining_time = seconds;
    }

    /// Moves an available hero onto a team's pick list.
    pub(crate) fn record_pick(&mut self, team: Team, hero: HeroId) {
        self.take_from_available(hero);
        match team {
            Team::Radiant => self.radiant_picks.push(hero),
            Team::Dire => self.dire_picks.push(hero),
        }
    }

    /// Moves an available hero onto the ban list.
    pub(crate) fn record_ban(&mut self, hero: HeroId) {
        self.take_from_available(hero);
        self.banned_heroes.push(hero);
    }

    fn take_from_available(&mut self, hero: HeroId) {
        let pos = self
            .available_heroes
            .iter()
            .position(|&h| h == hero)
            .expect("hero availability checked before recording");
        self.available_heroes.remove(pos);
    }

    /// Marks the draft finished after the last turn.
    pub(crate) fn finish(&mut self) {
        self.draft_in_progress = false;
        self.draft_complete = true;
        self.current_phase = DraftPhase::Completed;
        self.remaining_time = 0;
    }
}

/// Per-team banked time, consumed only after a turn's own countdown hits
/// zero. Reset only when a draft is initialized or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveTime {
    radiant: u32,
    dire: u32,
}

impl Default for ReserveTime {
    fn default() -> Self {
        Self {
            radiant: RESERVE_TIME,
            dire: RESERVE_TIME,
        }
    }
}

impl ReserveTime {
    /// Seconds left in the given team's pool.
    #[must_use]
    pub fn remaining(&self, team: Team) -> u32 {
        match team {
            Team::Radiant => self.radiant,
            Team::Dire => self.dire,
        }
    }

    /// Consumes one second from the given team's pool only.
    pub(crate) fn consume(&mut self, team: Team) {
        let pool = match team {
            Team::Radiant => &mut self.radiant,
            Team::Dire => &mut self.dire,
        };
        *pool = pool.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(n: u32) -> Vec<HeroId> {
        (1..=n).map(HeroId::new).collect()
    }

    fn assert_partition(state: &DraftState, original: &[HeroId]) {
        let mut seen: Vec<HeroId> = state.available_heroes().to_vec();
        seen.extend_from_slice(state.radiant_picks());
        seen.extend_from_slice(state.dire_picks());
        seen.extend_from_slice(state.banned_heroes());
        seen.sort();

        let mut expected = original.to_vec();
        expected.sort();
        assert_eq!(seen, expected, "picks/bans/available must partition the pool");
    }

    #[test]
    fn test_start_populates_pool_and_clears_lists() {
        let mut state = DraftState::new();
        state.start(DraftMode::CaptainsMode, true, pool(10));

        assert!(state.draft_in_progress());
        assert!(!state.draft_complete());
        assert!(state.timer_enabled());
        assert_eq!(state.available_heroes().len(), 10);
        assert_eq!(state.current_turn_index(), 0);
    }

    #[test]
    fn test_record_pick_and_ban_keep_partition() {
        let original = pool(6);
        let mut state = DraftState::new();
        state.start(DraftMode::CaptainsMode, false, original.clone());

        state.record_ban(HeroId::new(1));
        assert_partition(&state, &original);

        state.record_pick(Team::Radiant, HeroId::new(2));
        assert_partition(&state, &original);

        state.record_pick(Team::Dire, HeroId::new(3));
        assert_partition(&state, &original);

        assert!(!state.is_hero_available(HeroId::new(1)));
        assert_eq!(state.radiant_picks(), [HeroId::new(2)]);
        assert_eq!(state.dire_picks(), [HeroId::new(3)]);
        assert_eq!(state.banned_heroes(), [HeroId::new(1)]);
    }

    #[test]
    fn test_reset_returns_to_not_started() {
        let mut state = DraftState::new();
        state.start(DraftMode::CaptainsMode, true, pool(5));
        state.record_ban(HeroId::new(1));

        state.reset(pool(5));
        assert_eq!(state.current_phase(), DraftPhase::NotStarted);
        assert_eq!(state.current_team(), None);
        assert!(!state.draft_in_progress());
        assert!(!state.draft_complete());
        assert!(state.banned_heroes().is_empty());
        assert_eq!(state.available_heroes().len(), 5);
    }

    #[test]
    fn test_reserve_time_is_per_team() {
        let mut reserve = ReserveTime::default();
        assert_eq!(reserve.remaining(Team::Radiant), RESERVE_TIME);

        reserve.consume(Team::Dire);
        assert_eq!(reserve.remaining(Team::Dire), RESERVE_TIME - 1);
        assert_eq!(reserve.remaining(Team::Radiant), RESERVE_TIME);
    }

    #[test]
    fn test_reserve_time_saturates_at_zero() {
        let mut reserve = ReserveTime::default();
        for _ in 0..RESERVE_TIME + 5 {
            reserve.consume(Team::Radiant);
        }
        assert_eq!(reserve.remaining(Team::Radiant), 0);
    }
}
