use std::{
    sync::{
        Arc, Mutex, MutexGuard,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use rand::{Rng as _, SeedableRng as _, seq::IndexedRandom as _};
use rand_pcg::Pcg32;
use tracing::{info, warn};

use crate::{
    DraftMode, DraftPhase, DraftState, HeroCatalog, HeroId, ReserveTime, Team,
    UnsupportedModeError, turn_at,
};

use super::clock::TurnClock;

/// Countdown budget for a ban turn, in seconds.
///
/// Kept separate from [`PICK_TIME`] even though the values currently agree,
/// so per-phase timings can diverge without touching the engine.
pub const BAN_TIME: u32 = 30;

/// Countdown budget for a pick turn, in seconds.
pub const PICK_TIME: u32 = 30;

/// Notification payload emitted on every turn transition.
///
/// `team` is `None` when the machine leaves the active sequence (draft
/// completed or reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnChange {
    pub team: Option<Team>,
    pub phase: DraftPhase,
}

type Subscriber = Arc<dyn Fn(TurnChange) + Send + Sync>;

/// State shared between the engine and its clock threads.
pub(crate) struct DraftShared {
    inner: Mutex<DraftInner>,
    subscribers: Mutex<Vec<Subscriber>>,
    tick_interval: Duration,
}

struct DraftInner {
    state: DraftState,
    reserve: ReserveTime,
    clock: Option<TurnClock>,
    rng: Pcg32,
}

/// The Captain's Mode draft orchestrator.
///
/// Drives the fixed 24-turn sequence: validates picks and bans for the
/// acting team, advances the turn on success, and (when timers are enabled)
/// runs a per-turn countdown that falls back to the acting team's reserve
/// pool and finally to a uniformly random forced choice.
///
/// All mutation - foreground calls and clock ticks alike - is serialized
/// through a single mutex, so a race between a user action and a timeout for
/// the same turn resolves to exactly one applied action.
pub struct CaptainsModeDraft {
    shared: Arc<DraftShared>,
    catalog: Arc<dyn HeroCatalog>,
}

impl std::fmt::Debug for CaptainsModeDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptainsModeDraft")
            .field("state", &self.current_state())
            .finish_non_exhaustive()
    }
}

impl CaptainsModeDraft {
    /// Creates an engine over the given hero catalog, with a randomly seeded
    /// forced-choice RNG and the standard one-second tick.
    #[must_use]
    pub fn new(catalog: Arc<dyn HeroCatalog>) -> Self {
        Self::with_seed(catalog, rand::rng().random())
    }

    /// Like [`Self::new`], but with a fixed RNG seed so forced-random
    /// resolutions are reproducible.
    #[must_use]
    pub fn with_seed(catalog: Arc<dyn HeroCatalog>, seed: u64) -> Self {
        Self::with_seed_and_tick(catalog, seed, Duration::from_secs(1))
    }

    /// Like [`Self::with_seed`], but with a custom tick interval. Intended
    /// for tests that need fast clocks; the countdown semantics are
    /// unchanged, each tick still represents one second of draft time.
    #[must_use]
    pub fn with_seed_and_tick(
        catalog: Arc<dyn HeroCatalog>,
        seed: u64,
        tick_interval: Duration,
    ) -> Self {
        let shared = DraftShared {
            inner: Mutex::new(DraftInner {
                state: DraftState::new(),
                reserve: ReserveTime::default(),
                clock: None,
                rng: Pcg32::seed_from_u64(seed),
            }),
            subscribers: Mutex::new(Vec::new()),
            tick_interval,
        };
        Self {
            shared: Arc::new(shared),
            catalog,
        }
    }

    /// Starts a new draft in the given mode.
    ///
    /// Clears all selections, repopulates the available pool from the
    /// catalog, resets both reserve pools, and enters turn 0. With
    /// `timer_enabled` the first turn's clock starts immediately.
    pub fn init_draft(
        &self,
        mode: DraftMode,
        timer_enabled: bool,
    ) -> Result<(), UnsupportedModeError> {
        if mode != DraftMode::CaptainsMode {
            return Err(UnsupportedModeError { mode });
        }

        let pool: Vec<HeroId> = self.catalog.all_heroes().iter().map(|h| h.id).collect();
        let change = {
            let mut inner = self.shared.lock_inner();
            if let Some(clock) = inner.clock.take() {
                clock.cancel();
            }
            inner.state.start(mode, timer_enabled, pool);
            inner.reserve = ReserveTime::default();

            let first = turn_at(0).expect("draft sequence is non-empty");
            inner.state.set_current_turn(first.team, first.phase);
            if timer_enabled {
                inner.state.set_remaining_time(BAN_TIME);
                inner.clock = Some(TurnClock::start(
                    Arc::clone(&self.shared),
                    self.shared.tick_interval,
                ));
            }
            TurnChange {
                team: Some(first.team),
                phase: first.phase,
            }
        };
        info!(%mode, timer_enabled, "draft initialized");
        self.shared.notify(change);
        Ok(())
    }

    /// Picks a hero for the acting team.
    ///
    /// Returns `false` without mutating anything unless the draft is in
    /// progress, the hero is available, and the current turn is a pick turn.
    pub fn select_hero(&self, hero: HeroId) -> bool {
        let change = {
            let mut inner = self.shared.lock_inner();
            apply_choice(&self.shared, &mut inner, hero, false)
        };
        self.shared.finish_choice(change)
    }

    /// Bans a hero for the acting team; symmetric to
    /// [`select_hero`](Self::select_hero) but requires a ban turn.
    pub fn ban_hero(&self, hero: HeroId) -> bool {
        let change = {
            let mut inner = self.shared.lock_inner();
            apply_choice(&self.shared, &mut inner, hero, true)
        };
        self.shared.finish_choice(change)
    }

    /// Stops any running clock and returns the machine to `NotStarted`.
    pub fn reset_draft(&self) {
        let pool: Vec<HeroId> = self.catalog.all_heroes().iter().map(|h| h.id).collect();
        let change = {
            let mut inner = self.shared.lock_inner();
            if let Some(clock) = inner.clock.take() {
                clock.cancel();
            }
            inner.state.reset(pool);
            inner.reserve = ReserveTime::default();
            TurnChange {
                team: None,
                phase: DraftPhase::NotStarted,
            }
        };
        info!("draft reset");
        self.shared.notify(change);
    }

    /// Snapshot of the full draft state, taken under the engine lock.
    #[must_use]
    pub fn current_state(&self) -> DraftState {
        self.shared.lock_inner().state.clone()
    }

    #[must_use]
    pub fn current_team(&self) -> Option<Team> {
        self.shared.lock_inner().state.current_team()
    }

    #[must_use]
    pub fn current_phase(&self) -> DraftPhase {
        self.shared.lock_inner().state.current_phase()
    }

    #[must_use]
    pub fn current_turn_index(&self) -> usize {
        self.shared.lock_inner().state.current_turn_index()
    }

    #[must_use]
    pub fn is_draft_in_progress(&self) -> bool {
        self.shared.lock_inner().state.draft_in_progress()
    }

    #[must_use]
    pub fn is_draft_complete(&self) -> bool {
        self.shared.lock_inner().state.draft_complete()
    }

    /// Seconds left of the current turn's own countdown.
    #[must_use]
    pub fn remaining_time(&self) -> u32 {
        self.shared.lock_inner().state.remaining_time()
    }

    /// Seconds left in a team's reserve pool.
    #[must_use]
    pub fn reserve_time(&self, team: Team) -> u32 {
        self.shared.lock_inner().reserve.remaining(team)
    }

    #[must_use]
    pub fn team_picks(&self, team: Team) -> Vec<HeroId> {
        self.shared.lock_inner().state.team_picks(team).to_vec()
    }

    #[must_use]
    pub fn banned_heroes(&self) -> Vec<HeroId> {
        self.shared.lock_inner().state.banned_heroes().to_vec()
    }

    #[must_use]
    pub fn available_heroes(&self) -> Vec<HeroId> {
        self.shared.lock_inner().state.available_heroes().to_vec()
    }

    /// Registers a callback fired after every turn transition (init, each
    /// advance, completion, reset) with the new team and phase.
    ///
    /// Callbacks run outside the state and subscriber locks, on whichever
    /// thread caused the transition; they must not block for long. A
    /// callback may itself call `subscribe`; the new registration takes
    /// effect from the next notification.
    pub fn subscribe(&self, subscriber: impl Fn(TurnChange) + Send + Sync + 'static) {
        self.shared
            .subscribers
            .lock()
            .expect("subscriber list poisoned")
            .push(Arc::new(subscriber));
    }
}

impl Drop for CaptainsModeDraft {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.shared.inner.lock()
            && let Some(clock) = inner.clock.take()
        {
            clock.cancel();
        }
    }
}

impl DraftShared {
    fn lock_inner(&self) -> MutexGuard<'_, DraftInner> {
        self.inner.lock().expect("draft state lock poisoned")
    }

    fn notify(&self, change: TurnChange) {
        // Snapshot under the lock, invoke outside it, so a callback may call
        // subscribe without deadlocking. Registrations made during a
        // notification see the next one.
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .lock()
            .expect("subscriber list poisoned")
            .clone();
        for subscriber in &subscribers {
            subscriber(change);
        }
    }

    fn finish_choice(&self, change: Option<TurnChange>) -> bool {
        match change {
            Some(change) => {
                self.notify(change);
                true
            }
            None => false,
        }
    }
}

/// Validates and applies a pick (`want_ban == false`) or ban for the current
/// turn, then advances. Returns `None` (state untouched) on any rejected
/// action. Caller must hold the engine lock.
fn apply_choice(
    shared: &Arc<DraftShared>,
    inner: &mut DraftInner,
    hero: HeroId,
    want_ban: bool,
) -> Option<TurnChange> {
    let action = if want_ban { "ban" } else { "pick" };
    if !inner.state.draft_in_progress() {
        warn!(%hero, "cannot {action} when draft is not in progress");
        return None;
    }
    if !inner.state.is_hero_available(hero) {
        warn!(%hero, "hero is not available to {action}");
        return None;
    }
    let turn = turn_at(inner.state.current_turn_index())?;
    if turn.is_ban != want_ban {
        warn!(
            %hero,
            phase = %turn.phase,
            "cannot {action} during the current phase"
        );
        return None;
    }

    if want_ban {
        inner.state.record_ban(hero);
        info!(team = %turn.team, %hero, "hero banned");
    } else {
        inner.state.record_pick(turn.team, hero);
        info!(team = %turn.team, %hero, "hero picked");
    }
    Some(advance_to_next_turn(shared, inner))
}

/// Cancels the current clock, moves to the next sequence entry, and starts
/// the next turn's clock at full budget when timers are on.
fn advance_to_next_turn(shared: &Arc<DraftShared>, inner: &mut DraftInner) -> TurnChange {
    if let Some(clock) = inner.clock.take() {
        clock.cancel();
    }

    let next_index = inner.state.current_turn_index() + 1;
    inner.state.set_current_turn_index(next_index);

    let Some(next) = turn_at(next_index) else {
        inner.state.finish();
        info!("draft completed");
        return TurnChange {
            team: None,
            phase: DraftPhase::Completed,
        };
    };

    inner.state.set_current_turn(next.team, next.phase);
    if inner.state.timer_enabled() {
        inner
            .state
            .set_remaining_time(if next.is_ban { BAN_TIME } else { PICK_TIME });
        inner.clock = Some(TurnClock::start(
            Arc::clone(shared),
            shared.tick_interval,
        ));
    }
    info!(team = %next.team, phase = %next.phase, turn = next_index, "advanced to next turn");
    TurnChange {
        team: Some(next.team),
        phase: next.phase,
    }
}

/// One clock tick. Returns `false` when the clock should stop.
///
/// Evaluated in order: spend the turn's own countdown, then the acting
/// team's reserve pool, then force a uniformly random choice.
pub(crate) fn clock_tick(shared: &Arc<DraftShared>, cancelled: &AtomicBool) -> bool {
    let change = {
        let Ok(mut inner) = shared.inner.lock() else {
            return false;
        };
        if cancelled.load(Ordering::Acquire) {
            return false;
        }
        if !inner.state.draft_in_progress() {
            return false;
        }

        let remaining = inner.state.remaining_time();
        if remaining > 0 {
            inner.state.set_remaining_time(remaining - 1);
            None
        } else {
            let Some(team) = inner.state.current_team() else {
                return false;
            };
            if inner.reserve.remaining(team) > 0 {
                inner.reserve.consume(team);
                None
            } else {
                force_random_resolution(shared, &mut inner)
            }
        }
    };
    if let Some(change) = change {
        shared.notify(change);
    }
    true
}

/// Resolves an out-of-time turn with a uniformly random available hero.
/// A no-op when the pool is exhausted.
fn force_random_resolution(
    shared: &Arc<DraftShared>,
    inner: &mut DraftInner,
) -> Option<TurnChange> {
    let DraftInner { state, rng, .. } = &mut *inner;
    let hero = state.available_heroes().choose(rng).copied()?;
    let turn = turn_at(state.current_turn_index())?;
    info!(team = %turn.team, %hero, "turn timed out, forcing random choice");
    apply_choice(shared, inner, hero, turn.is_ban)
}
