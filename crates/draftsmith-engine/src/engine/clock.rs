use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};

use super::draft::DraftShared;

/// Background countdown for a single turn.
///
/// The clock ticks at a fixed cadence on its own thread. Every tick is
/// applied under the engine lock, and the cancellation flag is re-checked
/// *after* that lock is taken: once [`cancel`](Self::cancel) has been called
/// while holding the lock, no further tick from this clock can mutate the
/// draft, even if its thread is already awake. Advancing to the next turn
/// therefore never races against a leftover tick from the previous one.
///
/// Clocks are cancelled, never joined: cancellation may come from the
/// clock's own thread (the forced-random path advances the turn, which
/// cancels the clock that forced it).
#[derive(Debug)]
pub(crate) struct TurnClock {
    cancelled: Arc<AtomicBool>,
}

impl TurnClock {
    /// Spawns the tick thread for the current turn.
    pub(crate) fn start(shared: Arc<DraftShared>, tick_interval: Duration) -> Self {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        thread::spawn(move || {
            loop {
                thread::sleep(tick_interval);
                if flag.load(Ordering::Acquire) {
                    return;
                }
                if !super::draft::clock_tick(&shared, &flag) {
                    return;
                }
            }
        });
        Self { cancelled }
    }

    /// Stops the clock. Must be called while holding the engine lock so the
    /// no-tick-after-cancel guarantee holds.
    pub(crate) fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }
}

impl Drop for TurnClock {
    fn drop(&mut self) {
        self.cancel();
    }
}
