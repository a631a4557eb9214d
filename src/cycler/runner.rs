//! Timer-driven cycler: one periodic task plus, in fade mode, a one-shot
//! reveal task per period. Both are owned here and released on teardown.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use super::list::TaglineList;
use super::state::CyclerState;
use super::timing::Timing;

struct Shared {
    tx: watch::Sender<CyclerState>,
    token: CancellationToken,
    pending_reveal: Mutex<Option<JoinHandle<()>>>,
}

impl Shared {
    /// Apply `f` to the published state unless the cycler was torn down.
    ///
    /// The check runs under the channel's write lock, the same lock teardown
    /// takes to cancel, so no mutation can land after teardown returns.
    fn mutate(&self, f: impl FnOnce(&mut CyclerState) -> bool) -> bool {
        self.tx.send_if_modified(|state| {
            if self.token.is_cancelled() {
                return false;
            }
            f(state)
        })
    }

    fn track_reveal(&self, handle: JoinHandle<()>) {
        let mut slot = self
            .pending_reveal
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(stale) = slot.replace(handle) {
            stale.abort();
        }
    }

    fn take_reveal(&self) -> Option<JoinHandle<()>> {
        self.pending_reveal
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

/// A mounted tagline cycler.
///
/// Created with [`TaglineCycler::mount`], which must be called from inside a
/// tokio runtime. State changes are published to every
/// [`subscribe`](TaglineCycler::subscribe)r. Dropping the cycler tears it down.
pub struct TaglineCycler {
    timing: Timing,
    shared: Arc<Shared>,
    ticker: Option<JoinHandle<()>>,
}

impl TaglineCycler {
    pub fn mount(list: TaglineList, timing: Timing) -> Self {
        let (tx, _) = watch::channel(CyclerState::default());
        let shared = Arc::new(Shared {
            tx,
            token: CancellationToken::new(),
            pending_reveal: Mutex::new(None),
        });

        let first_tick = Instant::now() + timing.period;
        let taglines = list.len();
        let ticker = tokio::spawn(run_ticker(Arc::clone(&shared), list, timing, first_tick));

        debug!(
            variant = %timing.variant,
            taglines,
            period_ms = timing.period.as_millis() as u64,
            hide_delay_ms = timing.hide_delay.map(|d| d.as_millis() as u64),
            "tagline cycler mounted"
        );

        Self {
            timing,
            shared,
            ticker: Some(ticker),
        }
    }

    /// Cancel the periodic task and any in-flight reveal. Safe to call more
    /// than once; later calls do nothing.
    pub fn teardown(&mut self) {
        let Some(ticker) = self.ticker.take() else {
            return;
        };

        self.shared.tx.send_if_modified(|_| {
            self.shared.token.cancel();
            false
        });
        ticker.abort();
        let had_reveal = match self.shared.take_reveal() {
            Some(reveal) => {
                reveal.abort();
                true
            }
            None => false,
        };

        debug!(
            variant = %self.timing.variant,
            position = self.snapshot().position,
            had_reveal,
            "tagline cycler torn down"
        );
    }

    pub fn subscribe(&self) -> watch::Receiver<CyclerState> {
        self.shared.tx.subscribe()
    }

    pub fn snapshot(&self) -> CyclerState {
        *self.shared.tx.borrow()
    }
}

impl Drop for TaglineCycler {
    fn drop(&mut self) {
        self.teardown();
    }
}

async fn run_ticker(shared: Arc<Shared>, list: TaglineList, timing: Timing, first_tick: Instant) {
    let mut interval = tokio::time::interval_at(first_tick, timing.period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = shared.token.cancelled() => break,
            _ = interval.tick() => {}
        }

        match timing.hide_delay {
            None => {
                shared.mutate(|state| {
                    state.advance(&list);
                    trace!(position = state.position, "tagline advanced");
                    true
                });
            }
            Some(delay) => {
                shared.mutate(CyclerState::hide);
                let reveal = tokio::spawn(reveal_after(Arc::clone(&shared), list.clone(), delay));
                shared.track_reveal(reveal);
            }
        }
    }
}

async fn reveal_after(shared: Arc<Shared>, list: TaglineList, delay: Duration) {
    tokio::select! {
        _ = shared.token.cancelled() => {}
        _ = tokio::time::sleep(delay) => {
            shared.mutate(|state| {
                state.reveal_next(&list);
                trace!(position = state.position, "tagline revealed");
                true
            });
        }
    }
}
