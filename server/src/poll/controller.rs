//! Polling controller
//!
//! Keeps a deployment list fresh on an interval without hammering the
//! network or running after the consuming view has gone away. The timer
//! handle is owned by the controller instance; `start`/`stop` are its only
//! mutators, so there is no hidden global timer cell.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use tokio::task::JoinHandle;
use tracing::debug;

/// Tick callback. Each invocation is spawned as its own task: overlapping
/// in-flight ticks are possible when a fetch outlives the interval, and a
/// stopped timer does not cancel ticks already in flight.
pub type TickFn = Arc<dyn Fn() -> BoxFuture<'static, ()> + Send + Sync>;

/// Recurring scheduler with states `stopped` and `active`, initially stopped.
pub struct PollingController {
    interval: Duration,
    on_tick: TickFn,
    timer: Option<JoinHandle<()>>,
}

impl PollingController {
    pub fn new(interval: Duration, on_tick: TickFn) -> Self {
        Self {
            interval,
            on_tick,
            timer: None,
        }
    }

    /// Convenience constructor from an async closure
    pub fn from_fn<F, Fut>(interval: Duration, f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::new(interval, Arc::new(move || Box::pin(f()) as BoxFuture<'static, ()>))
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    /// Transition to `active` and schedule the recurring timer. A no-op when
    /// already active, so overlapping lifecycle hooks cannot double-register.
    pub fn start(&mut self) {
        if self.timer.is_some() {
            return;
        }

        let interval = self.interval;
        let on_tick = self.on_tick.clone();
        self.timer = Some(tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                debug!("Polling tick");
                tokio::spawn(on_tick());
            }
        }));
    }

    /// Transition to `stopped`, cancelling the pending timer. A no-op when
    /// already stopped.
    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    /// Run one out-of-band tick immediately, outside the timer schedule.
    pub async fn tick_now(&self) {
        (self.on_tick)().await;
    }

    /// Mount contract for the consuming view: one immediate tick, then the
    /// recurring schedule.
    pub async fn mount(&mut self) {
        self.tick_now().await;
        self.start();
    }

    /// Visibility signal. A hidden view pauses polling entirely; becoming
    /// visible again fetches once so the operator sees fresh data without
    /// waiting a full interval, then resumes the schedule.
    pub async fn set_visible(&mut self, visible: bool) {
        if visible {
            self.tick_now().await;
            self.start();
        } else {
            self.stop();
        }
    }
}

impl Drop for PollingController {
    fn drop(&mut self) {
        // Teardown contract: never leak a timer past the consuming view
        self.stop();
    }
}
