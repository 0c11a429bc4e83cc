//! Cancellable repeating task used for the session liveness check
//!
//! Natively the poller is a tokio task and ticks run one after another. In
//! the browser it is a gloo `Interval` and every tick spawns its own local
//! task. Either way, dropping the [`PollHandle`] stops further ticks.

use std::future::Future;
use std::time::Duration;

/// Owns a running poller; cancels it when dropped
pub struct PollHandle {
    #[cfg(not(target_arch = "wasm32"))]
    task: tokio::task::JoinHandle<()>,
    #[cfg(target_arch = "wasm32")]
    _interval: gloo_timers::callback::Interval,
}

impl PollHandle {
    /// Stop the poller
    pub fn cancel(self) {
        drop(self);
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Drop for PollHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Run `tick` every `period`, first after one full period.
///
/// Must be called from within a tokio runtime.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_poller<F, Fut>(period: Duration, tick: F) -> PollHandle
where
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    use tokio::time::{Instant, MissedTickBehavior, interval_at};

    let task = tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            tick().await;
        }
    });

    PollHandle { task }
}

/// Run `tick` every `period`, first after one full period.
#[cfg(target_arch = "wasm32")]
pub fn spawn_poller<F, Fut>(period: Duration, tick: F) -> PollHandle
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
    let interval = gloo_timers::callback::Interval::new(millis, move || {
        wasm_bindgen_futures::spawn_local(tick());
    });

    PollHandle {
        _interval: interval,
    }
}
