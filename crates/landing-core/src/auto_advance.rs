//! Carousel auto-advance timer.
//!
//! The timer is a repeating tick with a fixed period. The first tick fires
//! one full period after start. Manual navigation never reschedules it.
//!
//! Two ways to drive it:
//!
//! - [`run`] is a plain async loop for single-threaded UI executors. The
//!   callback does not need to be `Send`; the loop ends when its
//!   [`CancellationToken`] is cancelled.
//! - [`AutoAdvance`] spawns the loop on the tokio runtime and cancels it
//!   when the handle is dropped.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::carousel::Carousel;
use crate::error::{LandingError, LandingResult};

/// Period between automatic slide changes
pub const DEFAULT_SLIDE_INTERVAL: Duration = Duration::from_millis(5000);

/// Call `on_tick` every `period` until `cancel` fires.
///
/// Cancellation is checked before every tick, so once the token is
/// cancelled no further callback runs even if a tick was already due.
pub async fn run<F>(
    period: Duration,
    cancel: CancellationToken,
    mut on_tick: F,
) -> LandingResult<()>
where
    F: FnMut(),
{
    if period.is_zero() {
        return Err(LandingError::ZeroInterval);
    }

    let mut ticks = time::interval_at(Instant::now() + period, period);
    // A stalled executor should not replay a burst of missed slides
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tracing::debug!(period_ms = period.as_millis() as u64, "auto-advance started");
    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = ticks.tick() => on_tick(),
        }
    }
    tracing::debug!("auto-advance stopped");
    Ok(())
}

/// Owned handle to a spawned auto-advance loop.
///
/// Dropping the handle cancels the loop and aborts its task.
#[derive(Debug)]
pub struct AutoAdvance {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl AutoAdvance {
    /// Spawn a repeating timer on the current tokio runtime.
    ///
    /// Must be called from within a runtime.
    pub fn spawn<F>(period: Duration, on_tick: F) -> LandingResult<Self>
    where
        F: FnMut() + Send + 'static,
    {
        if period.is_zero() {
            return Err(LandingError::ZeroInterval);
        }

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let task = tokio::spawn(async move {
            if let Err(e) = run(period, token, on_tick).await {
                tracing::warn!("auto-advance exited: {}", e);
            }
        });

        Ok(Self { cancel, task })
    }

    /// Drive a shared carousel, advancing it once per `period`.
    pub fn attach(carousel: Arc<Mutex<Carousel>>, period: Duration) -> LandingResult<Self> {
        Self::spawn(period, move || carousel.lock().advance())
    }

    /// Whether the loop has exited
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the timer. Equivalent to dropping the handle.
    pub fn stop(self) {}
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.task.abort();
    }
}
