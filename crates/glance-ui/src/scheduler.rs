//! Repeating-task scheduler.
//!
//! The initializer owns one `Scheduler`; each widget gets an independent
//! fixed-period ticker. The first tick fires immediately, which gives
//! every widget its initial update. `shutdown` cancels all tickers and
//! waits for in-flight updates to finish; an in-flight update is never
//! aborted mid-run.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

pub struct Scheduler {
    tracker: TaskTracker,
    cancel: CancellationToken,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            tracker: TaskTracker::new(),
            cancel: CancellationToken::new(),
        }
    }

    /// Run `task` immediately and then once per `period` until shutdown.
    pub fn spawn_repeating<F, Fut>(&self, name: &'static str, period: Duration, mut task: F)
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let cancel = self.cancel.clone();
        self.tracker.spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            tracing::debug!("Started {} ticker ({:?})", name, period);
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        tracing::debug!("Stopped {} ticker", name);
                        break;
                    }
                    _ = ticker.tick() => task().await,
                }
            }
        });
    }

    /// Cancel all tickers and wait for running updates to complete.
    pub async fn shutdown(&self) {
        self.cancel.cancel();
        self.tracker.close();
        self.tracker.wait().await;
    }
}
