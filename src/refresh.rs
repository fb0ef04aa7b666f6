//! Periodic auto-refresh for the mounted story page.
//!
//! The timer is a scoped resource: acquired when a page mounts, released on
//! navigation away. A manual refresh replaces the timer rather than
//! rescheduling it. Cancellation stops future ticks only; it never aborts
//! in-flight HTTP requests.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Handle to a repeating background tick task. Cancelled explicitly or on
/// drop.
pub struct RefreshTimer {
    token: CancellationToken,
}

impl RefreshTimer {
    /// Spawn a task that sends a unit tick every `period` until cancelled
    /// or until the receiver goes away.
    pub fn start(tx: mpsc::Sender<()>, period: Duration) -> Self {
        let token = CancellationToken::new();
        let task_token = token.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            // The first tick of a tokio interval fires immediately; the
            // caller already loaded the page, so skip it.
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = task_token.cancelled() => break,
                    _ = interval.tick() => {
                        if tx.send(()).await.is_err() {
                            break;
                        }
                    }
                }
            }
        });
        Self { token }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
