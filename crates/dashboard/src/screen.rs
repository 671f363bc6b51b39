//! Screen lifecycle: the periodic refresh timer.
//!
//! Mounting spawns the timer task: an immediate first cycle covers the
//! initial on-mount load, then one cycle per interval tick for the life
//! of the screen. Unmounting aborts the task, so no further fetch is
//! issued afterwards.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::refresh::Refresher;

/// A mounted dashboard screen.
///
/// Dropping a `Screen` also stops its timer, so the periodic refresh is
/// tied to the screen's lifetime even on early-exit paths.
pub struct Screen {
    timer: JoinHandle<()>,
}

impl Screen {
    /// Spawn the periodic refresh task.
    pub fn mount(refresher: Refresher, interval: Duration) -> Self {
        let timer = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                // First tick completes immediately: the on-mount load.
                ticker.tick().await;
                refresher.refresh_all().await;
            }
        });

        debug!("Screen mounted; refreshing every {:?}", interval);
        Self { timer }
    }

    /// Stop the periodic timer. A cycle currently in flight is cancelled
    /// at its next await point; nothing writes state after this returns.
    pub fn unmount(self) {
        self.timer.abort();
        debug!("Screen unmounted; periodic refresh stopped");
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        self.timer.abort();
    }
}
