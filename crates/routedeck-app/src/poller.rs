use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Default re-synchronization interval (reference behavior: 5 seconds).
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Events delivered to the view event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Periodic re-synchronization is due.
    Tick,
}

/// Periodic re-synchronization trigger, held as a scoped resource.
///
/// Fires [`AppEvent::Tick`] on a fixed interval independent of user
/// activity; the event loop reacts by fetching with whatever view state is
/// current at fire time. The poller itself never touches the view state.
/// Stopping (or dropping) the handle cancels the task, so the timer cannot
/// outlive the view it drives.
pub struct Poller {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl Poller {
    pub fn start(interval: Duration, events: mpsc::Sender<AppEvent>) -> Self {
        let (shutdown, mut stopped) = watch::channel(false);
        let handle = tokio::spawn(async move {
            // First tick after one full interval, matching the reference
            // behavior (the initial load is issued by the view itself).
            let start = tokio::time::Instant::now() + interval;
            let mut timer = tokio::time::interval_at(start, interval);
            loop {
                tokio::select! {
                    _ = timer.tick() => {
                        if events.send(AppEvent::Tick).await.is_err() {
                            break;
                        }
                    }
                    _ = stopped.changed() => break,
                }
            }
        });
        Self { shutdown, handle }
    }

    /// Stop the periodic task. Idempotent with Drop.
    pub fn stop(self) {
        let _ = self.shutdown.send(true);
        self.handle.abort();
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
        self.handle.abort();
    }
}
