//! Dashboard clock - a repeating timer that lives only while it is mounted
//!
//! The timer runs as a tokio task and reports through the app event channel.
//! Dropping the handle aborts the task, so a timer can never outlive its view.

use crate::app::AppEvent;
use chrono::Local;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Running timer; aborted on drop
pub struct ClockTimer {
    handle: JoinHandle<()>,
}

impl ClockTimer {
    /// Start ticking every `period`. Must be called inside a tokio runtime.
    pub fn start(period: Duration, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        log::debug!("Clock timer started ({:?})", period);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // first tick completes immediately, so a freshly mounted
            // dashboard gets the current time right away
            loop {
                interval.tick().await;
                if event_tx.send(AppEvent::Tick(Local::now())).is_err() {
                    // receiver gone, nobody left to render
                    break;
                }
            }
        });

        Self { handle }
    }
}

impl Drop for ClockTimer {
    fn drop(&mut self) {
        self.handle.abort();
        log::debug!("Clock timer stopped");
    }
}

/// Keeps at most one timer alive, following the Dashboard's mount state
pub struct ClockMount {
    period: Duration,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    timer: Option<ClockTimer>,
}

impl ClockMount {
    pub fn new(period: Duration, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            period,
            event_tx,
            timer: None,
        }
    }

    /// Start the timer when mounted, drop it when not
    pub fn sync(&mut self, mounted: bool) {
        match (mounted, self.timer.is_some()) {
            (true, false) => {
                self.timer = Some(ClockTimer::start(self.period, self.event_tx.clone()));
            }
            (false, true) => {
                self.timer = None;
            }
            _ => {}
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_timer_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _timer = ClockTimer::start(Duration::from_millis(10), tx);

        let event = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("tick within timeout");
        assert!(matches!(event, Some(AppEvent::Tick(_))));
    }

    #[tokio::test]
    async fn test_first_tick_is_immediate() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let before = Local::now();
        let _timer = ClockTimer::start(Duration::from_secs(3600), tx);

        let event = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("tick without waiting a full period");
        match event {
            Some(AppEvent::Tick(now)) => assert!(now >= before),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_drop_releases_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = ClockTimer::start(Duration::from_millis(10), tx);
        drop(timer);

        // the aborted task drops the last sender, closing the channel
        let drained = tokio::time::timeout(Duration::from_secs(2), async {
            while rx.recv().await.is_some() {}
        })
        .await;
        assert!(drained.is_ok());
    }

    #[tokio::test]
    async fn test_mount_follows_view() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut mount = ClockMount::new(Duration::from_millis(10), tx);
        assert!(!mount.is_running());

        mount.sync(true);
        assert!(mount.is_running());
        mount.sync(true);
        assert!(mount.is_running());

        mount.sync(false);
        assert!(!mount.is_running());
    }
}
