use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::model::Group;
use crate::domain::ports::RevealSink;

/// Observable progress of a staged reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Idle,
    Revealing { revealed: usize, total: usize },
    Complete { total: usize },
}

/// Handle to an in-flight reveal task. Aborts the task on `cancel` or drop,
/// so a superseded schedule can never publish progress for a replaced
/// partition.
pub struct RevealHandle {
    handle: JoinHandle<()>,
}

impl RevealHandle {
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Unveils an already-computed partition one group at a time on a fixed
/// cadence. At most one schedule is active; `start` cancels any in-flight
/// timer before writing new state.
pub struct RevealScheduler {
    state_tx: watch::Sender<RevealState>,
    active: Option<RevealHandle>,
}

impl RevealScheduler {
    pub fn new() -> Self {
        let (state_tx, _) = watch::channel(RevealState::Idle);
        Self {
            state_tx,
            active: None,
        }
    }

    pub fn state(&self) -> RevealState {
        *self.state_tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<RevealState> {
        self.state_tx.subscribe()
    }

    /// Begins revealing `groups`. With `staged` off, everything is revealed
    /// and the finished signal fires before this call returns. With it on,
    /// one additional group is revealed every `interval` until all are out.
    pub fn start(
        &mut self,
        groups: Vec<Group>,
        interval: Duration,
        staged: bool,
        sink: Arc<dyn RevealSink>,
    ) {
        if let Some(handle) = self.active.take() {
            handle.cancel();
        }

        let total = groups.len();

        if !staged {
            for group in &groups {
                sink.revealed(group);
            }
            self.state_tx.send_replace(RevealState::Complete { total });
            sink.finished();
            return;
        }

        self.state_tx.send_replace(RevealState::Revealing {
            revealed: 0,
            total,
        });

        let state_tx = self.state_tx.clone();
        let handle = tokio::spawn(async move {
            for (revealed, group) in groups.iter().enumerate().map(|(i, g)| (i + 1, g)) {
                tokio::time::sleep(interval).await;
                state_tx.send_replace(RevealState::Revealing { revealed, total });
                sink.revealed(group);
            }
            state_tx.send_replace(RevealState::Complete { total });
            sink.finished();
        });

        self.active = Some(RevealHandle { handle });
    }

    /// Cancels any in-flight schedule and resets to `Idle`.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.active.take() {
            handle.cancel();
        }
        self.state_tx.send_replace(RevealState::Idle);
    }
}

impl Default for RevealScheduler {
    fn default() -> Self {
        Self::new()
    }
}
