use crate::domain::model::Group;
use crate::domain::ports::{Notification, Notifier, RevealSink};

/// Renders notifications as log lines. The message-to-outcome mapping here
/// mirrors the three user-facing outcomes the session signals.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        match notification {
            Notification::InvalidGroupSize => {
                tracing::warn!("Invalid team size: team size must be greater than 0");
            }
            Notification::NoParticipants => {
                tracing::warn!("No participants available: enter at least one name");
            }
            Notification::Generated { groups } => {
                tracing::info!("Created {} teams successfully", groups);
            }
        }
    }
}

/// Reveal sink that only logs progress, for embedders that render groups
/// elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRevealSink;

impl RevealSink for TracingRevealSink {
    fn revealed(&self, group: &Group) {
        tracing::debug!(group = group.id, members = group.members.len(), "revealed");
    }

    fn finished(&self) {
        tracing::debug!("reveal finished");
    }
}
