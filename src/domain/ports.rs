use crate::config::settings::Settings;
use crate::domain::model::Group;
use crate::utils::error::Result;

/// Key-value persistence for user configuration. Last write wins; absence
/// of a stored record falls back to `Settings::default()` at the call site.
pub trait SettingsStore: Send + Sync {
    fn load(&self) -> Result<Option<Settings>>;
    fn save(&self, settings: &Settings) -> Result<()>;
}

/// User-facing outcomes signalled by name only; rendering is entirely a
/// collaborator concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    InvalidGroupSize,
    NoParticipants,
    Generated { groups: usize },
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

impl<T: SettingsStore + ?Sized> SettingsStore for std::sync::Arc<T> {
    fn load(&self) -> Result<Option<Settings>> {
        (**self).load()
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        (**self).save(settings)
    }
}

impl<T: Notifier + ?Sized> Notifier for std::sync::Arc<T> {
    fn notify(&self, notification: &Notification) {
        (**self).notify(notification)
    }
}

/// Receives staged-reveal progress. `finished` is the trigger point for any
/// completion side effects owned by collaborators.
pub trait RevealSink: Send + Sync {
    fn revealed(&self, group: &Group);
    fn finished(&self);
}
