pub mod engine;
pub mod export;
pub mod reassign;
pub mod resolver;
pub mod reveal;
pub mod session;

pub use crate::domain::model::{DistributionMode, Group, Participant, Partition};
pub use crate::domain::ports::{Notification, Notifier, RevealSink, SettingsStore};
pub use crate::utils::error::Result;
