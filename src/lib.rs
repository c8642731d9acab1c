pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{JsonFileStore, MemoryStore, TracingNotifier, TracingRevealSink};
pub use config::Settings;
pub use core::reassign::ReassignmentController;
pub use core::resolver::ResolveMode;
pub use core::reveal::{RevealHandle, RevealScheduler, RevealState};
pub use core::session::GroupSession;
pub use domain::model::{DistributionMode, Group, Participant, Partition};
pub use domain::ports::{Notification, Notifier, RevealSink, SettingsStore};
pub use utils::error::{GroupError, Result};
