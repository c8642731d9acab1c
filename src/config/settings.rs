use serde::{Deserialize, Serialize};

use crate::domain::model::DistributionMode;

/// Flat record of user configuration, loaded once at session start and
/// written back after every successful generation. Any field absent from
/// the stored value falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub participant_count: usize,
    pub group_size: usize,
    pub use_custom_names: bool,
    pub custom_names: String,
    pub group_prefix: String,
    pub suspense: bool,
    pub mode: DistributionMode,
    pub exclusions: Vec<String>,
    pub reveal_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            participant_count: 10,
            group_size: 2,
            use_custom_names: false,
            custom_names: String::new(),
            group_prefix: "Team".to_string(),
            suspense: false,
            mode: DistributionMode::FixedChunk,
            exclusions: Vec::new(),
            reveal_interval_ms: 800,
        }
    }
}
