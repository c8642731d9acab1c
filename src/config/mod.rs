pub mod settings;

pub use settings::Settings;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
use crate::domain::model::DistributionMode;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};

/// Command-line flags. Every partitioning flag is optional; unset flags
/// leave the persisted settings value in place.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "batch-groups")]
#[command(about = "Randomly partition participants into teams")]
pub struct CliConfig {
    #[arg(long, help = "Number of synthesized participants (counted mode)")]
    pub participants: Option<usize>,

    #[arg(long, help = "Target size of each team")]
    pub team_size: Option<usize>,

    #[arg(long, help = "File with one participant name per line")]
    pub names_file: Option<String>,

    #[arg(
        long,
        value_delimiter = ',',
        help = "Names to exclude; in counted mode a bare number excludes by 1-based position"
    )]
    pub exclude: Vec<String>,

    #[arg(long, help = "Team name prefix")]
    pub prefix: Option<String>,

    #[arg(long, value_enum, help = "Distribution mode")]
    pub mode: Option<DistributionMode>,

    #[arg(long, help = "Reveal teams one by one")]
    pub suspense: bool,

    #[arg(long, help = "Milliseconds between staged reveals")]
    pub interval_ms: Option<u64>,

    #[arg(long, default_value = "batch-settings.json")]
    pub settings_file: String,

    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "batch-groups.txt",
        help = "Write the generated teams to a text file"
    )]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Overlays the given flags onto loaded settings. Reads the names file
    /// here so the session only ever sees raw multi-line text.
    pub fn apply_to(&self, settings: &mut Settings) -> Result<()> {
        if let Some(count) = self.participants {
            settings.participant_count = count;
            settings.use_custom_names = false;
        }
        if let Some(size) = self.team_size {
            settings.group_size = size;
        }
        if let Some(path) = &self.names_file {
            settings.custom_names = std::fs::read_to_string(path)?;
            settings.use_custom_names = true;
        }
        if !self.exclude.is_empty() {
            settings.exclusions = self.exclude.clone();
        }
        if let Some(prefix) = &self.prefix {
            settings.group_prefix = prefix.clone();
        }
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if self.suspense {
            settings.suspense = true;
        }
        if let Some(interval) = self.interval_ms {
            settings.reveal_interval_ms = interval;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(size) = self.team_size {
            validate_positive_number("team_size", size, 1)?;
        }
        if let Some(count) = self.participants {
            validate_positive_number("participants", count, 1)?;
        }
        if let Some(prefix) = &self.prefix {
            validate_non_empty_string("prefix", prefix)?;
        }
        validate_non_empty_string("settings_file", &self.settings_file)?;
        Ok(())
    }
}
