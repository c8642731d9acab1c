use std::sync::Arc;

use batch_groups::core::engine;
use batch_groups::utils::{logger, validation::Validate};
use batch_groups::{CliConfig, Group, GroupSession, JsonFileStore, RevealSink, TracingNotifier};
use clap::Parser;

/// Prints each team to stdout as it is revealed; with suspense off this
/// happens all at once, with it on one team appears per interval.
struct PrintSink {
    prefix: String,
}

impl RevealSink for PrintSink {
    fn revealed(&self, group: &Group) {
        println!("{} {}:", self.prefix, group.id);
        for member in &group.members {
            println!("- {}", member);
        }
        println!();
    }

    fn finished(&self) {
        println!("🎉 All teams revealed!");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting batch-groups CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let store = JsonFileStore::new(&config.settings_file);
    let mut session = GroupSession::new(store, TracingNotifier)?;
    config.apply_to(session.settings_mut())?;

    let settings = session.settings();
    if let Some((estimated, remainder)) = engine::estimate(
        if settings.use_custom_names {
            settings
                .custom_names
                .lines()
                .filter(|line| !line.trim().is_empty())
                .count()
        } else {
            settings.participant_count
        },
        settings.group_size,
    ) {
        tracing::debug!(estimated, remainder, "preview");
    }

    let sink = Arc::new(PrintSink {
        prefix: session.settings().group_prefix.clone(),
    });

    match session.generate(sink) {
        Ok(total) => {
            tracing::info!("✅ Generated {} teams", total);
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    session.wait_for_reveal().await;

    if let Some(path) = &config.output {
        if let Some(text) = session.export_text() {
            std::fs::write(path, text)?;
            tracing::info!("📁 Teams written to {}", path);
            println!("Teams saved to {}", path);
        }
    }

    Ok(())
}
