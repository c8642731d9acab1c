use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::config::settings::Settings;
use crate::core::export;
use crate::core::reassign::ReassignmentController;
use crate::core::resolver::{self, ResolveMode};
use crate::core::reveal::{RevealScheduler, RevealState};
use crate::core::engine;
use crate::domain::model::Partition;
use crate::domain::ports::{Notification, Notifier, RevealSink, SettingsStore};
use crate::utils::error::{GroupError, Result};

/// Owns the current partition and orchestrates the two top-level commands:
/// generate/reshuffle and member reassignment. Generic over the persistence
/// and notification collaborators.
///
/// A failed generation leaves the prior partition and the stored settings
/// untouched; settings are written back once per successful run, never on
/// field edits.
pub struct GroupSession<S: SettingsStore, N: Notifier> {
    store: S,
    notifier: N,
    settings: Settings,
    scheduler: RevealScheduler,
    partition: Option<Partition>,
}

impl<S: SettingsStore, N: Notifier> GroupSession<S, N> {
    /// Loads settings from the store, falling back to defaults when nothing
    /// has been persisted yet.
    pub fn new(store: S, notifier: N) -> Result<Self> {
        let settings = store.load()?.unwrap_or_default();
        Ok(Self {
            store,
            notifier,
            settings,
            scheduler: RevealScheduler::new(),
            partition: None,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn partition(&self) -> Option<&Partition> {
        self.partition.as_ref()
    }

    pub fn reveal_state(&self) -> RevealState {
        self.scheduler.state()
    }

    pub fn subscribe_reveal(&self) -> watch::Receiver<RevealState> {
        self.scheduler.subscribe()
    }

    /// Runs resolution and partitioning from the current settings, replaces
    /// the previous partition wholesale, persists the settings, and starts
    /// the reveal schedule (cancelling any in-flight one). Returns the
    /// number of groups created.
    pub fn generate(&mut self, sink: Arc<dyn RevealSink>) -> Result<usize> {
        if self.settings.group_size == 0 {
            self.notifier.notify(&Notification::InvalidGroupSize);
            return Err(GroupError::InvalidConfiguration {
                message: "group size must be greater than 0".to_string(),
            });
        }

        let mode = if self.settings.use_custom_names {
            ResolveMode::Named
        } else {
            ResolveMode::Counted
        };
        let participants = resolver::resolve(
            mode,
            self.settings.participant_count,
            &self.settings.custom_names,
            &self.settings.exclusions,
        );
        if participants.is_empty() {
            self.notifier.notify(&Notification::NoParticipants);
            return Err(GroupError::EmptyInput);
        }

        let partition = engine::partition(
            &participants,
            self.settings.group_size,
            self.settings.mode,
        )?;
        let total = partition.groups.len();

        self.store.save(&self.settings)?;

        self.scheduler.start(
            partition.groups.clone(),
            Duration::from_millis(self.settings.reveal_interval_ms),
            self.settings.suspense,
            sink,
        );
        self.partition = Some(partition);

        tracing::info!(groups = total, "generation complete");
        self.notifier.notify(&Notification::Generated { groups: total });
        Ok(total)
    }

    /// Moves the member at `source_index` of the source group to
    /// `dest_index` of the destination group.
    pub fn move_member(
        &mut self,
        source_group_id: u32,
        source_index: usize,
        dest_group_id: u32,
        dest_index: usize,
    ) -> Result<()> {
        let partition = self
            .partition
            .as_mut()
            .ok_or(GroupError::UnknownGroup { id: source_group_id })?;
        ReassignmentController::new(partition).move_between_groups(
            source_group_id,
            source_index,
            dest_group_id,
            dest_index,
        )
    }

    /// Reorders a member inside one group.
    pub fn reorder_member(&mut self, group_id: u32, from_index: usize, to_index: usize) -> Result<()> {
        let partition = self
            .partition
            .as_mut()
            .ok_or(GroupError::UnknownGroup { id: group_id })?;
        ReassignmentController::new(partition).reorder_within_group(group_id, from_index, to_index)
    }

    /// Flat text listing of the current partition, if one exists.
    pub fn export_text(&self) -> Option<String> {
        self.partition
            .as_ref()
            .map(|p| export::render(p, &self.settings.group_prefix))
    }

    /// Waits until the current reveal schedule reaches `Complete`. Returns
    /// immediately when no schedule is running.
    pub async fn wait_for_reveal(&self) {
        let mut rx = self.subscribe_reveal();
        loop {
            match *rx.borrow_and_update() {
                RevealState::Complete { .. } | RevealState::Idle => return,
                RevealState::Revealing { .. } => {}
            }
            if rx.changed().await.is_err() {
                return;
            }
        }
    }
}
