//! Optimistic synchronisation between local state and the server.
//!
//! Local state changes first and the server call follows. A failed call is
//! reported through the [`NotificationSink`] and the local change is kept;
//! `refresh()` re-fetches the authoritative list when a caller wants to
//! resolve drift.

use log::{debug, warn};
use std::sync::Arc;

use mindgrow_core::goals::{Goal, MilestoneToggle, NewGoalInput};
use mindgrow_core::journal::{JournalEntry, NewJournalEntryInput};

use crate::api::{GoalApi, JournalApi};
use crate::error::{ClientError, Result};
use crate::notify::{Notification, NotificationSink};
use crate::state::{GoalState, JournalState};

pub struct SyncedGoals {
    state: GoalState,
    api: Arc<dyn GoalApi>,
    notifier: Arc<dyn NotificationSink>,
}

impl SyncedGoals {
    pub fn new(api: Arc<dyn GoalApi>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            state: GoalState::new(),
            api,
            notifier,
        }
    }

    pub fn state(&self) -> &GoalState {
        &self.state
    }

    /// Adds the goal locally, then creates it on the server and swaps in the
    /// server's record. Only invalid input is returned as an error.
    pub async fn add_goal(&mut self, input: NewGoalInput) -> Result<Goal> {
        let local = match self.state.add(input) {
            Ok(goal) => goal,
            Err(e) => {
                self.notifier
                    .notify(Notification::error("Goal Not Added", e.to_string()));
                return Err(ClientError::Validation(e));
            }
        };
        self.notifier.notify(Notification::goal_added());

        // Send the coerced values so the server sees what the user sees.
        let mut request = NewGoalInput::new(local.title.clone(), local.milestones);
        request.description = local.description.clone();

        match self.api.create_goal(&request).await {
            Ok(canonical) => {
                debug!("Goal {} saved as {}", local.id, canonical.id);
                self.state.replace(&local.id, canonical.clone());
                Ok(canonical)
            }
            Err(e) => {
                warn!("Failed to save goal {}: {}", local.id, e);
                self.notifier.notify(Notification::error(
                    "Sync Failed",
                    "Your goal was added locally but could not be saved.",
                ));
                Ok(local)
            }
        }
    }

    /// Toggles a milestone locally and sends the new counters to the server.
    pub async fn toggle_milestone(
        &mut self,
        goal_id: &str,
        index: u32,
    ) -> Option<MilestoneToggle> {
        let toggle = self.state.toggle_milestone(goal_id, index)?;
        let Some(goal) = self.state.get(goal_id) else {
            return Some(toggle);
        };
        let patch = goal.progress_patch();
        self.notifier
            .notify(Notification::milestone_toggled(&toggle, &goal.title));

        match self.api.patch_goal(goal_id, patch).await {
            Ok(Some(canonical)) => {
                self.state.replace(goal_id, canonical);
            }
            Ok(None) => warn!("Server has no goal {}; kept local progress", goal_id),
            Err(e) => {
                warn!("Failed to save progress for goal {}: {}", goal_id, e);
                self.notifier.notify(Notification::error(
                    "Sync Failed",
                    "Milestone progress could not be saved.",
                ));
            }
        }
        Some(toggle)
    }

    /// Replaces local goals with the server's list. Returns `false` and
    /// notifies when the fetch fails, leaving local state as it was.
    pub async fn refresh(&mut self) -> bool {
        match self.api.list_goals().await {
            Ok(goals) => {
                self.state.replace_all(goals);
                true
            }
            Err(e) => {
                warn!("Failed to fetch goals: {}", e);
                self.notifier.notify(Notification::error(
                    "Sync Failed",
                    "Goals could not be loaded from the server.",
                ));
                false
            }
        }
    }
}

pub struct SyncedJournal {
    state: JournalState,
    api: Arc<dyn JournalApi>,
    notifier: Arc<dyn NotificationSink>,
}

impl SyncedJournal {
    pub fn new(api: Arc<dyn JournalApi>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            state: JournalState::new(),
            api,
            notifier,
        }
    }

    pub fn state(&self) -> &JournalState {
        &self.state
    }

    pub async fn add_entry(&mut self, input: NewJournalEntryInput) -> Result<JournalEntry> {
        let local = match self.state.add(input) {
            Ok(entry) => entry,
            Err(e) => {
                self.notifier
                    .notify(Notification::error("Entry Not Added", e.to_string()));
                return Err(ClientError::Validation(e));
            }
        };
        self.notifier.notify(Notification::journal_entry_added());

        let request = NewJournalEntryInput::new(Some(local.mood), local.content.clone());
        match self.api.create_entry(&request).await {
            Ok(canonical) => {
                self.state.replace(&local.id, canonical.clone());
                Ok(canonical)
            }
            Err(e) => {
                warn!("Failed to save journal entry {}: {}", local.id, e);
                self.notifier.notify(Notification::error(
                    "Sync Failed",
                    "Your entry was added locally but could not be saved.",
                ));
                Ok(local)
            }
        }
    }

    pub async fn refresh(&mut self) -> bool {
        match self.api.list_entries().await {
            Ok(entries) => {
                self.state.replace_all(entries);
                true
            }
            Err(e) => {
                warn!("Failed to fetch journal entries: {}", e);
                self.notifier.notify(Notification::error(
                    "Sync Failed",
                    "Journal entries could not be loaded from the server.",
                ));
                false
            }
        }
    }
}
