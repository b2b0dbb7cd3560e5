use log::debug;
use uuid::Uuid;

use mindgrow_core::errors::ValidationError;
use mindgrow_core::goals::{Goal, GoalSummary, MilestoneToggle, NewGoalInput};
use mindgrow_core::mindmap::{self, MindMap};
use mindgrow_core::utils::time_utils::now_naive;

/// Ordered goal list owned by the client. Display order is insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalState {
    goals: Vec<Goal>,
}

impl GoalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_goals(goals: Vec<Goal>) -> Self {
        Self { goals }
    }

    /// Appends a goal built from form input. The milestone count is coerced to
    /// at least one; a blank title is rejected.
    pub fn add(&mut self, input: NewGoalInput) -> Result<Goal, ValidationError> {
        let new_goal = input.coerce()?;
        let goal = Goal::from_new(Uuid::new_v4().to_string(), new_goal, now_naive());
        debug!(
            "Added local goal {} with {} milestones",
            goal.id, goal.milestones
        );
        self.goals.push(goal.clone());
        Ok(goal)
    }

    /// Flips one milestone of `goal_id`. Unknown goals and out-of-range
    /// indexes leave the state untouched and return `None`.
    ///
    /// No notification is sent from here; callers build the toast from the
    /// result with [`Notification::milestone_toggled`](crate::notify::Notification::milestone_toggled).
    pub fn toggle_milestone(&mut self, goal_id: &str, index: u32) -> Option<MilestoneToggle> {
        let Some(goal) = self.goals.iter_mut().find(|g| g.id == goal_id) else {
            debug!("Ignoring milestone toggle for unknown goal {}", goal_id);
            return None;
        };
        let toggle = goal.toggle_milestone(index);
        if toggle.is_none() {
            debug!(
                "Ignoring milestone {} on goal {} with {} milestones",
                index, goal_id, goal.milestones
            );
        }
        toggle
    }

    pub fn list(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get(&self, goal_id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == goal_id)
    }

    /// Swaps the goal known locally as `local_id` for the server's record,
    /// keeping its position. Returns `false` if no such goal exists.
    pub fn replace(&mut self, local_id: &str, canonical: Goal) -> bool {
        match self.goals.iter_mut().find(|g| g.id == local_id) {
            Some(slot) => {
                *slot = canonical;
                true
            }
            None => false,
        }
    }

    pub fn replace_all(&mut self, goals: Vec<Goal>) {
        self.goals = goals;
    }

    pub fn summary(&self) -> GoalSummary {
        GoalSummary::from_goals(&self.goals)
    }

    pub fn mind_map(&self) -> MindMap {
        mindmap::layout(&self.goals)
    }
}
