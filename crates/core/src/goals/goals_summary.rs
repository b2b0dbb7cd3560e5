use serde::{Deserialize, Serialize};

use super::goals_model::Goal;

/// Aggregate numbers shown on the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GoalSummary {
    pub total_goals: usize,
    /// Mean of the stored `progress` values, rounded half up.
    pub average_progress: i32,
    pub completed_milestones: i64,
    pub total_milestones: i64,
    pub achieved_goals: usize,
}

impl GoalSummary {
    pub fn from_goals(goals: &[Goal]) -> Self {
        if goals.is_empty() {
            return Self::default();
        }

        let count = goals.len() as i64;
        let progress_sum: i64 = goals.iter().map(|g| i64::from(g.progress)).sum();
        let average_progress = (2 * progress_sum + count).div_euclid(2 * count) as i32;

        Self {
            total_goals: goals.len(),
            average_progress,
            completed_milestones: goals.iter().map(|g| i64::from(g.completed)).sum(),
            total_milestones: goals.iter().map(|g| i64::from(g.milestones)).sum(),
            achieved_goals: goals.iter().filter(|g| g.is_achieved()).count(),
        }
    }
}
