use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalProgressPatch, NewGoal, NewGoalInput};
use crate::goals::goals_summary::GoalSummary;
use async_trait::async_trait;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// All goals in creation order.
    fn load_goals(&self) -> Result<Vec<Goal>>;
    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    /// Overwrites `completed` and `progress`. `Ok(None)` when no goal has `goal_id`.
    async fn update_goal_progress(
        &self,
        goal_id: String,
        patch: GoalProgressPatch,
    ) -> Result<Option<Goal>>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<Goal>>;
    fn get_summary(&self) -> Result<GoalSummary>;
    async fn create_goal(&self, input: NewGoalInput) -> Result<Goal>;
    async fn patch_goal_progress(
        &self,
        goal_id: String,
        patch: GoalProgressPatch,
    ) -> Result<Option<Goal>>;
}
