use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalProgressPatch, NewGoalInput};
use crate::goals::goals_summary::GoalSummary;
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

/// Server-side goal store: validates creation input and forwards to the repository.
pub struct GoalService<T: GoalRepositoryTrait> {
    goal_repo: Arc<T>,
}

impl<T: GoalRepositoryTrait> GoalService<T> {
    pub fn new(goal_repo: Arc<T>) -> Self {
        GoalService { goal_repo }
    }
}

#[async_trait]
impl<T: GoalRepositoryTrait + Send + Sync> GoalServiceTrait for GoalService<T> {
    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals()
    }

    fn get_summary(&self) -> Result<GoalSummary> {
        let goals = self.goal_repo.load_goals()?;
        Ok(GoalSummary::from_goals(&goals))
    }

    async fn create_goal(&self, input: NewGoalInput) -> Result<Goal> {
        let new_goal = input.into_new_goal()?;
        debug!(
            "Creating goal '{}' with {} milestones",
            new_goal.title, new_goal.milestones
        );
        self.goal_repo.insert_new_goal(new_goal).await
    }

    async fn patch_goal_progress(
        &self,
        goal_id: String,
        patch: GoalProgressPatch,
    ) -> Result<Option<Goal>> {
        // Stored as sent; inconsistent pairs are only reported.
        let updated = self
            .goal_repo
            .update_goal_progress(goal_id.clone(), patch)
            .await?;
        match &updated {
            Some(goal) if !goal.is_consistent() => warn!(
                "Goal {} stored with inconsistent progress: completed={} progress={} milestones={}",
                goal.id, goal.completed, goal.progress, goal.milestones
            ),
            None => debug!("Progress patch for unknown goal {}", goal_id),
            _ => {}
        }
        Ok(updated)
    }
}
