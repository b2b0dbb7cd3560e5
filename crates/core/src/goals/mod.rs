//! Goals module - domain models, progress rules, services, and traits.

mod goals_model;
mod goals_progress;
mod goals_service;
mod goals_summary;
mod goals_traits;

#[cfg(test)]
mod goals_model_tests;

pub use goals_model::{Goal, GoalProgressPatch, MilestoneInput, NewGoal, NewGoalInput};
pub use goals_progress::{progress_percent, MilestoneToggle, ToggleDirection};
pub use goals_service::GoalService;
pub use goals_summary::GoalSummary;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
