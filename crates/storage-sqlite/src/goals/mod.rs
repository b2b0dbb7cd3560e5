//! SQLite storage implementation for goals.

mod model;
mod repository;

pub use model::{GoalDB, GoalProgressDB};
pub use repository::GoalRepository;
