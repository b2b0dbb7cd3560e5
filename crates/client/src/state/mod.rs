//! In-memory state containers a view renders from.

mod goals;
mod journal;

pub use goals::GoalState;
pub use journal::JournalState;
