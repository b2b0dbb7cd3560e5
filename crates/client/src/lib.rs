//! Client-side state for goals and journal entries.
//!
//! [`GoalState`] and [`JournalState`] hold the data a view renders and apply
//! mutations synchronously. [`SyncedGoals`] and [`SyncedJournal`] wrap them
//! with optimistic calls to the MindGrow server through the [`GoalApi`] and
//! [`JournalApi`] traits; [`HttpApiClient`] implements both over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod notify;
pub mod state;
pub mod sync;

pub use api::{GoalApi, HttpApiClient, JournalApi};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use notify::{
    MockNotificationSink, NoOpNotificationSink, Notification, NotificationKind, NotificationSink,
};
pub use state::{GoalState, JournalState};
pub use sync::{SyncedGoals, SyncedJournal};
