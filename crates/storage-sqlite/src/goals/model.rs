//! Database models for goals.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use mindgrow_core::goals::{Goal, GoalProgressPatch};

/// Database model for goals
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GoalDB {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub milestones: i32,
    pub completed: i32,
    pub progress: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset written by a progress patch.
#[derive(AsChangeset, Debug, Clone, Copy)]
#[diesel(table_name = crate::schema::goals)]
pub struct GoalProgressDB {
    pub completed: i32,
    pub progress: i32,
    pub updated_at: NaiveDateTime,
}

impl GoalProgressDB {
    pub fn new(patch: GoalProgressPatch, updated_at: NaiveDateTime) -> Self {
        Self {
            completed: patch.completed,
            progress: patch.progress,
            updated_at,
        }
    }
}

impl From<GoalDB> for Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            title: db.title,
            description: db.description,
            milestones: db.milestones,
            completed: db.completed,
            progress: db.progress,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<Goal> for GoalDB {
    fn from(domain: Goal) -> Self {
        Self {
            id: domain.id,
            title: domain.title,
            description: domain.description,
            milestones: domain.milestones,
            completed: domain.completed,
            progress: domain.progress,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
