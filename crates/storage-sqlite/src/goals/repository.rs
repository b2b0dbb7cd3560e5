use mindgrow_core::goals::{Goal, GoalProgressPatch, GoalRepositoryTrait, NewGoal};
use mindgrow_core::utils::time_utils::now_naive;
use mindgrow_core::Result;

use super::model::{GoalDB, GoalProgressDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::goals;
use async_trait::async_trait;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use diesel::SqliteConnection;
use log::debug;

use std::sync::Arc;
use uuid::Uuid;

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }

    pub fn load_goals_impl(&self) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        // Goals created within the same timestamp keep insertion order.
        let goals_db = goals::table
            .select(GoalDB::as_select())
            .order((goals::created_at.asc(), sql::<BigInt>("rowid").asc()))
            .load::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(goals_db.into_iter().map(Goal::from).collect())
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self) -> Result<Vec<Goal>> {
        self.load_goals_impl()
    }

    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let goal = Goal::from_new(Uuid::new_v4().to_string(), new_goal, now_naive());
                let goal_db: GoalDB = goal.into();

                let result_db = diesel::insert_into(goals::table)
                    .values(&goal_db)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Goal::from(result_db))
            })
            .await
    }

    async fn update_goal_progress(
        &self,
        goal_id: String,
        patch: GoalProgressPatch,
    ) -> Result<Option<Goal>> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<Goal>> {
                let changes = GoalProgressDB::new(patch, now_naive());
                let updated = diesel::update(goals::table.find(&goal_id))
                    .set(&changes)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .optional()
                    .map_err(StorageError::from)?;

                if updated.is_none() {
                    debug!("No goal with id {} to update", goal_id);
                }
                Ok(updated.map(Goal::from))
            })
            .await
    }
}
