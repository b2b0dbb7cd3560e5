use mindgrow_core::journal::{JournalEntry, JournalRepositoryTrait};
use mindgrow_core::utils::time_utils::now_naive;
use mindgrow_core::Result;

use super::model::JournalEntryDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::journal_entries;
use async_trait::async_trait;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct JournalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl JournalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        JournalRepository { pool, writer }
    }
}

#[async_trait]
impl JournalRepositoryTrait for JournalRepository {
    fn load_entries(&self) -> Result<Vec<JournalEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let entries_db = journal_entries::table
            .select(JournalEntryDB::as_select())
            .order((
                journal_entries::entry_date.desc(),
                journal_entries::created_at.desc(),
                sql::<BigInt>("rowid").desc(),
            ))
            .load::<JournalEntryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(entries_db.into_iter().map(JournalEntry::from).collect())
    }

    async fn insert_entry(&self, entry: JournalEntry) -> Result<JournalEntry> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<JournalEntry> {
                let entry_db = JournalEntryDB::from_domain(entry, now_naive());

                let result_db = diesel::insert_into(journal_entries::table)
                    .values(&entry_db)
                    .returning(JournalEntryDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(JournalEntry::from(result_db))
            })
            .await
    }
}
