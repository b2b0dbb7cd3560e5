//! Database models for journal entries.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use log::warn;

use mindgrow_core::journal::{JournalEntry, Mood};

/// Database model for journal entries
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::journal_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct JournalEntryDB {
    pub id: String,
    pub entry_date: NaiveDate,
    pub mood: String,
    pub content: String,
    pub preview: String,
    pub created_at: NaiveDateTime,
}

impl JournalEntryDB {
    pub fn from_domain(entry: JournalEntry, created_at: NaiveDateTime) -> Self {
        Self {
            id: entry.id,
            entry_date: entry.date,
            mood: entry.mood.as_str().to_string(),
            content: entry.content,
            preview: entry.preview,
            created_at,
        }
    }
}

impl From<JournalEntryDB> for JournalEntry {
    fn from(db: JournalEntryDB) -> Self {
        let mood = Mood::parse(&db.mood).unwrap_or_else(|| {
            warn!("Unknown mood '{}' on journal entry {}", db.mood, db.id);
            Mood::default()
        });
        Self {
            id: db.id,
            date: db.entry_date,
            mood,
            content: db.content,
            preview: db.preview,
        }
    }
}
