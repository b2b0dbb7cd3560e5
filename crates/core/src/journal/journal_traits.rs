use crate::errors::Result;
use crate::journal::journal_model::{JournalEntry, NewJournalEntryInput};
use async_trait::async_trait;

/// Trait for journal repository operations
#[async_trait]
pub trait JournalRepositoryTrait: Send + Sync {
    /// Entries newest first.
    fn load_entries(&self) -> Result<Vec<JournalEntry>>;
    async fn insert_entry(&self, entry: JournalEntry) -> Result<JournalEntry>;
}

/// Trait for journal service operations
#[async_trait]
pub trait JournalServiceTrait: Send + Sync {
    fn get_entries(&self) -> Result<Vec<JournalEntry>>;
    async fn create_entry(&self, input: NewJournalEntryInput) -> Result<JournalEntry>;
}
