use crate::errors::Result;
use crate::journal::journal_model::{JournalEntry, NewJournalEntryInput};
use crate::journal::journal_traits::{JournalRepositoryTrait, JournalServiceTrait};
use crate::utils::time_utils::today;
use async_trait::async_trait;
use std::sync::Arc;

pub struct JournalService<T: JournalRepositoryTrait> {
    journal_repo: Arc<T>,
}

impl<T: JournalRepositoryTrait> JournalService<T> {
    pub fn new(journal_repo: Arc<T>) -> Self {
        JournalService { journal_repo }
    }
}

#[async_trait]
impl<T: JournalRepositoryTrait + Send + Sync> JournalServiceTrait for JournalService<T> {
    fn get_entries(&self) -> Result<Vec<JournalEntry>> {
        self.journal_repo.load_entries()
    }

    async fn create_entry(&self, input: NewJournalEntryInput) -> Result<JournalEntry> {
        let new_entry = input.validate()?;
        let entry = JournalEntry::create(new_entry, today());
        self.journal_repo.insert_entry(entry).await
    }
}
