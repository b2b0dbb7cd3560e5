use mindgrow_core::errors::ValidationError;
use mindgrow_core::journal::{JournalEntry, NewJournalEntryInput};
use mindgrow_core::utils::time_utils::today;

/// Journal entries owned by the client, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JournalState {
    entries: Vec<JournalEntry>,
}

impl JournalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends an entry dated today. Blank content is rejected; a missing
    /// mood becomes `happy`.
    pub fn add(&mut self, input: NewJournalEntryInput) -> Result<JournalEntry, ValidationError> {
        let entry = JournalEntry::create(input.validate()?, today());
        self.entries.insert(0, entry.clone());
        Ok(entry)
    }

    pub fn list(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn replace(&mut self, local_id: &str, canonical: JournalEntry) -> bool {
        match self.entries.iter_mut().find(|e| e.id == local_id) {
            Some(slot) => {
                *slot = canonical;
                true
            }
            None => false,
        }
    }

    pub fn replace_all(&mut self, entries: Vec<JournalEntry>) {
        self.entries = entries;
    }
}
