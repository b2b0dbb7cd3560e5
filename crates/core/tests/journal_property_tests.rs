//! Property-based integration tests for journal entries.
//!
//! Covers the preview rule across arbitrary content and the journal service
//! contract against an in-memory repository.

use async_trait::async_trait;
use mindgrow_core::journal::{
    make_preview, JournalEntry, JournalRepositoryTrait, JournalService, JournalServiceTrait,
    Mood, NewJournalEntryInput, PREVIEW_CHAR_LIMIT,
};
use mindgrow_core::Result;
use proptest::prelude::*;
use std::sync::{Arc, Mutex};

// =============================================================================
// Preview properties
// =============================================================================

proptest! {
    #[test]
    fn preview_of_short_content_is_the_content(content in "\\PC{0,50}") {
        prop_assert_eq!(make_preview(&content), content);
    }

    #[test]
    fn preview_of_long_content_is_truncated_with_ellipsis(content in "\\PC{51,300}") {
        let preview = make_preview(&content);
        let kept: String = content.chars().take(PREVIEW_CHAR_LIMIT).collect();

        prop_assert_eq!(preview.chars().count(), PREVIEW_CHAR_LIMIT + 3);
        prop_assert!(preview.ends_with("..."));
        prop_assert!(preview.starts_with(&kept));
    }
}

// =============================================================================
// Service against an in-memory repository
// =============================================================================

#[derive(Default)]
struct InMemoryJournalRepository {
    entries: Mutex<Vec<JournalEntry>>,
}

#[async_trait]
impl JournalRepositoryTrait for InMemoryJournalRepository {
    fn load_entries(&self) -> Result<Vec<JournalEntry>> {
        Ok(self.entries.lock().unwrap().clone())
    }

    async fn insert_entry(&self, entry: JournalEntry) -> Result<JournalEntry> {
        self.entries.lock().unwrap().insert(0, entry.clone());
        Ok(entry)
    }
}

#[tokio::test]
async fn create_entry_stamps_preview_and_default_mood() {
    let repo = Arc::new(InMemoryJournalRepository::default());
    let service = JournalService::new(repo.clone());

    let entry = service
        .create_entry(NewJournalEntryInput::new(None, "x".repeat(200)))
        .await
        .unwrap();

    assert_eq!(entry.mood, Mood::Happy);
    assert_eq!(entry.preview.chars().count(), 53);
    assert_eq!(service.get_entries().unwrap(), vec![entry]);
}

#[tokio::test]
async fn create_entry_rejects_blank_content_without_storing() {
    let repo = Arc::new(InMemoryJournalRepository::default());
    let service = JournalService::new(repo.clone());

    let result = service
        .create_entry(NewJournalEntryInput::new(Some(Mood::Sad), "   "))
        .await;

    assert!(result.is_err());
    assert!(repo.entries.lock().unwrap().is_empty());
}
