//! Journal module - mood entries with derived previews.

mod journal_model;
mod journal_service;
mod journal_traits;


pub use journal_model::{
    make_preview, JournalEntry, Mood, NewJournalEntry, NewJournalEntryInput, PREVIEW_CHAR_LIMIT,
};
pub use journal_service::JournalService;
pub use journal_traits::{JournalRepositoryTrait, JournalServiceTrait};
