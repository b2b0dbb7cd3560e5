//! Journal domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

/// Number of characters kept in an entry preview.
pub const PREVIEW_CHAR_LIMIT: usize = 50;

const PREVIEW_ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Happy,
    Neutral,
    Sad,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Neutral => "neutral",
            Self::Sad => "sad",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "happy" => Some(Self::Happy),
            "neutral" => Some(Self::Neutral),
            "sad" => Some(Self::Sad),
            _ => None,
        }
    }
}

/// A dated reflection tagged with a mood.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub date: NaiveDate,
    pub mood: Mood,
    pub content: String,
    pub preview: String,
}

impl JournalEntry {
    /// Stamps a validated entry with a fresh id, the given day and its preview.
    pub fn create(new_entry: NewJournalEntry, date: NaiveDate) -> Self {
        let preview = make_preview(&new_entry.content);
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            mood: new_entry.mood,
            content: new_entry.content,
            preview,
        }
    }
}

/// Validated input for a journal entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewJournalEntry {
    pub mood: Mood,
    pub content: String,
}

/// Unvalidated journal input shared by the client form and the HTTP body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewJournalEntryInput {
    #[serde(default)]
    pub mood: Option<Mood>,
    #[serde(default)]
    pub content: Option<String>,
}

impl NewJournalEntryInput {
    pub fn new(mood: Option<Mood>, content: impl Into<String>) -> Self {
        Self {
            mood,
            content: Some(content.into()),
        }
    }

    pub fn validate(self) -> Result<NewJournalEntry, ValidationError> {
        let content = self
            .content
            .ok_or(ValidationError::MissingField("content"))?;
        if content.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "content" });
        }
        Ok(NewJournalEntry {
            mood: self.mood.unwrap_or_default(),
            content,
        })
    }
}

/// First [`PREVIEW_CHAR_LIMIT`] characters of `content`, with an ellipsis
/// appended only when something was cut off.
pub fn make_preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHAR_LIMIT) {
        Some((cut, _)) => format!("{}{}", &content[..cut], PREVIEW_ELLIPSIS),
        None => content.to_string(),
    }
}
