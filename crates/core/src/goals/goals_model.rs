//! Goals domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::goals_progress::{progress_percent, MilestoneToggle, ToggleDirection};
use crate::errors::ValidationError;

/// Domain model representing a goal.
///
/// `progress` is stored alongside `completed` rather than computed on read:
/// the server accepts both verbatim on patch. Use [`Goal::expected_progress`]
/// when the derived value is needed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub milestones: i32,
    pub completed: i32,
    pub progress: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Goal {
    /// Builds a fresh goal with nothing completed.
    pub fn from_new(id: String, new_goal: NewGoal, now: NaiveDateTime) -> Self {
        Self {
            id,
            title: new_goal.title,
            description: new_goal.description,
            milestones: new_goal.milestones,
            completed: 0,
            progress: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Progress derived from `completed` and `milestones`.
    pub fn expected_progress(&self) -> i32 {
        progress_percent(self.completed, self.milestones)
    }

    /// True when the stored counters satisfy the progress invariant.
    pub fn is_consistent(&self) -> bool {
        self.completed >= 0
            && self.completed <= self.milestones
            && self.progress == self.expected_progress()
    }

    pub fn is_achieved(&self) -> bool {
        self.milestones > 0 && self.completed >= self.milestones
    }

    /// Toggles the milestone at `index`, treating milestones as an ordered
    /// prefix of done steps.
    ///
    /// Clicking an index at or past the completed prefix extends it through
    /// that index; clicking inside the prefix truncates it to that index.
    /// Returns `None` when the index is outside `0..milestones`.
    pub fn toggle_milestone(&mut self, index: u32) -> Option<MilestoneToggle> {
        let index = i32::try_from(index).ok()?;
        if index >= self.milestones {
            return None;
        }

        let direction = if index >= self.completed {
            self.completed = index + 1;
            ToggleDirection::Completed
        } else {
            self.completed = index;
            ToggleDirection::Unchecked
        };
        self.progress = self.expected_progress();

        Some(MilestoneToggle {
            goal_id: self.id.clone(),
            index: index as u32,
            direction,
            completed: self.completed,
            progress: self.progress,
        })
    }

    /// The counters a client sends back to the server after a toggle.
    pub fn progress_patch(&self) -> GoalProgressPatch {
        GoalProgressPatch {
            completed: self.completed,
            progress: self.progress,
        }
    }
}

/// Validated input for creating a goal.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub title: String,
    pub description: Option<String>,
    pub milestones: i32,
}

/// A milestone count as it arrives from a form field or a JSON body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum MilestoneInput {
    Count(i64),
    Fraction(f64),
    Text(String),
}

impl MilestoneInput {
    /// Reads the count the way a loosely typed form would: integers as-is,
    /// fractions truncated, numeric strings parsed.
    pub fn parse(&self) -> Option<i64> {
        match self {
            Self::Count(n) => Some(*n),
            Self::Fraction(f) if f.is_finite() => Some(f.trunc() as i64),
            Self::Fraction(_) => None,
            Self::Text(s) => {
                let s = s.trim();
                s.parse::<i64>().ok().or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f.trunc() as i64)
                })
            }
        }
    }
}

impl From<i32> for MilestoneInput {
    fn from(n: i32) -> Self {
        Self::Count(n.into())
    }
}

impl From<&str> for MilestoneInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Unvalidated goal input shared by the client form and the HTTP body.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewGoalInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub milestones: Option<MilestoneInput>,
}

impl NewGoalInput {
    pub fn new(title: impl Into<String>, milestones: impl Into<MilestoneInput>) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
            milestones: Some(milestones.into()),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Strict conversion used by the store: title and milestones must both be
    /// present and the count must be a positive integer.
    pub fn into_new_goal(self) -> Result<NewGoal, ValidationError> {
        let title = required_title(self.title)?;
        let raw = self
            .milestones
            .ok_or(ValidationError::MissingField("milestones"))?;
        let count = raw
            .parse()
            .ok_or_else(|| ValidationError::invalid("milestones", "not a number"))?;
        if count < 1 {
            return Err(ValidationError::invalid(
                "milestones",
                format!("must be at least 1, got {}", count),
            ));
        }
        let milestones = i32::try_from(count)
            .map_err(|_| ValidationError::invalid("milestones", "too large"))?;

        Ok(NewGoal {
            title,
            description: normalize_description(self.description),
            milestones,
        })
    }

    /// Lenient conversion used by the client form: a missing, non-numeric or
    /// non-positive milestone count falls back to one. The title is still
    /// required.
    pub fn coerce(self) -> Result<NewGoal, ValidationError> {
        let title = required_title(self.title)?;
        let milestones = self
            .milestones
            .as_ref()
            .and_then(MilestoneInput::parse)
            .filter(|n| *n >= 1)
            .map(|n| n.min(i64::from(i32::MAX)) as i32)
            .unwrap_or(1);

        Ok(NewGoal {
            title,
            description: normalize_description(self.description),
            milestones,
        })
    }
}

fn required_title(title: Option<String>) -> Result<String, ValidationError> {
    let title = title.ok_or(ValidationError::MissingField("title"))?;
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyField { field: "title" });
    }
    Ok(title)
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|d| !d.trim().is_empty())
}

/// Body of a progress patch. Both counters are written as given.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgressPatch {
    pub completed: i32,
    pub progress: i32,
}
