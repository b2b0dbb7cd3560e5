//! Progress arithmetic shared by every layer that touches goal counters.

use serde::{Deserialize, Serialize};

/// Percentage of `completed` over `milestones`, rounded half up.
///
/// A non-positive milestone count yields zero.
pub fn progress_percent(completed: i32, milestones: i32) -> i32 {
    if milestones <= 0 {
        return 0;
    }
    let completed = i64::from(completed);
    let milestones = i64::from(milestones);
    // floor(100c/m + 1/2) without going through floats
    ((200 * completed + milestones).div_euclid(2 * milestones)) as i32
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ToggleDirection {
    Completed,
    Unchecked,
}

impl ToggleDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Unchecked => "unchecked",
        }
    }
}

/// Result of toggling one milestone on a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneToggle {
    pub goal_id: String,
    pub index: u32,
    pub direction: ToggleDirection,
    pub completed: i32,
    pub progress: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent_rounds_half_up() {
        assert_eq!(progress_percent(1, 8), 13); // 12.5
        assert_eq!(progress_percent(5, 8), 63); // 62.5
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 67);
    }

    #[test]
    fn test_progress_percent_bounds() {
        assert_eq!(progress_percent(0, 5), 0);
        assert_eq!(progress_percent(5, 5), 100);
        assert_eq!(progress_percent(3, 0), 0);
        assert_eq!(progress_percent(3, -2), 0);
    }

    #[test]
    fn test_progress_percent_large_counts_do_not_overflow() {
        assert_eq!(progress_percent(i32::MAX, i32::MAX), 100);
    }
}
