//! Tests for goal models and the milestone toggle rules.

use crate::errors::ValidationError;
use crate::goals::{
    progress_percent, Goal, GoalSummary, MilestoneInput, NewGoal, NewGoalInput, ToggleDirection,
};
use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 7, 8)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

fn create_test_goal(milestones: i32, completed: i32) -> Goal {
    Goal {
        id: "goal-1".to_string(),
        title: "Run 5K Marathon".to_string(),
        description: None,
        milestones,
        completed,
        progress: progress_percent(completed, milestones),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

// ==================== Creation ====================

#[test]
fn test_from_new_starts_empty() {
    let new_goal = NewGoal {
        title: "Read 24 Books".to_string(),
        description: Some("One every two weeks".to_string()),
        milestones: 24,
    };
    let goal = Goal::from_new("abc".to_string(), new_goal, timestamp());

    assert_eq!(goal.completed, 0);
    assert_eq!(goal.progress, 0);
    assert_eq!(goal.milestones, 24);
    assert_eq!(goal.created_at, goal.updated_at);
    assert!(goal.is_consistent());
}

#[test]
fn test_into_new_goal_requires_title() {
    let input = NewGoalInput {
        title: None,
        description: None,
        milestones: Some(MilestoneInput::Count(3)),
    };
    assert_eq!(
        input.into_new_goal().unwrap_err(),
        ValidationError::MissingField("title")
    );

    let blank = NewGoalInput::new("   ", 3);
    assert_eq!(
        blank.into_new_goal().unwrap_err(),
        ValidationError::EmptyField { field: "title" }
    );
}

#[test]
fn test_into_new_goal_requires_positive_milestones() {
    let missing = NewGoalInput {
        title: Some("Read".to_string()),
        description: None,
        milestones: None,
    };
    assert_eq!(
        missing.into_new_goal().unwrap_err(),
        ValidationError::MissingField("milestones")
    );

    assert!(NewGoalInput::new("Read", 0).into_new_goal().is_err());
    assert!(NewGoalInput::new("Read", "lots").into_new_goal().is_err());
}

#[test]
fn test_into_new_goal_accepts_numeric_strings() {
    let goal = NewGoalInput::new("Read", "5").into_new_goal().unwrap();
    assert_eq!(goal.milestones, 5);
}

#[test]
fn test_coerce_defaults_milestones_to_one() {
    let missing = NewGoalInput {
        title: Some("Meditate".to_string()),
        description: None,
        milestones: None,
    };
    assert_eq!(missing.coerce().unwrap().milestones, 1);
    assert_eq!(NewGoalInput::new("Meditate", "abc").coerce().unwrap().milestones, 1);
    assert_eq!(NewGoalInput::new("Meditate", 0).coerce().unwrap().milestones, 1);
    assert_eq!(NewGoalInput::new("Meditate", "7").coerce().unwrap().milestones, 7);
}

#[test]
fn test_coerce_still_requires_title() {
    assert!(NewGoalInput::new("", 3).coerce().is_err());
}

#[test]
fn test_blank_description_is_dropped() {
    let goal = NewGoalInput::new("Read", 2)
        .with_description("  ")
        .into_new_goal()
        .unwrap();
    assert_eq!(goal.description, None);
}

#[test]
fn test_milestone_input_deserialization() {
    let input: NewGoalInput =
        serde_json::from_str(r#"{"title":"Read","milestones":"4"}"#).unwrap();
    assert_eq!(input.milestones, Some(MilestoneInput::Text("4".to_string())));

    let input: NewGoalInput = serde_json::from_str(r#"{"title":"Read","milestones":4}"#).unwrap();
    assert_eq!(input.milestones, Some(MilestoneInput::Count(4)));

    let input: NewGoalInput =
        serde_json::from_str(r#"{"title":"Read","milestones":4.9}"#).unwrap();
    assert_eq!(input.milestones.unwrap().parse(), Some(4));
}

// ==================== Toggle ====================

#[test]
fn test_toggle_extends_prefix() {
    let mut goal = create_test_goal(4, 1);
    let toggle = goal.toggle_milestone(2).unwrap();

    assert_eq!(toggle.direction, ToggleDirection::Completed);
    assert_eq!(goal.completed, 3);
    assert_eq!(goal.progress, 75);
}

#[test]
fn test_toggle_truncates_prefix() {
    let mut goal = create_test_goal(4, 3);
    let toggle = goal.toggle_milestone(1).unwrap();

    assert_eq!(toggle.direction, ToggleDirection::Unchecked);
    assert_eq!(goal.completed, 1);
    assert_eq!(goal.progress, 25);
}

#[test]
fn test_toggle_first_milestone_back_to_zero() {
    let mut goal = create_test_goal(3, 1);
    goal.toggle_milestone(0).unwrap();
    assert_eq!(goal.completed, 0);
    assert_eq!(goal.progress, 0);
}

#[test]
fn test_toggle_out_of_range_is_ignored() {
    let mut goal = create_test_goal(3, 1);
    assert!(goal.toggle_milestone(3).is_none());
    assert_eq!(goal.completed, 1);
}

#[test]
fn test_toggle_twice_flips_direction() {
    let mut goal = create_test_goal(5, 0);

    let first = goal.toggle_milestone(2).unwrap();
    assert_eq!(first.direction, ToggleDirection::Completed);
    assert_eq!(goal.completed, 3);

    let second = goal.toggle_milestone(2).unwrap();
    assert_eq!(second.direction, ToggleDirection::Unchecked);
    assert_eq!(goal.completed, 2);
    assert_eq!(goal.progress, 40);
}

#[test]
fn test_progress_patch_mirrors_counters() {
    let goal = create_test_goal(4, 3);
    let patch = goal.progress_patch();
    assert_eq!(patch.completed, 3);
    assert_eq!(patch.progress, 75);
}

#[test]
fn test_inconsistent_goal_detected() {
    let mut goal = create_test_goal(5, 3);
    goal.progress = 999;
    assert!(!goal.is_consistent());
    assert_eq!(goal.expected_progress(), 60);
}

#[test]
fn test_goal_serializes_camel_case() {
    let goal = create_test_goal(4, 3);
    let json = serde_json::to_value(&goal).unwrap();
    assert_eq!(json["completed"], 3);
    assert_eq!(json["progress"], 75);
    assert!(json.get("createdAt").is_some());
    assert!(json.get("created_at").is_none());
}

// ==================== Summary ====================

#[test]
fn test_summary_of_no_goals() {
    assert_eq!(GoalSummary::from_goals(&[]), GoalSummary::default());
}

#[test]
fn test_summary_averages_progress() {
    let goals = vec![
        create_test_goal(4, 3),   // 75
        create_test_goal(5, 3),   // 60
        create_test_goal(24, 11), // 46
        create_test_goal(2, 2),   // 100
    ];
    let summary = GoalSummary::from_goals(&goals);

    assert_eq!(summary.total_goals, 4);
    assert_eq!(summary.average_progress, 70); // 281 / 4 = 70.25
    assert_eq!(summary.completed_milestones, 19);
    assert_eq!(summary.total_milestones, 35);
    assert_eq!(summary.achieved_goals, 1);
}

#[test]
fn test_summary_average_rounds_half_up() {
    let goals = vec![create_test_goal(2, 1), create_test_goal(1, 0)]; // 50, 0
    assert_eq!(GoalSummary::from_goals(&goals).average_progress, 25);

    let goals = vec![create_test_goal(1, 1), create_test_goal(2, 0)]; // 100, 0
    assert_eq!(GoalSummary::from_goals(&goals).average_progress, 50);

    let mut odd = create_test_goal(8, 1); // 13
    odd.progress = 1;
    let goals = vec![odd, create_test_goal(1, 0)]; // (1 + 0) / 2 = 0.5
    assert_eq!(GoalSummary::from_goals(&goals).average_progress, 1);
}

// ==================== Properties ====================

fn arb_goal_and_index() -> impl Strategy<Value = (i32, i32, u32)> {
    (1i32..=40).prop_flat_map(|milestones| {
        (Just(milestones), 0..=milestones, 0..milestones as u32)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_new_goal_starts_at_zero(milestones in 1i32..=1000, title in "[A-Za-z][A-Za-z ]{0,30}") {
        let new_goal = NewGoalInput::new(title, milestones).into_new_goal().unwrap();
        let goal = Goal::from_new("id".to_string(), new_goal, timestamp());
        prop_assert_eq!(goal.completed, 0);
        prop_assert_eq!(goal.progress, 0);
    }

    #[test]
    fn prop_toggle_follows_threshold_rule((milestones, completed, index) in arb_goal_and_index()) {
        let mut goal = create_test_goal(milestones, completed);
        let toggle = goal.toggle_milestone(index).unwrap();
        let idx = index as i32;

        if idx >= completed {
            prop_assert_eq!(toggle.direction, ToggleDirection::Completed);
            prop_assert_eq!(goal.completed, idx + 1);
            prop_assert_eq!(goal.progress, progress_percent(idx + 1, milestones));
        } else {
            prop_assert_eq!(toggle.direction, ToggleDirection::Unchecked);
            prop_assert_eq!(goal.completed, idx);
            prop_assert_eq!(goal.progress, progress_percent(idx, milestones));
        }
        prop_assert!(goal.is_consistent());
    }

    #[test]
    fn prop_second_toggle_reverses_direction((milestones, completed, index) in arb_goal_and_index()) {
        let mut goal = create_test_goal(milestones, completed);
        let first = goal.toggle_milestone(index).unwrap();
        let second = goal.toggle_milestone(index).unwrap();
        prop_assert_ne!(first.direction, second.direction);
    }

    #[test]
    fn prop_progress_matches_float_rounding(milestones in 1i32..=500, completed in 0i32..=500) {
        let completed = completed.min(milestones);
        let expected = (100.0 * f64::from(completed) / f64::from(milestones) + 0.5).floor() as i32;
        prop_assert_eq!(progress_percent(completed, milestones), expected);
    }
}
