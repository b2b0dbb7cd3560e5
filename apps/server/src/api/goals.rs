use std::sync::Arc;

use crate::{
    error::{ApiResult, OrFail},
    main_lib::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, patch, MethodRouter},
    Json, Router,
};
use mindgrow_core::{
    goals::{Goal, GoalProgressPatch, GoalSummary, NewGoalInput},
    mindmap::{self, MindMap},
};

async fn get_goals(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.goal_service.get_goals().or_fail("Failed to fetch goals")?;
    Ok(Json(goals))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewGoalInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Goal>)> {
    const FAILED: &str = "Failed to create goal";
    let Json(input) = payload.or_fail(FAILED)?;
    let goal = state.goal_service.create_goal(input).await.or_fail(FAILED)?;
    Ok((StatusCode::CREATED, Json(goal)))
}

/// Overwrites `completed` and `progress` as sent. Unknown ids answer `200 null`.
async fn patch_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GoalProgressPatch>, JsonRejection>,
) -> ApiResult<Json<Option<Goal>>> {
    patch_progress(&state, id, payload).await
}

async fn patch_progress(
    state: &AppState,
    id: String,
    payload: Result<Json<GoalProgressPatch>, JsonRejection>,
) -> ApiResult<Json<Option<Goal>>> {
    const FAILED: &str = "Update failed";
    let Json(patch) = payload.or_fail(FAILED)?;
    let goal = state
        .goal_service
        .patch_goal_progress(id, patch)
        .await
        .or_fail(FAILED)?;
    Ok(Json(goal))
}

/// PATCH on a fixed segment under `/goals`, treating the segment as a goal id.
fn patch_fixed_segment(segment: &'static str) -> MethodRouter<Arc<AppState>> {
    patch(
        move |State(state): State<Arc<AppState>>,
              payload: Result<Json<GoalProgressPatch>, JsonRejection>| async move {
            patch_progress(&state, segment.to_string(), payload).await
        },
    )
}

async fn get_summary(State(state): State<Arc<AppState>>) -> ApiResult<Json<GoalSummary>> {
    let summary = state
        .goal_service
        .get_summary()
        .or_fail("Failed to summarize goals")?;
    Ok(Json(summary))
}

async fn get_mind_map(State(state): State<Arc<AppState>>) -> ApiResult<Json<MindMap>> {
    let goals = state
        .goal_service
        .get_goals()
        .or_fail("Failed to build mind map")?;
    Ok(Json(mindmap::layout(&goals)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(get_goals).post(create_goal))
        .route(
            "/goals/summary",
            patch_fixed_segment("summary").get(get_summary),
        )
        .route(
            "/goals/mindmap",
            patch_fixed_segment("mindmap").get(get_mind_map),
        )
        .route("/goals/{id}", patch(patch_goal))
}
