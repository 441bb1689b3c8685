//! # Activities API Handlers
//!
//! This module contains handlers for listing activities and for the signup
//! and unregister operations.

use crate::error::ApiError;
use crate::repositories::{ActivityRepository, SignupRepository, StudentRepository};
use crate::server::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use metrics::counter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};

/// Query parameters identifying the student for signup/unregister
#[derive(Debug, Deserialize, Serialize, IntoParams, ToSchema)]
pub struct EmailQuery {
    /// Student email address
    #[param(example = "michael@mergington.edu")]
    pub email: String,
}

/// One activity entry in the listing response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ActivityDetail {
    /// Free-text description of the activity
    pub description: Option<String>,
    /// Human-readable schedule
    pub schedule: Option<String>,
    /// Capacity ceiling; 0 means unlimited
    pub max_participants: i32,
    /// Emails of the currently signed-up students
    pub participants: Vec<String>,
}

/// Success message returned by signup and unregister
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable confirmation message
    pub message: String,
}

/// Lists all activities with their current rosters
#[utoipa::path(
    get,
    path = "/activities",
    responses(
        (status = 200, description = "Map of activity name to details", body = BTreeMap<String, ActivityDetail>, example = json!({
            "Chess Club": {
                "description": "Learn strategies and compete in chess tournaments",
                "schedule": "Fridays, 3:30 PM - 5:00 PM",
                "max_participants": 12,
                "participants": ["michael@mergington.edu"]
            }
        }))
    ),
    tag = "activities"
)]
pub async fn list_activities(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, ActivityDetail>>, ApiError> {
    let activity_repo = ActivityRepository::new(&state.db);
    let signup_repo = SignupRepository::new(&state.db);

    let mut result = BTreeMap::new();
    for activity in activity_repo.list_all().await? {
        let participants = signup_repo.participant_emails(activity.id).await?;
        result.insert(
            activity.name,
            ActivityDetail {
                description: activity.description,
                schedule: activity.schedule,
                max_participants: activity.max_participants,
                participants,
            },
        );
    }

    Ok(Json(result))
}

/// Signs a student up for an activity
#[utoipa::path(
    post,
    path = "/activities/{activity_name}/signup",
    params(
        ("activity_name" = String, Path, description = "Activity name"),
        EmailQuery
    ),
    responses(
        (status = 200, description = "Student signed up", body = MessageResponse),
        (status = 400, description = "Already signed up or activity full", body = ApiError),
        (status = 404, description = "Activity not found", body = ApiError)
    ),
    tag = "activities"
)]
pub async fn signup_for_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let activity_repo = ActivityRepository::new(&state.db);
    let student_repo = StudentRepository::new(&state.db);
    let signup_repo = SignupRepository::new(&state.db);

    // Validate activity exists
    let activity = activity_repo
        .find_by_name(&activity_name)
        .await?
        .ok_or_else(|| {
            ApiError::new(StatusCode::NOT_FOUND, "NOT_FOUND", "Activity not found")
        })?;

    // Ensure student exists or create. The new record is persisted before the
    // duplicate/capacity checks run, so it survives a rejected signup.
    let student = match student_repo.find_by_email(&query.email).await? {
        Some(student) => student,
        None => student_repo.create_with_email(&query.email).await?,
    };

    // Check existing signup
    if signup_repo
        .find_by_pair(activity.id, student.id)
        .await?
        .is_some()
    {
        counter!("mergington_signups_total", "outcome" => "duplicate").increment(1);
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "CONFLICT",
            "Student is already signed up",
        ));
    }

    // Check capacity; a ceiling of 0 disables the check entirely
    if activity.max_participants != 0
        && signup_repo.count_for_activity(activity.id).await?
            >= activity.max_participants as u64
    {
        counter!("mergington_signups_total", "outcome" => "full").increment(1);
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "CONFLICT",
            "Activity is full",
        ));
    }

    signup_repo.create(activity.id, student.id).await?;

    tracing::info!(activity = %activity.name, email = %student.email, "student signed up");
    counter!("mergington_signups_total", "outcome" => "success").increment(1);

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", query.email, activity_name),
    }))
}

/// Removes a student's signup for an activity
#[utoipa::path(
    delete,
    path = "/activities/{activity_name}/unregister",
    params(
        ("activity_name" = String, Path, description = "Activity name"),
        EmailQuery
    ),
    responses(
        (status = 200, description = "Student unregistered", body = MessageResponse),
        (status = 400, description = "Student is not signed up", body = ApiError),
        (status = 404, description = "Activity not found", body = ApiError)
    ),
    tag = "activities"
)]
pub async fn unregister_from_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let activity_repo = ActivityRepository::new(&state.db);
    let student_repo = StudentRepository::new(&state.db);
    let signup_repo = SignupRepository::new(&state.db);

    let activity = activity_repo
        .find_by_name(&activity_name)
        .await?
        .ok_or_else(|| {
            ApiError::new(StatusCode::NOT_FOUND, "NOT_FOUND", "Activity not found")
        })?;

    let student = student_repo
        .find_by_email(&query.email)
        .await?
        .ok_or_else(|| {
            ApiError::new(
                StatusCode::BAD_REQUEST,
                "VALIDATION_FAILED",
                "Student is not signed up for this activity",
            )
        })?;

    let signup = signup_repo
        .find_by_pair(activity.id, student.id)
        .await?
        .ok_or_else(|| {
            ApiError::new(
                StatusCode::BAD_REQUEST,
                "VALIDATION_FAILED",
                "Student is not signed up for this activity",
            )
        })?;

    signup_repo.delete(signup).await?;

    tracing::info!(activity = %activity.name, email = %student.email, "student unregistered");
    counter!("mergington_unregistrations_total", "outcome" => "success").increment(1);

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", query.email, activity_name),
    }))
}
