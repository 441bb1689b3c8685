//! # API Handlers
//!
//! This module contains all the HTTP endpoint handlers for the Mergington
//! activities API.

use axum::{
    extract::State,
    response::{Json, Redirect},
};

use crate::db;
use crate::error::ApiError;
use crate::models::ServiceInfo;
use crate::server::AppState;

pub mod activities;

/// Root handler that redirects to the static landing page
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 307, description = "Redirect to the static landing page")
    ),
    tag = "root"
)]
pub async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// Health handler that verifies the database connection is reachable
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = ServiceInfo),
        (status = 500, description = "Database unreachable", body = ApiError)
    ),
    tag = "root"
)]
pub async fn health(State(state): State<AppState>) -> Result<Json<ServiceInfo>, ApiError> {
    db::health_check(&state.db).await?;
    Ok(Json(ServiceInfo::default()))
}

#[cfg(test)]
mod tests;
