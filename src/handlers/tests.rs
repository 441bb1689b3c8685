//! # Tests for Handlers
//!
//! This module contains unit tests for API handlers and their DTOs.

use crate::handlers::activities::{ActivityDetail, EmailQuery, MessageResponse};
use crate::handlers::root;
use crate::models::ServiceInfo;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::{Value, json};

#[tokio::test]
async fn test_root_redirects_to_static_landing_page() {
    let response = root().await.into_response();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "/static/index.html"
    );
}

#[test]
fn test_service_info_default() {
    let service_info = ServiceInfo::default();

    assert_eq!(service_info.service, "mergington-api");
    assert_eq!(service_info.version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_email_query_round_trip() {
    let query = EmailQuery {
        email: "michael@mergington.edu".to_string(),
    };

    let serialized = serde_json::to_string(&query).unwrap();
    let parsed: EmailQuery = serde_json::from_str(&serialized).unwrap();

    assert_eq!(parsed.email, "michael@mergington.edu");
}

#[test]
fn test_activity_detail_serialization_shape() {
    let detail = ActivityDetail {
        description: Some("Learn strategies and compete in chess tournaments".to_string()),
        schedule: Some("Fridays, 3:30 PM - 5:00 PM".to_string()),
        max_participants: 12,
        participants: vec!["michael@mergington.edu".to_string()],
    };

    let value: Value = serde_json::to_value(&detail).unwrap();

    assert_eq!(
        value,
        json!({
            "description": "Learn strategies and compete in chess tournaments",
            "schedule": "Fridays, 3:30 PM - 5:00 PM",
            "max_participants": 12,
            "participants": ["michael@mergington.edu"]
        })
    );
}

#[test]
fn test_message_response_serialization() {
    let response = MessageResponse {
        message: "Signed up michael@mergington.edu for Chess Club".to_string(),
    };

    let value: Value = serde_json::to_value(&response).unwrap();

    assert_eq!(
        value.get("message").unwrap().as_str().unwrap(),
        "Signed up michael@mergington.edu for Chess Club"
    );
}
