//! Integration tests driving the signup/unregister flows through the router.

mod test_utils;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use mergington_api::repositories::{
    ActivityRepository, CreateActivityRequest, StudentRepository,
};
use mergington_api::seeds::seed_activities;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::{setup_test_db, test_app};
use tower::ServiceExt;

/// Builds a router around a freshly migrated and seeded database, returning
/// the connection as well for direct repository assertions.
async fn seeded_app() -> (Router, DatabaseConnection) {
    let db = setup_test_db().await.unwrap();
    seed_activities(&db).await.unwrap();
    (test_app(db.clone()), db)
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

#[tokio::test]
async fn test_list_activities_returns_seeded_catalog() {
    let (app, _db) = seeded_app().await;

    let (status, body) = send(&app, "GET", "/activities").await;

    assert_eq!(status, StatusCode::OK);
    let map = body.as_object().unwrap();
    assert_eq!(map.len(), 3);

    let chess = &map["Chess Club"];
    assert_eq!(
        chess["description"],
        "Learn strategies and compete in chess tournaments"
    );
    assert_eq!(chess["schedule"], "Fridays, 3:30 PM - 5:00 PM");
    assert_eq!(chess["max_participants"], 12);
    assert_eq!(chess["participants"], serde_json::json!([]));
}

#[tokio::test]
async fn test_signup_roundtrip_appears_in_and_leaves_roster() {
    let (app, _db) = seeded_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/activities/Chess%20Club/signup?email=michael@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Signed up michael@mergington.edu for Chess Club"
    );

    let (_, listing) = send(&app, "GET", "/activities").await;
    assert_eq!(
        listing["Chess Club"]["participants"],
        serde_json::json!(["michael@mergington.edu"])
    );

    let (status, body) = send(
        &app,
        "DELETE",
        "/activities/Chess%20Club/unregister?email=michael@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Unregistered michael@mergington.edu from Chess Club"
    );

    let (_, listing) = send(&app, "GET", "/activities").await;
    assert_eq!(
        listing["Chess Club"]["participants"],
        serde_json::json!([])
    );
}

#[tokio::test]
async fn test_duplicate_signup_is_rejected() {
    let (app, _db) = seeded_app().await;
    let uri = "/activities/Chess%20Club/signup?email=daniel@mergington.edu";

    let (status, _) = send(&app, "POST", uri).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "POST", uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Student is already signed up");
    assert_eq!(body["code"], "CONFLICT");
}

#[tokio::test]
async fn test_capacity_limit_is_enforced() {
    let (app, db) = seeded_app().await;

    ActivityRepository::new(&db)
        .create(CreateActivityRequest {
            name: "Art Studio".to_string(),
            description: "Painting and drawing for all levels".to_string(),
            schedule: "Wednesdays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: 1,
        })
        .await
        .unwrap();

    let (status, _) = send(
        &app,
        "POST",
        "/activities/Art%20Studio/signup?email=emma@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "POST",
        "/activities/Art%20Studio/signup?email=liam@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Activity is full");
}

#[tokio::test]
async fn test_zero_max_participants_means_unlimited() {
    let (app, db) = seeded_app().await;

    // A ceiling of 0 disables the capacity check rather than closing signups
    ActivityRepository::new(&db)
        .create(CreateActivityRequest {
            name: "Study Hall".to_string(),
            description: "Quiet space for homework".to_string(),
            schedule: "Daily, 3:00 PM - 5:00 PM".to_string(),
            max_participants: 0,
        })
        .await
        .unwrap();

    for email in [
        "ava@mergington.edu",
        "noah@mergington.edu",
        "mia@mergington.edu",
    ] {
        let uri = format!("/activities/Study%20Hall/signup?email={}", email);
        let (status, _) = send(&app, "POST", &uri).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, listing) = send(&app, "GET", "/activities").await;
    assert_eq!(
        listing["Study Hall"]["participants"]
            .as_array()
            .unwrap()
            .len(),
        3
    );
}

#[tokio::test]
async fn test_unknown_activity_returns_not_found() {
    let (app, _db) = seeded_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/activities/Water%20Polo/signup?email=michael@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Activity not found");

    let (status, body) = send(
        &app,
        "DELETE",
        "/activities/Water%20Polo/unregister?email=michael@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Activity not found");
}

#[tokio::test]
async fn test_unregister_twice_fails_the_second_time() {
    let (app, _db) = seeded_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/activities/Gym%20Class/signup?email=olivia@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let uri = "/activities/Gym%20Class/unregister?email=olivia@mergington.edu";

    let (status, _) = send(&app, "DELETE", uri).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "DELETE", uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Student is not signed up for this activity"
    );
}

#[tokio::test]
async fn test_unregister_unknown_student_fails() {
    let (app, _db) = seeded_app().await;

    let (status, body) = send(
        &app,
        "DELETE",
        "/activities/Chess%20Club/unregister?email=ghost@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Student is not signed up for this activity"
    );
}

#[tokio::test]
async fn test_rejected_signup_still_creates_the_student() {
    let (app, db) = seeded_app().await;

    ActivityRepository::new(&db)
        .create(CreateActivityRequest {
            name: "Robotics".to_string(),
            description: "Build and program robots".to_string(),
            schedule: "Saturdays, 10:00 AM - 12:00 PM".to_string(),
            max_participants: 1,
        })
        .await
        .unwrap();

    let (status, _) = send(
        &app,
        "POST",
        "/activities/Robotics/signup?email=first@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "POST",
        "/activities/Robotics/signup?email=late@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The student record is persisted before the capacity check runs
    let student = StudentRepository::new(&db)
        .find_by_email("late@mergington.edu")
        .await
        .unwrap();
    assert!(student.is_some());
}

#[tokio::test]
async fn test_health_reports_service_info() {
    let (app, _db) = seeded_app().await;

    let (status, body) = send(&app, "GET", "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "mergington-api");
}
