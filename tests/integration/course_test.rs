//! Integration tests for the course catalog endpoints.

mod helpers;

use http::StatusCode;
use serde_json::Value;

use helpers::TestApp;

fn course_payload(code: &str) -> Value {
    serde_json::json!({
        "course_code": code,
        "course_name": "Intro to Computer Science",
        "credits": 3,
        "department": "CS",
    })
}

async fn create_course(app: &TestApp, payload: Value) -> Value {
    let response = app.request("POST", "/api/courses", Some(payload)).await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.body["data"].clone()
}

#[tokio::test]
async fn test_create_course_defaults() {
    let app = TestApp::new().await;

    let course = create_course(&app, course_payload("CS101")).await;

    assert!(course["id"].as_i64().is_some());
    assert_eq!(course["current_enrollment"], 0);
    assert_eq!(course["is_active"], true);
    assert_eq!(course["created_at"], course["updated_at"]);
}

#[tokio::test]
async fn test_duplicate_course_code_is_rejected() {
    let app = TestApp::new().await;
    create_course(&app, course_payload("CS101")).await;

    let response = app
        .request("POST", "/api/courses", Some(course_payload("CS101")))
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["field"], "course_code");
}

#[tokio::test]
async fn test_get_course_by_code() {
    let app = TestApp::new().await;
    create_course(&app, course_payload("CS101")).await;

    let response = app.request("GET", "/api/courses/code/CS101", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["course_code"], "CS101");

    let response = app.request("GET", "/api/courses/code/CS999", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_partial_update_refreshes_updated_at() {
    let app = TestApp::new().await;
    let course = create_course(&app, course_payload("CS101")).await;
    let id = course["id"].as_i64().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/courses/{id}"),
            Some(serde_json::json!({ "max_students": 30 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let updated = &response.body["data"];
    assert_eq!(updated["max_students"], 30);
    assert_eq!(updated["course_name"], course["course_name"]);
    assert_eq!(updated["course_code"], "CS101");
    assert!(updated["updated_at"].as_str().unwrap() > course["updated_at"].as_str().unwrap());
}

#[tokio::test]
async fn test_department_and_instructor_filters() {
    let app = TestApp::new().await;

    let mut cs = course_payload("CS101");
    cs["instructor_id"] = 7.into();
    create_course(&app, cs).await;

    let mut math = course_payload("MA201");
    math["department"] = "Math".into();
    create_course(&app, math).await;

    let response = app.request("GET", "/api/courses/department/CS", None).await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);

    let response = app.request("GET", "/api/courses/instructor/7", None).await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_deactivate_hides_course_from_active_listing() {
    let app = TestApp::new().await;
    let course = create_course(&app, course_payload("CS101")).await;
    let id = course["id"].as_i64().unwrap();

    app.request("PUT", &format!("/api/courses/{id}/deactivate"), None)
        .await;

    let response = app.request("GET", "/api/courses/active", None).await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_delete_missing_course_returns_not_found() {
    let app = TestApp::new().await;

    let response = app.request("DELETE", "/api/courses/4242", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_validation_rejects_zero_credits() {
    let app = TestApp::new().await;

    let mut payload = course_payload("CS101");
    payload["credits"] = 0.into();

    let response = app.request("POST", "/api/courses", Some(payload)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
