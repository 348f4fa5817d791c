//! Integration tests for the user directory endpoints.

mod helpers;

use http::StatusCode;

use helpers::{TestApp, student_payload, teacher_payload};

#[tokio::test]
async fn test_create_first_student_assigns_generated_id() {
    let app = TestApp::new().await;

    let user = app.create_user(student_payload("jdoe", "j@x.edu")).await;

    assert!(user["id"].as_i64().is_some());
    assert_eq!(user["student_id"], "STU000001");
    assert_eq!(user["is_active"], true);
    assert_eq!(user["created_at"], user["updated_at"]);
}

#[tokio::test]
async fn test_second_student_gets_next_sequence_number() {
    let app = TestApp::new().await;

    let first = app.create_user(student_payload("jdoe", "j@x.edu")).await;
    let second = app.create_user(student_payload("asmith", "a@x.edu")).await;

    assert_eq!(first["student_id"], "STU000001");
    assert_eq!(second["student_id"], "STU000002");
}

#[tokio::test]
async fn test_explicit_student_id_is_kept() {
    let app = TestApp::new().await;

    let mut payload = student_payload("jdoe", "j@x.edu");
    payload["student_id"] = "STU777777".into();

    let user = app.create_user(payload).await;
    assert_eq!(user["student_id"], "STU777777");
}

#[tokio::test]
async fn test_teacher_gets_employee_id_admin_does_not() {
    let app = TestApp::new().await;

    let teacher = app.create_user(teacher_payload("prof", "p@x.edu")).await;
    assert_eq!(teacher["employee_id"], "EMP000001");
    assert!(teacher["student_id"].is_null());

    let admin = app
        .create_user(serde_json::json!({
            "username": "root",
            "email": "root@x.edu",
            "first_name": "Ada",
            "last_name": "Admin",
            "role": "admin",
        }))
        .await;
    assert!(admin["employee_id"].is_null());

    // Admins still count toward the employee sequence.
    let second_teacher = app.create_user(teacher_payload("prof2", "p2@x.edu")).await;
    assert_eq!(second_teacher["employee_id"], "EMP000003");
}

#[tokio::test]
async fn test_duplicate_username_is_rejected_and_not_persisted() {
    let app = TestApp::new().await;
    app.create_user(student_payload("jdoe", "j@x.edu")).await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(student_payload("jdoe", "other@x.edu")),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["field"], "username");

    let list = app.request("GET", "/api/users", None).await;
    assert_eq!(list.body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let app = TestApp::new().await;
    app.create_user(student_payload("jdoe", "j@x.edu")).await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(student_payload("someone", "j@x.edu")),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["field"], "email");
}

#[tokio::test]
async fn test_duplicate_explicit_student_id_is_rejected() {
    let app = TestApp::new().await;

    let mut payload = student_payload("jdoe", "j@x.edu");
    payload["student_id"] = "STU900000".into();
    app.create_user(payload).await;

    let mut second = student_payload("asmith", "a@x.edu");
    second["student_id"] = "STU900000".into();

    let response = app.request("POST", "/api/users", Some(second)).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["field"], "student_id");
}

#[tokio::test]
async fn test_validation_rejects_short_username_and_bad_email() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/users", Some(student_payload("jd", "j@x.edu")))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(student_payload("jdoe", "not-an-email")),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_role_is_rejected() {
    let app = TestApp::new().await;

    let mut payload = student_payload("jdoe", "j@x.edu");
    payload["role"] = "dean".into();

    let response = app.request("POST", "/api/users", Some(payload)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_partial_update_changes_only_given_fields() {
    let app = TestApp::new().await;
    let user = app.create_user(student_payload("jdoe", "j@x.edu")).await;
    let id = user["id"].as_i64().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{id}"),
            Some(serde_json::json!({ "department": "CS" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let updated = &response.body["data"];
    assert_eq!(updated["department"], "CS");
    assert_eq!(updated["username"], "jdoe");
    assert_eq!(updated["email"], "j@x.edu");
    assert_eq!(updated["first_name"], "J");
    assert_eq!(updated["student_id"], user["student_id"]);
    assert!(
        updated["updated_at"].as_str().unwrap() > user["updated_at"].as_str().unwrap(),
        "updated_at must strictly increase"
    );
}

#[tokio::test]
async fn test_update_missing_user_returns_not_found() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "PUT",
            "/api/users/4242",
            Some(serde_json::json!({ "department": "CS" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_activate_is_idempotent_but_refreshes_updated_at() {
    let app = TestApp::new().await;
    let user = app.create_user(student_payload("jdoe", "j@x.edu")).await;
    let id = user["id"].as_i64().unwrap();

    let response = app
        .request("PUT", &format!("/api/users/{id}/activate"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let activated = &response.body["data"];
    assert_eq!(activated["is_active"], true);
    assert!(activated["updated_at"].as_str().unwrap() > user["updated_at"].as_str().unwrap());
}

#[tokio::test]
async fn test_deactivate_then_activate() {
    let app = TestApp::new().await;
    let user = app.create_user(student_payload("jdoe", "j@x.edu")).await;
    let id = user["id"].as_i64().unwrap();

    let response = app
        .request("PUT", &format!("/api/users/{id}/deactivate"), None)
        .await;
    assert_eq!(response.body["data"]["is_active"], false);

    let response = app
        .request("PUT", &format!("/api/users/{id}/activate"), None)
        .await;
    assert_eq!(response.body["data"]["is_active"], true);
}

#[tokio::test]
async fn test_delete_user() {
    let app = TestApp::new().await;
    let user = app.create_user(student_payload("jdoe", "j@x.edu")).await;
    let id = user["id"].as_i64().unwrap();

    let response = app.request("DELETE", &format!("/api/users/{id}"), None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.request("GET", &format!("/api/users/{id}"), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_user_leaves_store_unchanged() {
    let app = TestApp::new().await;
    app.create_user(student_payload("jdoe", "j@x.edu")).await;

    let response = app.request("DELETE", "/api/users/4242", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let list = app.request("GET", "/api/users", None).await;
    assert_eq!(list.body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_lookup_by_username_email_and_student_id() {
    let app = TestApp::new().await;
    let user = app.create_user(student_payload("jdoe", "j@x.edu")).await;
    let student_id = user["student_id"].as_str().unwrap();

    let response = app.request("GET", "/api/users/username/jdoe", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], "jdoe");

    let response = app.request("GET", "/api/users/email/j@x.edu", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &format!("/api/users/student/{student_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/users/username/ghost", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_role_and_department_filters() {
    let app = TestApp::new().await;

    let mut student = student_payload("jdoe", "j@x.edu");
    student["department"] = "CS".into();
    app.create_user(student).await;

    let mut teacher = teacher_payload("prof", "p@x.edu");
    teacher["department"] = "Math".into();
    app.create_user(teacher).await;

    let response = app.request("GET", "/api/users/role/student", None).await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);

    let response = app.request("GET", "/api/users/department/CS", None).await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);

    let response = app
        .request("GET", "/api/users/role/teacher/department/Math", None)
        .await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);

    let response = app
        .request("GET", "/api/users/role/student/department/Math", None)
        .await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_active_filters_follow_deactivation() {
    let app = TestApp::new().await;

    let user = app.create_user(student_payload("jdoe", "j@x.edu")).await;
    app.create_user(student_payload("asmith", "a@x.edu")).await;

    let id = user["id"].as_i64().unwrap();
    app.request("PUT", &format!("/api/users/{id}/deactivate"), None)
        .await;

    let response = app.request("GET", "/api/users/active", None).await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);

    let response = app.request("GET", "/api/users/inactive", None).await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);

    let response = app
        .request("GET", "/api/users/active/role/student", None)
        .await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_search_matches_substring() {
    let app = TestApp::new().await;
    app.create_user(student_payload("jdoe", "j@x.edu")).await;
    app.create_user(student_payload("asmith", "a@x.edu")).await;

    let response = app.request("GET", "/api/users/search?term=doe", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let matches = response.body["data"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["username"], "jdoe");
}

#[tokio::test]
async fn test_paginated_listing() {
    let app = TestApp::new().await;
    for i in 0..5 {
        app.create_user(student_payload(
            &format!("user{i}"),
            &format!("u{i}@x.edu"),
        ))
        .await;
    }

    let response = app
        .request("GET", "/api/users/paginated?page=2&per_page=2", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let page = &response.body["data"];
    assert_eq!(page["items"].as_array().unwrap().len(), 2);
    assert_eq!(page["total_items"], 5);
    assert_eq!(page["total_pages"], 3);
}
