//! HTTP-level tests for `/api/staff` and `/api/auth`.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete, get, get_auth, post_json, post_multipart, put_json, MultipartBody,
    PNG_BYTES,
};
use serde_json::json;
use sqlx::PgPool;

const PASSWORD: &str = "correct-horse-1";

async fn create_staff(t: &common::TestApp, staff_id: &str, email: &str) -> serde_json::Value {
    let response = post_json(
        t.app(),
        "/api/staff",
        json!({
            "staff_id": staff_id,
            "name": "Ada Lovelace",
            "email": email,
            "password": PASSWORD,
            "department": "Computing",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

async fn login(t: &common::TestApp, staff_id: &str, password: &str) -> axum::http::Response<axum::body::Body> {
    post_json(
        t.app(),
        "/api/auth/staff-login",
        json!({"staff_id": staff_id, "password": password}),
    )
    .await
}

// ---------------------------------------------------------------------------
// Staff CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_hides_password_hash(pool: PgPool) {
    let t = common::build_test_app(pool);

    let created = create_staff(&t, "S001", "ada@uni.test").await;

    assert_eq!(created["role"], "STAFF");
    assert_eq!(created["status"], "active");
    assert!(created.get("password_hash").is_none());
    assert!(created.get("password").is_none());

    let list = body_json(get(t.app(), "/api/staff").await).await;
    assert!(list["data"][0].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_staff_id_or_email_returns_400(pool: PgPool) {
    let t = common::build_test_app(pool);
    create_staff(&t, "S001", "ada@uni.test").await;

    let response = post_json(
        t.app(),
        "/api/staff",
        json!({"staff_id": "S001", "name": "B", "email": "b@uni.test", "password": "pw"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Staff ID already exists");

    let response = post_json(
        t.app(),
        "/api/staff",
        json!({"staff_id": "S002", "name": "B", "email": "ada@uni.test", "password": "pw"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Email already exists");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_role_or_email_returns_400(pool: PgPool) {
    let t = common::build_test_app(pool);

    let response = post_json(
        t.app(),
        "/api/staff",
        json!({"staff_id": "S9", "name": "N", "email": "n@uni.test", "password": "pw", "role": "ROOT"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        t.app(),
        "/api/staff",
        json!({"staff_id": "S9", "name": "N", "email": "not-an-email", "password": "pw"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_replaces_profile(pool: PgPool) {
    let t = common::build_test_app(pool);
    let created = create_staff(&t, "S001", "ada@uni.test").await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json(
        t.app(),
        &format!("/api/staff/{id}"),
        json!({"name": "Ada King", "email": "ada.king@uni.test", "role": "ADMIN", "bio": "Analyst"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Ada King");
    assert_eq!(json["data"]["role"], "ADMIN");
    assert!(json["data"]["department"].is_null());
    assert_eq!(json["data"]["staff_id"], "S001");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_photo_replaces_previous_and_delete_removes_it(pool: PgPool) {
    let t = common::build_test_app(pool);
    let created = create_staff(&t, "S001", "ada@uni.test").await;
    let id = created["id"].as_i64().unwrap();
    let uri = format!("/api/staff/{id}/upload-photo");

    let form = MultipartBody::new().file("photo", "me.png", "image/png", PNG_BYTES);
    let response = post_multipart(t.app(), &uri, form).await;
    assert_eq!(response.status(), StatusCode::OK);
    let first = body_json(response).await["data"]["profile_photo"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(first.starts_with("/uploads/staff/profile_"));

    let form = MultipartBody::new().file("photo", "me2.png", "image/png", PNG_BYTES);
    let response = post_multipart(t.app(), &uri, form).await;
    let second = body_json(response).await["data"]["profile_photo"]
        .as_str()
        .unwrap()
        .to_string();
    assert_ne!(first, second);
    assert!(!t.stored_file(&first).exists());
    assert!(t.stored_file(&second).exists());

    let response = delete(t.app(), &format!("/api/staff/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(!t.stored_file(&second).exists());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_photo_requires_a_file(pool: PgPool) {
    let t = common::build_test_app(pool);
    let created = create_staff(&t, "S001", "ada@uni.test").await;
    let id = created["id"].as_i64().unwrap();

    let form = MultipartBody::new().text("caption", "no file here");
    let response = post_multipart(t.app(), &format!("/api/staff/{id}/upload-photo"), form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn change_password_flow(pool: PgPool) {
    let t = common::build_test_app(pool);
    let created = create_staff(&t, "S001", "ada@uni.test").await;
    let uri = format!("/api/staff/{}/change-password", created["id"]);

    let response = post_json(
        t.app(),
        &uri,
        json!({"current_password": "wrong", "new_password": "new-password-1"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json(
        t.app(),
        &uri,
        json!({"current_password": PASSWORD, "new_password": "short"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        t.app(),
        &uri,
        json!({"current_password": PASSWORD, "new_password": "new-password-1"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(login(&t, "S001", PASSWORD).await.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(login(&t, "S001", "new-password-1").await.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_returns_token_and_profile(pool: PgPool) {
    let t = common::build_test_app(pool);
    create_staff(&t, "S001", "ada@uni.test").await;

    let response = login(&t, "S001", PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["access_token"].is_string());
    assert_eq!(json["data"]["expires_in"], 3600);
    assert_eq!(json["data"]["staff"]["staff_id"], "S001");
    assert!(json["data"]["staff"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_password_and_unknown_id_look_the_same(pool: PgPool) {
    let t = common::build_test_app(pool);
    create_staff(&t, "S001", "ada@uni.test").await;

    let wrong = login(&t, "S001", "nope").await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    let unknown = login(&t, "S404", "nope").await;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);

    assert_eq!(body_json(wrong).await, body_json(unknown).await);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_missing_fields_returns_400(pool: PgPool) {
    let t = common::build_test_app(pool);

    let response = post_json(t.app(), "/api/auth/staff-login", json!({"staff_id": "S001"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inactive_account_returns_403(pool: PgPool) {
    let t = common::build_test_app(pool);
    let created = create_staff(&t, "S001", "ada@uni.test").await;
    let id = created["id"].as_i64().unwrap();
    put_json(
        t.app(),
        &format!("/api/staff/{id}"),
        json!({"name": "Ada", "email": "ada@uni.test", "status": "inactive"}),
    )
    .await;

    let response = login(&t, "S001", PASSWORD).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_requires_a_valid_token(pool: PgPool) {
    let t = common::build_test_app(pool);
    create_staff(&t, "S001", "ada@uni.test").await;
    let token = body_json(login(&t, "S001", PASSWORD).await).await["data"]["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = get_auth(t.app(), "/api/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["staff_id"], "S001");

    let response = get(t.app(), "/api/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(t.app(), "/api/auth/me", "not.a.token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn lookup_by_staff_id(pool: PgPool) {
    let t = common::build_test_app(pool);
    create_staff(&t, "S001", "ada@uni.test").await;

    let response = get(t.app(), "/api/auth/staff/S001").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["email"], "ada@uni.test");

    let response = get(t.app(), "/api/auth/staff/S999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
