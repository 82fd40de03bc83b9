use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use threebus_backend::models::user::UserRole;
use tower::ServiceExt;

mod support;

use support::{
    integration_guard, response_json, seed_user, test_app, test_pool, TEST_PASSWORD,
};

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn with_bearer(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn signup_creates_regular_user_and_rejects_duplicates() {
    let _guard = integration_guard().await;
    let pool = test_pool().await;
    let app = test_app(pool.clone());
    let email = format!("comprador_{}@3bus.com.br", uuid::Uuid::new_v4());

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/auth/signup",
            json!({ "email": email, "password": "segredo1" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["email"], email.as_str());
    assert_eq!(body["role"], "user");

    let response = app
        .oneshot(post_json(
            "/api/auth/signup",
            json!({ "email": email.to_uppercase(), "password": "segredo1" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn signup_validates_email_and_password_length() {
    let _guard = integration_guard().await;
    let pool = test_pool().await;

    let response = test_app(pool.clone())
        .oneshot(post_json(
            "/api/auth/signup",
            json!({ "email": "not-an-email", "password": "123" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    let errors = body["details"]["errors"].as_array().expect("errors");
    assert_eq!(errors.len(), 2);
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let _guard = integration_guard().await;
    let pool = test_pool().await;
    let user = seed_user(&pool, UserRole::User).await;

    let response = test_app(pool.clone())
        .oneshot(post_json(
            "/api/auth/login",
            json!({ "email": user.email, "password": "wrong-password" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_me_and_logout_round_trip() {
    let _guard = integration_guard().await;
    let pool = test_pool().await;
    let admin = seed_user(&pool, UserRole::Admin).await;
    let app = test_app(pool.clone());

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/auth/login",
            json!({ "email": admin.email, "password": TEST_PASSWORD }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(cookie.starts_with("access_token="));
    let body = response_json(response).await;
    assert_eq!(body["is_admin"], true);
    let token = body["access_token"].as_str().expect("token").to_string();

    let response = app
        .clone()
        .oneshot(with_bearer("GET", "/api/auth/me", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let session = response_json(response).await;
    assert_eq!(session["user"]["email"], admin.email.as_str());
    assert_eq!(session["is_admin"], true);

    let response = app
        .clone()
        .oneshot(with_bearer("POST", "/api/auth/logout", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(with_bearer("GET", "/api/auth/me", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_accepts_session_cookie() {
    let _guard = integration_guard().await;
    let pool = test_pool().await;
    let user = seed_user(&pool, UserRole::User).await;
    let token = support::login_token(&pool, &user).await;

    let response = test_app(pool.clone())
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .header(header::COOKIE, format!("access_token={}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let session = response_json(response).await;
    assert_eq!(session["is_admin"], false);
}
