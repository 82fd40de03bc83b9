use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Extension, Json,
};
use serde_json::{json, Value};
use std::{sync::OnceLock, time::Duration};
use validator::Validate;

use crate::{
    error::AppError,
    models::user::{Credentials, LoginResponse, SessionResponse, User, UserResponse, UserRole},
    repositories::{
        auth::{self as auth_repo, ActiveAccessToken},
        user as user_repo,
    },
    state::AppState,
    utils::{
        cookies::{build_auth_cookie, build_clear_cookie, CookieOptions},
        jwt::{create_access_token, Claims},
        password::{hash_password, verify_password},
    },
};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Creates a regular account. Back-office access is granted separately by an admin.
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<Credentials>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    payload.validate()?;
    let email = payload.normalized_email();

    if user_repo::find_user_by_email(&state.pool, &email)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Email already registered".into()));
    }

    let password_hash = hash_password(&payload.password)?;
    let user = User::new(email, password_hash, UserRole::User);
    let created = user_repo::insert_user(&state.pool, &user).await?;
    tracing::info!(user_id = %created.id, "user signed up");

    Ok((StatusCode::CREATED, Json(UserResponse::from(created))))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<Credentials>,
) -> Result<(HeaderMap, Json<LoginResponse>), AppError> {
    payload.validate()?;
    let Some(user) =
        user_repo::find_user_by_email(&state.pool, &payload.normalized_email()).await?
    else {
        return Err(reject_unknown_email(&payload.password));
    };

    ensure_password_matches(&payload.password, &user.password_hash)?;

    let (access_token, claims) = create_access_token(
        user.id.to_string(),
        user.email.clone(),
        user.role.as_str().to_string(),
        &state.config.jwt_secret,
        state.config.jwt_expiration_hours,
    )?;

    auth_repo::insert_active_access_token(
        &state.pool,
        &ActiveAccessToken {
            jti: &claims.jti,
            user_id: user.id,
            expires_at: claims.expires_at(),
        },
    )
    .await?;

    let mut headers = HeaderMap::new();
    let cookie = build_auth_cookie(
        &access_token,
        Duration::from_secs(state.config.jwt_expiration_hours * 60 * 60),
        cookie_options(&state),
    );
    append_cookie(&mut headers, &cookie)?;

    let is_admin = user.is_admin();
    Ok((
        headers,
        Json(LoginResponse {
            access_token,
            user: UserResponse::from(user),
            is_admin,
        }),
    ))
}

/// Revokes the token used for this request and clears the session cookie.
pub async fn logout(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<(HeaderMap, Json<Value>), AppError> {
    auth_repo::delete_access_token_by_jti(&state.pool, &claims.jti).await?;

    let mut headers = HeaderMap::new();
    append_cookie(&mut headers, &build_clear_cookie(cookie_options(&state)))?;
    Ok((headers, Json(json!({ "message": "Logged out" }))))
}

pub async fn me(Extension(user): Extension<User>) -> Json<SessionResponse> {
    Json(SessionResponse::from(user))
}

fn ensure_password_matches(candidate: &str, expected_hash: &str) -> Result<(), AppError> {
    if verify_password(candidate, expected_hash)? {
        Ok(())
    } else {
        Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()))
    }
}

/// Runs a full argon2 verification so unknown e-mails take as long as wrong passwords.
fn reject_unknown_email(candidate: &str) -> AppError {
    let _ = verify_password(candidate, placeholder_hash());
    AppError::Unauthorized(INVALID_CREDENTIALS.into())
}

fn placeholder_hash() -> &'static str {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| hash_password("3bus-unknown-account").unwrap_or_default())
}

fn cookie_options(state: &AppState) -> CookieOptions {
    CookieOptions {
        secure: state.config.cookie_secure,
        same_site: state.config.cookie_same_site,
    }
}

fn append_cookie(headers: &mut HeaderMap, cookie: &str) -> Result<(), AppError> {
    let value = HeaderValue::from_str(cookie)
        .map_err(|err| AppError::InternalServerError(anyhow::anyhow!(err)))?;
    headers.append(header::SET_COOKIE, value);
    Ok(())
}
