use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::str::FromStr;

use crate::{
    error::AppError,
    models::user::User,
    repositories::{auth as auth_repo, user as user_repo},
    state::AppState,
    types::UserId,
    utils::{
        cookies::{extract_cookie_value, ACCESS_COOKIE_NAME},
        jwt::{verify_access_token, Claims},
    },
};

/// Requires a live session; inserts `Claims` and `User` into request extensions.
pub async fn auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (claims, user) = authenticate_request(request.headers(), &state).await?;
    request.extensions_mut().insert(claims);
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Same as [`auth`] but only lets administrators through.
pub async fn auth_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (claims, user) = authenticate_request(request.headers(), &state).await?;
    if !user.is_admin() {
        tracing::warn!(user_id = %user.id, "non-admin user attempted to reach an admin route");
        return Err(AppError::Forbidden("Administrator access required".into()));
    }

    request.extensions_mut().insert(claims);
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

pub(crate) fn parse_bearer_token(header: &str) -> Option<&str> {
    let (scheme, rest) = header.trim().split_once(' ')?;
    if scheme.eq_ignore_ascii_case("bearer") {
        let token = rest.trim_start();
        (!token.is_empty()).then_some(token)
    } else {
        None
    }
}

/// Bearer header wins over the session cookie.
pub(crate) fn extract_token(headers: &HeaderMap) -> Option<String> {
    let from_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_bearer_token)
        .map(str::to_string);
    from_header.or_else(|| {
        headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(|raw| extract_cookie_value(raw, ACCESS_COOKIE_NAME))
    })
}

async fn authenticate_request(
    headers: &HeaderMap,
    state: &AppState,
) -> Result<(Claims, User), AppError> {
    let unauthorized = || AppError::Unauthorized("Authentication required".into());

    let token = extract_token(headers).ok_or_else(unauthorized)?;
    let claims =
        verify_access_token(&token, &state.config.jwt_secret).map_err(|_| unauthorized())?;

    let is_active = auth_repo::access_token_exists(&state.pool, &claims.jti).await?;
    if !is_active {
        return Err(unauthorized());
    }

    let user_id = UserId::from_str(&claims.sub).map_err(|_| unauthorized())?;
    let user = user_repo::find_user_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(unauthorized)?;

    Ok((claims, user))
}
