//! Access-token bookkeeping used to revoke sessions on sign-out.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::types::UserId;

#[derive(Debug)]
/// An issued access token, stored so the middleware can reject revoked ones.
pub struct ActiveAccessToken<'a> {
    pub jti: &'a str,
    pub user_id: UserId,
    pub expires_at: DateTime<Utc>,
}

pub async fn insert_active_access_token(
    pool: &PgPool,
    token: &ActiveAccessToken<'_>,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO access_tokens (jti, user_id, expires_at) VALUES ($1, $2, $3)")
        .bind(token.jti)
        .bind(token.user_id)
        .bind(token.expires_at)
        .execute(pool)
        .await
        .map(|_| ())
}

/// True while the token has not been revoked and has not expired.
pub async fn access_token_exists(pool: &PgPool, jti: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM access_tokens WHERE jti = $1 AND expires_at > NOW())",
    )
    .bind(jti)
    .fetch_one(pool)
    .await
}

pub async fn delete_access_token_by_jti(pool: &PgPool, jti: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM access_tokens WHERE jti = $1")
        .bind(jti)
        .execute(pool)
        .await
        .map(|_| ())
}

/// Revokes every session of a user, e.g. after their role changes.
pub async fn delete_access_tokens_for_user(
    pool: &PgPool,
    user_id: UserId,
) -> Result<u64, sqlx::Error> {
    sqlx::query("DELETE FROM access_tokens WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected())
}

/// Removes expired tokens and reports how many rows were deleted.
pub async fn cleanup_expired_access_tokens(pool: &PgPool) -> Result<u64, sqlx::Error> {
    sqlx::query("DELETE FROM access_tokens WHERE expires_at <= NOW()")
        .execute(pool)
        .await
        .map(|result| result.rows_affected())
}
