//! User lookups and role management.

use sqlx::PgPool;

use crate::models::user::{User, UserRole};
use crate::types::UserId;

const SELECT_COLUMNS: &str = "id, email, password_hash, LOWER(role) AS role, created_at, updated_at";

pub async fn find_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let query = format!("SELECT {} FROM users WHERE email = $1", SELECT_COLUMNS);
    sqlx::query_as::<_, User>(&query)
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn find_user_by_id(pool: &PgPool, user_id: UserId) -> Result<Option<User>, sqlx::Error> {
    let query = format!("SELECT {} FROM users WHERE id = $1", SELECT_COLUMNS);
    sqlx::query_as::<_, User>(&query)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Inserts the user; a duplicate e-mail surfaces as a unique violation.
pub async fn insert_user(pool: &PgPool, user: &User) -> Result<User, sqlx::Error> {
    let query = format!(
        "INSERT INTO users (id, email, password_hash, role, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
        SELECT_COLUMNS
    );
    sqlx::query_as::<_, User>(&query)
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(pool)
        .await
}

pub async fn list_users(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    let query = format!("SELECT {} FROM users ORDER BY created_at DESC", SELECT_COLUMNS);
    sqlx::query_as::<_, User>(&query).fetch_all(pool).await
}

pub async fn update_user_role(
    pool: &PgPool,
    user_id: UserId,
    role: UserRole,
) -> Result<Option<User>, sqlx::Error> {
    let query = format!(
        "UPDATE users SET role = $1, updated_at = NOW() WHERE id = $2 RETURNING {}",
        SELECT_COLUMNS
    );
    sqlx::query_as::<_, User>(&query)
        .bind(role)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn update_user_role_by_email(
    pool: &PgPool,
    email: &str,
    role: UserRole,
) -> Result<Option<User>, sqlx::Error> {
    let query = format!(
        "UPDATE users SET role = $1, updated_at = NOW() WHERE email = $2 RETURNING {}",
        SELECT_COLUMNS
    );
    sqlx::query_as::<_, User>(&query)
        .bind(role)
        .bind(email)
        .fetch_optional(pool)
        .await
}
