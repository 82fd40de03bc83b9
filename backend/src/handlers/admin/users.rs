use axum::{
    extract::{Extension, Path, State},
    Json,
};
use std::str::FromStr;

use crate::{
    error::AppError,
    models::user::{UpdateRoleRequest, User, UserResponse, UserRole},
    repositories::{auth as auth_repo, user as user_repo},
    state::AppState,
    types::UserId,
};

pub async fn list_users(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    if !user.is_admin() {
        return Err(AppError::Forbidden("Forbidden".into()));
    }
    let users = user_repo::list_users(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Grants or revokes back-office access. Existing sessions of the target are revoked.
pub async fn update_user_role(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(user_id): Path<String>,
    Json(payload): Json<UpdateRoleRequest>,
) -> Result<Json<UserResponse>, AppError> {
    if !user.is_admin() {
        return Err(AppError::Forbidden("Forbidden".into()));
    }
    let target_id =
        UserId::from_str(&user_id).map_err(|_| AppError::BadRequest("Invalid user ID".into()))?;
    ensure_not_self_demotion(&user, target_id, payload.role)?;

    let updated = user_repo::update_user_role(&state.pool, target_id, payload.role)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    let revoked = auth_repo::delete_access_tokens_for_user(&state.pool, target_id).await?;
    tracing::info!(
        target_user = %target_id,
        admin_id = %user.id,
        role = updated.role.as_str(),
        revoked_sessions = revoked,
        "user role updated"
    );

    Ok(Json(UserResponse::from(updated)))
}

fn ensure_not_self_demotion(
    actor: &User,
    target_id: UserId,
    role: UserRole,
) -> Result<(), AppError> {
    if actor.id == target_id && role != UserRole::Admin {
        return Err(AppError::BadRequest(
            "Administrators cannot revoke their own access".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admins_cannot_demote_themselves() {
        let admin = User::new("admin@3bus.com.br".into(), "hash".into(), UserRole::Admin);
        assert!(ensure_not_self_demotion(&admin, admin.id, UserRole::User).is_err());
        assert!(ensure_not_self_demotion(&admin, admin.id, UserRole::Admin).is_ok());
        assert!(ensure_not_self_demotion(&admin, UserId::new(), UserRole::User).is_ok());
    }
}
