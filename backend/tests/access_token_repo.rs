use chrono::{Duration, Utc};
use threebus_backend::{
    models::user::UserRole,
    repositories::auth::{self as auth_repo, ActiveAccessToken},
};
use uuid::Uuid;

mod support;

use support::{integration_guard, seed_user, test_pool};

#[tokio::test]
async fn expired_tokens_are_inactive_and_cleaned_up() {
    let _guard = integration_guard().await;
    let pool = test_pool().await;
    let user = seed_user(&pool, UserRole::User).await;

    let live_jti = Uuid::new_v4().to_string();
    let stale_jti = Uuid::new_v4().to_string();
    auth_repo::insert_active_access_token(
        &pool,
        &ActiveAccessToken {
            jti: &live_jti,
            user_id: user.id,
            expires_at: Utc::now() + Duration::hours(1),
        },
    )
    .await
    .expect("insert live token");
    auth_repo::insert_active_access_token(
        &pool,
        &ActiveAccessToken {
            jti: &stale_jti,
            user_id: user.id,
            expires_at: Utc::now() - Duration::minutes(5),
        },
    )
    .await
    .expect("insert stale token");

    assert!(auth_repo::access_token_exists(&pool, &live_jti).await.unwrap());
    assert!(!auth_repo::access_token_exists(&pool, &stale_jti).await.unwrap());

    let removed = auth_repo::cleanup_expired_access_tokens(&pool).await.unwrap();
    assert!(removed >= 1);
    assert!(auth_repo::access_token_exists(&pool, &live_jti).await.unwrap());
}

#[tokio::test]
async fn deleting_user_tokens_revokes_every_session() {
    let _guard = integration_guard().await;
    let pool = test_pool().await;
    let user = seed_user(&pool, UserRole::Admin).await;

    for _ in 0..2 {
        let jti = Uuid::new_v4().to_string();
        auth_repo::insert_active_access_token(
            &pool,
            &ActiveAccessToken {
                jti: &jti,
                user_id: user.id,
                expires_at: Utc::now() + Duration::hours(1),
            },
        )
        .await
        .expect("insert token");
    }

    let removed = auth_repo::delete_access_tokens_for_user(&pool, user.id)
        .await
        .unwrap();
    assert_eq!(removed, 2);
}
