//! Promotes (or with `--revoke`, demotes) an account by e-mail.
//!
//! Usage: `grant_admin <email> [--revoke]`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use threebus_backend::{
    config::Config,
    db::connection::create_pool,
    models::user::UserRole,
    repositories::{auth as auth_repo, user as user_repo},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grant_admin=info,threebus_backend=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let email = args
        .next()
        .map(|raw| raw.trim().to_ascii_lowercase())
        .filter(|raw| !raw.is_empty())
        .ok_or_else(|| anyhow::anyhow!("usage: grant_admin <email> [--revoke]"))?;
    let role = if args.any(|flag| flag == "--revoke") {
        UserRole::User
    } else {
        UserRole::Admin
    };

    let config = Config::load()?;
    let pool = create_pool(&config.database_url).await?;

    let user = user_repo::update_user_role_by_email(&pool, &email, role)
        .await?
        .ok_or_else(|| anyhow::anyhow!("no user registered with e-mail {}", email))?;
    auth_repo::delete_access_tokens_for_user(&pool, user.id).await?;

    tracing::info!(user_id = %user.id, email = %user.email, role = user.role.as_str(), "role updated");
    Ok(())
}
