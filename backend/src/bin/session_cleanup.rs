use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use threebus_backend::{
    config::Config, db::connection::create_pool, repositories::auth as auth_repo,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "session_cleanup=info,threebus_backend=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    let pool = create_pool(&config.database_url).await?;

    let deleted = auth_repo::cleanup_expired_access_tokens(&pool).await?;
    if deleted > 0 {
        tracing::info!("Deleted {} expired access tokens", deleted);
    }

    sqlx::query("VACUUM (ANALYZE) access_tokens")
        .execute(&*pool)
        .await?;

    Ok(())
}
