// src/bin/seed_articles.rs
use anyhow::Result;
use articles_api::config::AppConfig;
use articles_api::infrastructure::{
    database, repositories::PostgresArticleWriteRepository, seed, time::SystemClock,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,sqlx=warn".to_string()),
        ))
        .init();

    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url(), config.max_connections()).await?;
    database::run_migrations(&pool).await?;

    let repo = PostgresArticleWriteRepository::new(pool.clone());
    let created = seed::seed_articles(&repo, &SystemClock, config.seed_article_count()).await?;
    println!("seeded {} articles", created.len());

    pool.close().await;
    Ok(())
}
