use dotenvy::dotenv;

use persistence::config::DatabaseConfig;
use persistence::db::Database;

/// Startup sequence for a service built on the session provider.
///
/// Initializes logging, loads `.env`, reads configuration, builds the
/// engine, runs one unit of work through a session, and shuts down.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration; missing DATABASE_URL stops the process here
    let config = DatabaseConfig::from_env()?;

    // 4. Initialize the database engine
    let database = Database::connect(&config).await?;

    // 5. One unit of work through a scoped session
    let mut session = database.acquire_session().await?;
    let answer: i32 = sqlx::query_scalar("SELECT 1")
        .fetch_one(&mut *session)
        .await?;
    tracing::info!("database answered: {answer}");
    session.close();

    // 6. Graceful shutdown
    database.close().await;

    Ok(())
}
