use corral_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(database_path: &str) -> anyhow::Result<SqlitePool> {
    let database_url = format!("sqlite://{database_path}");
    info!("Initializing database: {}", database_url);

    let pool = create_pool(&database_url).await.map_err(|e| {
        error!("Failed to initialize database pool: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!("Database initialized successfully");
    Ok(pool)
}
