use dotenvy::dotenv;
use grocer::{
    config::{
        connection_file::ConnectionSettings,
        database::{connect, connect_with_settings, database_url_from_env, open_in_memory},
    },
    core::catalog::bootstrap,
    demo,
    errors::Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();

    // 3. Throwaway store: schema, seed rows, then the demos
    let db = open_in_memory()
        .await
        .inspect_err(|e| error!("Failed to open in-memory database: {}", e))?;
    bootstrap(&db)
        .await
        .inspect(|_| info!("Database bootstrapped successfully."))
        .inspect_err(|e| error!("Failed to bootstrap database: {}", e))?;

    demo::run_queries(&db).await?;
    demo::names(&db).await?;
    demo::transactions(&db).await?;
    demo::associations(&db).await?;
    db.close().await?;

    // 4. Optional connectivity checks against an external database
    if let Some(url) = database_url_from_env() {
        info!("Checking connectivity via DATABASE_URL");
        let remote = connect(&url)
            .await
            .inspect_err(|e| error!("Failed to connect via DATABASE_URL: {}", e))?;
        demo::connectivity(&remote).await?;
        remote.close().await?;
    }

    let settings = ConnectionSettings::load_from_env()
        .inspect_err(|e| error!("Failed to load connection settings: {}", e))?;
    if let Some(settings) = settings {
        info!("Checking connectivity via connection settings file");
        let remote = connect_with_settings(&settings)
            .await
            .inspect_err(|e| error!("Failed to connect with settings file: {}", e))?;
        demo::connectivity(&remote).await?;
        remote.close().await?;
    }

    Ok(())
}
