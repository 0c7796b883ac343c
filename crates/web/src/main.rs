use anyhow::Context;
use awards_api::{build_router, config::Config};
use importer::{DelimitedImporter, ImportContext, RecordImporter};
use storage::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting movie awards API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let db = Database::new();

    let seed_file = config.seed_file.display().to_string();
    tracing::info!("Loading seed data from: {}", seed_file);
    let loaded = DelimitedImporter::default()
        .import(&seed_file, &ImportContext::new(db.clone()))
        .await
        .with_context(|| format!("Failed to load seed data from {}", seed_file))?;
    tracing::info!("Seed data loaded: {} award records", loaded);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, build_router(db)).await?;

    Ok(())
}
