use anyhow::Context;
use std::sync::Arc;
use user_search::config::ServerConfig;
use user_search::records::loader::load_dataset;
use user_search::search::handlers::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ServerConfig::from_env()?;

    // 1. Dataset (fatal on failure):
    let records = load_dataset(&config.dataset_path).with_context(|| {
        format!("cannot serve without dataset {}", config.dataset_path.display())
    })?;
    tracing::info!(
        "Loaded {} users from {}",
        records.len(),
        config.dataset_path.display()
    );

    // 2. HTTP Router:
    let app = router(Arc::new(records));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
