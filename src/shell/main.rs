use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use time_records::modules::records::adapters::outbound::dataset_store_json_file::JsonFileDatasetStore;
use time_records::modules::records::application::record_service::RecordService;
use time_records::shared::core::clock::SystemClock;
use time_records::shell::config::Config;
use time_records::shell::http::router;
use time_records::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    let store = Arc::new(JsonFileDatasetStore::new(config.data_file.clone()));
    let record_service = Arc::new(RecordService::new(store, Arc::new(SystemClock)));
    let app = router(AppState { record_service });

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(data_file = %config.data_file.display(), "records API: http://{}", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
