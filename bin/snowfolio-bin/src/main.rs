mod cli;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use snowfolio_api::{ApiService, AppState};
use snowfolio_core::AccountInfoService;
use snowfolio_snapshot::{SnapshotService, schedule_snapshots};
use snowfolio_store::{HistoryStore, RedisHistoryStore};
use snowfolio_zapper::ZapperClient;

use crate::cli::TrackerCli;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let TrackerCli {
        zapper_api_endpoint,
        zapper_api_key,
        redis_url,
        api_host,
        api_port,
    } = TrackerCli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let zapper = ZapperClient::new(&zapper_api_endpoint, &zapper_api_key)
        .map_err(|e| anyhow::anyhow!("Could not init the Zapper client: {e}"))?;
    let accounts = AccountInfoService::new(Arc::new(zapper));

    let store: Arc<dyn HistoryStore> = Arc::new(RedisHistoryStore::connect(&redis_url).await?);

    let snapshots = SnapshotService::new(accounts.clone(), Arc::clone(&store));
    let mut scheduler = schedule_snapshots(snapshots).await?;

    let app_state = AppState { accounts, store };
    let api_service = ApiService::new(app_state, &api_host, api_port);

    let shutdown_token = CancellationToken::new();
    let signal_token = shutdown_token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutdown signal received");
            signal_token.cancel();
        }
    });

    api_service.serve(shutdown_token).await?;

    scheduler
        .shutdown()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shut down scheduler: {e}"))?;
    Ok(())
}
