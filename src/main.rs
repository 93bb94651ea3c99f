// Main entry point - Dataset assembly and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dataset_assembler::DatasetAssembler;
use crate::application::displacement_service::DisplacementService;
use crate::application::map_service::MapService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::pos_file::PosFileLoader;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, list_receivers, map_view, receiver_displacement};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config()?;
    let groups = config.receiver_groups()?;

    // Build the dataset once; any bad file stops startup
    let assembler = DatasetAssembler::new(Arc::new(PosFileLoader::new()));
    let dataset = Arc::new(assembler.assemble(&groups).context("Failed to assemble position dataset")?);
    if dataset.is_empty() {
        tracing::warn!("Position dataset is empty");
    } else {
        tracing::info!("Position dataset ready: {} samples", dataset.len());
    }

    // Create services (application layer)
    let state = Arc::new(AppState {
        map_service: MapService::new(dataset.clone()),
        displacement_service: DisplacementService::new(dataset),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/receivers", get(list_receivers))
        .route("/receivers/:name/displacement", get(receiver_displacement))
        .route("/map", get(map_view))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Starting gnss-positions service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
