use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;

use stillframe::config::settings::AppConfig;
use stillframe::infrastructure::encoder::ffmpeg::FfmpegEncoder;
use stillframe::infrastructure::storage::local::StorageService;
use stillframe::state::AppState;
use stillframe::{app, workers};

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting server...");

    let config = AppConfig::new();
    let storage = StorageService::new(&config);
    storage
        .ensure_dirs()
        .expect("Failed to create storage directories");

    let encoder = Arc::new(FfmpegEncoder::new(&config));
    let state = AppState::new(config.clone(), storage, encoder);

    tokio::spawn(workers::janitor::start_janitor_worker(state.clone()));

    let app = app::create_app(state).await;

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await.unwrap();
}
