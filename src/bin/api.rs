use smartspend::api::{start_server, ApiState};
use smartspend::config::AppConfig;
use smartspend::history::SessionStore;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env();

    if !config.api_available() {
        eprintln!("MISTRAL_API_KEY not set; running in offline mode with keyword fallback");
    }

    info!("SmartSpend - Expense Categorization API");
    info!("Port: {}", config.port);
    info!("Remote classification: {}", config.api_available());

    let port = config.port;
    let state = ApiState {
        orchestrator: Arc::new(config.build_orchestrator()),
        sessions: SessionStore::new(),
    };

    info!("Starting API server...");

    start_server(state, port).await?;

    Ok(())
}
