use log::*;
use service::{config::Config, logging::Logger, AppState};

#[tokio::main]
async fn main() {
    let config = Config::new();

    if let Err(e) = Logger::init_logger(&config) {
        eprintln!("Failed to initialize logger: {e}");
        std::process::exit(1);
    }

    info!(
        "Starting transcript relay ({} environment)",
        config.runtime_env()
    );
    if config.mastra_api_key().is_none() {
        warn!("MASTRA_API_KEY not set, agent requests will be sent without credentials");
    }
    if !config.task_push_enabled() {
        info!("COMPOSIO_API_KEY not set, task push to Notion and Jira is disabled");
    }

    let app_state = AppState::new(config);

    if let Err(e) = web::init_server(app_state).await {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}
