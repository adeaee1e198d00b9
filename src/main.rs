use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use twitpol_dashboard::config::Config;
use twitpol_dashboard::server::{run_server, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::from_config(&config));

    run_server(config.port, state).await;
}
