// src/main.rs
use boxfit::{api, config::AppConfig};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn init_logging() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .init();
}

#[tokio::main]
async fn main() {
    let dotenv_result = dotenvy::dotenv();
    init_logging();
    if let Err(err) = dotenv_result {
        if !matches!(err, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            warn!("⚠️ Could not load .env: {}", err);
        }
    }

    let app_config = AppConfig::from_env();

    info!("🚀 Box selection service starting...");
    if let Err(err) = api::start_api_server(app_config.api, app_config.optimizer).await {
        error!("❌ API server terminated with an error: {err}");
        std::process::exit(1);
    }
}
