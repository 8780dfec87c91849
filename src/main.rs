use std::sync::Arc;
use tap_to_earn::identity::EnvHost;
use tap_to_earn::ui::render_prompt;
use tap_to_earn::{ApiClient, Config, DisplayState, TapHandler};
use tokio::io::{self, BufReader};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::resolve()?;
    let client = ApiClient::new(&config);
    let handler = TapHandler::new(config.action, client, Arc::new(EnvHost), DisplayState::new());

    info!(action = %config.action, api_base = %config.api_base, "{}", render_prompt(config.action));

    tokio::select! {
        result = tap_to_earn::run(handler, BufReader::new(io::stdin()), io::stdout()) => result?,
        _ = signal::ctrl_c() => info!("interrupted, shutting down"),
    }

    Ok(())
}
