//! Binary entrypoint for the intake service.

use std::sync::Arc;

use intake_service::{AppState, Config};
use tracing_subscriber::EnvFilter;

fn init_logging() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  init_logging();

  let config = Config::from_env()?;
  let state = Arc::new(AppState::from_config(&config));
  let mode = state.processor.mode();
  let app = intake_service::router(state);

  let addr = config.socket_addr();
  tracing::info!(
    %addr,
    mode,
    dossier_dir = %config.dossier_dir.display(),
    "intake-service listening"
  );

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
