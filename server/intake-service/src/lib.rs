//! Onboarding Intake Service
//!
//! HTTP service that accepts onboarding submissions and hands each one to
//! the dossier writer. Also serves the static onboarding pages.

mod config;
mod handlers;
mod processor;
mod state;
mod types;

use std::sync::Arc;

use axum::{routing::get, routing::post, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

pub use config::{Config, ConfigError};
pub use handlers::{health, process_onboarding};
pub use processor::{Outcome, ProcessError, Processor, SubprocessWriter};
pub use state::AppState;
pub use types::{ErrorBody, Status, SubmissionResponse};

/// Full route table: static pages, health, and the onboarding API.
pub fn router(state: Arc<AppState>) -> Router {
  let root = state.static_root.clone();

  Router::new()
    .route_service("/", ServeFile::new(root.join("index.html")))
    .route_service("/style.css", ServeFile::new(root.join("style.css")))
    .route_service("/script.js", ServeFile::new(root.join("script.js")))
    .nest_service("/images", ServeDir::new(root.join("images")))
    .nest_service("/workflows", ServeDir::new(root.join("workflows")))
    .route("/health", get(health))
    .route("/api/process_onboarding", post(process_onboarding))
    .layer(CorsLayer::permissive())
    .with_state(state)
}
