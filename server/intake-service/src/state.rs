//! Shared, read-only state for request handlers.

use std::path::PathBuf;

use crate::config::Config;
use crate::processor::Processor;

pub struct AppState {
  pub processor: Processor,
  /// Directory holding index.html, style.css, script.js, images/, workflows/.
  pub static_root: PathBuf,
}

impl AppState {
  pub fn new(processor: Processor, static_root: impl Into<PathBuf>) -> Self {
    Self {
      processor,
      static_root: static_root.into(),
    }
  }

  pub fn from_config(config: &Config) -> Self {
    Self::new(config.processor(), config.static_root.clone())
  }
}
