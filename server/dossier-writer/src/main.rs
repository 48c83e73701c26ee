//! Binary entrypoint: one JSON argument in, one dossier file out.
//!
//! Usage:
//!   dossier-writer '<json object>'
//!
//! Output directory comes from `DOSSIER_DIR` (default `.tmp`).
//! Exit codes: 0 written, 1 parse or write failure, 2 no argument.
//! Diagnostics go to stderr; stdout carries only the success line.

use std::env;
use std::path::PathBuf;
use std::process;

use dossier_writer::{DossierWriter, DEFAULT_OUTPUT_DIR, DOSSIER_DIR_ENV};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "DOSSIER_WRITER_LOG";

fn init_logging() {
  let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_ansi(false)
    .with_writer(std::io::stderr)
    .init();
}

fn main() {
  init_logging();

  let raw = match env::args().nth(1) {
    Some(raw) => raw,
    None => {
      eprintln!("ERROR: No data provided to the execution script.");
      process::exit(2);
    }
  };

  let output_dir = env::var_os(DOSSIER_DIR_ENV)
    .map(PathBuf::from)
    .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
  let writer = DossierWriter::new(output_dir);

  match writer.write_raw(&raw) {
    Ok(written) => println!("{}", written),
    Err(e) => {
      tracing::debug!(error = ?e, "dossier write failed");
      eprintln!("ERROR: Failed to process onboarding data: {}", e);
      process::exit(1);
    }
  }
}
