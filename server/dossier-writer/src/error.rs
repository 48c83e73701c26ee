//! Structured error types for the dossier writer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DossierError {
  #[error("invalid JSON payload: {0}")]
  Payload(#[source] serde_json::Error),

  #[error("payload must be a JSON object")]
  NotAnObject,

  #[error("company_name must be a string")]
  InvalidCompanyName,

  #[error("cannot create directory {}: {source}", .path.display())]
  CreateDir {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("cannot serialize dossier: {0}")]
  Serialize(#[source] serde_json::Error),

  #[error("cannot write {}: {source}", .path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

impl DossierError {
  pub fn create_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
    Self::CreateDir {
      path: path.into(),
      source,
    }
  }

  pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
    Self::Write {
      path: path.into(),
      source,
    }
  }
}
