//! Hands a submission to the dossier writer and reports what happened.
//!
//! Two transports:
//! - `InProcess`: direct library call on the blocking pool; typed result.
//! - `Subprocess`: spawn the writer binary with the JSON as its last
//!   argument and judge the outcome by exit status alone.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use dossier_writer::{DossierWriter, DOSSIER_DIR_ENV};
use serde_json::Value;
use thiserror::Error;
use tokio::process::Command;

pub const SCRIPT_FAILED: &str = "Script execution failed";
pub const PROCESSING_FAILED: &str = "Dossier processing failed";

/// What the writer reported for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  /// The writer's success line.
  Success { output: String },
  /// The writer ran and failed; `error` is its reason (stderr for subprocesses).
  Failure { message: &'static str, error: String },
}

/// Failures that prevented the writer from running at all.
#[derive(Debug, Error)]
pub enum ProcessError {
  #[error("failed to start {}: {source}", .program.display())]
  Spawn {
    program: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("cannot encode submission: {0}")]
  Encode(#[from] serde_json::Error),

  #[error("writer task aborted: {0}")]
  Join(#[from] tokio::task::JoinError),
}

/// An external writer executable plus any fixed leading arguments.
#[derive(Debug, Clone)]
pub struct SubprocessWriter {
  pub program: PathBuf,
  pub args: Vec<String>,
  pub output_dir: PathBuf,
}

impl SubprocessWriter {
  pub fn new(program: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
    Self {
      program: program.into(),
      args: Vec::new(),
      output_dir: output_dir.into(),
    }
  }

  pub fn with_args<I, S>(mut self, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.args = args.into_iter().map(Into::into).collect();
    self
  }

  /// Run to completion; no timeout, no cancellation.
  async fn run(&self, submission: &Value) -> Result<Outcome, ProcessError> {
    let payload = serde_json::to_string(submission)?;

    let output = Command::new(&self.program)
      .args(&self.args)
      .arg(payload)
      .env(DOSSIER_DIR_ENV, &self.output_dir)
      .output()
      .await
      .map_err(|source| ProcessError::Spawn {
        program: self.program.clone(),
        source,
      })?;

    if output.status.success() {
      Ok(Outcome::Success {
        output: String::from_utf8_lossy(&output.stdout).trim().to_string(),
      })
    } else {
      tracing::warn!(status = %output.status, "writer process failed");
      Ok(Outcome::Failure {
        message: SCRIPT_FAILED,
        error: String::from_utf8_lossy(&output.stderr).into_owned(),
      })
    }
  }
}

pub enum Processor {
  InProcess(Arc<DossierWriter>),
  Subprocess(SubprocessWriter),
}

impl Processor {
  pub fn in_process(writer: DossierWriter) -> Self {
    Self::InProcess(Arc::new(writer))
  }

  pub fn mode(&self) -> &'static str {
    match self {
      Self::InProcess(_) => "in-process",
      Self::Subprocess(_) => "subprocess",
    }
  }

  pub async fn process(&self, submission: Value) -> Result<Outcome, ProcessError> {
    match self {
      Self::InProcess(writer) => {
        let writer = Arc::clone(writer);
        let result = tokio::task::spawn_blocking(move || writer.write(&submission)).await?;
        Ok(match result {
          Ok(written) => Outcome::Success {
            output: written.to_string(),
          },
          Err(e) => {
            tracing::warn!(error = %e, "dossier write failed");
            Outcome::Failure {
              message: PROCESSING_FAILED,
              error: e.to_string(),
            }
          }
        })
      }
      Self::Subprocess(runner) => runner.run(&submission).await,
    }
  }
}
