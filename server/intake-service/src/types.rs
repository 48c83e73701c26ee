//! Response bodies for the onboarding API.

use serde::Serialize;

pub const SUCCESS_MESSAGE: &str = "Onboarding processed successfully";
pub const NO_DATA: &str = "No data provided";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
  Success,
  Error,
}

/// Outcome of one submission as seen by the client.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
  pub status: Status,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub output: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl SubmissionResponse {
  pub fn success(output: impl Into<String>) -> Self {
    Self {
      status: Status::Success,
      message: SUCCESS_MESSAGE.to_string(),
      output: Some(output.into()),
      error: None,
    }
  }

  pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
    Self {
      status: Status::Error,
      message: message.into(),
      output: None,
      error: Some(error.into()),
    }
  }
}

/// Bare `{"error": "..."}` body for requests that never reached the writer.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
  pub error: String,
}

impl ErrorBody {
  pub fn new(error: impl Into<String>) -> Self {
    Self {
      error: error.into(),
    }
  }
}
