//! HTTP handlers for the intake service.

use std::sync::Arc;

use axum::{
  body::Bytes,
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::Value;
use tracing::Instrument;
use uuid::Uuid;

use crate::processor::Outcome;
use crate::state::AppState;
use crate::types::{ErrorBody, SubmissionResponse, NO_DATA};

pub async fn health() -> &'static str {
  "ok"
}

pub async fn process_onboarding(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
  let request_id = Uuid::new_v4();
  let span = tracing::info_span!("process_onboarding", %request_id);

  async move {
    let submission = match parse_submission(&body) {
      Ok(Some(v)) => v,
      Ok(None) => {
        tracing::warn!("empty submission");
        return error_response(StatusCode::BAD_REQUEST, NO_DATA);
      }
      Err(e) => {
        tracing::warn!(error = %e, "malformed submission");
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
      }
    };

    match state.processor.process(submission).await {
      Ok(Outcome::Success { output }) => {
        tracing::info!(%output, "submission processed");
        (StatusCode::OK, Json(SubmissionResponse::success(output))).into_response()
      }
      Ok(Outcome::Failure { message, error }) => (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(SubmissionResponse::failure(message, error)),
      )
        .into_response(),
      Err(e) => {
        tracing::error!(error = %e, "submission could not be processed");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
      }
    }
  }
  .instrument(span)
  .await
}

/// `Ok(None)` for an empty body or a falsy scalar or empty array.
fn parse_submission(body: &[u8]) -> Result<Option<Value>, serde_json::Error> {
  if body.iter().all(u8::is_ascii_whitespace) {
    return Ok(None);
  }
  let value: Value = serde_json::from_slice(body)?;
  Ok(if is_no_data(&value) { None } else { Some(value) })
}

/// An empty object is still a submission; it is filed as `unknown`.
fn is_no_data(value: &Value) -> bool {
  match value {
    Value::Null => true,
    Value::Bool(b) => !b,
    Value::Number(n) => n.as_f64() == Some(0.0),
    Value::String(s) => s.is_empty(),
    Value::Array(items) => items.is_empty(),
    Value::Object(_) => false,
  }
}

fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
  (status, Json(ErrorBody::new(error))).into_response()
}
