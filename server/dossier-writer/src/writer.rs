//! Writes a submission to `<output_dir>/dossier_<slug>_<timestamp>.json`.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::clock::{Clock, SystemClock};
use crate::error::DossierError;
use crate::naming;
use crate::SUCCESS_MARKER;

/// Persists onboarding submissions into one directory.
///
/// Stateless per call. Two writes for the same company within the same
/// second target the same file name and the later one overwrites.
#[derive(Clone)]
pub struct DossierWriter {
  output_dir: PathBuf,
  clock: Arc<dyn Clock>,
}

/// A dossier that made it to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
  /// Absolute path of the file.
  pub path: PathBuf,
}

impl fmt::Display for Written {
  /// The success line: `ONBOARDING_SUCCESS: Dossier created at <path>`.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}: Dossier created at {}",
      SUCCESS_MARKER,
      self.path.display()
    )
  }
}

impl DossierWriter {
  pub fn new(output_dir: impl Into<PathBuf>) -> Self {
    Self::with_clock(output_dir, SystemClock)
  }

  pub fn with_clock(output_dir: impl Into<PathBuf>, clock: impl Clock + 'static) -> Self {
    Self {
      output_dir: output_dir.into(),
      clock: Arc::new(clock),
    }
  }

  pub fn output_dir(&self) -> &Path {
    &self.output_dir
  }

  /// Parse a JSON-encoded submission, then [`write`](Self::write) it.
  pub fn write_raw(&self, raw: &str) -> Result<Written, DossierError> {
    let submission: Value = serde_json::from_str(raw).map_err(DossierError::Payload)?;
    self.write(&submission)
  }

  /// Write one submission, creating the output directory if needed.
  pub fn write(&self, submission: &Value) -> Result<Written, DossierError> {
    let fields = submission.as_object().ok_or(DossierError::NotAnObject)?;
    let file_name = naming::dossier_file_name(company_name(fields)?, self.clock.now());

    fs::create_dir_all(&self.output_dir)
      .map_err(|e| DossierError::create_dir(&self.output_dir, e))?;
    let dir = fs::canonicalize(&self.output_dir)
      .map_err(|e| DossierError::create_dir(&self.output_dir, e))?;
    let path = dir.join(file_name);

    let body = to_pretty_json(submission)?;
    fs::write(&path, body).map_err(|e| DossierError::write(&path, e))?;

    tracing::debug!(path = %path.display(), "dossier written");
    Ok(Written { path })
  }
}

/// `company_name` as a string; `null` counts as absent.
fn company_name(fields: &Map<String, Value>) -> Result<Option<&str>, DossierError> {
  match fields.get("company_name") {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(name)) => Ok(Some(name)),
    Some(_) => Err(DossierError::InvalidCompanyName),
  }
}

/// Pretty-print with a 4-space indent.
fn to_pretty_json(value: &Value) -> Result<Vec<u8>, DossierError> {
  let mut buf = Vec::new();
  let formatter = PrettyFormatter::with_indent(b"    ");
  let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
  value.serialize(&mut ser).map_err(DossierError::Serialize)?;
  Ok(buf)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn pretty_json_uses_four_space_indent() {
    let out = to_pretty_json(&json!({"company_name": "Acme", "size": 3})).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "{\n    \"company_name\": \"Acme\",\n    \"size\": 3\n}");
  }

  #[test]
  fn pretty_json_preserves_key_order() {
    let value: Value = serde_json::from_str(r#"{"zeta": 1, "alpha": 2}"#).unwrap();
    let text = String::from_utf8(to_pretty_json(&value).unwrap()).unwrap();
    assert!(text.find("zeta").unwrap() < text.find("alpha").unwrap());
  }

  #[test]
  fn company_name_null_is_absent() {
    let value = json!({"company_name": null});
    assert_eq!(company_name(value.as_object().unwrap()).unwrap(), None);
  }

  #[test]
  fn company_name_must_be_string() {
    let value = json!({"company_name": 42});
    assert!(matches!(
      company_name(value.as_object().unwrap()),
      Err(DossierError::InvalidCompanyName)
    ));
  }

  #[test]
  fn success_line_carries_marker_and_path() {
    let written = Written {
      path: PathBuf::from("/srv/dossiers/dossier_acme_20250115_090503.json"),
    };
    assert_eq!(
      written.to_string(),
      "ONBOARDING_SUCCESS: Dossier created at /srv/dossiers/dossier_acme_20250115_090503.json"
    );
  }
}
