//! Dossier file naming: company slug + second-resolution timestamp.

use chrono::NaiveDateTime;

const UNKNOWN_COMPANY: &str = "unknown";

/// Lowercase, spaces to underscores. Path separators also become
/// underscores so the file stays inside the output directory.
pub fn slugify(company_name: &str) -> String {
  company_name
    .to_lowercase()
    .chars()
    .map(|c| match c {
      ' ' | '/' | '\\' => '_',
      other => other,
    })
    .collect()
}

/// `YYYYMMDD_HHMMSS`.
pub fn timestamp(at: NaiveDateTime) -> String {
  at.format("%Y%m%d_%H%M%S").to_string()
}

/// `dossier_<slug>_<timestamp>.json`; slug is `unknown` without a company name.
pub fn dossier_file_name(company_name: Option<&str>, at: NaiveDateTime) -> String {
  let slug = company_name
    .map(slugify)
    .unwrap_or_else(|| UNKNOWN_COMPANY.to_string());
  format!("dossier_{}_{}.json", slug, timestamp(at))
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;

  fn at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 15)
      .unwrap()
      .and_hms_opt(9, 5, 3)
      .unwrap()
  }

  #[test]
  fn slug_lowercases_and_replaces_spaces() {
    assert_eq!(slugify("Acme Corp"), "acme_corp");
    assert_eq!(slugify("  Two  Spaces "), "__two__spaces_");
  }

  #[test]
  fn slug_keeps_other_punctuation() {
    assert_eq!(slugify("Jones & Sons, Inc."), "jones_&_sons,_inc.");
  }

  #[test]
  fn slug_neutralizes_path_separators() {
    assert_eq!(slugify("../etc/passwd"), ".._etc_passwd");
    assert_eq!(slugify("a\\b"), "a_b");
  }

  #[test]
  fn slug_lowercases_unicode() {
    assert_eq!(slugify("Ünïcode GmbH"), "ünïcode_gmbh");
  }

  #[test]
  fn timestamp_is_zero_padded() {
    assert_eq!(timestamp(at()), "20250115_090503");
  }

  #[test]
  fn file_name_with_and_without_company() {
    assert_eq!(
      dossier_file_name(Some("Acme Corp"), at()),
      "dossier_acme_corp_20250115_090503.json"
    );
    assert_eq!(
      dossier_file_name(None, at()),
      "dossier_unknown_20250115_090503.json"
    );
  }
}
