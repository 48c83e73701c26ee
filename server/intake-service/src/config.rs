//! Service configuration read from the environment, with sane defaults.

use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;

use dossier_writer::{DossierWriter, DEFAULT_OUTPUT_DIR};
use thiserror::Error;

use crate::processor::{Processor, SubprocessWriter};

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("PORT must be a valid u16, got {value:?}: {source}")]
  InvalidPort {
    value: String,
    #[source]
    source: ParseIntError,
  },

  #[error("BIND_ADDR must be an IP address, got {value:?}: {source}")]
  InvalidBindAddr {
    value: String,
    #[source]
    source: AddrParseError,
  },
}

#[derive(Debug, Clone)]
pub struct Config {
  /// Listen address (`BIND_ADDR`).
  pub bind_addr: IpAddr,
  /// Listen port (`PORT`).
  pub port: u16,
  /// Static asset directory (`STATIC_ROOT`).
  pub static_root: PathBuf,
  /// Where dossiers are written (`DOSSIER_DIR`).
  pub dossier_dir: PathBuf,
  /// External writer executable (`DOSSIER_WRITER_BIN`); unset means in-process.
  pub writer_bin: Option<PathBuf>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
      port: 5000,
      static_root: PathBuf::from("."),
      dossier_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
      writer_bin: None,
    }
  }
}

impl Config {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Build from any key lookup; missing or empty keys keep their defaults.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let mut config = Self::default();

    if let Some(value) = get("PORT") {
      config.port = value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidPort {
          value: value.clone(),
          source,
        })?;
    }
    if let Some(value) = get("BIND_ADDR") {
      config.bind_addr = value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidBindAddr {
          value: value.clone(),
          source,
        })?;
    }
    if let Some(value) = get("STATIC_ROOT") {
      config.static_root = PathBuf::from(value);
    }
    if let Some(value) = get("DOSSIER_DIR") {
      config.dossier_dir = PathBuf::from(value);
    }
    config.writer_bin = get("DOSSIER_WRITER_BIN").map(PathBuf::from);

    Ok(config)
  }

  pub fn socket_addr(&self) -> SocketAddr {
    SocketAddr::new(self.bind_addr, self.port)
  }

  pub fn processor(&self) -> Processor {
    match &self.writer_bin {
      Some(bin) => Processor::Subprocess(SubprocessWriter::new(bin, &self.dossier_dir)),
      None => Processor::in_process(DossierWriter::new(&self.dossier_dir)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let map: HashMap<String, String> = pairs
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    Config::from_lookup(|key| map.get(key).cloned())
  }

  #[test]
  fn defaults_when_environment_is_empty() {
    let config = from_pairs(&[]).unwrap();
    assert_eq!(config.socket_addr(), "0.0.0.0:5000".parse().unwrap());
    assert_eq!(config.dossier_dir, PathBuf::from(".tmp"));
    assert_eq!(config.static_root, PathBuf::from("."));
    assert_eq!(config.processor().mode(), "in-process");
  }

  #[test]
  fn overrides_are_applied() {
    let config = from_pairs(&[
      ("PORT", "8080"),
      ("BIND_ADDR", "127.0.0.1"),
      ("DOSSIER_DIR", "/var/lib/dossiers"),
      ("DOSSIER_WRITER_BIN", "/usr/local/bin/dossier-writer"),
    ])
    .unwrap();
    assert_eq!(config.socket_addr(), "127.0.0.1:8080".parse().unwrap());
    assert_eq!(config.dossier_dir, PathBuf::from("/var/lib/dossiers"));
    assert_eq!(config.processor().mode(), "subprocess");
  }

  #[test]
  fn empty_port_keeps_default() {
    assert_eq!(from_pairs(&[("PORT", "")]).unwrap().port, 5000);
  }

  #[test]
  fn bad_port_is_rejected() {
    let err = from_pairs(&[("PORT", "http")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
    assert!(err.to_string().contains("\"http\""));
  }

  #[test]
  fn bad_bind_addr_is_rejected() {
    let err = from_pairs(&[("BIND_ADDR", "localhost")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
  }
}
