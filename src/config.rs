// src/config.rs

use crate::analysis::motif::MotifConfig;
use crate::analysis::proximity::DEFAULT_PARALLEL_THRESHOLD;
use crate::error::ConfigError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
  #[serde(default)]
  pub motif: MotifConfig,

  /// Atom count above which distance matrices are built in parallel
  #[serde(default = "default_parallel_threshold")]
  pub parallel_threshold: usize,

  /// Neighbors listed per metal in a coordination report
  #[serde(default = "default_report_max_neighbors")]
  pub report_max_neighbors: usize,

  /// One of "error", "warn", "info", "debug", "trace", "off"
  #[serde(default = "default_log_level")]
  pub log_level: String,
}

fn default_parallel_threshold() -> usize {
  DEFAULT_PARALLEL_THRESHOLD
}

fn default_report_max_neighbors() -> usize {
  6
}

fn default_log_level() -> String {
  "info".to_string()
}

impl Default for Config {
  fn default() -> Self {
    Self {
      motif: MotifConfig::default(),
      parallel_threshold: default_parallel_threshold(),
      report_max_neighbors: default_report_max_neighbors(),
      log_level: default_log_level(),
    }
  }
}

impl Config {
  /// Loads config from the standard OS location (e.g. ~/.config/coordgeom/settings.json)
  ///
  /// Falls back to defaults when the file is missing or unreadable.
  pub fn load() -> Self {
    let path = Self::get_path();
    if !path.exists() {
      log::info!("No config found at {:?}. Using defaults.", path);
      return Self::default();
    }

    match Self::load_from(&path) {
      Ok(cfg) => {
        log::info!("Config loaded from {:?}", path);
        cfg
      }
      Err(e) => {
        log::warn!("Ignoring config at {:?}: {}", path, e);
        Self::default()
      }
    }
  }

  /// Reads and validates a config file
  pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
    let reader = BufReader::new(File::open(path)?);
    let cfg: Self = serde_json::from_reader(reader)?;
    cfg.motif.validate()?;
    Ok(cfg)
  }

  /// Saves config to the standard OS location, returning the path written
  pub fn save(&self) -> Result<PathBuf, ConfigError> {
    let path = Self::get_path();
    self.save_to(&path)?;
    log::info!("Config saved to {:?}", path);
    Ok(path)
  }

  pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, self)?;
    Ok(())
  }

  /// Parsed `log_level`; unrecognised values mean `Info`
  pub fn log_level_filter(&self) -> log::LevelFilter {
    self.log_level.parse().unwrap_or(log::LevelFilter::Info)
  }

  fn get_path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("org", "coordgeom", "coordgeom") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let cfg = Config {
      motif: MotifConfig::phosphine(),
      parallel_threshold: 64,
      report_max_neighbors: 4,
      log_level: "debug".to_string(),
    };
    cfg.save_to(&path).unwrap();

    let back = Config::load_from(&path).unwrap();
    assert_eq!(back, cfg);
    assert_eq!(back.log_level_filter(), log::LevelFilter::Debug);
  }

  #[test]
  fn test_missing_fields_use_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "parallel_threshold": 10 }"#).unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.parallel_threshold, 10);
    assert_eq!(cfg.motif, MotifConfig::default());
    assert_eq!(cfg.report_max_neighbors, 6);
    assert_eq!(cfg.log_level, "info");
  }

  #[test]
  fn test_rejects_unknown_symbol() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "motif": { "nitrogen_symbol": "Nn" } }"#).unwrap();

    assert!(matches!(Config::load_from(&path), Err(ConfigError::Invalid(_))));
  }

  #[test]
  fn test_bad_json_and_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    assert!(matches!(Config::load_from(&path), Err(ConfigError::Io(_))));

    fs::write(&path, "not json").unwrap();
    assert!(matches!(Config::load_from(&path), Err(ConfigError::Json(_))));
  }

  #[test]
  fn test_unknown_log_level_falls_back() {
    let cfg = Config {
      log_level: "loud".to_string(),
      ..Default::default()
    };
    assert_eq!(cfg.log_level_filter(), log::LevelFilter::Info);
  }
}
