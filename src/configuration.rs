extern crate serde;

use log::warn;
use serde::Deserialize;
use std::env::var_os;
use std::fs::read;
use std::io::{Error as IoError, ErrorKind};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{
  ASSETS_URL_ENV, CACHE_DIR_ENV, CACHE_DIR_NAME, DEFAULT_ASSETS_URL, DEFAULT_TIMEOUT_SECS,
  TIMEOUT_ENV,
};
use crate::errors::{Error, Result};

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Configuration {
  pub assets_url: String,

  pub cache_dir: Option<PathBuf>,

  pub timeout_secs: u64,
}

fn env_string(name: &str) -> Option<String> {
  var_os(name)
    .and_then(|value| value.into_string().ok())
    .filter(|value| !value.is_empty())
}

impl Default for Configuration {
  fn default() -> Self {
    let assets_url = env_string(ASSETS_URL_ENV).unwrap_or_else(|| DEFAULT_ASSETS_URL.to_string());
    let cache_dir = env_string(CACHE_DIR_ENV).map(PathBuf::from);
    let timeout_secs = env_string(TIMEOUT_ENV)
      .and_then(|value| value.parse::<u64>().ok())
      .unwrap_or(DEFAULT_TIMEOUT_SECS);

    Configuration {
      assets_url,
      cache_dir,
      timeout_secs,
    }
  }
}

impl Configuration {
  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs)
  }

  // Either the explicitly configured directory or `<home>/.gfycat`.
  pub fn cache_path(&self) -> Result<PathBuf> {
    if let Some(dir) = &self.cache_dir {
      return Ok(dir.clone());
    }

    dirs::home_dir()
      .map(|home| home.join(CACHE_DIR_NAME))
      .ok_or_else(|| {
        Error::Filesystem(IoError::new(
          ErrorKind::NotFound,
          "unable to resolve home directory",
        ))
      })
  }
}

impl FromStr for Configuration {
  type Err = Error;

  fn from_str(source: &str) -> Result<Self> {
    let contents = String::from_utf8(read(source)?)
      .map_err(|_| Error::Configuration(format!("'{}' is not valid utf-8", source)))?;

    serde_json::from_str::<Configuration>(contents.as_str()).map_err(|e| {
      warn!("unable to parse '{}': {:?}", source, e);
      Error::Configuration(format!("unable to parse '{}': {}", source, e))
    })
  }
}

#[cfg(test)]
mod test {
  use super::Configuration;
  use crate::errors::Error;
  use std::io::Write;
  use std::path::PathBuf;
  use tempfile::NamedTempFile;

  fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("unable to create temp file");
    file
      .write_all(contents.as_bytes())
      .expect("unable to write temp file");
    file
  }

  #[test]
  fn parses_json_file() {
    let file = config_file(
      r#"{"assets_url": "http://localhost:1234/", "cache_dir": "/tmp/words", "timeout_secs": 5}"#,
    );
    let path = file.path().to_str().expect("bad temp path");
    let config = path.parse::<Configuration>().expect("unable to parse");
    assert_eq!(config.assets_url, "http://localhost:1234/");
    assert_eq!(config.cache_dir, Some(PathBuf::from("/tmp/words")));
    assert_eq!(config.timeout().as_secs(), 5);
  }

  #[test]
  fn missing_fields_fall_back_to_defaults() {
    let file = config_file(r#"{"cache_dir": "/tmp/words"}"#);
    let path = file.path().to_str().expect("bad temp path");
    let config = path.parse::<Configuration>().expect("unable to parse");
    assert!(!config.assets_url.is_empty());
    assert!(config.timeout_secs > 0);
  }

  #[test]
  fn malformed_json_is_a_configuration_error() {
    let file = config_file("{ not json");
    let path = file.path().to_str().expect("bad temp path");
    let result = path.parse::<Configuration>();
    assert!(matches!(result, Err(Error::Configuration(_))));
  }

  #[test]
  fn missing_file_is_a_filesystem_error() {
    let result = "/definitely/not/a/config.json".parse::<Configuration>();
    assert!(matches!(result, Err(Error::Filesystem(_))));
  }

  #[test]
  fn explicit_cache_dir_wins() {
    let config = Configuration {
      assets_url: String::from("http://localhost/"),
      cache_dir: Some(PathBuf::from("/var/cache/gfycat")),
      timeout_secs: 30,
    };
    assert_eq!(
      config.cache_path().expect("no cache path"),
      PathBuf::from("/var/cache/gfycat")
    );
  }
}
