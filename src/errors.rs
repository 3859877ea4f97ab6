use std::fmt;

#[derive(Debug)]
pub enum Error {
  Fetch(String),
  Filesystem(std::io::Error),
  Configuration(String),
  EmptyWordList(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::Filesystem(e) => Some(e),
      _ => None,
    }
  }
}

impl fmt::Display for Error {
  fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::Fetch(msg) => write!(formatter, "unable to fetch word list: {}", msg),
      Error::Filesystem(e) => write!(formatter, "word list cache error: {}", e),
      Error::Configuration(msg) => write!(formatter, "invalid configuration: {}", msg),
      Error::EmptyWordList(name) => write!(formatter, "word list '{}' is empty", name),
    }
  }
}

impl From<std::io::Error> for Error {
  fn from(e: std::io::Error) -> Self {
    Error::Filesystem(e)
  }
}

// Flattens errors from the http stack into a fetch failure carrying their display text.
pub fn humanize_error<E: std::error::Error>(e: E) -> Error {
  Error::Fetch(format!("{}", e))
}
