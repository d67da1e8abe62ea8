use thiserror::Error;

// every variant is fatal to the caller; they only differ in what went wrong.
#[derive(Debug, Error)]
pub enum FetchError {
  #[error("request failed")]
  Request(#[from] reqwest::Error),
  #[error("request to {url} timed out")]
  Timeout { url: String },
  #[error("unexpected status code: {0}")]
  HttpStatus(u16),
  #[error("not a valid RSS or Atom feed: {0}")]
  Parse(String),
  #[error("failed to write summary")]
  Output(#[from] std::io::Error),
}

pub type Result<T, E = FetchError> = std::result::Result<T, E>;
