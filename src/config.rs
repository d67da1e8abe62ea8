use std::time::Duration;

use clap::Parser;

pub const DEFAULT_FEED_URL: &str = "https://anchor.fm/s/5772c9f8/podcast/rss";

pub const DEFAULT_USER_AGENT: &str =
  concat!("podcast-summary/", env!("CARGO_PKG_VERSION"));

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Parser)]
#[command(name = "podcast-summary")]
#[command(about = "Fetch a podcast feed and print its title and episode count")]
pub struct Cli {
  /// URL of the RSS or Atom feed
  #[arg(env = "FEED_URL", default_value = DEFAULT_FEED_URL)]
  pub feed_url: String,

  /// Request timeout in seconds
  #[arg(long, env = "FEED_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
  pub timeout: u64,

  /// User-Agent header sent with the request
  #[arg(long, env = "FEED_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
  pub user_agent: String,
}

#[derive(Debug, Clone)]
pub struct Config {
  pub feed_url: String,
  pub fetch: FetchConfig,
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
  pub timeout: Duration,
  pub user_agent: String,
}

impl Default for FetchConfig {
  fn default() -> Self {
    Self {
      timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
      user_agent: DEFAULT_USER_AGENT.to_owned(),
    }
  }
}

impl From<Cli> for Config {
  fn from(cli: Cli) -> Self {
    Config {
      feed_url: cli.feed_url,
      fetch: FetchConfig {
        timeout: Duration::from_secs(cli.timeout),
        user_agent: cli.user_agent,
      },
    }
  }
}
