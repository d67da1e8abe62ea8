use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod fetcher;
mod podcast;
mod reporter;

pub use error::{FetchError, Result};

use crate::{
  config::{Cli, Config},
  fetcher::HttpFetcher,
  reporter::FeedSummaryReporter,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
  init_tracing();

  let config = Config::from(Cli::parse());

  match run(&config).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("error: failed to fetch podcast feed: {err:#}");
      ExitCode::FAILURE
    }
  }
}

async fn run(config: &Config) -> anyhow::Result<()> {
  let fetcher = HttpFetcher::new(&config.fetch)?;
  let reporter = FeedSummaryReporter::new(fetcher);

  let mut stdout = std::io::stdout();
  reporter.report_summary(&config.feed_url, &mut stdout).await?;
  Ok(())
}

// logs go to stderr, stdout only ever carries the summary line.
fn init_tracing() {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("podcast_summary=info"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();
}
