use std::{fmt, io::Write};

use tracing::{debug, info};

use crate::{fetcher::FeedFetcher, podcast::Feed, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
  pub title: String,
  pub episode_count: usize,
}

impl From<Feed> for Summary {
  fn from(feed: Feed) -> Self {
    Summary {
      title: feed.title,
      episode_count: feed.items.len(),
    }
  }
}

impl fmt::Display for Summary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Got podcast feed ({}) with {} episodes",
      self.title, self.episode_count
    )
  }
}

/// Fetches a feed once per call and reports its title and episode count.
///
/// Fetch errors are handed back to the caller untouched: there is no retry
/// and nothing is written when the fetch fails.
pub struct FeedSummaryReporter<F> {
  fetcher: F,
}

impl<F: FeedFetcher> FeedSummaryReporter<F> {
  pub fn new(fetcher: F) -> Self {
    Self { fetcher }
  }

  pub async fn summarize(&self, url: &str) -> Result<Summary> {
    let feed = self.fetcher.fetch(url).await?;

    if let Some(title) = feed.items.first().and_then(|x| x.title.as_deref()) {
      debug!(title, "first episode in feed");
    }

    let summary = Summary::from(feed);
    info!(
      title = %summary.title,
      episodes = summary.episode_count,
      "fetched podcast feed"
    );

    Ok(summary)
  }

  pub async fn report_summary(
    &self,
    url: &str,
    out: &mut impl Write,
  ) -> Result<()> {
    let summary = self.summarize(url).await?;
    writeln!(out, "{summary}")?;
    Ok(())
  }
}
