use async_trait::async_trait;
use tracing::{debug, trace};

use crate::{config::FetchConfig, podcast::Feed, FetchError, Result};

use super::FeedFetcher;

// fetches over http(s) and accepts either an RSS 2.0 or an Atom document.
pub struct HttpFetcher {
  client: reqwest::Client,
}

impl HttpFetcher {
  pub fn new(config: &FetchConfig) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(config.timeout)
      .user_agent(config.user_agent.as_str())
      .build()?;

    Ok(Self { client })
  }
}

#[async_trait]
impl FeedFetcher for HttpFetcher {
  async fn fetch(&self, url: &str) -> Result<Feed> {
    debug!(url, "fetching feed");

    let resp = self
      .client
      .get(url)
      .send()
      .await
      .map_err(|e| classify(url, e))?;

    let status = resp.status();
    debug!(url, %status, "feed responded");
    if !status.is_success() {
      return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let body = resp.bytes().await.map_err(|e| classify(url, e))?;
    trace!(url, len = body.len(), "feed body received");

    parse_feed(&body)
  }
}

fn classify(url: &str, err: reqwest::Error) -> FetchError {
  if err.is_timeout() {
    FetchError::Timeout { url: url.to_owned() }
  } else {
    FetchError::Request(err)
  }
}

fn parse_feed(body: &[u8]) -> Result<Feed> {
  let rss_err = match rss::Channel::read_from(body) {
    Ok(channel) => {
      trace!("parsed as rss");
      return Ok(channel.into());
    }
    Err(e) => e,
  };

  debug!(error = %rss_err, "not an rss feed, trying atom");
  match atom_syndication::Feed::read_from(body) {
    Ok(feed) => {
      trace!("parsed as atom");
      Ok(feed.into())
    }
    Err(atom_err) => Err(FetchError::Parse(format!(
      "rss: {rss_err}; atom: {atom_err}"
    ))),
  }
}
