mod http;

use async_trait::async_trait;

pub use http::HttpFetcher;

use crate::{podcast::Feed, Result};

#[async_trait]
pub trait FeedFetcher {
  async fn fetch(&self, url: &str) -> Result<Feed>;
}
