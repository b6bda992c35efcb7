//! Single-shot HTTP download of the listing page or a published feed.
//!
//! One GET per call, identified by a fixed `User-Agent`. There is no retry
//! and no timeout beyond the transport defaults; any non-2xx status is an
//! error that the caller treats as fatal.

use crate::error::FetchError;
use reqwest::Client;
use tracing::{debug, info, instrument};

/// HTTP client that identifies itself with a fixed user agent.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build a fetcher sending `user_agent` on every request.
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }

    /// Use a preconfigured client as is.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Download `url` and return the raw response body.
    ///
    /// # Errors
    ///
    /// [`FetchError::Request`] on transport failure, [`FetchError::Status`]
    /// when the server answers with anything outside 2xx.
    #[instrument(level = "info", skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        debug!(%status, "Received response");
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        info!(bytes = body.len(), "Fetched page");
        Ok(body.to_vec())
    }
}
