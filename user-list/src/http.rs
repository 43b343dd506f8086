use crate::PageFetcher;
use crate::error::FetchError;
use crate::models::Page;
use crate::params::PageParams;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Path of the users collection, relative to the service base URL
pub const USERS_ENDPOINT: &str = "api/1.0/users";

/// Fetches pages from a running user service over HTTP.
#[derive(Clone, Debug)]
pub struct HttpPageFetcher {
    client: Client,
    users_url: Url,
}

impl HttpPageFetcher {
    /// Creates a fetcher with default timeouts
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        HttpPageFetcherBuilder::new(base_url).build()
    }

    pub fn users_url(&self) -> &Url {
        &self.users_url
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, params: PageParams) -> Result<Page, FetchError> {
        debug!(
            "Fetching page {} (size {}) from {}",
            params.page, params.size, self.users_url
        );

        let response = self
            .client
            .get(self.users_url.clone())
            .query(&[("page", params.page), ("size", params.size)])
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(FetchError::Server { status, detail });
        }

        let body = response.bytes().await.map_err(FetchError::Transport)?;
        let page: Page = serde_json::from_slice(&body)?;
        page.check_answers(params).map_err(FetchError::InvalidPage)?;
        Ok(page)
    }
}

/// A builder for configuring an [`HttpPageFetcher`].
pub struct HttpPageFetcherBuilder {
    base_url: String,
    timeout: Duration,
    connect_timeout: Duration,
}

impl HttpPageFetcherBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Sets the total time allowed for one page request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn build(self) -> Result<HttpPageFetcher, FetchError> {
        // A base without a trailing slash would have its last segment replaced by `join`
        let mut base_url = Url::parse(&self.base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let users_url = base_url.join(USERS_ENDPOINT)?;

        let client = Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .build()
            .map_err(FetchError::Transport)?;

        Ok(HttpPageFetcher { client, users_url })
    }
}
