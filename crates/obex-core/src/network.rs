use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
    #[error("Server returned {0} for {1}")]
    Status(reqwest::StatusCode, Url),
    #[error("Response larger than {max_bytes} bytes")]
    TooLarge { max_bytes: u64 },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Download settings for the single outbound bulletin fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Connection timeout in seconds
    pub connect_timeout_seconds: u32,
    /// Request timeout in seconds
    pub request_timeout_seconds: u32,
    /// Response cap; bulletins run a few megabytes
    pub max_response_bytes: u64,
    /// User agent to use (randomized by default)
    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_seconds: 30,
            request_timeout_seconds: 120,
            max_response_bytes: 64 * 1024 * 1024,
            user_agent: None,
        }
    }
}

/// Something that can fetch a bulletin by URL.
#[async_trait::async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> ClientResult<Vec<u8>>;
}

/// HTTP client for the one outbound download the tool performs.
pub struct BulletinClient {
    config: FetchConfig,
    inner: reqwest::Client,
}

impl BulletinClient {
    pub fn new(config: FetchConfig) -> ClientResult<Self> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.request_timeout_seconds.into()));

        builder = match config.user_agent {
            Some(ref ua) => builder.user_agent(ua),
            None => builder.user_agent(random_user_agent()),
        };

        Ok(Self {
            inner: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    fn validate_url(url: &str) -> ClientResult<Url> {
        let parsed = Url::parse(url)?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::UnsupportedScheme(parsed.scheme().to_string()));
        }
        if parsed.host_str().is_none() {
            return Err(ClientError::InvalidUrl("no host in URL".to_string()));
        }

        Ok(parsed)
    }
}

#[async_trait::async_trait]
impl Fetch for BulletinClient {
    async fn fetch(&self, url: &str) -> ClientResult<Vec<u8>> {
        let url = Self::validate_url(url)?;

        let response = self.inner.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status(), url));
        }

        let max_bytes = self.config.max_response_bytes;
        if response.content_length().is_some_and(|len| len > max_bytes) {
            return Err(ClientError::TooLarge { max_bytes });
        }

        let body = response.bytes().await?;
        if body.len() as u64 > max_bytes {
            return Err(ClientError::TooLarge { max_bytes });
        }

        Ok(body.to_vec())
    }
}

fn random_user_agent() -> String {
    use rand::Rng;

    let agents = [
        "Mozilla/5.0 (Windows NT 10.0; rv:128.0) Gecko/20100101 Firefox/128.0",
        "Mozilla/5.0 (Windows NT 10.0; rv:115.0) Gecko/20100101 Firefox/115.0",
        "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:128.0) Gecko/20100101 Firefox/128.0",
    ];

    let mut rng = rand::rng();
    agents[rng.random_range(0..agents.len())].to_string()
}
