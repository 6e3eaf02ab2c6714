use async_trait::async_trait;
use labroster_people::Dataset;

/// Where the people data comes from. The page wires in [`HttpSource`];
/// tests substitute in-memory implementations.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self) -> Result<Dataset, LoadError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The server answered with a non-success status.
    #[error("HTTP {0}")]
    Status(u16),
    /// The request failed before a usable response arrived.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// The body was not a valid people data document.
    #[error("invalid people data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads the data file over HTTP. Every fetch revalidates with the origin
/// so edits to the data file show up on the next page load.
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        HttpSource {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch(&self) -> Result<Dataset, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
