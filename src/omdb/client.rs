//! Catalog client trait and its HTTP implementation.

use async_trait::async_trait;
use url::Url;

use crate::domain::{KinologError, MovieDetail, MovieSummary, Result};
use crate::omdb::wire::{DetailRecord, SearchEnvelope};

/// The seam between orchestration and the actual catalog.
///
/// Tests substitute a fake implementation here; production wires in
/// [`OmdbClient`].
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Runs a title search and returns the matching summaries.
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>>;

    /// Fetches the full record for a single catalog id.
    async fn detail(&self, id: &str) -> Result<MovieDetail>;
}

/// HTTP client for the OMDb API.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl OmdbClient {
    /// Creates a client against the given base URL.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| KinologError::Config(format!("invalid catalog URL {base_url:?}: {e}")))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            api_key: api_key.into(),
        })
    }

    /// Issues a GET with the api key plus one query parameter and returns the
    /// decoded body.
    async fn get<T>(&self, param: &str, value: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("apikey", &self.api_key)
            .append_pair(param, value);

        tracing::debug!(%param, %value, "catalog request");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| KinologError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(KinologError::Transport(format!(
                "catalog responded with {status}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| KinologError::Parse(e.to_string()))
    }
}

#[async_trait]
impl CatalogClient for OmdbClient {
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>> {
        let envelope: SearchEnvelope = self.get("s", query).await?;
        envelope.into_summaries()
    }

    async fn detail(&self, id: &str) -> Result<MovieDetail> {
        let record: DetailRecord = self.get("i", id).await?;
        record.into_detail()
    }
}
