use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::PipelineConfig;
use crate::types::{RawMetadata, RawPrice, RawSwapsPage};

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT: u64 = 10;

/// The three gateway resources the pipeline reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Metadata,
    Price,
    Swaps,
}

impl Endpoint {
    /// Resource path under the gateway base URL for a given mint.
    pub fn path(&self, mint: &str) -> String {
        match self {
            Endpoint::Metadata => format!("/token/mainnet/{}/metadata", mint),
            Endpoint::Price => format!("/token/mainnet/{}/price", mint),
            Endpoint::Swaps => format!("/token/mainnet/{}/swaps", mint),
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Endpoint::Metadata => "metadata",
            Endpoint::Price => "price",
            Endpoint::Swaps => "swaps",
        };
        write!(f, "{}", name)
    }
}

/// Transport or decode failure for one endpoint. The pipeline never retries;
/// the error carries enough to tell the operator which fetch died.
#[derive(Debug, Error)]
#[error("{endpoint} endpoint fetch failed: {source:#}")]
pub struct FetchError {
    pub endpoint: Endpoint,
    #[source]
    pub source: anyhow::Error,
}

/// Read access to the blockchain-data provider. One method per endpoint so
/// callers (and tests) can fail them independently.
#[async_trait]
pub trait TokenDataProvider: Send + Sync {
    async fn fetch_metadata(&self, mint: &str) -> Result<RawMetadata, FetchError>;
    async fn fetch_price(&self, mint: &str) -> Result<RawPrice, FetchError>;
    async fn fetch_swaps(&self, mint: &str) -> Result<RawSwapsPage, FetchError>;
}

/// Client for the Moralis Solana gateway.
pub struct MoralisProvider {
    client: reqwest::Client,
    base_url: String,
}

impl MoralisProvider {
    pub fn new(config: &PipelineConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-API-Key",
            HeaderValue::from_str(&config.api_key).context("API key is not a valid header value")?,
        );
        headers.insert("accept", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        mint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, endpoint.path(mint));
        debug!("GET {}", url);

        let fetch = async {
            let response = self
                .client
                .get(&url)
                .query(query)
                .send()
                .await
                .with_context(|| format!("request to {} failed", url))?;

            let response = response
                .error_for_status()
                .with_context(|| format!("{} returned an error status", url))?;

            response
                .json::<T>()
                .await
                .with_context(|| format!("failed to decode response from {}", url))
        };

        fetch.await.map_err(|source| FetchError { endpoint, source })
    }
}

#[async_trait]
impl TokenDataProvider for MoralisProvider {
    async fn fetch_metadata(&self, mint: &str) -> Result<RawMetadata, FetchError> {
        self.get_json(Endpoint::Metadata, mint, &[]).await
    }

    async fn fetch_price(&self, mint: &str) -> Result<RawPrice, FetchError> {
        self.get_json(Endpoint::Price, mint, &[]).await
    }

    async fn fetch_swaps(&self, mint: &str) -> Result<RawSwapsPage, FetchError> {
        // Ascending order with limit 1 makes index 0 the earliest trade.
        self.get_json(Endpoint::Swaps, mint, &[("order", "ASC"), ("limit", "1")])
            .await
    }
}
