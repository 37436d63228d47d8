//! HTTP client for the remote collection endpoint.
//!
//! One endpoint family serves both directions: observed ads are POSTed as a
//! JSON array of [`AdSubmission`] projections, and the current batch is
//! GETted back as a JSON array of [`AdRecord`]. The client wraps a shared
//! [`reqwest::Client`] and is cheap to clone.

use miette::Diagnostic;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::config::CollectorConfig;
use crate::record::{AdRecord, AdSubmission};
use crate::store::AdStore;

/// Errors produced by collector requests.
#[derive(Debug, Error, Diagnostic)]
pub enum ClientError {
    /// Transport failure or non-success status from the collector.
    #[error("collector request failed: {source}")]
    #[diagnostic(
        code(adcollect::client::http),
        help("Check the collector endpoint and network reachability.")
    )]
    Http {
        #[from]
        source: reqwest::Error,
    },

    /// The collector's response body was not a valid record array.
    #[error("collector response could not be decoded: {source}")]
    #[diagnostic(code(adcollect::client::decode))]
    Decode {
        #[from]
        source: serde_json::Error,
    },
}

/// Client for one collector endpoint.
#[derive(Clone, Debug)]
pub struct CollectorClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl CollectorClient {
    /// Builds a client for the configured endpoint.
    pub fn new(config: &CollectorConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    /// The endpoint this client talks to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Submits a batch of records to the collector.
    ///
    /// Each record is projected down to its [`AdSubmission`] attributes
    /// before transmission. A non-success status is an error.
    pub async fn send_ads(&self, ads: &[AdRecord]) -> Result<(), ClientError> {
        let batch: Vec<AdSubmission> = ads.iter().map(AdSubmission::from_record).collect();
        debug!(count = batch.len(), endpoint = %self.endpoint, "submitting ad batch");
        self.http
            .post(self.endpoint.clone())
            .json(&batch)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Fetches the collector's current record batch.
    pub async fn fetch_ads(&self) -> Result<Vec<AdRecord>, ClientError> {
        debug!(endpoint = %self.endpoint, "fetching ad batch");
        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        let ads: Vec<AdRecord> = serde_json::from_str(&body)?;
        Ok(ads)
    }

    /// Fetches the current batch, merges it into `store`, and returns the
    /// resulting unrated count (the value the badge is rendered from).
    pub async fn refresh(&self, store: &mut AdStore) -> Result<usize, ClientError> {
        let incoming = self.fetch_ads().await?;
        store.absorb(&incoming);
        let unrated = store.unrated_count();
        info!(held = store.len(), unrated, "store refreshed from collector");
        Ok(unrated)
    }
}
