//! Notion-backed record store.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use tracing::{debug, info, warn};

use super::types::{CreatePageRequest, QueryRequest, QueryResponse};
use crate::config::StoreConfig;
use crate::domain::entities::{ExternalRecord, Submission};
use crate::domain::repositories::{RecordStore, StoreError};

const VERSION_HEADER: &str = "Notion-Version";

/// [`RecordStore`] implementation over the Notion REST API.
///
/// One `reqwest::Client` is shared by all requests for connection reuse; no
/// response data is kept between calls.
pub struct NotionStore {
    client: Client,
    api_base: String,
    api_version: String,
    token: String,
    listings_database_id: String,
    submissions_database_id: String,
}

impl NotionStore {
    /// Builds a store client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Network`] if the HTTP client cannot be constructed.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| StoreError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            token: config.token.clone(),
            listings_database_id: config.listings_database_id.clone(),
            submissions_database_id: config.submissions_database_id.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path)
    }

    /// Adds the credential and API version headers.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.token)
            .header(VERSION_HEADER, &self.api_version)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, StoreError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

/// Maps a `reqwest` failure onto the store error taxonomy.
fn transport_error(e: reqwest::Error) -> StoreError {
    if e.is_decode() {
        StoreError::Decode(e.to_string())
    } else {
        StoreError::Network(e.to_string())
    }
}

#[async_trait]
impl RecordStore for NotionStore {
    async fn query_records(&self) -> Result<Vec<ExternalRecord>, StoreError> {
        let url = self.url(&format!("databases/{}/query", self.listings_database_id));
        debug!(%url, "Querying listing records");

        let response = self
            .send(self.client.post(&url).json(&QueryRequest::by_name()))
            .await?;

        let body: QueryResponse = response.json().await.map_err(transport_error)?;

        if body.has_more {
            warn!(
                returned = body.results.len(),
                "Listing query has more results than one page; only the first page is shown"
            );
        }
        info!(count = body.results.len(), "Fetched listing records");

        Ok(body.results)
    }

    async fn create_record(&self, submission: &Submission) -> Result<u16, StoreError> {
        let url = self.url("pages");
        let body = CreatePageRequest::for_submission(&self.submissions_database_id, submission);

        let response = self.send(self.client.post(&url).json(&body)).await?;
        let status = response.status().as_u16();
        info!(status, "Submission record created");

        Ok(status)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        let url = self.url(&format!("databases/{}", self.listings_database_id));
        self.send(self.client.get(&url)).await?;
        Ok(())
    }
}
