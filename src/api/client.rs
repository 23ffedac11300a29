use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use std::time::Duration;
use tokio::time::timeout;

use crate::api::models::{QueryRequest, QueryResponse};
use crate::error::{BiError, Result};

/// The backend collaborator the orchestrator dispatches to. Tests substitute
/// a scripted implementation.
#[async_trait]
pub trait QueryBackend: Send + Sync {
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse>;
}

/// HTTP dispatch to the analytics service.
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
    request_timeout: Option<Duration>,
}

impl HttpBackend {
    /// `request_timeout` of `None` waits indefinitely, matching the default
    /// behavior of the service's own clients.
    pub fn new(endpoint: impl Into<String>, request_timeout: Option<Duration>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            request_timeout,
        })
    }

    async fn dispatch(&self, request: &QueryRequest) -> Result<QueryResponse> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        // A non-success status is a failure regardless of body content.
        if !response.status().is_success() {
            return Err(BiError::Status(response.status().as_u16()));
        }

        Ok(response.json::<QueryResponse>().await?)
    }
}

#[async_trait]
impl QueryBackend for HttpBackend {
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse> {
        match self.request_timeout {
            Some(limit) => timeout(limit, self.dispatch(request))
                .await
                .map_err(|_| BiError::Timeout)?,
            None => self.dispatch(request).await,
        }
    }
}
