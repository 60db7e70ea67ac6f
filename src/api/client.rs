use std::collections::HashSet;

use async_trait::async_trait;
use log::{debug, error};

use crate::error::QueryError;
use crate::http::HttpClient;

use super::types::{DeskRecommendation, QueryRequest, Space};

/// Base URL used when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Connection options for [`OccupancyClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    pub api_base_url: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ClientOptions {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }

    /// Joins an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueryOccupancy: Send + Sync {
    /// Sends a natural-language query and returns the recommended desks
    /// in the order the backend ranked them.
    ///
    /// The text is sent as given; callers must not pass blank input.
    async fn submit_query(&self, query_text: &str) -> Result<Vec<DeskRecommendation>, QueryError>;

    /// Full desk inventory.
    async fn list_desks(&self) -> Result<Vec<DeskRecommendation>, QueryError>;

    /// Floors, zones and areas known to the backend.
    async fn list_spaces(&self) -> Result<Vec<Space>, QueryError>;
}

pub struct OccupancyClient {
    http: HttpClient,
    options: ClientOptions,
}

impl OccupancyClient {
    pub fn new(http: HttpClient, options: ClientOptions) -> Self {
        Self { http, options }
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    async fn fetch_desks(&self, request: Option<&str>) -> Result<Vec<DeskRecommendation>, QueryError> {
        let desks: Vec<DeskRecommendation> = match request {
            Some(query_text) => {
                let url = self.options.endpoint("query-occupancy");
                self.http
                    .post_json(&url, &QueryRequest { query_text })
                    .await?
            }
            None => self.http.get_json(&self.options.endpoint("data/desks")).await?,
        };

        ensure_unique_ids(&desks)?;
        debug!("Received {} desk(s)", desks.len());
        Ok(desks)
    }
}

#[async_trait]
impl QueryOccupancy for OccupancyClient {
    #[tracing::instrument(skip(self))]
    async fn submit_query(&self, query_text: &str) -> Result<Vec<DeskRecommendation>, QueryError> {
        self.fetch_desks(Some(query_text))
            .await
            .inspect_err(|e| error!("Occupancy query failed: {}", e))
    }

    #[tracing::instrument(skip(self))]
    async fn list_desks(&self) -> Result<Vec<DeskRecommendation>, QueryError> {
        self.fetch_desks(None)
            .await
            .inspect_err(|e| error!("Error listing desks: {}", e))
    }

    #[tracing::instrument(skip(self))]
    async fn list_spaces(&self) -> Result<Vec<Space>, QueryError> {
        self.http
            .get_json(&self.options.endpoint("data/spaces"))
            .await
            .inspect_err(|e| error!("Error listing spaces: {}", e))
    }
}

/// Rejects a batch in which the same desk id appears twice.
fn ensure_unique_ids(desks: &[DeskRecommendation]) -> Result<(), QueryError> {
    let mut seen = HashSet::new();
    for desk in desks {
        if !seen.insert(desk.id.as_str()) {
            return Err(QueryError::Data(format!(
                "Duplicate desk id in response: {}",
                desk.id
            )));
        }
    }
    Ok(())
}
