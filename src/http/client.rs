//! JSON-over-HTTP client with error normalization.

use log::debug;
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::QueryError;

/// HTTP client that performs exactly one attempt per call.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request and deserializes the JSON response.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, QueryError> {
        debug!("GET JSON from {}...", url);

        let response = self.client.get(url).send().await?;
        read_json(response).await
    }

    /// Performs a POST request with a JSON body and deserializes the JSON response.
    #[tracing::instrument(skip(self, body))]
    pub async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, QueryError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST JSON to {}...", url);

        let response = self.client.post(url).json(body).send().await?;
        read_json(response).await
    }
}

/// Turns a response into `T`, or into the matching [`QueryError`].
///
/// A non-success status becomes [`QueryError::Service`]. A success body
/// that is not JSON is a transport failure; JSON of the wrong shape is a
/// data error.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, QueryError> {
    let status = response.status();

    if !status.is_success() {
        // An unreadable error body still yields the generic message.
        let body = response.text().await.unwrap_or_default();
        debug!("Request failed with HTTP {}: {}", status.as_u16(), body);
        return Err(QueryError::from_failed_response(status.as_u16(), &body));
    }

    let body = response.text().await?;
    decode_body(&body)
}

fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, QueryError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| QueryError::Transport(format!("Failed to parse JSON response: {}", e)))?;

    serde_json::from_value(value)
        .map_err(|e| QueryError::Data(format!("Unexpected response data: {}", e)))
}
