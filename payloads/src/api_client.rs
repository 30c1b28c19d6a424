use crate::{Booking, BookingId, requests, responses};
use reqwest::StatusCode;
use responses::Envelope;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for the booking backend's admin endpoints.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", self.address.trim_end_matches('/'))
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .post(self.format_url(path))
            .json(body)
            .send()
            .await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        self.inner_client.get(self.format_url(path)).send().await
    }

    /// `path` with `segment` appended as a single percent-encoded path
    /// segment.
    fn segment_url(
        &self,
        path: &str,
        segment: &str,
    ) -> Result<reqwest::Url, ClientError> {
        let mut url = reqwest::Url::parse(&self.format_url(path))
            .map_err(|e| ClientError::InvalidAddress(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidAddress(self.address.clone()))?
            .push(segment);
        Ok(url)
    }

    async fn empty_delete(&self, url: reqwest::Url) -> ReqwestResult {
        self.inner_client.delete(url).send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Fetch every booking and admin block.
    pub async fn list_bookings(&self) -> Result<Vec<Booking>, ClientError> {
        let response = self.empty_get("admin/bookings").await?;
        let list: responses::BookingsList = ok_envelope(response).await?;
        Ok(list.into_bookings())
    }

    /// Block a date range for a room type. Returns the server's message, if
    /// any.
    pub async fn block_date(
        &self,
        details: &requests::BlockDate,
    ) -> Result<Option<String>, ClientError> {
        let response = self.post("admin/block-date", details).await?;
        let ack: responses::ActionResponse = ok_envelope(response).await?;
        Ok(ack.message)
    }

    /// Delete a booking or block. This cannot be undone.
    pub async fn delete_booking(
        &self,
        id: &BookingId,
    ) -> Result<Option<String>, ClientError> {
        let url = self.segment_url("admin/bookings", &id.0)?;
        let response = self.empty_delete(url).await?;
        let ack: responses::ActionResponse = ok_envelope(response).await?;
        Ok(ack.message)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected response from server: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid backend address: {0}")]
    InvalidAddress(String),
    /// The server answered with `success: false`.
    #[error("{}", .0.as_deref().unwrap_or("Request was rejected"))]
    Rejected(Option<String>),
}

impl ClientError {
    /// Message supplied by the server alongside a rejection.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected(message) => message.as_deref(),
            _ => None,
        }
    }
}

/// Deserialize a response envelope, returning its body if the server
/// reported success.
///
/// Error statuses that still carry a well-formed envelope count as a
/// rejection with the server's message; anything else is an `APIError`.
pub async fn ok_envelope<T>(response: reqwest::Response) -> Result<T, ClientError>
where
    T: serde::de::DeserializeOwned + Envelope,
{
    let status = response.status();
    let text = response.text().await?;
    let body = match serde_json::from_str::<T>(&text) {
        Ok(body) => body,
        Err(_) if !status.is_success() => {
            return Err(ClientError::APIError(status, text));
        }
        Err(e) => return Err(e.into()),
    };
    if status.is_success() && body.success() {
        Ok(body)
    } else {
        tracing::debug!(%status, "Request rejected by server");
        Err(ClientError::Rejected(body.into_message()))
    }
}
