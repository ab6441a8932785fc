//! HTTP client for the admin booking API

use crate::{BookingListResponse, BookingStatusUpdate, ClientConfig, ClientError, ClientResult, TableStatusUpdate};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{Booking, BookingStatus, TableStatus};

/// HTTP client for making network requests to the booking backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        let response = Self::check_status(response).await?;
        response.json().await.map_err(Into::into)
    }

    /// Make a PATCH request with JSON body, ignoring the response body
    pub async fn patch<B: serde::Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let mut request = self.client.patch(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Map non-2xx responses to client errors
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        match status {
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
            StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
            _ => Err(ClientError::Internal(text)),
        }
    }

    // ========== Admin Booking API ==========

    /// Fetch the full booking collection for the authenticated admin
    pub async fn bookings(&self) -> ClientResult<Vec<Booking>> {
        let response: BookingListResponse = self.get("admin/bookings").await?;
        Ok(response.bookings)
    }

    /// Update one booking's status (and cancellation note, when given)
    pub async fn update_booking_status(
        &self,
        booking_id: i64,
        status: BookingStatus,
        note: Option<String>,
    ) -> ClientResult<()> {
        let body = BookingStatusUpdate {
            status_booking: status,
            note_booking: note,
        };
        tracing::debug!(booking_id = %booking_id, status = %status, "updating booking status");
        self.patch(&format!("admin/updateStatusBooking/{}", booking_id), &body)
            .await
    }

    /// Update one table's availability
    pub async fn update_table_status(
        &self,
        table_id: i64,
        status: TableStatus,
    ) -> ClientResult<()> {
        let body = TableStatusUpdate {
            table_status: status,
        };
        self.patch(&format!("admin/updateStatus/{}", table_id), &body)
            .await
    }
}
