//! HTTP client for the WanderLux API
//!
//! Intent actions spawn one task per request; each task calls a method here
//! and sends the `Did*` result action back through the runtime channel. No
//! async code runs in the reducer or components.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::model::{Blog, Booking, Category, Enquiry, GalleryItem, Package};

/// Errors surfaced to slices as user-facing strings.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or decode failure before a response body was usable.
    #[error("{0}")]
    Transport(String),
    /// Non-2xx response; carries the server body or a fixed fallback.
    #[error("{0}")]
    Api(String),
}

impl ApiError {
    fn transport(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Thin client over one configurable base URL.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given base URL (trailing slash tolerated).
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn fetch_packages(&self) -> Result<Vec<Package>, ApiError> {
        self.get_json("/packages", "Failed to fetch packages").await
    }

    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("/categories", "Failed to fetch categories")
            .await
    }

    pub async fn fetch_blogs(&self) -> Result<Vec<Blog>, ApiError> {
        self.get_json("/blogs", "Failed to fetch blogs").await
    }

    pub async fn fetch_gallery(&self) -> Result<Vec<GalleryItem>, ApiError> {
        self.get_json("/gallery", "Failed to fetch gallery images")
            .await
    }

    pub async fn fetch_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get_json("/bookings", "Failed to fetch bookings").await
    }

    /// POST the booking; the server echoes the stored entity.
    pub async fn create_booking(&self, booking: &Booking) -> Result<Booking, ApiError> {
        self.post_json("/bookings", booking, "Failed to create booking")
            .await
    }

    /// POST the enquiry; the server echoes the stored entity.
    pub async fn submit_enquiry(&self, enquiry: &Enquiry) -> Result<Enquiry, ApiError> {
        self.post_json("/enquiries", enquiry, "Failed to submit enquiry")
            .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base, path);
        debug!(%url, "GET");

        let response = self.http.get(&url).send().await.map_err(ApiError::transport)?;
        Self::decode(response, fallback).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base, path);
        debug!(%url, "POST");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ApiError::transport)?;
        Self::decode(response, fallback).await
    }

    /// Non-2xx responses surface the body text when the server sent one.
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                fallback.to_string()
            } else {
                body
            };
            return Err(ApiError::Api(message));
        }

        response.json().await.map_err(ApiError::transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.base, "http://localhost:3000");
    }

    #[test]
    fn api_error_displays_message_verbatim() {
        let err = ApiError::Api("Failed to fetch packages".into());
        assert_eq!(err.to_string(), "Failed to fetch packages");
    }
}
