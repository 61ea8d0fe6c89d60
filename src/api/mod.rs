//! Client for the backend profile API.
//!
//! Talks to the three JSON endpoints the viewer consumes:
//! `/api/users/{handle}`, `/api/users/{handle}/tweets` and
//! `/api/users/{handle}/tweets/{id}`.

pub mod models;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;
use urlencoding::encode;

pub use models::{
    Author, Media, Photo, Tweet, TweetIdsResponse, TweetResponse, User, UserResponse,
    Verification, Video,
};

use crate::config::Config;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,
    #[error("API returned {status}: {body}")]
    Server { status: StatusCode, body: String },
    #[error("failed to reach API: {0}")]
    Connection(#[source] reqwest::Error),
    #[error("failed to decode API response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// Response body text for server errors, if non-empty.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        match self {
            Self::Server { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }
}

/// Operations the page controllers need from the backend.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Existence check: succeeds on any 2xx without decoding the body.
    async fn check_user(&self, handle: &str) -> Result<(), ApiError>;

    /// Fetch and decode the user record.
    async fn fetch_user(&self, handle: &str) -> Result<UserResponse, ApiError>;

    /// Fetch the post IDs for a user, newest first as the API orders them.
    async fn fetch_tweet_ids(&self, handle: &str) -> Result<Vec<String>, ApiError>;

    /// Fetch a single post's detail.
    async fn fetch_tweet(&self, handle: &str, id: &str) -> Result<TweetResponse, ApiError>;
}

/// HTTP implementation of [`ProfileApi`].
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Self::with_timeout(&config.api_base_url, config.http_timeout)
    }

    /// Create a client for an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("profile-viewer/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn user_url(&self, handle: &str) -> String {
        format!("{}/api/users/{}", self.base_url, encode(handle))
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, ApiError> {
        debug!(url = %url, "Requesting API");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ApiError::Connection)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Server {
            status,
            body: body.trim().to_string(),
        })
    }
}

#[async_trait]
impl ProfileApi for ApiClient {
    async fn check_user(&self, handle: &str) -> Result<(), ApiError> {
        self.get(&self.user_url(handle)).await.map(drop)
    }

    async fn fetch_user(&self, handle: &str) -> Result<UserResponse, ApiError> {
        self.get(&self.user_url(handle))
            .await?
            .json()
            .await
            .map_err(ApiError::Decode)
    }

    async fn fetch_tweet_ids(&self, handle: &str) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/tweets", self.user_url(handle));
        let response: TweetIdsResponse = self
            .get(&url)
            .await?
            .json()
            .await
            .map_err(ApiError::Decode)?;

        Ok(response.tweet_ids.unwrap_or_default())
    }

    async fn fetch_tweet(&self, handle: &str, id: &str) -> Result<TweetResponse, ApiError> {
        let url = format!("{}/tweets/{}", self.user_url(handle), encode(id));
        self.get(&url)
            .await?
            .json()
            .await
            .map_err(ApiError::Decode)
    }
}
