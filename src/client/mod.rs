//! HTTP client for the cards API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client maps transport and status failures
//! into `CardsApiError` and records request metrics.

mod async_wrapper;
pub use async_wrapper::{AsyncCardsClient, AsyncCardsClientImpl};

use crate::config::Config;
use crate::error::{CardsApiError, CardsApiResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{Contact, NewContact};
use std::sync::Arc;
use std::time::Duration;

/// Path of the contact collection endpoint.
pub const CARDS_PATH: &str = "/api/cards";

/// Path of the contact creation endpoint.
pub const CARD_PATH: &str = "/api/card";

/// HTTP client for the cards API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct CardsClient {
    /// Base URL for the cards API
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl CardsClient {
    /// Create a new CardsClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_timeout(
            config.api_base_url.clone(),
            Duration::from_secs(config.request_timeout),
        )
    }

    /// Create a CardsClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(10))
    }

    fn with_timeout(base_url: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request.
    fn get(&self, path: &str) -> CardsApiResult<ureq::Response> {
        let timer = HttpTimer::new(self.metrics.clone());
        let url = self.build_url(path);

        tracing::debug!("GET {}", url);

        match self.agent.get(&url).call() {
            Ok(response) => match Self::ensure_success(&response) {
                Ok(()) => {
                    tracing::debug!("GET {} - Success (status: {})", url, response.status());
                    timer.complete();
                    Ok(response)
                }
                Err(err) => {
                    tracing::warn!("GET {} - Error: {}", url, err);
                    timer.complete_with_error();
                    Err(err)
                }
            },
            Err(e) => {
                let err = self.map_error(e);
                tracing::warn!("GET {} - Error: {}", url, err);
                timer.complete_with_error();
                Err(err)
            }
        }
    }

    /// Execute a POST request with a JSON body.
    fn post(&self, path: &str, body: &serde_json::Value) -> CardsApiResult<ureq::Response> {
        let timer = HttpTimer::new(self.metrics.clone());
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);
        tracing::debug!("Request body: {}", body);

        match self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(body)
        {
            Ok(response) => match Self::ensure_success(&response) {
                Ok(()) => {
                    tracing::debug!("POST {} - Success (status: {})", url, response.status());
                    timer.complete();
                    Ok(response)
                }
                Err(err) => {
                    tracing::error!("POST {} - Error: {}", url, err);
                    timer.complete_with_error();
                    Err(err)
                }
            },
            Err(e) => {
                let err = self.map_error(e);
                tracing::error!("POST {} - Error: {}", url, err);
                timer.complete_with_error();
                Err(err)
            }
        }
    }

    /// Map a ureq error to a CardsApiError.
    ///
    /// ureq reports every status >= 400 as `Error::Status`. Status codes are
    /// kept for display only; callers treat all of them as plain failure.
    fn map_error(&self, error: ureq::Error) -> CardsApiError {
        match error {
            ureq::Error::Status(status, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                CardsApiError::ApiError { status, message }
            }
            ureq::Error::Transport(transport) => match transport.kind() {
                ureq::ErrorKind::ConnectionFailed => {
                    CardsApiError::HttpError("Connection failed".to_string())
                }
                ureq::ErrorKind::Io if Self::is_timeout(&transport) => CardsApiError::Timeout,
                _ => CardsApiError::HttpError(transport.to_string()),
            },
        }
    }

    /// An I/O failure is a timeout only when the underlying error says so.
    fn is_timeout(transport: &ureq::Transport) -> bool {
        std::error::Error::source(transport)
            .and_then(|source| source.downcast_ref::<std::io::Error>())
            .is_some_and(|io| is_timeout_kind(io.kind()))
    }

    /// Fetch the full contact collection.
    pub fn get_cards(&self) -> CardsApiResult<Vec<Contact>> {
        let response = self.get(CARDS_PATH)?;

        let body = response
            .into_string()
            .map_err(|e| CardsApiError::HttpError(e.to_string()))?;
        let cards: Vec<Contact> = serde_json::from_str(&body)?;

        self.metrics.record_cards_fetched(cards.len());
        Ok(cards)
    }

    /// Create a contact. Any 2xx is success; the response body is ignored.
    pub fn create_card(&self, contact: &NewContact) -> CardsApiResult<()> {
        let body = serde_json::to_value(contact)?;
        self.post(CARD_PATH, &body)?;

        self.metrics.record_card_created();
        Ok(())
    }

    /// Reject 1xx/3xx responses that ureq hands back as `Ok`.
    ///
    /// Runs before the request timer is settled so these count as errors.
    fn ensure_success(response: &ureq::Response) -> CardsApiResult<()> {
        let status = response.status();
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(CardsApiError::ApiError {
                status,
                message: response.status_text().to_string(),
            })
        }
    }
}

/// Socket read deadlines surface as `TimedOut` or, on some platforms, `WouldBlock`.
fn is_timeout_kind(kind: std::io::ErrorKind) -> bool {
    matches!(
        kind,
        std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
    )
}
