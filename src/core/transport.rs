//! HTTP Transport
//!
//! HTTP client interface and implementations for token endpoint calls.
//! The token endpoint only ever sees form-encoded POSTs, so the interface
//! is narrowed to that.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{AuthError, NetworkError, ProtocolError};

/// HTTP POST request definition.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// Request URL.
    pub url: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Form-encoded request body.
    pub body: String,
    /// Request timeout.
    pub timeout: Option<Duration>,
}

/// HTTP response definition.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: String,
}

impl HttpResponse {
    /// Check for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP transport interface (for dependency injection).
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send an HTTP POST request.
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, AuthError>;
}

/// Default reqwest-based HTTP transport.
pub struct ReqwestHttpTransport {
    client: reqwest::Client,
    default_timeout: Duration,
}

impl ReqwestHttpTransport {
    /// Create new transport with default settings.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create transport with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            default_timeout: timeout,
        }
    }
}

impl Default for ReqwestHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestHttpTransport {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, AuthError> {
        let timeout = request.timeout.unwrap_or(self.default_timeout);

        let mut req_builder = self.client.post(&request.url);
        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }
        req_builder = req_builder.body(request.body).timeout(timeout);

        let response = req_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                AuthError::Network(NetworkError::Timeout { timeout })
            } else {
                AuthError::Network(NetworkError::ConnectionFailed {
                    message: e.to_string(),
                })
            }
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            AuthError::Protocol(ProtocolError::InvalidResponse {
                message: e.to_string(),
            })
        })?;

        Ok(HttpResponse { status, body })
    }
}

/// Mock HTTP transport for testing.
#[derive(Default)]
pub struct MockHttpTransport {
    responses: std::sync::Mutex<Vec<HttpResponse>>,
    request_history: std::sync::Mutex<Vec<HttpRequest>>,
    fail_next: std::sync::Mutex<Option<String>>,
}

impl MockHttpTransport {
    /// Create new mock transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response to return.
    pub fn queue_response(&self, response: HttpResponse) -> &Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    /// Queue a JSON response.
    pub fn queue_json_response<T: serde::Serialize>(&self, status: u16, body: &T) -> &Self {
        self.queue_response(HttpResponse {
            status,
            body: serde_json::to_string(body).unwrap(),
        })
    }

    /// Make the next request fail at the network level.
    pub fn fail_next(&self, message: impl Into<String>) -> &Self {
        *self.fail_next.lock().unwrap() = Some(message.into());
        self
    }

    /// Get request history.
    pub fn get_requests(&self) -> Vec<HttpRequest> {
        self.request_history.lock().unwrap().clone()
    }

    /// Get number of requests issued.
    pub fn request_count(&self) -> usize {
        self.request_history.lock().unwrap().len()
    }

    /// Get last request.
    pub fn get_last_request(&self) -> Option<HttpRequest> {
        self.request_history.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, AuthError> {
        self.request_history.lock().unwrap().push(request);

        if let Some(message) = self.fail_next.lock().unwrap().take() {
            return Err(AuthError::Network(NetworkError::ConnectionFailed {
                message,
            }));
        }

        self.responses.lock().unwrap().pop().ok_or_else(|| {
            AuthError::Network(NetworkError::ConnectionFailed {
                message: "No mock response available".to_string(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transport_queue_and_history() {
        let transport = MockHttpTransport::new();
        transport.queue_json_response(200, &serde_json::json!({"key": "value"}));

        let request = HttpRequest {
            url: "https://example.com/token".to_string(),
            headers: HashMap::new(),
            body: "grant_type=refresh_token".to_string(),
            timeout: None,
        };

        let response = transport.post(request).await.unwrap();
        assert_eq!(response.status, 200);
        assert!(response.is_success());
        assert!(response.body.contains("value"));

        let history = transport.get_requests();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].url, "https://example.com/token");
    }

    #[tokio::test]
    async fn test_mock_transport_fail_next() {
        let transport = MockHttpTransport::new();
        transport.fail_next("connection refused");

        let request = HttpRequest {
            url: "https://example.com/token".to_string(),
            headers: HashMap::new(),
            body: String::new(),
            timeout: None,
        };

        let result = transport.post(request).await;
        assert!(matches!(
            result,
            Err(AuthError::Network(NetworkError::ConnectionFailed { .. }))
        ));
    }

    #[test]
    fn test_is_success_boundaries() {
        assert!(HttpResponse { status: 200, body: String::new() }.is_success());
        assert!(HttpResponse { status: 299, body: String::new() }.is_success());
        assert!(!HttpResponse { status: 300, body: String::new() }.is_success());
        assert!(!HttpResponse { status: 400, body: String::new() }.is_success());
    }
}
