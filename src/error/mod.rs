//! Error Types
//!
//! Error hierarchy for the sign-in integration with provider error mapping.

use thiserror::Error;

/// Root error type for the sign-in integration.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

impl AuthError {
    /// Get error code for log correlation.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "SIGNIN_CONFIG",
            Self::Token(_) => "SIGNIN_TOKEN",
            Self::Network(_) => "SIGNIN_NETWORK",
            Self::Protocol(_) => "SIGNIN_PROTOCOL",
            Self::Provider(_) => "SIGNIN_PROVIDER",
        }
    }

    /// Check if the error requires the user to sign in again.
    pub fn needs_reauth(&self) -> bool {
        match self {
            Self::Token(TokenError::MissingRefreshToken) => true,
            Self::Token(TokenError::NotFound) => true,
            Self::Provider(ProviderError::InvalidGrant { .. }) => true,
            _ => false,
        }
    }
}

/// Configuration error.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Missing environment variable: {name}")]
    MissingEnvVar { name: String },

    #[error("Invalid endpoint URL: {url}")]
    InvalidEndpoint { url: String },
}

/// Token-related error.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("No session token present and no grant supplied")]
    NotFound,

    #[error("Missing refresh_token")]
    MissingRefreshToken,
}

/// Network/transport error.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Connection failed: {message}")]
    ConnectionFailed { message: String },

    #[error("Request timeout after {timeout:?}")]
    Timeout { timeout: std::time::Duration },
}

/// Response parsing error.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },
}

/// Provider (token endpoint) error.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Invalid client credentials")]
    InvalidClient { error_description: Option<String> },

    #[error("Invalid grant: {message}")]
    InvalidGrant { message: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

/// Result type for sign-in integration operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// OAuth2 error response body from the provider.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ProviderErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}

/// Map a token endpoint error response to an error type.
pub fn map_provider_error(response: &ProviderErrorResponse) -> ProviderError {
    match response.error.as_str() {
        "invalid_client" => ProviderError::InvalidClient {
            error_description: response.error_description.clone(),
        },
        "invalid_grant" => ProviderError::InvalidGrant {
            message: response
                .error_description
                .clone()
                .unwrap_or_else(|| "Invalid grant".to_string()),
        },
        "server_error" => ProviderError::ServerError {
            message: response
                .error_description
                .clone()
                .unwrap_or_else(|| "Server error".to_string()),
        },
        _ => ProviderError::InvalidRequest {
            message: response
                .error_description
                .clone()
                .unwrap_or_else(|| response.error.clone()),
        },
    }
}

/// Parse an error response from an HTTP body.
pub fn parse_error_response(body: &str) -> Option<ProviderErrorResponse> {
    serde_json::from_str(body).ok()
}

/// Create an error from a non-2xx token endpoint response.
///
/// The body is parsed as JSON first; a recognizable OAuth2 error payload
/// wins over the bare status code.
pub fn error_from_response(status: u16, body: &str) -> AuthError {
    if let Some(response) = parse_error_response(body) {
        return AuthError::Provider(map_provider_error(&response));
    }

    let error = match status {
        400 => ProviderError::InvalidRequest {
            message: "Bad request".to_string(),
        },
        401 => ProviderError::InvalidClient {
            error_description: Some("Unauthorized".to_string()),
        },
        _ => ProviderError::ServerError {
            message: format!("HTTP {}", status),
        },
    };

    AuthError::Provider(error)
}
