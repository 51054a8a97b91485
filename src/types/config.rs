//! Configuration Types
//!
//! Provider and client credential configuration for the sign-in integration.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Google authorization endpoint.
pub const GOOGLE_AUTHORIZATION_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// Google token endpoint.
pub const GOOGLE_TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";

/// Scopes requested at sign-in.
pub const DEFAULT_SCOPES: &[&str] = &["https://www.googleapis.com/auth/calendar", "openid"];

/// Path the surrounding framework routes unauthenticated users to.
pub const DEFAULT_SIGN_IN_PATH: &str = "/entrar";

/// Default HTTP timeout for token endpoint calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Provider configuration, immutable for the lifetime of the process.
///
/// Injected into the lifecycle manager at construction; nothing in this
/// crate reads the environment after startup.
#[derive(Clone)]
pub struct ProviderConfig {
    /// Client credentials.
    pub credentials: ClientCredentials,
    /// Authorization endpoint URL (redirect-based flow, handled by the
    /// surrounding framework; carried here as registration data only).
    pub authorization_endpoint: String,
    /// Token endpoint URL.
    pub token_endpoint: String,
    /// Scopes requested at sign-in.
    pub scopes: Vec<String>,
    /// `access_type` authorization parameter. "offline" makes Google issue
    /// a refresh token.
    pub access_type: String,
    /// `prompt` authorization parameter. "consent" forces refresh token
    /// reissue on every sign-in.
    pub prompt: String,
    /// Sign-in page path declared to the session framework.
    pub sign_in_path: String,
    /// HTTP timeout for token endpoint calls.
    pub timeout: Duration,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("credentials", &self.credentials)
            .field("authorization_endpoint", &self.authorization_endpoint)
            .field("token_endpoint", &self.token_endpoint)
            .field("scopes", &self.scopes)
            .field("access_type", &self.access_type)
            .field("prompt", &self.prompt)
            .field("sign_in_path", &self.sign_in_path)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Client credentials for authenticating against the token endpoint.
#[derive(Clone)]
pub struct ClientCredentials {
    /// Client identifier.
    pub client_id: String,
    /// Client secret.
    pub client_secret: SecretString,
    /// How credentials are presented to the token endpoint.
    pub auth_method: ClientAuthMethod,
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("auth_method", &self.auth_method)
            .finish()
    }
}

/// Client authentication method for token endpoint requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientAuthMethod {
    /// client_id and client_secret in the form body. Google's method.
    #[default]
    ClientSecretPost,
    /// HTTP Basic Authentication header.
    ClientSecretBasic,
}
