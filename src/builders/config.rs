//! Configuration Builder
//!
//! Fluent builder for provider configuration, plus environment loading.

use std::time::Duration;

use crate::error::{AuthError, ConfigurationError};
use crate::types::{
    ClientAuthMethod, ClientCredentials, ProviderConfig, DEFAULT_SCOPES, DEFAULT_SIGN_IN_PATH,
    DEFAULT_TIMEOUT, GOOGLE_AUTHORIZATION_ENDPOINT, GOOGLE_TOKEN_ENDPOINT,
};
use secrecy::SecretString;

/// Provider configuration builder.
#[derive(Default)]
pub struct ProviderConfigBuilder {
    client_id: Option<String>,
    client_secret: Option<SecretString>,
    auth_method: Option<ClientAuthMethod>,
    authorization_endpoint: Option<String>,
    token_endpoint: Option<String>,
    scopes: Vec<String>,
    access_type: Option<String>,
    prompt: Option<String>,
    sign_in_path: Option<String>,
    timeout: Option<Duration>,
}

impl ProviderConfigBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder pre-filled with the Google provider registration:
    /// endpoints, calendar + openid scopes, offline access with forced
    /// consent (so a refresh token is issued on every sign-in), and the
    /// sign-in page path.
    pub fn google() -> Self {
        Self {
            authorization_endpoint: Some(GOOGLE_AUTHORIZATION_ENDPOINT.to_string()),
            token_endpoint: Some(GOOGLE_TOKEN_ENDPOINT.to_string()),
            scopes: DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
            access_type: Some("offline".to_string()),
            prompt: Some("consent".to_string()),
            sign_in_path: Some(DEFAULT_SIGN_IN_PATH.to_string()),
            auth_method: Some(ClientAuthMethod::ClientSecretPost),
            ..Default::default()
        }
    }

    /// Set client ID.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set client secret.
    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(SecretString::new(client_secret.into()));
        self
    }

    /// Set client authentication method.
    pub fn auth_method(mut self, method: ClientAuthMethod) -> Self {
        self.auth_method = Some(method);
        self
    }

    /// Set authorization endpoint.
    pub fn authorization_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.authorization_endpoint = Some(endpoint.into());
        self
    }

    /// Set token endpoint.
    pub fn token_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.token_endpoint = Some(endpoint.into());
        self
    }

    /// Set requested scopes.
    pub fn scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }

    /// Add a requested scope.
    pub fn add_scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }

    /// Set the sign-in page path.
    pub fn sign_in_path(mut self, path: impl Into<String>) -> Self {
        self.sign_in_path = Some(path.into());
        self
    }

    /// Set request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the provider configuration.
    pub fn build(self) -> Result<ProviderConfig, AuthError> {
        let client_id = self.client_id.ok_or_else(|| {
            AuthError::Configuration(ConfigurationError::MissingField {
                field: "client_id".to_string(),
            })
        })?;

        let client_secret = self.client_secret.ok_or_else(|| {
            AuthError::Configuration(ConfigurationError::MissingField {
                field: "client_secret".to_string(),
            })
        })?;

        let authorization_endpoint = self.authorization_endpoint.ok_or_else(|| {
            AuthError::Configuration(ConfigurationError::MissingField {
                field: "authorization_endpoint".to_string(),
            })
        })?;

        let token_endpoint = self.token_endpoint.ok_or_else(|| {
            AuthError::Configuration(ConfigurationError::MissingField {
                field: "token_endpoint".to_string(),
            })
        })?;

        for endpoint in [&authorization_endpoint, &token_endpoint] {
            if url::Url::parse(endpoint).is_err() {
                return Err(AuthError::Configuration(
                    ConfigurationError::InvalidEndpoint {
                        url: endpoint.clone(),
                    },
                ));
            }
        }

        Ok(ProviderConfig {
            credentials: ClientCredentials {
                client_id,
                client_secret,
                auth_method: self.auth_method.unwrap_or_default(),
            },
            authorization_endpoint,
            token_endpoint,
            scopes: self.scopes,
            access_type: self.access_type.unwrap_or_else(|| "offline".to_string()),
            prompt: self.prompt.unwrap_or_else(|| "consent".to_string()),
            sign_in_path: self
                .sign_in_path
                .unwrap_or_else(|| DEFAULT_SIGN_IN_PATH.to_string()),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}

/// Create a new provider configuration builder.
pub fn signin_config() -> ProviderConfigBuilder {
    ProviderConfigBuilder::new()
}

/// Build the Google provider configuration from the process environment.
///
/// Reads `GOOGLE_CLIENT_ID` and `GOOGLE_CLIENT_SECRET` once at startup and
/// fails with a configuration error when either is absent, instead of
/// deferring the failure to the first token endpoint call.
pub fn google_config_from_env() -> Result<ProviderConfig, AuthError> {
    let client_id = require_env("GOOGLE_CLIENT_ID")?;
    let client_secret = require_env("GOOGLE_CLIENT_SECRET")?;

    ProviderConfigBuilder::google()
        .client_id(client_id)
        .client_secret(client_secret)
        .build()
}

fn require_env(name: &str) -> Result<String, AuthError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            AuthError::Configuration(ConfigurationError::MissingEnvVar {
                name: name.to_string(),
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_builder_defaults() {
        let config = ProviderConfigBuilder::google()
            .client_id("test-client")
            .client_secret("test-secret")
            .build()
            .unwrap();

        assert_eq!(config.token_endpoint, GOOGLE_TOKEN_ENDPOINT);
        assert_eq!(config.access_type, "offline");
        assert_eq!(config.prompt, "consent");
        assert_eq!(config.sign_in_path, "/entrar");
        assert_eq!(
            config.credentials.auth_method,
            ClientAuthMethod::ClientSecretPost
        );
        assert!(config
            .scopes
            .contains(&"https://www.googleapis.com/auth/calendar".to_string()));
        assert!(config.scopes.contains(&"openid".to_string()));
    }

    #[test]
    fn test_builder_missing_client_id() {
        let result = ProviderConfigBuilder::google()
            .client_secret("test-secret")
            .build();

        assert!(matches!(
            result,
            Err(AuthError::Configuration(
                ConfigurationError::MissingField { .. }
            ))
        ));
    }

    #[test]
    fn test_builder_missing_client_secret() {
        let result = ProviderConfigBuilder::google().client_id("test-client").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_rejects_invalid_endpoint() {
        let result = signin_config()
            .client_id("test-client")
            .client_secret("test-secret")
            .authorization_endpoint("not a url")
            .token_endpoint("https://example.com/token")
            .build();

        assert!(matches!(
            result,
            Err(AuthError::Configuration(
                ConfigurationError::InvalidEndpoint { .. }
            ))
        ));
    }

    #[test]
    fn test_builder_custom_endpoints_and_path() {
        let config = signin_config()
            .client_id("test-client")
            .client_secret("test-secret")
            .authorization_endpoint("https://example.com/authorize")
            .token_endpoint("https://example.com/token")
            .sign_in_path("/login")
            .add_scope("email")
            .build()
            .unwrap();

        assert_eq!(config.token_endpoint, "https://example.com/token");
        assert_eq!(config.sign_in_path, "/login");
        assert_eq!(config.scopes, vec!["email"]);
    }
}
