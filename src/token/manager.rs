//! Token Lifecycle Manager
//!
//! Decides, on each session read, whether the session token passes through
//! unchanged, is minted fresh from an authorization grant, or is refreshed
//! against the provider's token endpoint.

use base64::Engine;
use secrecy::ExposeSecret;
use std::collections::HashMap;
use std::sync::Arc;

use crate::core::{Clock, HttpRequest, HttpTransport};
use crate::error::{error_from_response, AuthError, ProtocolError, TokenError};
use crate::types::{ClientAuthMethod, Grant, ProviderConfig, RefreshFailure, SessionToken, TokenResponse};

/// Token lifecycle manager.
///
/// Stateless between calls: the token is passed in and returned per
/// invocation, so concurrent calls for different sessions are independent.
/// Two requests racing past expiry for the same session may each issue a
/// refresh; the design does not de-duplicate them.
pub struct TokenLifecycleManager<T: HttpTransport, C: Clock> {
    config: ProviderConfig,
    transport: Arc<T>,
    clock: Arc<C>,
}

impl<T: HttpTransport, C: Clock> TokenLifecycleManager<T, C> {
    /// Create a new lifecycle manager.
    pub fn new(config: ProviderConfig, transport: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            config,
            transport,
            clock,
        }
    }

    /// Produce the token state to use for the current request.
    ///
    /// First match wins:
    /// 1. A grant is present: this is the initial sign-in, mint a new token
    ///    from the grant.
    /// 2. The current token is still valid: return it unchanged, no network
    ///    call.
    /// 3. The token is expired: refresh it. A missing refresh token is a
    ///    configuration error and surfaces as `Err`; a failed refresh
    ///    attempt never does — the token comes back `Ok` with the
    ///    `RefreshTokenError` marker set, and callers must check
    ///    [`SessionToken::is_usable`] before authorizing anything with it.
    pub async fn on_session_access(
        &self,
        token: Option<SessionToken>,
        grant: Option<Grant>,
    ) -> Result<SessionToken, AuthError> {
        if let Some(grant) = grant {
            tracing::debug!("minting session token from authorization grant");
            return Ok(SessionToken::from_grant(&grant));
        }

        let token = token.ok_or(AuthError::Token(TokenError::NotFound))?;

        if token.is_valid_at(self.clock.now_ms()) {
            tracing::debug!(expires_at = token.expires_at, "session token still valid");
            return Ok(token);
        }

        if !token.has_refresh_token() {
            return Err(AuthError::Token(TokenError::MissingRefreshToken));
        }

        let mut token = token;
        match self.refresh(&mut token).await {
            Ok(()) => {
                tracing::debug!(expires_at = token.expires_at, "session token refreshed");
                Ok(token)
            }
            Err(error) => {
                tracing::error!(
                    error = %error,
                    code = error.error_code(),
                    "error refreshing access_token"
                );
                token.error = Some(RefreshFailure::RefreshTokenError);
                Ok(token)
            }
        }
    }

    /// Redeem the token's refresh credential for a new access token,
    /// mutating the token in place.
    async fn refresh(&self, token: &mut SessionToken) -> Result<(), AuthError> {
        let refresh_token = token
            .refresh_token
            .clone()
            .ok_or(AuthError::Token(TokenError::MissingRefreshToken))?;

        let request = HttpRequest {
            url: self.config.token_endpoint.clone(),
            headers: self.build_refresh_headers(),
            body: self.build_refresh_body(&refresh_token),
            timeout: Some(self.config.timeout),
        };

        let response = self.transport.post(request).await?;

        if !response.is_success() {
            return Err(error_from_response(response.status, &response.body));
        }

        let parsed: TokenResponse = serde_json::from_str(&response.body).map_err(|e| {
            AuthError::Protocol(ProtocolError::InvalidJson {
                message: e.to_string(),
            })
        })?;

        token.access_token = parsed.access_token;
        token.expires_at = self.clock.now_secs() + parsed.expires_in as i64;
        // The provider may rotate the refresh token; keep the old one when
        // the response omits it.
        if let Some(rotated) = parsed.refresh_token {
            token.refresh_token = Some(rotated);
        }

        Ok(())
    }

    fn build_refresh_body(&self, refresh_token: &str) -> String {
        let mut form = url::form_urlencoded::Serializer::new(String::new());

        if self.config.credentials.auth_method == ClientAuthMethod::ClientSecretPost {
            form.append_pair("client_id", &self.config.credentials.client_id);
            form.append_pair(
                "client_secret",
                self.config.credentials.client_secret.expose_secret(),
            );
        }

        form.append_pair("grant_type", "refresh_token");
        form.append_pair("refresh_token", refresh_token);
        form.finish()
    }

    fn build_refresh_headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        );
        headers.insert("accept".to_string(), "application/json".to_string());

        if self.config.credentials.auth_method == ClientAuthMethod::ClientSecretBasic {
            let credentials = format!(
                "{}:{}",
                self.config.credentials.client_id,
                self.config.credentials.client_secret.expose_secret()
            );
            let encoded = base64::engine::general_purpose::STANDARD.encode(credentials);
            headers.insert("authorization".to_string(), format!("Basic {}", encoded));
        }

        headers
    }
}
