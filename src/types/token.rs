//! Token Types
//!
//! Session token, authorization grant, and refresh response definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Marker recorded on a session token when a refresh attempt failed.
///
/// A token carrying this marker must not be used to authorize downstream
/// requests; the application layer is expected to prompt re-authentication.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefreshFailure {
    RefreshTokenError,
}

/// The session token managed by the lifecycle manager.
///
/// The surrounding session framework serializes this into its signed
/// container on every request; all fields round-trip through serde.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionToken {
    /// Opaque bearer credential.
    pub access_token: String,
    /// Absolute expiry, integer seconds since epoch.
    pub expires_at: i64,
    /// Long-lived credential for minting new access tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Set when the last refresh attempt failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RefreshFailure>,
}

impl SessionToken {
    /// Seed a token from a freshly issued authorization grant.
    ///
    /// Missing grant fields are defaulted (empty access token, zero expiry),
    /// which yields an already-expired token rather than a hard failure.
    /// Each defaulted field is logged so malformed provider responses stay
    /// visible in operation.
    pub fn from_grant(grant: &Grant) -> Self {
        if grant.access_token.is_none() {
            tracing::warn!("grant carried no access_token, defaulting to empty");
        }
        if grant.expires_at.is_none() {
            tracing::warn!("grant carried no expires_at, defaulting to epoch");
        }

        Self {
            access_token: grant.access_token.clone().unwrap_or_default(),
            expires_at: grant.expires_at.unwrap_or(0),
            refresh_token: grant.refresh_token.clone(),
            error: None,
        }
    }

    /// Check validity against a wall-clock instant in milliseconds.
    pub fn is_valid_at(&self, now_ms: i64) -> bool {
        self.expires_at * 1000 > now_ms
    }

    /// Check if the token may authorize downstream requests.
    pub fn is_usable(&self) -> bool {
        self.error.is_none()
    }

    /// Check if a refresh credential is present.
    pub fn has_refresh_token(&self) -> bool {
        self.refresh_token.is_some()
    }
}

/// Credential bundle issued by the identity provider after the framework
/// completes the authorization-code exchange.
///
/// Fields are optional because provider responses can be malformed; the
/// lifecycle manager defaults them defensively on sign-in.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Grant {
    #[serde(default)]
    pub access_token: Option<String>,
    /// Grant lifetime as an absolute instant, seconds since epoch.
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Token endpoint response for a refresh_token grant.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    /// New access token.
    pub access_token: String,
    /// Seconds until the new access token expires.
    pub expires_in: u64,
    /// Rotated refresh token, when the provider issues one.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Additional fields.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}
