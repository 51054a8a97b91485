//! Google Sign-In Integration Module
//!
//! Session token lifecycle management for a Google OAuth2 authorization-code
//! sign-in wired into a session framework.
//!
//! # Features
//!
//! - Token minting from a completed authorization grant
//! - Validity pass-through without network traffic
//! - Token refresh against Google's token endpoint (RFC 6749 Section 6)
//! - Data-level failure marker (`RefreshTokenError`) instead of thrown
//!   refresh errors, so session callbacks always receive a token
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use google_signin_integration::{
//!     google_config_from_env, ReqwestHttpTransport, SystemClock, TokenLifecycleManager,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads GOOGLE_CLIENT_ID / GOOGLE_CLIENT_SECRET, failing at startup
//!     // when either is missing.
//!     let config = google_config_from_env()?;
//!
//!     let manager = TokenLifecycleManager::new(
//!         config,
//!         Arc::new(ReqwestHttpTransport::new()),
//!         Arc::new(SystemClock),
//!     );
//!
//!     // Invoked by the session framework on every session read. `token`
//!     // is the deserialized session token (absent on first sign-in),
//!     // `grant` is present only right after the authorization-code
//!     // exchange completed.
//!     let token = manager.on_session_access(token, grant).await?;
//!
//!     if !token.is_usable() {
//!         // RefreshTokenError: the application must prompt re-authentication.
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `types`: session token, grant, and configuration types
//! - `error`: error hierarchy with provider error-body mapping
//! - `core`: injectable infrastructure (HTTP transport, wall clock)
//! - `builders`: fluent configuration builder and environment loading
//! - `token`: the lifecycle manager itself

pub mod builders;
pub mod core;
pub mod error;
pub mod token;
pub mod types;

// Re-export builders
pub use builders::{google_config_from_env, signin_config, ProviderConfigBuilder};

// Re-export errors
pub use error::{
    error_from_response, map_provider_error, parse_error_response, AuthError, AuthResult,
    ConfigurationError, NetworkError, ProtocolError, ProviderError, ProviderErrorResponse,
    TokenError,
};

// Re-export types
pub use types::{
    // Config
    ClientAuthMethod, ClientCredentials, ProviderConfig,
    // Token
    Grant, RefreshFailure, SessionToken, TokenResponse,
};

// Re-export core components
pub use core::{
    // Clock
    Clock, FixedClock, SystemClock,
    // Transport
    HttpRequest, HttpResponse, HttpTransport, MockHttpTransport, ReqwestHttpTransport,
};

// Re-export token management
pub use token::TokenLifecycleManager;
