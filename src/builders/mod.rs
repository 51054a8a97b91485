//! Configuration Builders
//!
//! Fluent builders for provider configuration.

pub mod config;

pub use config::{google_config_from_env, signin_config, ProviderConfigBuilder};
