//! Integration Types
//!
//! Core type definitions for the sign-in session token lifecycle.

pub mod config;
pub mod token;

pub use config::*;
pub use token::*;
