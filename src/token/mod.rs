//! Token Management
//!
//! Session token lifecycle: pass-through, mint-from-grant, and refresh.

pub mod manager;

pub use manager::TokenLifecycleManager;
