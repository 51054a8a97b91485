//! Core Infrastructure
//!
//! HTTP transport and time source, both injectable for testing.

pub mod clock;
pub mod transport;

pub use clock::{Clock, FixedClock, SystemClock};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, MockHttpTransport, ReqwestHttpTransport};
