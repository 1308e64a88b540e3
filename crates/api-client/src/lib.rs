//! HTTP client for the employee management API.
//!
//! Wraps the handful of REST endpoints the app talks to and maps every
//! failure into [`ClientError`], which knows how to render itself as the
//! message a view should show.

pub mod error;
pub mod http;

pub use error::{ClientError, ClientResult, CONNECTION_ERROR};
pub use http::ApiClient;
