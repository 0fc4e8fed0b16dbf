/*
[INPUT]:  HTTP client configuration and backend endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - backend communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod mail;
pub mod schedule;
pub mod secrets;
pub mod tasks;

pub use error::{DashboardError, Result};

pub use client::{ClientConfig, Credentials, DEFAULT_BASE_URL, DashboardClient, classify_status};
