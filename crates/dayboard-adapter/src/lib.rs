/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public dashboard backend adapter surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Credentials,
    DashboardClient,
    DashboardError,
    Result,
};

// Re-export all types
pub use types::*;
