//! HTTP client facade for the payroll API: request sending, response
//! classification, and the error taxonomy surfaced to the user.

pub mod client;
pub mod error;
pub mod response;

pub use client::HttpClient;
pub use error::{ApiError, ApiResult};
pub use response::ApiResponse;
