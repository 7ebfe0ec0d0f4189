//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

/// Query for `/check_buses`.
#[derive(Debug, Deserialize)]
pub struct CheckBusesRequest {
    /// NaPTAN code of the stop
    pub naptan: Option<String>,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
