//! Request and response types.

use serde::{Deserialize, Serialize};

/// Path segments of an address lookup.
#[derive(Debug, Deserialize)]
pub struct AddressPath {
    /// Two-letter state code
    pub uf: String,
    /// City name
    pub cidade: String,
    /// Street name
    pub logradouro: String,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status
    pub status: String,
    /// Server time, RFC 3339
    pub timestamp: String,
}
