//! API error structs.

use derive_more::{Display, Error};

use serde::{Deserialize, Serialize};

/// An API error.
///
/// Serialized the same way as a failed [`ApiResponse`](crate::ApiResponse),
/// so clients can match on `success` alone.
#[derive(Clone, Debug, Display, Deserialize, Error, Serialize)]
#[display("{message}")]
pub struct ApiError {
    /// Always `false`.
    pub success: bool,
    pub message: String,
}

impl ApiError {
    /// Creates a new error with a message.
    pub fn new(message: impl Into<String>) -> ApiError {
        ApiError {
            success: false,
            message: message.into(),
        }
    }
}
