//! Response envelopes.

use serde::{Deserialize, Serialize};

use crate::{Player, Post, User};

/// A successful API response.
///
/// Failures are sent as [`ApiError`](crate::ApiError) instead.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    /// Always `true`.
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wraps `data` in a successful response.
    pub fn new(data: T) -> ApiResponse<T> {
        ApiResponse {
            success: true,
            message: None,
            data,
        }
    }

    /// Attaches a human-readable message.
    pub fn with_message(self, message: impl Into<String>) -> ApiResponse<T> {
        ApiResponse {
            message: Some(message.into()),
            ..self
        }
    }
}

/// Liveness information returned by `/` and `/api/health`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServerStatus {
    pub status: String,
    pub message: String,
}

/// Returned on a successful login.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LoginData {
    /// The session token.
    ///
    /// This is a fixed mock value; nothing validates it.
    pub token: String,
    pub user: User,
}

/// A page of posts.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub total: usize,
}

/// A page of players.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PlayerPage {
    pub players: Vec<Player>,
    pub total: usize,
}
