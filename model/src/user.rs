//! User representations.

use serde::{Deserialize, Serialize};

/// A single user, as the frontend sees it.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct User {
    pub id: i64,
    /// The name the user logged in with.
    pub username: String,
    pub email: String,
    /// The display name of the user.
    pub nickname: String,
    /// A URL to the avatar of the user.
    pub avatar: String,
    /// Wallet balance.
    pub balance: f64,
    pub level: i32,
    pub experience: i64,
}
