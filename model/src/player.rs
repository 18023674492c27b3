//! Player model.

use serde::{Deserialize, Serialize};

/// A player offering to be hired as a gaming companion.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Player {
    pub id: u64,
    /// The display name of the player.
    pub nickname: String,
    pub level: i32,
    /// Price per session.
    pub price: f64,
    /// The games the player offers, in the order they list them.
    pub games: Vec<String>,
    /// A URL to the avatar of the player.
    pub avatar: String,
    pub description: String,
}
