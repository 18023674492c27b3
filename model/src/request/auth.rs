//! Authentication request bodies.
//!
//! Every field is optional. A body that is missing or doesn't parse is
//! treated as if all fields were absent, so these all derive [`Default`].
//! A field holding anything but a string is read as absent without
//! affecting the other fields.

use serde::{Deserialize, Deserializer, Serialize, de::IgnoredAny};

/// Request body for logging in.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LoginRequest {
    /// Either a username or an email address.
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: Option<String>,
    /// Accepted but never checked.
    #[serde(default, deserialize_with = "lenient_string")]
    pub password: Option<String>,
}

/// Request body for registering a new user.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub password: Option<String>,
    /// The display name. Defaults to the username.
    #[serde(default, deserialize_with = "lenient_string")]
    pub nickname: Option<String>,
    /// Defaults to `<username>@example.com`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
}

impl RegisterRequest {
    /// The nickname, falling back to `username`.
    pub fn nickname_or(&self, username: &str) -> String {
        self.nickname.clone().unwrap_or_else(|| username.to_owned())
    }

    /// The email, falling back to `<username>@example.com`.
    pub fn email_or(&self, username: &str) -> String {
        self.email
            .clone()
            .unwrap_or_else(|| format!("{username}@example.com"))
    }
}

/// Reads a string, treating any other JSON value as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Text(String),
        Other(#[allow(dead_code)] IgnoredAny),
    }

    match Lenient::deserialize(deserializer)? {
        Lenient::Text(text) => Ok(Some(text)),
        Lenient::Other(_) => Ok(None),
    }
}
