//! Mock authentication.
//!
//! There are no passwords or sessions here. Login resolves a username to a
//! seeded user and hands out a fixed token; registration validates the body
//! and echoes back a fresh user that is never stored.

use playmate_model::{
    User,
    request::auth::{LoginRequest, RegisterRequest},
    response::LoginData,
};

use crate::{
    app::error::AppErrorKind,
    seed::{DEFAULT_AVATAR, SEEDED_USER_EMAIL, Seed},
};

/// The token handed out on every successful login.
pub const MOCK_TOKEN: &str = "mock-jwt-token-12345";

/// Usernames that log in as the seeded user and can't be registered.
pub const RESERVED_USERNAMES: [&str; 2] = ["testuser", "admin"];

/// Resolves a login name to the key of a seeded user.
///
/// Reserved usernames map to the seeded user. Anything containing an `@` is
/// used as the key directly. Everything else has no key.
pub fn resolve_key(username: &str) -> Option<&str> {
    if RESERVED_USERNAMES.contains(&username) {
        Some(SEEDED_USER_EMAIL)
    } else if username.contains('@') {
        Some(username)
    } else {
        None
    }
}

/// Logs a user in.
///
/// The password is never looked at. On success the returned user is a copy
/// of the seeded record with `username` replaced by the name that was sent.
pub fn login(seed: &Seed, request: &LoginRequest) -> Result<LoginData, AppErrorKind> {
    let username = request
        .username
        .as_deref()
        .ok_or(AppErrorKind::InvalidCredentials)?;

    let user = resolve_key(username)
        .and_then(|key| seed.user(key))
        .ok_or(AppErrorKind::InvalidCredentials)?;

    Ok(LoginData {
        token: MOCK_TOKEN.into(),
        user: User {
            username: username.to_owned(),
            ..user.clone()
        },
    })
}

/// Registers a user.
///
/// Every successful registration gets the same id, one past where the seed
/// table would put a second user.
pub fn register(seed: &Seed, request: &RegisterRequest) -> Result<User, AppErrorKind> {
    let (username, _password) = match (request.username.as_deref(), request.password.as_deref())
    {
        (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
            (username, password)
        }
        _ => return Err(AppErrorKind::MissingCredentials),
    };

    if RESERVED_USERNAMES.contains(&username) {
        return Err(AppErrorKind::UsernameTaken);
    }

    Ok(User {
        id: seed.user_count() as i64 + 2,
        username: username.to_owned(),
        email: request.email_or(username),
        nickname: request.nickname_or(username),
        avatar: DEFAULT_AVATAR.into(),
        balance: 0.0,
        level: 1,
        experience: 0,
    })
}
