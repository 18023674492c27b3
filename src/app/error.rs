//! Application error that may occur during the processing of a request.
//!
//! See [`AppError`].

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use axum::{
    extract::rejection::PathRejection,
    response::{IntoResponse, Response},
};

use derive_more::{Display, From};

use http::StatusCode;

use playmate_model::ApiError;

use crate::app::AppJson;

/// Application error that may occur during the processing of a request.
///
/// Every variant is a user error; the handlers have nothing that can fail
/// internally.
#[derive(Debug)]
pub struct AppError {
    kind: AppErrorKind,
}

impl AppError {
    /// The inner [`AppErrorKind`] of the error.
    pub fn kind(&self) -> &AppErrorKind {
        &self.kind
    }

    /// Unwraps the inner error.
    pub fn into_kind(self) -> AppErrorKind {
        self.kind
    }

    /// The status code the error is sent with.
    pub fn status(&self) -> StatusCode {
        match &self.kind {
            AppErrorKind::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppErrorKind::MissingCredentials
            | AppErrorKind::UsernameTaken
            | AppErrorKind::Path(_) => StatusCode::BAD_REQUEST,
            AppErrorKind::PostNotFound { .. }
            | AppErrorKind::PlayerNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.kind, f)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            AppErrorKind::Path(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<T> for AppError
where
    T: Into<AppErrorKind>,
{
    fn from(value: T) -> Self {
        AppError { kind: value.into() }
    }
}

/// The specific kind of error that happened.
///
/// The display text of each variant is sent to the client verbatim. Clients
/// match on these strings, so they must not change.
#[derive(Debug, Display, From)]
#[non_exhaustive]
pub enum AppErrorKind {
    /// Login identity could not be resolved to a known user.
    #[display("用户名或密码错误")]
    InvalidCredentials,
    /// Registration is missing a username or password.
    #[display("用户名和密码不能为空")]
    MissingCredentials,
    /// Registration used a reserved username.
    #[display("用户名已存在")]
    UsernameTaken,
    /// No post with this id.
    #[display("动态不存在")]
    PostNotFound { id: u64 },
    /// No player with this id.
    #[display("陪玩达人信息不存在")]
    PlayerNotFound { id: u64 },
    /// A path parameter was malformed.
    #[display("{_0}")]
    #[from]
    Path(PathRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        tracing::debug!(%status, error = ?self.kind, "rejecting request");

        (status, AppJson(ApiError::new(self.to_string()))).into_response()
    }
}
