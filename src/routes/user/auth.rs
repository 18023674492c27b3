//! User authentication routes.

use axum::extract::State;

use playmate_model::{
    ApiResponse, User,
    request::auth::{LoginRequest, RegisterRequest},
    response::LoginData,
};

use tracing::instrument;

use crate::{
    app::{AppError, AppJson, AppState, Payload},
    auth,
};

/// Logs a user in with a username or email.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    Payload(request): Payload<LoginRequest>,
) -> Result<AppJson<ApiResponse<LoginData>>, AppError> {
    let data = auth::login(&state.seed, &request)?;

    tracing::debug!(username = %data.user.username, "login accepted");

    Ok(AppJson(ApiResponse::new(data).with_message("登录成功")))
}

/// Registers a new user.
///
/// The user is echoed back but never stored.
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    Payload(request): Payload<RegisterRequest>,
) -> Result<AppJson<ApiResponse<User>>, AppError> {
    let user = auth::register(&state.seed, &request)?;

    tracing::debug!(username = %user.username, email = %user.email, "registration accepted");

    Ok(AppJson(ApiResponse::new(user).with_message("注册成功")))
}
