//! Player listing routes.

use axum::extract::State;

use playmate_model::{ApiResponse, Player, response::PlayerPage};

use tracing::instrument;

use crate::app::{AppError, AppJson, AppPath, AppState, error::AppErrorKind};

/// Lists every player for hire.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> AppJson<ApiResponse<PlayerPage>> {
    let players = state.seed.players().to_vec();

    AppJson(ApiResponse::new(PlayerPage {
        total: players.len(),
        players,
    }))
}

/// Shows a single player.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    AppPath(player_id): AppPath<u64>,
) -> Result<AppJson<ApiResponse<Player>>, AppError> {
    let player = state
        .seed
        .player(player_id)
        .cloned()
        .ok_or(AppErrorKind::PlayerNotFound { id: player_id })?;

    Ok(AppJson(ApiResponse::new(player)))
}
