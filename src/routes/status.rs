//! Liveness routes.

use playmate_model::response::ServerStatus;

use crate::app::AppJson;

/// Landing route.
pub async fn index() -> AppJson<ServerStatus> {
    AppJson(ServerStatus {
        status: "OK".into(),
        message: "PlayMate API Server is running".into(),
    })
}

/// Health check.
pub async fn health() -> AppJson<ServerStatus> {
    AppJson(ServerStatus {
        status: "OK".into(),
        message: "Server is healthy".into(),
    })
}
