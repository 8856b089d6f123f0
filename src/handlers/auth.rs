// src/handlers/auth.rs

use axum::{extract::State, Json};

use crate::{common::error::AppError, config::AppState, models::session::SessionStatus};

// GET /api/session
#[utoipa::path(
    get,
    path = "/api/session",
    tag = "Session",
    responses(
        (status = 200, description = "Estado atual da sessão local", body = SessionStatus)
    )
)]
pub async fn get_session(State(app_state): State<AppState>) -> Json<SessionStatus> {
    Json(SessionStatus { is_authenticated: app_state.session.is_authenticated() })
}

// POST /api/session/login
// Não há verificação de credenciais: o botão de login apenas liga o flag.
#[utoipa::path(
    post,
    path = "/api/session/login",
    tag = "Session",
    responses(
        (status = 200, description = "Sessão autenticada", body = SessionStatus),
        (status = 500, description = "Falha ao gravar o armazenamento local")
    )
)]
pub async fn login(State(app_state): State<AppState>) -> Result<Json<SessionStatus>, AppError> {
    app_state.session.login().await?;
    Ok(Json(SessionStatus { is_authenticated: true }))
}

// POST /api/session/logout
#[utoipa::path(
    post,
    path = "/api/session/logout",
    tag = "Session",
    responses(
        (status = 200, description = "Sessão encerrada", body = SessionStatus),
        (status = 500, description = "Falha ao gravar o armazenamento local")
    )
)]
pub async fn logout(State(app_state): State<AppState>) -> Result<Json<SessionStatus>, AppError> {
    app_state.session.logout().await?;
    Ok(Json(SessionStatus { is_authenticated: false }))
}
