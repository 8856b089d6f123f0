// src/middleware/auth.rs

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{common::error::AppError, services::SessionService};

// Barra as rotas de dados enquanto a sessão local não estiver autenticada
pub async fn session_guard(
    State(session): State<SessionService>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !session.is_authenticated() {
        tracing::debug!("Acesso negado a {}: sessão não autenticada", request.uri().path());
        return Err(AppError::Unauthenticated);
    }

    Ok(next.run(request).await)
}
