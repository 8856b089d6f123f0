// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{config::AppState, models::dashboard::DashboardSummary};

// GET /api/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Cartões de estatística e atividade recente", body = DashboardSummary),
        (status = 401, description = "Sessão não autenticada")
    )
)]
pub async fn get_summary(State(app_state): State<AppState>) -> impl IntoResponse {
    let summary = app_state.dashboard_service.get_summary();
    (StatusCode::OK, Json(summary))
}
