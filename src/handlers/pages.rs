// src/handlers/pages.rs

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::page::{LoginForm, PageContent, PageView, RegisterForm, Route},
    services::navigation::{self, Navigation},
};

// GET de qualquer página (rotas conhecidas e fallback)
#[utoipa::path(
    get,
    path = "/{page}",
    tag = "Pages",
    params(
        ("page" = String, Path, description = "login, register, clients, products, subscriptions, licenses ou vazio para o dashboard")
    ),
    responses(
        (status = 200, description = "Página renderizada", body = PageView),
        (status = 307, description = "Redirecionamento conforme a sessão"),
        (status = 404, description = "Página inexistente", body = PageView)
    )
)]
pub async fn render_page(State(app_state): State<AppState>, uri: Uri) -> Result<Response, AppError> {
    let path = uri.path();

    let route = match navigation::resolve(path, app_state.session.is_authenticated()) {
        Navigation::Redirect(target) => {
            tracing::debug!("{} -> {}", path, target);
            return Ok(Redirect::temporary(target).into_response());
        }
        Navigation::Render(route) => route,
    };

    let view = PageView {
        route,
        title: route.title(),
        layout: route.is_protected().then(|| navigation::layout(route)),
        content: page_content(&app_state, route, path).await?,
    };

    let status = if route == Route::NotFound {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    Ok((status, Json(view)).into_response())
}

async fn page_content(app_state: &AppState, route: Route, path: &str) -> Result<PageContent, AppError> {
    let content = match route {
        Route::Login => PageContent::Login(LoginForm {
            submit_action: "/api/session/login",
            register_path: "/register",
        }),
        Route::Register => PageContent::Register(RegisterForm { login_path: "/login" }),
        Route::Dashboard => PageContent::Dashboard(app_state.dashboard_service.get_summary()),
        Route::Clients => {
            PageContent::Collection(serde_json::to_value(app_state.clients.read().await.view())?)
        }
        Route::Products => {
            PageContent::Collection(serde_json::to_value(app_state.products.read().await.view())?)
        }
        Route::Subscriptions => PageContent::Collection(serde_json::to_value(
            app_state.subscriptions.read().await.view(),
        )?),
        Route::Licenses => {
            PageContent::Collection(serde_json::to_value(app_state.licenses.read().await.view())?)
        }
        Route::NotFound => PageContent::NotFound { path: path.to_string() },
    };

    Ok(content)
}
