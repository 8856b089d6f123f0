// src/lib.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use crate::config::AppState;
use crate::handlers::entities::entity_routes;
use crate::middleware::auth::session_guard;

/// Monta o router completo da aplicação.
pub fn app(app_state: AppState) -> Router {
    // Define as rotas de sessão (públicas)
    let session_routes = Router::new()
        .route("/", get(handlers::auth::get_session))
        .route("/login", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout));

    let dashboard_routes = Router::new()
        .route("/summary", get(handlers::dashboard::get_summary))
        .layer(axum_middleware::from_fn_with_state(
            app_state.session.clone(),
            session_guard,
        ));

    // Uma página de CRUD por entidade, todas atrás da sessão
    let guard = || axum_middleware::from_fn_with_state(app_state.session.clone(), session_guard);
    let clients = entity_routes(app_state.clients.clone()).layer(guard());
    let products = entity_routes(app_state.products.clone()).layer(guard());
    let subscriptions = entity_routes(app_state.subscriptions.clone()).layer(guard());
    let licenses = entity_routes(app_state.licenses.clone()).layer(guard());

    // Páginas: redirecionamentos e moldura decididos em `render_page`
    let page_routes = Router::new()
        .route("/", get(handlers::pages::render_page))
        .route("/login", get(handlers::pages::render_page))
        .route("/register", get(handlers::pages::render_page))
        .route("/clients", get(handlers::pages::render_page))
        .route("/products", get(handlers::pages::render_page))
        .route("/subscriptions", get(handlers::pages::render_page))
        .route("/licenses", get(handlers::pages::render_page));

    // Combina tudo no router principal
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/session", session_routes)
        .nest("/api/dashboard", dashboard_routes)
        .nest("/api/clients", clients)
        .nest("/api/products", products)
        .nest("/api/subscriptions", subscriptions)
        .nest("/api/licenses", licenses)
        .merge(page_routes)
        .fallback(handlers::pages::render_page)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
