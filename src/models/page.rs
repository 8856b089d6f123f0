// src/models/page.rs

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::models::dashboard::DashboardSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Clients,
    Products,
    Subscriptions,
    Licenses,
    NotFound,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SidebarItem {
    pub title: &'static str,
    pub url: &'static str,
    pub active: bool,
}

// Moldura das páginas autenticadas: barra lateral + cabeçalho
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[schema(example = "CPS Manager")]
    pub app_name: &'static str,
    #[schema(example = "Client Portal System")]
    pub tagline: &'static str,
    pub sidebar: Vec<SidebarItem>,
    #[schema(example = "/api/session/logout")]
    pub logout_action: &'static str,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    pub submit_action: &'static str,
    pub register_path: &'static str,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub login_path: &'static str,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum PageContent {
    Login(LoginForm),
    Register(RegisterForm),
    Dashboard(DashboardSummary),
    // Estado do gerenciador da entidade (lista filtrada, diálogo, formulário)
    Collection(Value),
    NotFound { path: String },
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub route: Route,
    pub title: &'static str,
    pub layout: Option<Layout>,
    pub content: PageContent,
}
