// src/docs.rs

use utoipa::{
    openapi::{
        path::{OperationBuilder, ParameterBuilder, ParameterIn},
        request_body::RequestBodyBuilder,
        Content, HttpMethod, ObjectBuilder, Ref, Required, Response, Type,
    },
    OpenApi,
};

use crate::handlers;
use crate::models;
use crate::services;

// As rotas de CRUD são genéricas (uma por entidade): entram via `EntityPaths`.
#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Session ---
        handlers::auth::get_session,
        handlers::auth::login,
        handlers::auth::logout,

        // --- Dashboard ---
        handlers::dashboard::get_summary,

        // --- Pages ---
        handlers::pages::render_page,
    ),
    components(
        schemas(
            // --- SESSION ---
            models::session::SessionStatus,

            // --- DASHBOARD ---
            models::dashboard::Trend,
            models::dashboard::StatCard,
            models::dashboard::ActivityStatus,
            models::dashboard::Tone,
            models::dashboard::RecentActivity,
            models::dashboard::DashboardSummary,

            // --- PAGES ---
            models::page::Route,
            models::page::SidebarItem,
            models::page::Layout,
            models::page::LoginForm,
            models::page::RegisterForm,
            models::page::PageContent,
            models::page::PageView,

            // --- CRUD ---
            models::client::Client,
            models::client::ClientDraft,
            models::product::Product,
            models::product::ProductDraft,
            models::subscription::Subscription,
            models::subscription::SubscriptionDraft,
            models::license::License,
            models::license::LicenseDraft,
            models::notice::NoticeVariant,
            models::notice::Notice,
            models::notice::DeletePrompt,
            services::entity_manager::Dialog,
        )
    ),
    tags(
        (name = "Session", description = "Sessão local (login sem credenciais)"),
        (name = "Dashboard", description = "Indicadores estáticos do painel"),
        (name = "Pages", description = "Páginas do painel com moldura e redirecionamentos"),
        (name = "Clients", description = "Clientes"),
        (name = "Products", description = "Produtos"),
        (name = "Subscriptions", description = "Assinaturas (chave digitada pelo usuário)"),
        (name = "Licenses", description = "Licenças de clientes")
    ),
    modifiers(&EntityPaths)
)]
pub struct ApiDoc;

// (segmento, tag, tipo da chave, schema do rascunho)
const ENTITIES: [(&str, &str, Type, &str); 4] = [
    ("clients", "Clients", Type::Integer, "ClientDraft"),
    ("products", "Products", Type::Integer, "ProductDraft"),
    ("subscriptions", "Subscriptions", Type::String, "SubscriptionDraft"),
    ("licenses", "Licenses", Type::Integer, "LicenseDraft"),
];

/// Registra as rotas de `handlers::entities::entity_routes` para cada entidade.
struct EntityPaths;

impl utoipa::Modify for EntityPaths {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        for (segment, tag, key_type, draft) in ENTITIES {
            let base = format!("/api/{segment}");
            let route = |suffix: &str| format!("{base}{suffix}");
            let operation = |id: &str, summary: &str| {
                OperationBuilder::new()
                    .tag(tag)
                    .operation_id(Some(format!("{id}_{segment}")))
                    .summary(Some(summary))
                    .response("200", Response::new("Estado atual da página"))
            };
            let key = ParameterBuilder::new()
                .name("key")
                .parameter_in(ParameterIn::Path)
                .required(Required::True)
                .schema(Some(ObjectBuilder::new().schema_type(key_type)))
                .build();
            let body = RequestBodyBuilder::new()
                .content("application/json", Content::new(Some(Ref::from_schema_name(draft))))
                .build();

            let paths = &mut openapi.paths;
            paths.add_path_operation(
                &base,
                vec![HttpMethod::Get],
                operation("list", "Lista com busca opcional (?search=)").parameter(
                    ParameterBuilder::new()
                        .name("search")
                        .parameter_in(ParameterIn::Query)
                        .required(Required::False)
                        .schema(Some(ObjectBuilder::new().schema_type(Type::String))),
                ),
            );
            paths.add_path_operation(
                &base,
                vec![HttpMethod::Post],
                operation("create", "Cria um registro")
                    .request_body(Some(body.clone()))
                    .response("201", Response::new("Registro criado")),
            );
            paths.add_path_operation(
                route("/{key}"),
                vec![HttpMethod::Put],
                operation("update", "Substitui os campos de um registro")
                    .parameter(key.clone())
                    .request_body(Some(body.clone())),
            );
            paths.add_path_operation(
                route("/{key}"),
                vec![HttpMethod::Delete],
                operation("delete", "Remove um registro").parameter(key.clone()),
            );
            paths.add_path_operation(
                route("/form"),
                vec![HttpMethod::Patch],
                operation("fill_form", "Preenche campos do formulário aberto")
                    .request_body(Some(body))
                    .response("400", Response::new("Campo desconhecido; o formulário não muda")),
            );
            paths.add_path_operation(
                route("/dialog/create"),
                vec![HttpMethod::Post],
                operation("open_create", "Abre o diálogo de criação"),
            );
            paths.add_path_operation(
                route("/dialog/edit/{key}"),
                vec![HttpMethod::Post],
                operation("open_edit", "Abre o diálogo de edição").parameter(key.clone()),
            );
            paths.add_path_operation(
                route("/dialog/delete/{key}"),
                vec![HttpMethod::Post],
                operation("open_delete", "Abre a confirmação de exclusão").parameter(key),
            );
            paths.add_path_operation(
                route("/dialog/submit"),
                vec![HttpMethod::Post],
                operation("submit", "Confirma o diálogo aberto"),
            );
            paths.add_path_operation(
                route("/dialog/cancel"),
                vec![HttpMethod::Post],
                operation("cancel", "Fecha qualquer diálogo"),
            );
        }
    }
}
