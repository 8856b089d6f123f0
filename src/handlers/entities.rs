// src/handlers/entities.rs

// Rotas genéricas de CRUD: o mesmo conjunto de handlers serve as quatro entidades.

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Path, Query, State},
    http::{request::Parts, StatusCode},
    response::IntoResponse,
    routing::{get, patch, post, put},
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use utoipa::IntoParams;

use crate::{
    common::error::AppError,
    models::entity::Entity,
    services::{EntityManager, ManagerView, Mutation},
};

pub type SharedManager<E> = Arc<RwLock<EntityManager<E>>>;

pub fn shared<E: Entity>(manager: EntityManager<E>) -> SharedManager<E> {
    Arc::new(RwLock::new(manager))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Texto da busca; ausente mantém a busca atual
    pub search: Option<String>,
}

/// Chave da entidade vinda da URL; falha de conversão vira `AppError` (JSON).
pub struct KeyPath<K>(pub K);

impl<K, S> FromRequestParts<S> for KeyPath<K>
where
    K: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(key) = Path::<K>::from_request_parts(parts, state).await?;
        Ok(KeyPath(key))
    }
}

/// Resposta do botão de confirmação de um diálogo.
#[derive(Debug, Serialize)]
pub struct SubmitOutcome<E: Entity> {
    pub mutation: Option<Mutation<E>>,
    pub view: ManagerView<E>,
}

/// Monta `/`, `/{key}`, `/form` e `/dialog/...` para uma entidade.
pub fn entity_routes<E, S>(manager: SharedManager<E>) -> Router<S>
where
    E: Entity,
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list::<E>).post(create::<E>))
        .route("/{key}", put(update::<E>).delete(delete::<E>))
        .route("/form", patch(fill_form::<E>))
        .route("/dialog/create", post(open_create::<E>))
        .route("/dialog/edit/{key}", post(open_edit::<E>))
        .route("/dialog/delete/{key}", post(open_delete::<E>))
        .route("/dialog/submit", post(submit::<E>))
        .route("/dialog/cancel", post(cancel::<E>))
        .with_state(manager)
}

// ===== LISTAGEM E CRUD DIRETO =====

// GET /api/{e}?search=
async fn list<E: Entity>(
    State(manager): State<SharedManager<E>>,
    Query(query): Query<SearchQuery>,
) -> Json<ManagerView<E>> {
    let mut manager = manager.write().await;
    if let Some(search) = query.search {
        manager.set_search(search);
    }
    Json(manager.view())
}

// POST /api/{e}
async fn create<E: Entity>(
    State(manager): State<SharedManager<E>>,
    Json(draft): Json<E::Draft>,
) -> Result<impl IntoResponse, AppError> {
    let mut manager = manager.write().await;
    manager.open_create();
    manager.set_form(draft);

    match manager.submit_create() {
        Ok(mutation) => Ok((StatusCode::CREATED, Json(mutation))),
        Err(e) => {
            // Chamada REST não deixa diálogo pendurado
            manager.cancel();
            Err(e)
        }
    }
}

// PUT /api/{e}/{key}
async fn update<E: Entity>(
    State(manager): State<SharedManager<E>>,
    KeyPath(key): KeyPath<E::Key>,
    Json(draft): Json<E::Draft>,
) -> Result<Json<Mutation<E>>, AppError> {
    let mut manager = manager.write().await;
    manager.begin_edit(&key)?;
    manager.set_form(draft);

    manager
        .commit_update()
        .map(Json)
        .ok_or_else(|| AppError::NotFound { entity: E::LABEL, key: key.to_string() })
}

// DELETE /api/{e}/{key}
async fn delete<E: Entity>(
    State(manager): State<SharedManager<E>>,
    KeyPath(key): KeyPath<E::Key>,
) -> Result<Json<Mutation<E>>, AppError> {
    let mut manager = manager.write().await;
    manager.request_delete(&key)?;

    manager
        .confirm_delete()
        .map(Json)
        .ok_or_else(|| AppError::NotFound { entity: E::LABEL, key: key.to_string() })
}

// ===== FLUXO DE DIÁLOGOS =====

// PATCH /api/{e}/form
// Valores chegam como no input do formulário; números e booleanos viram texto antes da coerção.
async fn fill_form<E: Entity>(
    State(manager): State<SharedManager<E>>,
    Json(fields): Json<Map<String, Value>>,
) -> Result<Json<ManagerView<E>>, AppError> {
    let mut manager = manager.write().await;
    manager.set_fields(fields.iter().map(|(field, value)| (field.as_str(), raw_input(value))))?;
    Ok(Json(manager.view()))
}

fn raw_input(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

// POST /api/{e}/dialog/create
async fn open_create<E: Entity>(State(manager): State<SharedManager<E>>) -> Json<ManagerView<E>> {
    let mut manager = manager.write().await;
    manager.open_create();
    Json(manager.view())
}

// POST /api/{e}/dialog/edit/{key}
async fn open_edit<E: Entity>(
    State(manager): State<SharedManager<E>>,
    KeyPath(key): KeyPath<E::Key>,
) -> Result<Json<ManagerView<E>>, AppError> {
    let mut manager = manager.write().await;
    manager.begin_edit(&key)?;
    Ok(Json(manager.view()))
}

// POST /api/{e}/dialog/delete/{key}
async fn open_delete<E: Entity>(
    State(manager): State<SharedManager<E>>,
    KeyPath(key): KeyPath<E::Key>,
) -> Result<Json<ManagerView<E>>, AppError> {
    let mut manager = manager.write().await;
    manager.request_delete(&key)?;
    Ok(Json(manager.view()))
}

// POST /api/{e}/dialog/submit
async fn submit<E: Entity>(
    State(manager): State<SharedManager<E>>,
) -> Result<Json<SubmitOutcome<E>>, AppError> {
    let mut manager = manager.write().await;
    let mutation = manager.submit()?;
    Ok(Json(SubmitOutcome { mutation, view: manager.view() }))
}

// POST /api/{e}/dialog/cancel
async fn cancel<E: Entity>(State(manager): State<SharedManager<E>>) -> Json<ManagerView<E>> {
    let mut manager = manager.write().await;
    manager.cancel();
    Json(manager.view())
}
