// src/common/error.rs

use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Tipo de erro único da aplicação, convertido em resposta HTTP no final.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },

    #[error("{entity} '{key}' already exists")]
    DuplicateKey { entity: &'static str, key: String },

    #[error("{entity} requires a non-empty key")]
    MissingKey { entity: &'static str },

    #[error("{entity} has no field named '{field}'")]
    UnknownField { entity: &'static str, field: String },

    #[error("Authentication required")]
    Unauthenticated,

    // Chave na URL que não converte para o tipo da entidade
    #[error("Invalid key in path: {0}")]
    InvalidPath(#[from] PathRejection),

    // Falha ao ler ou gravar o armazenamento local da sessão
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Internal server error")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::DuplicateKey { .. } => StatusCode::CONFLICT,
            AppError::MissingKey { .. }
            | AppError::UnknownField { .. }
            | AppError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::Storage(_)
            | AppError::Serialization(_)
            | AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Erros internos não vazam detalhes para o cliente, só para o log.
        let error_message = if status.is_server_error() {
            tracing::error!("Internal server error: {}", self);
            "An unexpected error occurred.".to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
