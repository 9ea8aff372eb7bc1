//! Erro único das rotas HTTP.
//!
//! Toda falha vira `{"error": <título>, "detail": <mensagem>}`:
//!
//! | Origem                                   | Status |
//! |------------------------------------------|--------|
//! | corpo inválido, modelo desconhecido      | 400    |
//! | rota inexistente                         | 404    |
//! | falha ao ler modelo, anotação, pânico    | 500    |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use displacy_core::{LoadError, ProcessError};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Processing(#[from] ProcessError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Load(e) if e.is_unknown_model() => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Load(_) | ApiError::Processing(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn title(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "Requisição inválida",
            ApiError::Load(e) if e.is_unknown_model() => "Modelo desconhecido",
            ApiError::Load(_) => "Falha ao carregar modelo",
            ApiError::Processing(_) => "Falha ao processar texto",
            ApiError::NotFound(_) => "Não encontrado",
            ApiError::Internal(_) => "Erro interno",
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("tarefa de anotação interrompida: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), "{}", self);
        } else {
            warn!(status = status.as_u16(), "{}", self);
        }

        let body = Json(serde_json::json!({
            "error": self.title(),
            "detail": self.to_string(),
        }));
        (status, body).into_response()
    }
}
