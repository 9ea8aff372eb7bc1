//! Handlers das rotas HTTP.
//!
//! Carregamento de modelos e anotação são síncronos e podem ser lentos, então
//! rodam em `spawn_blocking` para não segurar o runtime.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::Uri,
    Json,
};
use displacy_core::{
    CollapseOptions, DependencyParse, Entities, EntityJson, Language, ModelRegistry, Parse,
    Schema, ENGINE_VERSION,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::error::ApiError;

/// Estado compartilhado da aplicação
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ModelRegistry>,
    /// Modelos anunciados em `/models`
    pub models: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(registry: Arc<ModelRegistry>, models: Vec<String>) -> Self {
        Self {
            registry,
            models: Arc::new(models),
        }
    }

    async fn load_model(&self, name: &str) -> Result<Arc<dyn Language>, ApiError> {
        if self.registry.is_loaded(name) {
            return Ok(self.registry.get_model(name)?);
        }

        let registry = Arc::clone(&self.registry);
        let owned = name.to_string();
        let started = Instant::now();
        let model = tokio::task::spawn_blocking(move || registry.get_model(&owned)).await??;
        info!(
            model = name,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "modelo carregado"
        );
        Ok(model)
    }
}

fn default_model() -> String {
    "en".to_string()
}

fn enabled() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct DepRequest {
    pub text: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "enabled")]
    pub collapse_punctuation: bool,
    #[serde(default = "enabled")]
    pub collapse_phrases: bool,
}

#[derive(Debug, Deserialize)]
pub struct EntRequest {
    pub text: String,
    #[serde(default = "default_model")]
    pub model: String,
}

/// O corpo é JSON mesmo sem `Content-Type: application/json` (`curl -d` envia form).
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(format!("corpo JSON inválido: {}", e)))
}

pub async fn list_models(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.models.as_ref().clone())
}

pub async fn version() -> Json<Value> {
    Json(json!({ "spacy": ENGINE_VERSION }))
}

/// Estado do serviço e metadados dos modelos já carregados.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "status": "ok", "loaded": state.registry.loaded_meta() }))
}

pub async fn schema(
    State(state): State<AppState>,
    Path(model_name): Path<String>,
) -> Result<Json<Schema>, ApiError> {
    let model = state.load_model(&model_name).await?;
    Ok(Json(model.schema()))
}

pub async fn dep(State(state): State<AppState>, body: Bytes) -> Result<Json<DependencyParse>, ApiError> {
    let request: DepRequest = parse_body(&body)?;
    let model = state.load_model(&request.model).await?;
    debug!(model = %request.model, chars = request.text.chars().count(), "análise de dependências");

    let options = CollapseOptions {
        punctuation: request.collapse_punctuation,
        phrases: request.collapse_phrases,
    };
    let parse = tokio::task::spawn_blocking(move || {
        Parse::new(model.as_ref(), &request.text, options).map(|parse| parse.to_json())
    })
    .await??;
    Ok(Json(parse))
}

pub async fn ent(State(state): State<AppState>, body: Bytes) -> Result<Json<Vec<EntityJson>>, ApiError> {
    let request: EntRequest = parse_body(&body)?;
    let model = state.load_model(&request.model).await?;
    debug!(model = %request.model, chars = request.text.chars().count(), "reconhecimento de entidades");

    let entities = tokio::task::spawn_blocking(move || {
        Entities::new(model.as_ref(), &request.text).map(|entities| entities.to_json())
    })
    .await??;
    Ok(Json(entities))
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("rota desconhecida: {}", uri.path()))
}
