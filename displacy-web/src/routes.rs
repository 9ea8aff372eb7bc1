//! Configuração do roteador.

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{self, AppState};

/// Cria o roteador com todas as rotas, CORS aberto e log de requisições.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::version))
        .route("/version", get(handlers::version))
        .route("/models", get(handlers::list_models))
        .route("/health", get(handlers::health))
        .route("/:model_name/schema", get(handlers::schema))
        .route("/dep", post(handlers::dep))
        .route("/ent", post(handlers::ent))
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
