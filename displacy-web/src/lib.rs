//! # displacy-web
//!
//! Servidor HTTP que expõe o `displacy-core` nas rotas consumidas pelos
//! visualizadores displaCy: `/dep`, `/ent`, `/models`, `/version` e
//! `/{modelo}/schema`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

use std::sync::Arc;

use anyhow::{bail, Context};
use displacy_core::ModelRegistry;
use tokio::net::TcpListener;
use tracing::{error, info};

pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use handlers::AppState;
pub use routes::create_router;

/// Pré-carrega os modelos configurados e atende requisições até o processo terminar.
///
/// Falha antes de abrir a porta se algum modelo de `languages` não carregar.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let registry = Arc::new(ModelRegistry::with_models_dir(config.models_dir.clone()));

    if !config.languages.is_empty() {
        info!(models = ?config.languages, dir = %config.models_dir.display(), "pré-carregando modelos");
        let preload = Arc::clone(&registry);
        let languages = config.languages.clone();
        let results = tokio::task::spawn_blocking(move || preload.preload(&languages))
            .await
            .context("pré-carregamento interrompido")?;

        let mut failed = Vec::new();
        for (name, result) in results {
            if let Err(e) = result {
                error!(model = %name, "{}", e);
                failed.push(name);
            }
        }
        if !failed.is_empty() {
            bail!("falha ao carregar modelos: {}", failed.join(", "));
        }
    }

    let app = create_router(AppState::new(registry, config.languages.clone()));

    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("não foi possível escutar em {}", addr))?;
    info!("servidor ouvindo em http://{}", addr);

    axum::serve(listener, app).await.context("servidor encerrado com erro")?;
    Ok(())
}
