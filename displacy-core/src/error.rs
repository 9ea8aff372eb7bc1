//! # Erros do núcleo
//!
//! Três famílias de falha, uma por fronteira:
//! - [`DocError`]: o documento ou uma operação de merge violou os invariantes de índices.
//! - [`ProcessError`]: a anotação ou o colapso de spans falhou para um texto válido.
//! - [`LoadError`]: um modelo não pôde ser resolvido ou desserializado.

use thiserror::Error;

/// Violação dos invariantes de um [`Doc`](crate::doc::Doc).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocError {
    #[error("span inválido {start}..{end} em documento com {len} tokens")]
    InvalidSpan { start: usize, end: usize, len: usize },

    #[error("token raiz {root} fora do span {start}..{end}")]
    RootOutsideSpan { root: usize, start: usize, end: usize },

    #[error("head {head} do token {token} fora do documento ({len} tokens)")]
    InvalidHead { token: usize, head: usize, len: usize },

    #[error("o token {token} não alcança uma raiz (ciclo de dependências)")]
    Cycle { token: usize },

    #[error("offsets {start}..{end} do token {token} não correspondem ao texto")]
    InvalidOffsets { token: usize, start: usize, end: usize },

    #[error("entidade {start}..{end} fora do documento ({len} tokens)")]
    InvalidEntity { start: usize, end: usize, len: usize },
}

/// Falha ao processar um texto com um modelo já carregado.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("documento inconsistente: {0}")]
    Document(#[from] DocError),

    #[error("falha na anotação: {0}")]
    Annotation(String),
}

/// Falha ao resolver ou carregar um modelo pelo nome.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("modelo desconhecido: {0}")]
    NotFound(String),

    #[error("nome de modelo inválido: {0:?}")]
    InvalidName(String),

    #[error("erro de leitura do modelo {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("modelo {name} mal formado: {source}")]
    Format {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("modelo {name} inválido: {reason}")]
    Invalid { name: String, reason: String },
}

impl LoadError {
    /// `true` quando a falha vem do nome pedido pelo cliente, não do servidor.
    pub fn is_unknown_model(&self) -> bool {
        matches!(self, LoadError::NotFound(_) | LoadError::InvalidName(_))
    }
}
