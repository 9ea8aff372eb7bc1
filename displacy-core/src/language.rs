//! # Interface de Modelos de Linguagem
//!
//! O restante do crate só conhece modelos através de [`Language`]: texto entra,
//! [`Doc`] sai. Colapso e formatação trabalham sobre o `Doc`, então podem ser
//! testados com documentos montados à mão, sem inferência.

use serde::{Deserialize, Serialize};

use crate::doc::Doc;
use crate::error::ProcessError;

/// Versão do motor de anotação, exposta em `/version`.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Inventário de rótulos que um modelo pode produzir.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub dep_types: Vec<String>,
    pub ent_types: Vec<String>,
    pub pos_types: Vec<String>,
}

/// Metadados de um modelo carregado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMeta {
    pub name: String,
    pub lang: String,
    pub version: String,
}

/// Um modelo de linguagem pronto para anotar textos.
///
/// Implementações são imutáveis depois de carregadas e compartilhadas entre
/// requisições como `Arc<dyn Language>`.
pub trait Language: Send + Sync {
    fn name(&self) -> &str;

    /// Tokeniza, etiqueta, analisa dependências e reconhece entidades.
    fn annotate(&self, text: &str) -> Result<Doc, ProcessError>;

    fn schema(&self) -> Schema;

    fn meta(&self) -> ModelMeta;
}
