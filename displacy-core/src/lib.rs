//! # displacy-core: Anotações para os Visualizadores displaCy
//!
//! Este crate transforma texto em anotações linguísticas no formato JSON que os
//! visualizadores displaCy (dependências) e displaCy ENT (entidades) consomem.
//!
//! ## Arquitetura
//!
//! 1.  **Modelo** ([`language`]): qualquer implementação de [`Language`] transforma
//!     texto em um [`Doc`]. O crate traz uma implementação embutida para o inglês,
//!     [`LexiconModel`], montada sobre [`tokenizer`], [`tagger`], [`parser`] e [`entity`].
//! 2.  **Registro** ([`registry`]): resolve nomes em modelos e os mantém em cache.
//! 3.  **Colapso** ([`collapse`]): funde pontuação e sintagmas nominais em tokens únicos.
//! 4.  **Formatação** ([`format`]): gera `{words, arcs}` e `[{start, end, type, text}]`.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use displacy_core::{CollapseOptions, Entities, ModelRegistry, Parse};
//!
//! let registry = ModelRegistry::with_models_dir("models");
//! let model = registry.get_model("en").unwrap();
//!
//! let parse = Parse::new(model.as_ref(), "The big dog barked.", CollapseOptions::default()).unwrap();
//! for arc in parse.to_json().arcs {
//!     println!("{} --{}--> ({:?})", arc.text, arc.label, arc.dir);
//! }
//!
//! let entities = Entities::new(model.as_ref(), "Paris is nice.").unwrap();
//! assert_eq!(entities.to_json()[0].label, "GPE");
//! ```

pub mod collapse;
pub mod doc;
pub mod entity;
pub mod error;
pub mod format;
pub mod language;
pub mod lexicon;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod registry;
pub mod tagger;
pub mod tokenizer;

pub use collapse::CollapseOptions;
pub use doc::{Doc, EntSpan, Token};
pub use error::{DocError, LoadError, ProcessError};
pub use format::{DependencyParse, EntityJson};
pub use language::{Language, ModelMeta, Schema, ENGINE_VERSION};
pub use model::{LexiconModel, ModelSpec};
pub use pipeline::{Entities, Parse};
pub use registry::{ModelLoader, ModelRegistry, ModelStore};
