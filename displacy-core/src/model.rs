//! # Modelo de Léxico e Regras
//!
//! [`LexiconModel`] é a implementação embutida de [`Language`] para o inglês:
//!
//! ```text
//! texto ─► tokenizer ─► tagger (POS + lema) ─► parser (por sentença) ─► entidades ─► Doc
//! ```
//!
//! Modelos adicionais são descritos por um [`ModelSpec`] em JSON, que estende o
//! léxico e os gazetteers embutidos:
//!
//! ```json
//! {
//!   "name": "en_food",
//!   "lexicon": { "brunch": "NN", "grok": "VB" },
//!   "entities": { "Blue Bottle": "ORG" }
//! }
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::doc::{Doc, Token};
use crate::entity::EntityRecognizer;
use crate::error::{LoadError, ProcessError};
use crate::language::{Language, ModelMeta, Schema, ENGINE_VERSION};
use crate::lexicon::{ENTITY_LABELS, TAGSET};
use crate::parser::{parse_sentence, DEP_LABELS};
use crate::tagger::{coarse_pos, PosTagger};
use crate::tokenizer::{is_punct, tokenize, RawToken};

/// Nome do modelo embutido.
pub const BUILTIN_MODEL: &str = "en";

/// Descrição serializada de um modelo derivado do inglês embutido.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSpec {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_version")]
    pub version: String,
    /// Palavra → tag Penn Treebank. `VB` e `JJ` registram radicais para a morfologia.
    #[serde(default)]
    pub lexicon: BTreeMap<String, String>,
    /// Frase → rótulo de entidade.
    #[serde(default)]
    pub entities: BTreeMap<String, String>,
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_version() -> String {
    ENGINE_VERSION.to_string()
}

/// Pipeline de léxico e regras.
#[derive(Debug, Clone)]
pub struct LexiconModel {
    meta: ModelMeta,
    tagger: PosTagger,
    recognizer: EntityRecognizer,
    entity_labels: BTreeSet<String>,
}

impl LexiconModel {
    /// O modelo `en` embutido.
    pub fn english() -> Self {
        Self {
            meta: ModelMeta {
                name: BUILTIN_MODEL.to_string(),
                lang: "en".to_string(),
                version: ENGINE_VERSION.to_string(),
            },
            tagger: PosTagger::english(),
            recognizer: EntityRecognizer::english(),
            entity_labels: ENTITY_LABELS.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Mesmo modelo, registrado com outro nome (ex: `en_core_web_sm`).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.meta.name = name.into();
        self
    }

    /// Constrói um modelo a partir de uma especificação, validando tags e rótulos.
    pub fn from_spec(spec: ModelSpec) -> Result<Self, LoadError> {
        let invalid = |reason: String| LoadError::Invalid {
            name: spec.name.clone(),
            reason,
        };

        let mut model = Self::english();
        for (word, tag) in &spec.lexicon {
            if word.trim().is_empty() {
                return Err(invalid("entrada de léxico vazia".to_string()));
            }
            if !TAGSET.contains(&tag.as_str()) {
                return Err(invalid(format!("tag desconhecida {:?} para {:?}", tag, word)));
            }
            model.tagger.add_word(word, tag);
        }
        for (phrase, label) in &spec.entities {
            let valid_label = !label.is_empty()
                && label.chars().all(|c| c.is_ascii_uppercase() || c == '_');
            if !valid_label {
                return Err(invalid(format!("rótulo de entidade inválido {:?}", label)));
            }
            if phrase.trim().is_empty() {
                return Err(invalid("frase de entidade vazia".to_string()));
            }
            model.recognizer.add_entity(phrase, label);
            model.entity_labels.insert(label.clone());
        }

        model.meta = ModelMeta {
            name: spec.name,
            lang: spec.lang,
            version: spec.version,
        };
        Ok(model)
    }

    /// Heads absolutos e relações, analisando cada sentença separadamente.
    fn parse(&self, raw: &[RawToken], tags: &[String]) -> Result<Vec<(usize, &'static str)>, ProcessError> {
        let mut arcs = Vec::with_capacity(raw.len());
        let mut start = 0;
        while start < raw.len() {
            let sentence = raw[start].sentence;
            let end = (start..raw.len())
                .find(|&i| raw[i].sentence != sentence)
                .unwrap_or(raw.len());

            let words: Vec<&str> = raw[start..end].iter().map(|t| t.text.as_str()).collect();
            let sentence_tags: Vec<&str> = tags[start..end].iter().map(String::as_str).collect();
            let attachments = parse_sentence(&words, &sentence_tags);
            if attachments.len() != words.len() {
                return Err(ProcessError::Annotation(format!(
                    "sentença com {} tokens recebeu {} dependências",
                    words.len(),
                    attachments.len()
                )));
            }
            arcs.extend(attachments.into_iter().map(|a| (start + a.head, a.dep)));
            start = end;
        }
        Ok(arcs)
    }
}

impl Default for LexiconModel {
    fn default() -> Self {
        Self::english()
    }
}

impl Language for LexiconModel {
    fn name(&self) -> &str {
        &self.meta.name
    }

    fn annotate(&self, text: &str) -> Result<Doc, ProcessError> {
        let raw = tokenize(text);
        let tags = self.tagger.tag(&raw);
        let arcs = self.parse(&raw, &tags)?;

        let words: Vec<&str> = raw.iter().map(|t| t.text.as_str()).collect();
        let tag_refs: Vec<&str> = tags.iter().map(String::as_str).collect();
        let ents = self.recognizer.recognize(&words, &tag_refs);

        let mut ent_types: Vec<Option<String>> = vec![None; raw.len()];
        for ent in &ents {
            for slot in &mut ent_types[ent.start..ent.end] {
                *slot = Some(ent.label.clone());
            }
        }

        let tokens = raw
            .into_iter()
            .zip(tags)
            .zip(arcs)
            .zip(ent_types)
            .map(|(((token, tag), (head, dep)), ent_type)| {
                let lemma = self.tagger.lemma(&token.text, &tag);
                let mut pos = coarse_pos(&tag);
                if pos == "VERB" && (lemma == "be" || matches!(dep, "aux" | "auxpass")) {
                    pos = "AUX";
                }
                Token {
                    is_punct: is_punct(&token.text),
                    text: token.text,
                    start: token.start,
                    end: token.end,
                    pos: pos.to_string(),
                    tag,
                    lemma,
                    dep: dep.to_string(),
                    head,
                    ent_type,
                }
            })
            .collect();

        Ok(Doc::new(text, tokens, ents)?)
    }

    fn schema(&self) -> Schema {
        let mut dep_types: Vec<String> = DEP_LABELS.iter().map(|d| d.to_string()).collect();
        dep_types.sort();
        Schema {
            dep_types,
            ent_types: self.entity_labels.iter().cloned().collect(),
            pos_types: TAGSET.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn meta(&self) -> ModelMeta {
        self.meta.clone()
    }
}
