//! # Formatação para os Visualizadores
//!
//! Converte um [`Doc`] nas estruturas JSON esperadas pelo displaCy (dependências)
//! e pelo displaCy ENT (entidades).
//!
//! ## Arcos
//!
//! Cada token cujo head é outro token gera um arco. `start`/`end` são o menor e o
//! maior índice entre dependente e head; `dir` indica para que lado o arco aponta:
//!
//! | Posição do dependente | `dir`   |
//! |-----------------------|---------|
//! | antes do head         | `left`  |
//! | depois do head        | `right` |
//!
//! Raízes (head == próprio índice) não geram arco.

use serde::{Deserialize, Serialize};

use crate::doc::Doc;

/// Direção de um arco de dependência.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

/// Uma palavra na visualização de dependências.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub tag: String,
}

/// Um arco de dependência entre duas palavras.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arc {
    pub start: usize,
    pub end: usize,
    pub label: String,
    /// Texto do dependente
    pub text: String,
    pub dir: Direction,
}

/// Corpo de resposta do displaCy: palavras + arcos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyParse {
    pub words: Vec<Word>,
    pub arcs: Vec<Arc>,
}

/// Uma entidade com offsets de caractere no texto original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityJson {
    pub start: usize,
    pub end: usize,
    #[serde(rename = "type")]
    pub label: String,
    pub text: String,
}

/// Palavras e arcos do documento (já colapsado, se for o caso).
pub fn to_dependency_json(doc: &Doc) -> DependencyParse {
    let tokens = doc.tokens();
    let words = tokens
        .iter()
        .map(|t| Word {
            text: t.text.clone(),
            tag: t.tag.clone(),
        })
        .collect();

    let arcs = tokens
        .iter()
        .enumerate()
        .filter(|(i, t)| t.head != *i)
        .map(|(i, t)| {
            let dir = if i < t.head {
                Direction::Left
            } else {
                Direction::Right
            };
            Arc {
                start: i.min(t.head),
                end: i.max(t.head),
                label: t.dep.clone(),
                text: t.text.clone(),
                dir,
            }
        })
        .collect();

    DependencyParse { words, arcs }
}

/// Uma entrada por entidade reconhecida, com offsets de caractere.
pub fn to_entity_json(doc: &Doc) -> Vec<EntityJson> {
    let tokens = doc.tokens();
    doc.ents()
        .iter()
        .map(|ent| {
            let start_byte = tokens[ent.start].start;
            let end_byte = tokens[ent.end - 1].end;
            EntityJson {
                start: doc.char_offset(start_byte),
                end: doc.char_offset(end_byte),
                label: ent.label.clone(),
                text: doc.span_text(ent.start..ent.end).to_string(),
            }
        })
        .collect()
}
