//! # Pipeline de Visualização
//!
//! Orquestra os passos que cada endpoint executa sobre um modelo já carregado:
//!
//! ```text
//! /dep:  texto ─► model.annotate ─► collapse (pontuação, sintagmas) ─► {words, arcs}
//! /ent:  texto ─► model.annotate ─► [{start, end, type, text}]
//! ```
//!
//! ## Exemplo
//!
//! ```rust
//! use displacy_core::{CollapseOptions, LexiconModel, Parse};
//!
//! let model = LexiconModel::english();
//! let parse = Parse::new(&model, "Hello, world!", CollapseOptions::default()).unwrap();
//! let words: Vec<String> = parse.to_json().words.into_iter().map(|w| w.text).collect();
//! assert_eq!(words, vec!["Hello,", "world!"]);
//! ```

use crate::collapse::{collapse, CollapseOptions};
use crate::doc::Doc;
use crate::error::ProcessError;
use crate::format::{to_dependency_json, to_entity_json, DependencyParse, EntityJson};
use crate::language::Language;

/// Análise de dependências pronta para o displaCy.
#[derive(Debug, Clone)]
pub struct Parse {
    doc: Doc,
}

impl Parse {
    /// Anota o texto e aplica os colapsos habilitados.
    pub fn new(model: &dyn Language, text: &str, options: CollapseOptions) -> Result<Self, ProcessError> {
        let mut doc = model.annotate(text)?;
        collapse(&mut doc, options)?;
        Ok(Self { doc })
    }

    pub fn to_json(&self) -> DependencyParse {
        to_dependency_json(&self.doc)
    }
}

/// Entidades prontas para o displaCy ENT.
#[derive(Debug, Clone)]
pub struct Entities {
    doc: Doc,
}

impl Entities {
    pub fn new(model: &dyn Language, text: &str) -> Result<Self, ProcessError> {
        Ok(Self {
            doc: model.annotate(text)?,
        })
    }

    pub fn to_json(&self) -> Vec<EntityJson> {
        to_entity_json(&self.doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Direction;
    use crate::model::LexiconModel;

    fn words(parse: &DependencyParse) -> Vec<&str> {
        parse.words.iter().map(|w| w.text.as_str()).collect()
    }

    #[test]
    fn test_punctuation_collapse_end_to_end() {
        let model = LexiconModel::english();
        let parse = Parse::new(&model, "Hello, world!", CollapseOptions::default())
            .unwrap()
            .to_json();

        assert_eq!(words(&parse), vec!["Hello,", "world!"]);
        assert_eq!(parse.words[0].tag, "UH");
        assert_eq!(parse.arcs.len(), 1);
        let arc = &parse.arcs[0];
        assert_eq!((arc.start, arc.end, arc.dir), (0, 1, Direction::Left));
        assert_eq!(arc.label, "intj");
    }

    #[test]
    fn test_non_ascii_punctuation_collapses() {
        let model = LexiconModel::english();
        let options = CollapseOptions {
            punctuation: true,
            phrases: false,
        };
        for (text, first) in [("Hello。 World", "Hello。"), ("Hello！ world", "Hello！"), ("Hello„ world", "Hello„")] {
            let parse = Parse::new(&model, text, options).unwrap().to_json();
            assert_eq!(parse.words.len(), 2, "{}", text);
            assert_eq!(parse.words[0].text, first);
            assert_eq!(parse.words[0].tag, "UH");
        }
    }

    #[test]
    fn test_without_collapse_every_token_is_a_word() {
        let model = LexiconModel::english();
        let options = CollapseOptions {
            punctuation: false,
            phrases: false,
        };
        let parse = Parse::new(&model, "Hello, world!", options).unwrap().to_json();
        assert_eq!(words(&parse), vec!["Hello", ",", "world", "!"]);
        assert_eq!(parse.arcs.len(), 3);
    }

    #[test]
    fn test_noun_phrase_collapse_end_to_end() {
        let model = LexiconModel::english();
        let parse = Parse::new(&model, "The big dog barked.", CollapseOptions::default())
            .unwrap()
            .to_json();
        assert_eq!(words(&parse), vec!["The big dog", "barked."]);
        assert_eq!(parse.words[0].tag, "NN");
        assert_eq!(parse.arcs[0].label, "nsubj");
        assert_eq!(parse.arcs[0].dir, Direction::Left);
    }

    #[test]
    fn test_entities_end_to_end() {
        let model = LexiconModel::english();
        let entities = Entities::new(&model, "Paris is nice.").unwrap().to_json();
        assert_eq!(
            entities,
            vec![EntityJson {
                start: 0,
                end: 5,
                label: "GPE".into(),
                text: "Paris".into(),
            }]
        );
    }

    #[test]
    fn test_empty_text() {
        let model = LexiconModel::english();
        let parse = Parse::new(&model, "", CollapseOptions::default()).unwrap().to_json();
        assert!(parse.words.is_empty());
        assert!(parse.arcs.is_empty());
        assert!(Entities::new(&model, "").unwrap().to_json().is_empty());
    }

    #[test]
    fn test_arcs_always_ordered() {
        let model = LexiconModel::english();
        let text = "Yesterday, Dr. Smith said that the old company in Berlin had sold 20 % of its shares to Google.";
        let parse = Parse::new(&model, text, CollapseOptions::default()).unwrap().to_json();
        assert!(parse.arcs.iter().all(|a| a.start < a.end && a.end < parse.words.len()));
    }
}
