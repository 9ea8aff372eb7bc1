//! # Colapso de Spans
//!
//! Dois passes que reescrevem a sequência de tokens antes da visualização:
//!
//! 1. **Pontuação**: cada token que não é pontuação e é seguido por uma sequência
//!    de pontuações vira um único token ("Hello" + "," → "Hello,").
//! 2. **Sintagmas nominais**: cada noun chunk vira um único token com a tag, o lema
//!    e o tipo de entidade do head do chunk ("The big dog" → NN).
//!
//! A ordem importa: o segundo passe opera sobre a saída do primeiro.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::doc::{Doc, MergeAttrs};
use crate::error::DocError;

/// Quais passes de colapso aplicar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollapseOptions {
    pub punctuation: bool,
    pub phrases: bool,
}

impl Default for CollapseOptions {
    fn default() -> Self {
        Self {
            punctuation: true,
            phrases: true,
        }
    }
}

/// Aplica os passes habilitados, pontuação primeiro.
pub fn collapse(doc: &mut Doc, options: CollapseOptions) -> Result<(), DocError> {
    if options.punctuation {
        collapse_punctuation(doc)?;
    }
    if options.phrases {
        collapse_noun_phrases(doc)?;
    }
    Ok(())
}

/// Junta cada palavra à sequência de pontuação que a segue imediatamente.
///
/// O último token nunca dispara um merge. Os spans são coletados sobre o documento
/// intacto e aplicados da direita para a esquerda, para que os índices ainda não
/// processados continuem válidos.
pub fn collapse_punctuation(doc: &mut Doc) -> Result<(), DocError> {
    let tokens = doc.tokens();
    let mut spans: Vec<(Range<usize>, MergeAttrs)> = Vec::new();

    for i in 0..tokens.len().saturating_sub(1) {
        if tokens[i].is_punct || !tokens[i + 1].is_punct {
            continue;
        }
        let mut end = i + 1;
        while end < tokens.len() && tokens[end].is_punct {
            end += 1;
        }
        spans.push((i..end, MergeAttrs::from_token(&tokens[i])));
    }

    for (range, attrs) in spans.into_iter().rev() {
        let root = range.start;
        doc.merge(range, root, attrs)?;
    }
    Ok(())
}

/// Reduz cada noun chunk a um token com os atributos do head do chunk.
pub fn collapse_noun_phrases(doc: &mut Doc) -> Result<(), DocError> {
    let chunks: Vec<(Range<usize>, usize, MergeAttrs)> = doc
        .noun_chunks()
        .into_iter()
        .map(|range| {
            let root = range.end - 1;
            let attrs = MergeAttrs::from_token(&doc.tokens()[root]);
            (range, root, attrs)
        })
        .collect();

    for (range, root, attrs) in chunks.into_iter().rev() {
        if range.len() > 1 {
            doc.merge(range, root, attrs)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::tests::{dog_doc, tok};
    use crate::doc::{EntSpan, Token};

    fn texts(doc: &Doc) -> Vec<&str> {
        doc.tokens().iter().map(|t| t.text.as_str()).collect()
    }

    /// "Wait ... what ?!": palavras seguidas de sequências de pontuação.
    fn punct_doc() -> Doc {
        let text = "Wait... what?!";
        let tokens = vec![
            tok(text, "Wait", 0, "VB", "VERB", "ROOT", 0),
            tok(text, ".", 4, ".", "PUNCT", "punct", 0),
            tok(text, ".", 5, ".", "PUNCT", "punct", 0),
            tok(text, ".", 6, ".", "PUNCT", "punct", 0),
            tok(text, "what", 0, "WP", "PRON", "dobj", 0),
            tok(text, "?", 0, ".", "PUNCT", "punct", 0),
            tok(text, "!", 0, ".", "PUNCT", "punct", 0),
        ];
        Doc::new(text, tokens, vec![]).unwrap()
    }

    #[test]
    fn test_punctuation_runs_merge_into_preceding_word() {
        let mut doc = punct_doc();
        collapse_punctuation(&mut doc).unwrap();

        assert_eq!(texts(&doc), vec!["Wait...", "what?!"]);
        assert_eq!(doc.tokens()[0].tag, "VB");
        assert_eq!(doc.tokens()[1].tag, "WP");
        assert_eq!(doc.tokens()[1].head, 0);
        assert!(doc.tokens().iter().all(|t| !t.is_punct));
    }

    #[test]
    fn test_punctuation_collapse_is_idempotent() {
        let mut once = punct_doc();
        collapse_punctuation(&mut once).unwrap();
        let mut twice = once.clone();
        collapse_punctuation(&mut twice).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_leading_and_final_punctuation() {
        // Pontuação inicial não tem palavra anterior; token final nunca dispara
        let text = "\"Go";
        let tokens = vec![
            tok(text, "\"", 0, "``", "PUNCT", "punct", 1),
            tok(text, "Go", 0, "VB", "VERB", "ROOT", 1),
        ];
        let mut doc = Doc::new(text, tokens, vec![]).unwrap();
        collapse_punctuation(&mut doc).unwrap();
        assert_eq!(texts(&doc), vec!["\"", "Go"]);
    }

    #[test]
    fn test_merged_token_keeps_entity_type() {
        let text = "Paris, France";
        let mut paris = tok(text, "Paris", 0, "NNP", "PROPN", "ROOT", 0);
        paris.ent_type = Some("GPE".into());
        let mut france = tok(text, "France", 0, "NNP", "PROPN", "appos", 0);
        france.ent_type = Some("GPE".into());
        let tokens: Vec<Token> = vec![paris, tok(text, ",", 0, ",", "PUNCT", "punct", 0), france];
        let ents = vec![
            EntSpan { start: 0, end: 1, label: "GPE".into() },
            EntSpan { start: 2, end: 3, label: "GPE".into() },
        ];
        let mut doc = Doc::new(text, tokens, ents).unwrap();
        collapse_punctuation(&mut doc).unwrap();

        assert_eq!(texts(&doc), vec!["Paris,", "France"]);
        assert_eq!(doc.tokens()[0].ent_type.as_deref(), Some("GPE"));
        assert_eq!(doc.ents()[1].start, 1);
    }

    #[test]
    fn test_noun_phrase_collapse_uses_chunk_head() {
        let mut doc = dog_doc();
        collapse_noun_phrases(&mut doc).unwrap();

        assert_eq!(texts(&doc), vec!["The big dog", "barked", "."]);
        assert_eq!(doc.tokens()[0].tag, "NN");
        assert_eq!(doc.tokens()[0].lemma, "dog");
    }

    #[test]
    fn test_both_passes_run_in_order() {
        let mut doc = dog_doc();
        collapse(&mut doc, CollapseOptions::default()).unwrap();
        assert_eq!(texts(&doc), vec!["The big dog", "barked."]);
        for (i, token) in doc.tokens().iter().enumerate() {
            assert!(token.head < doc.len(), "head inválido no token {}", i);
        }
    }

    #[test]
    fn test_every_chunk_becomes_one_token() {
        let text = "The old man saw a black cat";
        let tokens = vec![
            tok(text, "The", 0, "DT", "DET", "det", 2),
            tok(text, "old", 0, "JJ", "ADJ", "amod", 2),
            tok(text, "man", 0, "NN", "NOUN", "nsubj", 3),
            tok(text, "saw", 0, "VBD", "VERB", "ROOT", 3),
            tok(text, "a", 15, "DT", "DET", "det", 6),
            tok(text, "black", 0, "JJ", "ADJ", "amod", 6),
            tok(text, "cat", 0, "NN", "NOUN", "dobj", 3),
        ];
        let mut doc = Doc::new(text, tokens, vec![]).unwrap();
        let chunk_texts: Vec<String> = doc
            .noun_chunks()
            .into_iter()
            .map(|r| doc.span_text(r).to_string())
            .collect();
        collapse_noun_phrases(&mut doc).unwrap();

        assert_eq!(texts(&doc), vec!["The old man", "saw", "a black cat"]);
        for chunk in chunk_texts {
            assert_eq!(doc.tokens().iter().filter(|t| t.text == chunk).count(), 1);
        }
        assert_eq!(doc.tokens()[2].head, 1);
        assert_eq!(doc.tokens()[2].dep, "dobj");
    }

    #[test]
    fn test_disabled_passes_leave_doc_untouched() {
        let original = dog_doc();
        let mut doc = original.clone();
        collapse(
            &mut doc,
            CollapseOptions {
                punctuation: false,
                phrases: false,
            },
        )
        .unwrap();
        assert_eq!(doc, original);
    }
}
