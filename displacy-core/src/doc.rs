//! # Documento Anotado
//!
//! Um [`Doc`] é a saída de um modelo aplicado a um texto: a sequência ordenada de
//! tokens, cada um com tag, lema, relação de dependência, índice do head e tipo de
//! entidade, mais a lista de entidades como intervalos de tokens.
//!
//! ## Invariantes
//!
//! - Índices de token são contíguos e começam em zero.
//! - Todo `head` aponta para um índice válido do mesmo documento.
//! - Uma raiz é o próprio head; seguir os heads a partir de qualquer token termina
//!   numa raiz (não há ciclos).
//! - `text[token.start..token.end] == token.text` (offsets em bytes).
//!
//! [`Doc::merge`] preserva todos esses invariantes: é a única operação que altera
//! a sequência de tokens, e é usada pelos passes de [`collapse`](crate::collapse).

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::DocError;

/// Relações que tornam um substantivo/pronome raiz de um noun chunk.
const NP_DEPS: &[&str] = &[
    "nsubj", "nsubjpass", "dobj", "iobj", "dative", "pobj", "attr", "appos", "ROOT",
];

/// Relações de modificadores à esquerda que pertencem ao noun chunk do head.
const NOMINAL_MODIFIERS: &[&str] = &[
    "det", "predet", "amod", "compound", "poss", "nummod", "nmod", "quantmod", "advmod",
    "case", "neg",
];

/// Um token do documento.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Texto de superfície (ex: "Paris", ",").
    pub text: String,
    /// Offset de byte inicial no texto original (inclusivo).
    pub start: usize,
    /// Offset de byte final no texto original (exclusivo).
    pub end: usize,
    /// Tag morfossintática fina (Penn Treebank: "NNP", "VBZ", ".").
    pub tag: String,
    /// Classe gramatical universal (UD: "PROPN", "VERB", "PUNCT").
    pub pos: String,
    pub lemma: String,
    /// Relação de dependência com o head ("nsubj", "ROOT", ...).
    pub dep: String,
    /// Índice do head no mesmo documento. Raízes apontam para si mesmas.
    pub head: usize,
    /// Tipo de entidade ("GPE", "PERSON"), ausente fora de entidades.
    pub ent_type: Option<String>,
    pub is_punct: bool,
}

/// Uma entidade como intervalo de tokens `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntSpan {
    pub start: usize,
    pub end: usize,
    pub label: String,
}

/// Atributos herdados pelo token resultante de um merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeAttrs {
    pub tag: String,
    pub lemma: String,
    pub ent_type: Option<String>,
}

impl MergeAttrs {
    /// Copia tag, lema e tipo de entidade de um token existente.
    pub fn from_token(token: &Token) -> Self {
        Self {
            tag: token.tag.clone(),
            lemma: token.lemma.clone(),
            ent_type: token.ent_type.clone(),
        }
    }
}

/// Documento anotado: texto original + tokens + entidades.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Doc {
    text: String,
    tokens: Vec<Token>,
    ents: Vec<EntSpan>,
}

impl Doc {
    /// Constrói um documento validando offsets, heads e entidades.
    pub fn new(
        text: impl Into<String>,
        tokens: Vec<Token>,
        ents: Vec<EntSpan>,
    ) -> Result<Self, DocError> {
        let doc = Self {
            text: text.into(),
            tokens,
            ents,
        };
        doc.validate()?;
        Ok(doc)
    }

    fn validate(&self) -> Result<(), DocError> {
        let len = self.tokens.len();
        for (i, token) in self.tokens.iter().enumerate() {
            let offsets_ok = token.start <= token.end
                && token.end <= self.text.len()
                && self.text.is_char_boundary(token.start)
                && self.text.is_char_boundary(token.end)
                && self.text[token.start..token.end] == token.text;
            if !offsets_ok {
                return Err(DocError::InvalidOffsets {
                    token: i,
                    start: token.start,
                    end: token.end,
                });
            }
            if token.head >= len {
                return Err(DocError::InvalidHead {
                    token: i,
                    head: token.head,
                    len,
                });
            }
        }
        for i in 0..len {
            self.root_of(i).ok_or(DocError::Cycle { token: i })?;
        }
        for ent in &self.ents {
            if ent.start >= ent.end || ent.end > len {
                return Err(DocError::InvalidEntity {
                    start: ent.start,
                    end: ent.end,
                    len,
                });
            }
        }
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn ents(&self) -> &[EntSpan] {
        &self.ents
    }

    /// Texto coberto por um intervalo de tokens, incluindo o espaço interno.
    pub fn span_text(&self, range: Range<usize>) -> &str {
        if range.start >= range.end || range.end > self.tokens.len() {
            return "";
        }
        &self.text[self.tokens[range.start].start..self.tokens[range.end - 1].end]
    }

    /// Offsets de caractere (não de byte) correspondentes a um offset de byte.
    pub fn char_offset(&self, byte: usize) -> usize {
        self.text[..byte.min(self.text.len())].chars().count()
    }

    /// Raiz alcançada a partir de `i`, ou `None` se houver ciclo.
    fn root_of(&self, i: usize) -> Option<usize> {
        let mut current = i;
        for _ in 0..=self.tokens.len() {
            let head = self.tokens[current].head;
            if head == current {
                return Some(current);
            }
            current = head;
        }
        None
    }

    /// Número de arcos entre o token e sua raiz.
    pub fn depth(&self, i: usize) -> usize {
        let mut current = i;
        let mut depth = 0;
        while self.tokens[current].head != current && depth <= self.tokens.len() {
            current = self.tokens[current].head;
            depth += 1;
        }
        depth
    }

    /// Para cada token, o menor índice alcançável descendo por modificadores nominais
    /// à esquerda (determinantes, adjetivos, compostos, possessivos).
    fn nominal_left_edges(&self) -> Vec<usize> {
        let mut edges: Vec<usize> = (0..self.tokens.len()).collect();
        for j in 0..self.tokens.len() {
            // Sobe pela cadeia enquanto o token for um modificador nominal à esquerda
            let mut child = j;
            let mut steps = 0;
            while steps < self.tokens.len() {
                let token = &self.tokens[child];
                let head = token.head;
                if head == child || head < child || !NOMINAL_MODIFIERS.contains(&token.dep.as_str()) {
                    break;
                }
                edges[head] = edges[head].min(j);
                child = head;
                steps += 1;
            }
        }
        edges
    }

    /// Noun chunks (sintagmas nominais de base) como intervalos de tokens.
    ///
    /// Segue o iterador sintático do inglês: um substantivo, nome próprio ou pronome
    /// cuja relação indica argumento nominal abre um chunk que começa no seu
    /// modificador nominal mais à esquerda. Chunks que se sobrepõem a um anterior
    /// são descartados; `conj` só vale quando o head também é raiz de chunk.
    pub fn noun_chunks(&self) -> Vec<Range<usize>> {
        let edges = self.nominal_left_edges();
        let mut chunk_roots = vec![false; self.tokens.len()];
        let mut chunks = Vec::new();
        let mut prev_end = 0;

        for (i, token) in self.tokens.iter().enumerate() {
            if !matches!(token.pos.as_str(), "NOUN" | "PROPN" | "PRON") {
                continue;
            }
            let is_np = NP_DEPS.contains(&token.dep.as_str())
                || (token.dep == "conj" && chunk_roots[token.head]);
            if !is_np {
                continue;
            }
            let start = edges[i];
            if start < prev_end {
                continue;
            }
            chunks.push(start..i + 1);
            chunk_roots[i] = true;
            prev_end = i + 1;
        }
        chunks
    }

    /// Substitui os tokens de `range` por um único token.
    ///
    /// - Texto e offsets cobrem do início do primeiro ao fim do último token.
    /// - `tag`, `lemma` e `ent_type` vêm de `attrs`; `pos` e `is_punct` de `root`.
    /// - O head do novo token é o head externo do membro mais raso do span
    ///   (empate favorece `root`); se um membro for raiz da frase, o novo token é raiz.
    /// - Tokens de fora que apontavam para dentro do span passam a apontar para o
    ///   novo token; índices posteriores recuam `len - 1` posições.
    pub fn merge(&mut self, range: Range<usize>, root: usize, attrs: MergeAttrs) -> Result<(), DocError> {
        let len = self.tokens.len();
        if range.start >= range.end || range.end > len {
            return Err(DocError::InvalidSpan {
                start: range.start,
                end: range.end,
                len,
            });
        }
        if !range.contains(&root) {
            return Err(DocError::RootOutsideSpan {
                root,
                start: range.start,
                end: range.end,
            });
        }

        let width = range.end - range.start;
        let remap = |j: usize| {
            if j < range.start {
                j
            } else if j < range.end {
                range.start
            } else {
                j - (width - 1)
            }
        };

        let anchor = range
            .clone()
            .min_by_key(|&j| (self.depth(j), j != root, j))
            .unwrap_or(root);
        let anchor_token = &self.tokens[anchor];
        let (head, dep) = if anchor_token.head == anchor {
            (range.start, "ROOT".to_string())
        } else {
            (remap(anchor_token.head), anchor_token.dep.clone())
        };

        let first = &self.tokens[range.start];
        let last = &self.tokens[range.end - 1];
        let root_token = &self.tokens[root];
        let merged = Token {
            text: self.text[first.start..last.end].to_string(),
            start: first.start,
            end: last.end,
            tag: attrs.tag,
            pos: root_token.pos.clone(),
            lemma: attrs.lemma,
            dep,
            head,
            ent_type: attrs.ent_type,
            is_punct: root_token.is_punct,
        };

        for (j, token) in self.tokens.iter_mut().enumerate() {
            if !range.contains(&j) {
                token.head = remap(token.head);
            }
        }
        self.tokens.splice(range.clone(), std::iter::once(merged));

        let mut ents = Vec::with_capacity(self.ents.len());
        let mut prev_end = 0;
        for ent in self.ents.drain(..) {
            let start = remap(ent.start);
            let end = remap(ent.end - 1) + 1;
            if start < prev_end {
                continue;
            }
            prev_end = end;
            ents.push(EntSpan {
                start,
                end,
                label: ent.label,
            });
        }
        self.ents = ents;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Monta um token a partir do texto completo, localizando a n-ésima ocorrência.
    pub(crate) fn tok(text: &str, word: &str, from: usize, tag: &str, pos: &str, dep: &str, head: usize) -> Token {
        let start = text[from..].find(word).map(|i| i + from).unwrap_or(from);
        Token {
            text: word.to_string(),
            start,
            end: start + word.len(),
            tag: tag.to_string(),
            pos: pos.to_string(),
            lemma: word.to_lowercase(),
            dep: dep.to_string(),
            head,
            ent_type: None,
            is_punct: pos == "PUNCT",
        }
    }

    /// "The big dog barked ." com análise manual.
    pub(crate) fn dog_doc() -> Doc {
        let text = "The big dog barked.";
        let tokens = vec![
            tok(text, "The", 0, "DT", "DET", "det", 2),
            tok(text, "big", 0, "JJ", "ADJ", "amod", 2),
            tok(text, "dog", 0, "NN", "NOUN", "nsubj", 3),
            tok(text, "barked", 0, "VBD", "VERB", "ROOT", 3),
            tok(text, ".", 0, ".", "PUNCT", "punct", 3),
        ];
        Doc::new(text, tokens, vec![]).unwrap()
    }

    #[test]
    fn test_new_rejects_out_of_range_head() {
        let text = "Hi";
        let tokens = vec![tok(text, "Hi", 0, "UH", "INTJ", "ROOT", 4)];
        assert_eq!(
            Doc::new(text, tokens, vec![]),
            Err(DocError::InvalidHead { token: 0, head: 4, len: 1 })
        );
    }

    #[test]
    fn test_new_rejects_cycle() {
        let text = "a b";
        let tokens = vec![
            tok(text, "a", 0, "DT", "DET", "dep", 1),
            tok(text, "b", 0, "NN", "NOUN", "dep", 0),
        ];
        assert!(matches!(Doc::new(text, tokens, vec![]), Err(DocError::Cycle { .. })));
    }

    #[test]
    fn test_new_rejects_mismatched_offsets() {
        let text = "Hello";
        let mut token = tok(text, "Hello", 0, "UH", "INTJ", "ROOT", 0);
        token.end = 3;
        assert!(matches!(
            Doc::new(text, vec![token], vec![]),
            Err(DocError::InvalidOffsets { .. })
        ));
    }

    #[test]
    fn test_noun_chunks_include_left_modifiers() {
        let doc = dog_doc();
        assert_eq!(doc.noun_chunks(), vec![0..3]);
    }

    #[test]
    fn test_noun_chunks_coordinated_nouns() {
        let text = "cats and dogs sleep";
        let tokens = vec![
            tok(text, "cats", 0, "NNS", "NOUN", "nsubj", 3),
            tok(text, "and", 0, "CC", "CCONJ", "cc", 0),
            tok(text, "dogs", 0, "NNS", "NOUN", "conj", 0),
            tok(text, "sleep", 0, "VBP", "VERB", "ROOT", 3),
        ];
        let doc = Doc::new(text, tokens, vec![]).unwrap();
        assert_eq!(doc.noun_chunks(), vec![0..1, 2..3]);
    }

    #[test]
    fn test_noun_chunks_conj_needs_chunk_head() {
        // "winner" coordena com um adjetivo, que não abre chunk
        let text = "He was happy and a winner";
        let tokens = vec![
            tok(text, "He", 0, "PRP", "PRON", "nsubj", 1),
            tok(text, "was", 0, "VBD", "AUX", "ROOT", 1),
            tok(text, "happy", 0, "JJ", "ADJ", "acomp", 1),
            tok(text, "and", 0, "CC", "CCONJ", "cc", 2),
            tok(text, "a", 17, "DT", "DET", "det", 5),
            tok(text, "winner", 0, "NN", "NOUN", "conj", 2),
        ];
        let doc = Doc::new(text, tokens, vec![]).unwrap();
        assert_eq!(doc.noun_chunks(), vec![0..1]);
    }

    #[test]
    fn test_noun_chunks_skip_overlapping_chunk() {
        // "Some" modifica "dogs" por cima de "cats", já emitido
        let text = "Some cats dogs chase";
        let tokens = vec![
            tok(text, "Some", 0, "DT", "DET", "det", 2),
            tok(text, "cats", 0, "NNS", "NOUN", "nsubj", 3),
            tok(text, "dogs", 0, "NNS", "NOUN", "dobj", 3),
            tok(text, "chase", 0, "VBP", "VERB", "ROOT", 3),
        ];
        let doc = Doc::new(text, tokens, vec![]).unwrap();
        assert_eq!(doc.noun_chunks(), vec![1..2]);
    }

    #[test]
    fn test_merge_anchors_on_shallowest_member() {
        let text = "The dog of my friend, sadly, died.";
        let tokens = vec![
            tok(text, "The", 0, "DT", "DET", "det", 1),
            tok(text, "dog", 0, "NN", "NOUN", "nsubj", 8),
            tok(text, "of", 0, "IN", "ADP", "prep", 1),
            tok(text, "my", 0, "PRP$", "PRON", "poss", 4),
            tok(text, "friend", 0, "NN", "NOUN", "pobj", 2),
            tok(text, ",", 0, ",", "PUNCT", "punct", 8),
            tok(text, "sadly", 0, "RB", "ADV", "advmod", 8),
            tok(text, ",", 21, ",", "PUNCT", "punct", 8),
            tok(text, "died", 0, "VBD", "VERB", "ROOT", 8),
            tok(text, ".", 0, ".", "PUNCT", "punct", 8),
        ];
        let mut doc = Doc::new(text, tokens, vec![]).unwrap();
        assert_eq!(doc.depth(4), 3);
        assert_eq!(doc.depth(5), 1);

        // `root` é "friend", mas "," está mais perto da raiz da frase
        let attrs = MergeAttrs::from_token(&doc.tokens()[4]);
        doc.merge(4..6, 4, attrs).unwrap();

        let merged = &doc.tokens()[4];
        assert_eq!(merged.text, "friend,");
        assert_eq!(merged.tag, "NN");
        assert_eq!(merged.pos, "NOUN");
        assert_eq!(merged.dep, "punct");
        assert_eq!(merged.head, 7);
        assert_eq!(doc.tokens()[7].text, "died");
        assert_eq!(doc.tokens()[3].head, 4);
    }

    #[test]
    fn test_merge_reindexes_heads() {
        let mut doc = dog_doc();
        let attrs = MergeAttrs::from_token(&doc.tokens()[2]);
        doc.merge(0..3, 2, attrs).unwrap();

        let texts: Vec<&str> = doc.tokens().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["The big dog", "barked", "."]);
        assert_eq!(doc.tokens()[0].head, 1);
        assert_eq!(doc.tokens()[0].dep, "nsubj");
        assert_eq!(doc.tokens()[0].tag, "NN");
        assert_eq!(doc.tokens()[1].head, 1);
        assert_eq!(doc.tokens()[2].head, 1);
    }

    #[test]
    fn test_merge_containing_root_becomes_root() {
        let mut doc = dog_doc();
        let attrs = MergeAttrs::from_token(&doc.tokens()[3]);
        doc.merge(3..5, 3, attrs).unwrap();

        let merged = &doc.tokens()[3];
        assert_eq!(merged.text, "barked.");
        assert_eq!(merged.head, 3);
        assert_eq!(merged.dep, "ROOT");
        assert!(!merged.is_punct);
    }

    #[test]
    fn test_merge_rejects_bad_ranges() {
        let mut doc = dog_doc();
        let attrs = MergeAttrs::from_token(&doc.tokens()[0]);
        assert!(matches!(
            doc.merge(3..3, 3, attrs.clone()),
            Err(DocError::InvalidSpan { .. })
        ));
        assert!(matches!(
            doc.merge(4..9, 4, attrs.clone()),
            Err(DocError::InvalidSpan { .. })
        ));
        assert!(matches!(
            doc.merge(0..2, 3, attrs),
            Err(DocError::RootOutsideSpan { .. })
        ));
        assert_eq!(doc.len(), 5);
    }

    #[test]
    fn test_merge_remaps_entities() {
        let text = "I love New York City today";
        let tokens = vec![
            tok(text, "I", 0, "PRP", "PRON", "nsubj", 1),
            tok(text, "love", 0, "VBP", "VERB", "ROOT", 1),
            tok(text, "New", 0, "NNP", "PROPN", "compound", 4),
            tok(text, "York", 0, "NNP", "PROPN", "compound", 4),
            tok(text, "City", 0, "NNP", "PROPN", "dobj", 1),
            tok(text, "today", 0, "NN", "NOUN", "npadvmod", 1),
        ];
        let ents = vec![
            EntSpan { start: 2, end: 5, label: "GPE".into() },
            EntSpan { start: 5, end: 6, label: "DATE".into() },
        ];
        let mut doc = Doc::new(text, tokens, ents).unwrap();
        let attrs = MergeAttrs::from_token(&doc.tokens()[4]);
        doc.merge(2..5, 4, attrs).unwrap();

        assert_eq!(doc.ents()[0], EntSpan { start: 2, end: 3, label: "GPE".into() });
        assert_eq!(doc.ents()[1], EntSpan { start: 3, end: 4, label: "DATE".into() });
        assert_eq!(doc.span_text(2..3), "New York City");
    }

    #[test]
    fn test_char_offset_counts_characters() {
        let text = "Olá Paris";
        let tokens = vec![
            tok(text, "Olá", 0, "UH", "INTJ", "intj", 1),
            tok(text, "Paris", 0, "NNP", "PROPN", "ROOT", 1),
        ];
        let doc = Doc::new(text, tokens, vec![]).unwrap();
        assert_eq!(doc.tokens()[1].start, 5);
        assert_eq!(doc.char_offset(5), 4);
    }
}
