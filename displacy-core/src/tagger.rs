//! # Etiquetador Morfossintático (POS) e Lematizador
//!
//! Atribui a cada token uma tag do Penn Treebank em três camadas:
//!
//! 1. **Forma**: pontuação, símbolos, números e ordinais por padrão de caracteres.
//! 2. **Léxico**: classes fechadas, formas irregulares e radicais conhecidos
//!    ("announced" → radical "announce" → `VBD`).
//! 3. **Contexto**: ajustes locais dentro da sentença (`VB` após modal, `VBN` após
//!    auxiliar, "her" possessivo vs. objeto, "that" relativo vs. determinante).
//!
//! A tag grossa (universal) é derivada da fina por [`coarse_pos`].

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;

use crate::lexicon::{ADJECTIVES, CLOSED_CLASS, IRREGULAR_LEMMAS, IRREGULAR_VERB_TAGS, VERBS};
use crate::tokenizer::{is_punct, RawToken};

pub(crate) fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[+-]?\d+(?:[.,]\d+)*$").expect("padrão numérico válido"))
}

pub(crate) fn ordinal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)^\d+(?:st|nd|rd|th)$").expect("padrão ordinal válido"))
}

/// Etiquetador baseado em léxico + morfologia + contexto.
#[derive(Debug, Clone)]
pub struct PosTagger {
    /// Palavra em minúsculas → tag fixa
    lexicon: HashMap<String, String>,
    verbs: HashSet<String>,
    adjectives: HashSet<String>,
    irregular_tags: HashMap<String, String>,
    irregular_lemmas: HashMap<String, String>,
}

impl PosTagger {
    /// Etiquetador com o léxico embutido do inglês.
    pub fn english() -> Self {
        Self {
            lexicon: CLOSED_CLASS
                .iter()
                .map(|(w, t)| (w.to_string(), t.to_string()))
                .collect(),
            verbs: VERBS.iter().map(|v| v.to_string()).collect(),
            adjectives: ADJECTIVES.iter().map(|a| a.to_string()).collect(),
            irregular_tags: IRREGULAR_VERB_TAGS
                .iter()
                .map(|(w, t)| (w.to_string(), t.to_string()))
                .collect(),
            irregular_lemmas: IRREGULAR_LEMMAS
                .iter()
                .map(|(w, l)| (w.to_string(), l.to_string()))
                .collect(),
        }
    }

    /// Acrescenta uma palavra ao léxico. Radicais `VB`/`JJ` também alimentam a morfologia.
    pub fn add_word(&mut self, word: &str, tag: &str) {
        let lower = word.to_lowercase();
        match tag {
            "VB" => {
                self.verbs.insert(lower);
            }
            "JJ" => {
                self.adjectives.insert(lower);
            }
            _ => {
                self.lexicon.insert(lower, tag.to_string());
            }
        }
    }

    /// Etiqueta uma sequência de tokens (podendo conter várias sentenças).
    pub fn tag(&self, tokens: &[RawToken]) -> Vec<String> {
        let mut tags: Vec<String> = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                let sentence_initial = i == 0 || tokens[i - 1].sentence != token.sentence;
                self.tag_form(token, tokens.get(i + 1), sentence_initial)
            })
            .collect();
        self.apply_context(tokens, &mut tags);
        tags
    }

    fn tag_form(&self, token: &RawToken, next: Option<&RawToken>, sentence_initial: bool) -> String {
        let text = token.text.as_str();
        let lower = text.to_lowercase();

        if let Some(tag) = self.lexicon.get(&lower) {
            return tag.clone();
        }
        if is_punct(text) {
            return punct_tag(text, next.map(|n| n.start == token.end).unwrap_or(false)).to_string();
        }
        if matches!(text, "$" | "€" | "£" | "¥" | "₹") {
            return "$".to_string();
        }
        if number_pattern().is_match(text) {
            return "CD".to_string();
        }
        if ordinal_pattern().is_match(text) {
            return "JJ".to_string();
        }
        if !text.chars().any(char::is_alphanumeric) {
            return "SYM".to_string();
        }
        if let Some(tag) = self.irregular_tags.get(&lower) {
            return tag.clone();
        }
        if let Some((_, tag)) = self.verb_form(&lower) {
            return tag.to_string();
        }
        if let Some((_, tag)) = self.adjective_form(&lower) {
            return tag.to_string();
        }

        let capitalized = text.chars().next().map(char::is_uppercase).unwrap_or(false);
        if capitalized && !(sentence_initial && self.looks_common(&lower)) {
            return "NNP".to_string();
        }
        morphology_tag(&lower).to_string()
    }

    /// Uma palavra capitalizada no início de sentença só é nome próprio se não
    /// parecer uma palavra comum pela morfologia.
    fn looks_common(&self, lower: &str) -> bool {
        lower.len() > 4 && (lower.ends_with("ly") || lower.ends_with("ing") || lower.ends_with("ed"))
    }

    /// Radical + tag de uma forma verbal regular de um verbo conhecido.
    fn verb_form(&self, lower: &str) -> Option<(String, &'static str)> {
        if self.verbs.contains(lower) {
            return Some((lower.to_string(), "VB"));
        }
        let candidates: [(&str, &str, &'static str); 9] = [
            ("ies", "y", "VBZ"),
            ("es", "", "VBZ"),
            ("s", "", "VBZ"),
            ("ied", "y", "VBD"),
            ("ed", "", "VBD"),
            ("ed", "e", "VBD"),
            ("ing", "", "VBG"),
            ("ing", "e", "VBG"),
            ("d", "", "VBD"),
        ];
        for (suffix, replacement, tag) in candidates {
            if let Some(stem) = lower.strip_suffix(suffix) {
                if stem.is_empty() {
                    continue;
                }
                let base = format!("{}{}", stem, replacement);
                if self.verbs.contains(&base) {
                    return Some((base, tag));
                }
                // Consoante dobrada: "stopped" → "stop", "running" → "run"
                if replacement.is_empty() && (tag == "VBD" || tag == "VBG") {
                    if let Some(undoubled) = undouble(stem) {
                        if self.verbs.contains(undoubled) {
                            return Some((undoubled.to_string(), tag));
                        }
                    }
                }
            }
        }
        None
    }

    /// Radical + tag de uma forma adjetival (grau comparativo/superlativo).
    fn adjective_form(&self, lower: &str) -> Option<(String, &'static str)> {
        if self.adjectives.contains(lower) {
            return Some((lower.to_string(), "JJ"));
        }
        let candidates: [(&str, &str, &'static str); 6] = [
            ("ier", "y", "JJR"),
            ("er", "", "JJR"),
            ("r", "", "JJR"),
            ("iest", "y", "JJS"),
            ("est", "", "JJS"),
            ("st", "", "JJS"),
        ];
        for (suffix, replacement, tag) in candidates {
            if let Some(stem) = lower.strip_suffix(suffix) {
                if stem.is_empty() {
                    continue;
                }
                let base = format!("{}{}", stem, replacement);
                if self.adjectives.contains(&base) {
                    return Some((base, tag));
                }
                if let Some(undoubled) = undouble(stem) {
                    if self.adjectives.contains(undoubled) {
                        return Some((undoubled.to_string(), tag));
                    }
                }
            }
        }
        None
    }

    fn apply_context(&self, tokens: &[RawToken], tags: &mut [String]) {
        for i in 0..tokens.len() {
            let same_sentence = |j: usize| tokens[j].sentence == tokens[i].sentence;
            let prev = (i > 0 && same_sentence(i - 1)).then(|| tags[i - 1].clone());
            // Anterior ignorando advérbios ("has not been")
            let prev_non_adv = (0..i)
                .rev()
                .take_while(|&j| same_sentence(j))
                .find(|&j| !tags[j].starts_with("RB"));
            let prev_lower = prev_non_adv.map(|j| tokens[j].text.to_lowercase());
            let next = (i + 1 < tokens.len() && same_sentence(i + 1)).then(|| tags[i + 1].clone());
            let lower = tokens[i].text.to_lowercase();
            let prev_tag = prev.as_deref().unwrap_or("");

            let current = tags[i].clone();
            match current.as_str() {
                "VB" => {
                    let after_aux = prev_non_adv
                        .map(|j| tags[j] == "MD" || tags[j] == "TO" || is_do(&tokens[j].text))
                        .unwrap_or(false);
                    tags[i] = if after_aux || prev.is_none() {
                        "VB"
                    } else if matches!(prev_tag, "DT" | "PRP$" | "JJ" | "POS" | "CD") {
                        "NN"
                    } else {
                        "VBP"
                    }
                    .to_string();
                }
                "VBZ" if matches!(prev_tag, "DT" | "PRP$" | "JJ" | "CD") => {
                    tags[i] = "NNS".to_string();
                }
                "VBD" => {
                    let after_have_or_be = prev_lower
                        .as_deref()
                        .map(|w| is_have(w) || is_be(w))
                        .unwrap_or(false);
                    if after_have_or_be {
                        tags[i] = "VBN".to_string();
                    } else if matches!(prev_tag, "DT" | "PRP$") {
                        tags[i] = "JJ".to_string();
                    }
                }
                "PRP$" if lower == "her" => {
                    let before_nominal = next
                        .as_deref()
                        .map(|t| t.starts_with("NN") || t.starts_with("JJ") || t == "CD")
                        .unwrap_or(false);
                    if !before_nominal {
                        tags[i] = "PRP".to_string();
                    }
                }
                "DT" if lower == "that" => {
                    let before_verb = next.as_deref().map(is_verb_tag).unwrap_or(false);
                    if prev_tag.starts_with("NN") && before_verb {
                        tags[i] = "WDT".to_string();
                    } else if is_verb_tag(prev_tag) && !next.as_deref().map(|t| t.starts_with("NN")).unwrap_or(false) {
                        tags[i] = "IN".to_string();
                    }
                }
                "POS" if lower == "'s" || lower == "\u{2019}s" => {
                    if matches!(prev_tag, "PRP" | "EX" | "WP" | "WDT" | "DT") {
                        tags[i] = "VBZ".to_string();
                    }
                }
                "IN" if lower == "like" => {
                    if matches!(prev_tag, "PRP" | "NNS" | "NNP" | "NNPS") {
                        tags[i] = "VBP".to_string();
                    } else if matches!(prev_tag, "MD" | "TO") {
                        tags[i] = "VB".to_string();
                    }
                }
                _ => {}
            }
        }
    }

    /// Lema de uma palavra dada sua tag fina.
    pub fn lemma(&self, text: &str, tag: &str) -> String {
        let lower = text.to_lowercase();
        if lower == "i" {
            return "I".to_string();
        }
        if let Some(lemma) = self.irregular_lemmas.get(&lower) {
            return lemma.clone();
        }
        match tag {
            "NNP" | "NNPS" => text.to_string(),
            "VB" | "VBP" | "VBZ" | "VBD" | "VBN" | "VBG" => self
                .verb_form(&lower)
                .map(|(base, _)| base)
                .unwrap_or_else(|| strip_verb_suffix(&lower)),
            "JJR" | "JJS" => self
                .adjective_form(&lower)
                .map(|(base, _)| base)
                .unwrap_or(lower),
            "NNS" => singular(&lower),
            _ => lower,
        }
    }
}

impl Default for PosTagger {
    fn default() -> Self {
        Self::english()
    }
}

/// Tag universal (UD) correspondente a uma tag Penn Treebank.
pub fn coarse_pos(tag: &str) -> &'static str {
    match tag {
        "." | "," | ":" | "``" | "''" | "-LRB-" | "-RRB-" | "HYPH" | "NFP" => "PUNCT",
        "$" | "SYM" => "SYM",
        "CC" => "CCONJ",
        "CD" => "NUM",
        "DT" | "PDT" | "WDT" => "DET",
        "EX" | "PRP" | "PRP$" | "WP" | "WP$" => "PRON",
        "IN" | "RP" => "ADP",
        "JJ" | "JJR" | "JJS" => "ADJ",
        "MD" => "AUX",
        "NN" | "NNS" => "NOUN",
        "NNP" | "NNPS" => "PROPN",
        "POS" | "TO" => "PART",
        "RB" | "RBR" | "RBS" | "WRB" => "ADV",
        "UH" => "INTJ",
        "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" => "VERB",
        _ => "X",
    }
}

pub(crate) fn is_verb_tag(tag: &str) -> bool {
    tag.starts_with("VB") || tag == "MD"
}

pub(crate) fn is_be(word: &str) -> bool {
    matches!(
        word.to_lowercase().as_str(),
        "be" | "is" | "am" | "are" | "was" | "were" | "been" | "being" | "'re" | "'m"
    )
}

pub(crate) fn is_have(word: &str) -> bool {
    matches!(word.to_lowercase().as_str(), "have" | "has" | "had" | "having" | "'ve")
}

fn is_do(word: &str) -> bool {
    matches!(word.to_lowercase().as_str(), "do" | "does" | "did")
}

fn punct_tag(text: &str, attached_to_next: bool) -> &'static str {
    match text {
        "." | "!" | "?" | "…" | "?!" | "!?" | "。" | "！" | "？" | "⸮" => ".",
        "," | "、" | "，" | "،" => ",",
        ":" | ";" | "--" | "—" | "–" | "..." => ":",
        "“" | "‘" | "``" => "``",
        "”" | "’" | "''" => "''",
        "\"" | "'" if attached_to_next => "``",
        "\"" | "'" => "''",
        "(" | "[" | "{" => "-LRB-",
        ")" | "]" | "}" => "-RRB-",
        "-" => "HYPH",
        "%" => "NN",
        "&" => "CC",
        "#" => "$",
        _ if text.chars().all(|c| matches!(c, '.' | '!' | '?')) => ".",
        _ => "NFP",
    }
}

/// Tag por sufixo para palavras fora do léxico.
fn morphology_tag(lower: &str) -> &'static str {
    let long = lower.chars().count() > 4;
    if long && lower.ends_with("ly") {
        "RB"
    } else if long && lower.ends_with("ing") {
        "VBG"
    } else if long && lower.ends_with("ed") {
        "VBD"
    } else if ["ous", "ful", "ive", "able", "ible", "less", "ish", "ical", "ic", "al"]
        .iter()
        .any(|s| long && lower.ends_with(s))
    {
        "JJ"
    } else if lower.len() > 3
        && lower.ends_with('s')
        && !["ss", "us", "is"].iter().any(|s| lower.ends_with(s))
    {
        "NNS"
    } else {
        "NN"
    }
}

/// Remove a última letra quando ela é uma consoante dobrada ("stopp" → "stop").
fn undouble(stem: &str) -> Option<&str> {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n >= 3 && bytes[n - 1] == bytes[n - 2] && !b"aeiou".contains(&bytes[n - 1]) && bytes[n - 1].is_ascii_alphabetic() {
        Some(&stem[..n - 1])
    } else {
        None
    }
}

fn strip_verb_suffix(lower: &str) -> String {
    for suffix in ["ing", "ied", "ed", "es", "s"] {
        if let Some(stem) = lower.strip_suffix(suffix) {
            if stem.len() > 2 {
                return if suffix == "ied" {
                    format!("{}y", stem)
                } else {
                    stem.to_string()
                };
            }
        }
    }
    lower.to_string()
}

fn singular(lower: &str) -> String {
    if let Some(stem) = lower.strip_suffix("ies") {
        if stem.len() > 1 {
            return format!("{}y", stem);
        }
    }
    for suffix in ["sses", "shes", "ches", "xes", "zes"] {
        if lower.ends_with(suffix) {
            return lower[..lower.len() - 2].to_string();
        }
    }
    if lower.ends_with('s') && !lower.ends_with("ss") && lower.len() > 3 {
        return lower[..lower.len() - 1].to_string();
    }
    lower.to_string()
}
