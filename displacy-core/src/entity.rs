//! # Reconhecedor de Entidades por Regras
//!
//! Combina gazetteers (listas de entidades conhecidas) com padrões sobre a forma
//! e a tag dos tokens. As regras são aplicadas em ordem de prioridade e um token
//! pertence a no máximo uma entidade:
//!
//! | Ordem | Regra                                  | Rótulo                  |
//! |-------|----------------------------------------|-------------------------|
//! | 1     | gazetteer, casamento mais longo        | do gazetteer            |
//! | 2     | título + nomes capitalizados           | `PERSON`                |
//! | 3     | nomes capitalizados + sufixo ("Corp.") | `ORG`                   |
//! | 4     | `$ 5`, `5 dollars`                     | `MONEY`                 |
//! | 5     | `5 %`, `5 percent`                     | `PERCENT`               |
//! | 6     | `10 : 30`, `5pm`                       | `TIME`                  |
//! | 7     | meses, dias, anos                      | `DATE`                  |
//! | 8     | `3rd`, "first"                         | `ORDINAL`               |
//! | 9     | números restantes                      | `CARDINAL`              |

use std::sync::OnceLock;

use regex::Regex;

use crate::doc::EntSpan;
use crate::lexicon::{DATE_WORDS, ENTITIES, ORDINAL_WORDS, ORG_SUFFIXES, PERSON_TITLES};
use crate::tagger::ordinal_pattern;

const CURRENCY_WORDS: &[&str] = &["dollars", "dollar", "euros", "euro", "pounds", "reais", "yen", "cents"];
const MAGNITUDES: &[&str] = &["hundred", "thousand", "million", "billion", "trillion"];
const MONTHS: usize = 12;

fn time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)^\d{1,2}(?:am|pm)$").expect("padrão de hora válido"))
}

fn year_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(?:1[5-9]|20)\d{2}s?$").expect("padrão de ano válido"))
}

/// Reconhecedor baseado em gazetteers e padrões
#[derive(Debug, Clone)]
pub struct EntityRecognizer {
    /// Frases em minúsculas (já divididas em tokens) → rótulo, das mais longas às mais curtas
    phrases: Vec<(Vec<String>, String)>,
    person_titles: Vec<String>,
    org_suffixes: Vec<String>,
}

impl EntityRecognizer {
    /// Reconhecedor com os gazetteers embutidos do inglês.
    pub fn english() -> Self {
        let mut recognizer = Self {
            phrases: Vec::new(),
            person_titles: PERSON_TITLES.iter().map(|s| s.to_string()).collect(),
            org_suffixes: ORG_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        };
        for (phrase, label) in ENTITIES {
            recognizer.add_entity(phrase, label);
        }
        recognizer
    }

    /// Acrescenta (ou substitui) uma frase ao gazetteer.
    pub fn add_entity(&mut self, phrase: &str, label: &str) {
        let parts: Vec<String> = phrase.split_whitespace().map(|p| p.to_lowercase()).collect();
        if parts.is_empty() {
            return;
        }
        self.phrases.retain(|(existing, _)| *existing != parts);
        self.phrases.push((parts, label.to_string()));
        self.phrases.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    }

    /// Entidades da sequência de tokens, ordenadas e sem sobreposição.
    pub fn recognize(&self, words: &[&str], tags: &[&str]) -> Vec<EntSpan> {
        let mut spans = Spans::new(words.len());
        let lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let capitalized: Vec<bool> = words.iter().map(|w| starts_uppercase(w)).collect();
        let n = words.len();

        // 1. Gazetteer
        let mut i = 0;
        while i < n {
            let found = self.phrases.iter().find(|(parts, _)| {
                i + parts.len() <= n
                    && parts.iter().enumerate().all(|(j, part)| lower[i + j] == *part)
                    && (i..i + parts.len()).any(|k| capitalized[k] || !words[k].chars().any(char::is_alphabetic))
            });
            match found {
                Some((parts, label)) if spans.claim(i, i + parts.len(), label) => i += parts.len(),
                _ => i += 1,
            }
        }

        // 2. "Dr. John Smith" → PERSON
        for i in 0..n {
            if self.person_titles.contains(&lower[i]) {
                let end = proper_run(tags, &capitalized, i + 1);
                if end > i + 1 {
                    spans.claim(i + 1, end, "PERSON");
                }
            }
        }

        // 3. "Acme Corp." → ORG
        for i in 1..n {
            if self.org_suffixes.contains(&lower[i]) && capitalized[i] {
                let start = (0..i)
                    .rev()
                    .take_while(|&k| capitalized[k] && tags[k].starts_with("NNP"))
                    .last();
                if let Some(start) = start {
                    spans.claim(start, i + 1, "ORG");
                }
            }
        }

        // 4. Valores monetários
        for i in 0..n {
            if tags[i] == "$" && i + 1 < n && tags[i + 1] == "CD" {
                spans.claim(i, number_run(tags, &lower, i + 1), "MONEY");
            } else if tags[i] == "CD" {
                let end = number_run(tags, &lower, i);
                if end < n && CURRENCY_WORDS.contains(&lower[end].as_str()) {
                    spans.claim(i, end + 1, "MONEY");
                }
            }
        }

        // 5. Percentuais
        for i in 0..n.saturating_sub(1) {
            if tags[i] == "CD" && matches!(lower[i + 1].as_str(), "%" | "percent") {
                spans.claim(i, i + 2, "PERCENT");
            }
        }

        // 6. Horas
        for i in 0..n {
            if time_pattern().is_match(words[i]) {
                spans.claim(i, i + 1, "TIME");
            } else if i + 2 < n && tags[i] == "CD" && words[i + 1] == ":" && tags[i + 2] == "CD" {
                let end = if i + 3 < n && matches!(lower[i + 3].as_str(), "am" | "pm" | "a.m." | "p.m.") {
                    i + 4
                } else {
                    i + 3
                };
                spans.claim(i, end, "TIME");
            }
        }

        // 7. Datas: "March 5 , 2020", "2010", "today"
        for i in 0..n {
            let month = DATE_WORDS[..MONTHS].contains(&lower[i].as_str()) && capitalized[i] && tags[i] != "MD";
            let weekday = DATE_WORDS[MONTHS..].contains(&lower[i].as_str());
            if month {
                let mut end = i + 1;
                if end < n && tags[end] == "CD" && lower[end].len() <= 2 {
                    end += 1;
                }
                if end + 1 < n && words[end] == "," && year_pattern().is_match(words[end + 1]) {
                    end += 2;
                } else if end < n && year_pattern().is_match(words[end]) {
                    end += 1;
                }
                spans.claim(i, end, "DATE");
            } else if weekday || (tags[i] == "CD" && year_pattern().is_match(words[i])) {
                spans.claim(i, i + 1, "DATE");
            }
        }

        // 8. Ordinais
        for i in 0..n {
            if ordinal_pattern().is_match(words[i]) || ORDINAL_WORDS.contains(&lower[i].as_str()) {
                spans.claim(i, i + 1, "ORDINAL");
            }
        }

        // 9. Números restantes
        let mut i = 0;
        while i < n {
            if tags[i] == "CD" {
                let end = number_run(tags, &lower, i);
                spans.claim(i, end, "CARDINAL");
                i = end;
            } else {
                i += 1;
            }
        }

        spans.into_sorted()
    }
}

impl Default for EntityRecognizer {
    fn default() -> Self {
        Self::english()
    }
}

/// Entidades aceitas até agora e os tokens que já pertencem a alguma.
struct Spans {
    claimed: Vec<bool>,
    spans: Vec<EntSpan>,
}

impl Spans {
    fn new(len: usize) -> Self {
        Self {
            claimed: vec![false; len],
            spans: Vec::new(),
        }
    }

    /// Aceita a entidade se nenhum de seus tokens já foi reivindicado.
    fn claim(&mut self, start: usize, end: usize, label: &str) -> bool {
        if start >= end || end > self.claimed.len() || self.claimed[start..end].iter().any(|&c| c) {
            return false;
        }
        self.claimed[start..end].iter_mut().for_each(|c| *c = true);
        self.spans.push(EntSpan {
            start,
            end,
            label: label.to_string(),
        });
        true
    }

    fn into_sorted(mut self) -> Vec<EntSpan> {
        self.spans.sort_by_key(|s| s.start);
        self.spans
    }
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().map(char::is_uppercase).unwrap_or(false)
}

/// Fim (exclusivo) da sequência de nomes próprios capitalizados a partir de `start`.
fn proper_run(tags: &[&str], capitalized: &[bool], start: usize) -> usize {
    let mut end = start;
    while end < tags.len() && capitalized[end] && tags[end].starts_with("NNP") {
        end += 1;
    }
    end
}

/// Fim (exclusivo) de um número composto: "5", "2.5 million", "two hundred".
fn number_run(tags: &[&str], lower: &[String], start: usize) -> usize {
    let mut end = start;
    while end < tags.len() && (tags[end] == "CD" || (end > start && MAGNITUDES.contains(&lower[end].as_str()))) {
        end += 1;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::PosTagger;
    use crate::tokenizer::tokenize;

    fn entities(text: &str) -> Vec<(String, String)> {
        entities_with(&EntityRecognizer::english(), text)
    }

    fn entities_with(recognizer: &EntityRecognizer, text: &str) -> Vec<(String, String)> {
        let tokens = tokenize(text);
        let tags = PosTagger::english().tag(&tokens);
        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
        recognizer
            .recognize(&words, &tags)
            .into_iter()
            .map(|s| (words[s.start..s.end].join(" "), s.label))
            .collect()
    }

    fn pair(text: &str, label: &str) -> (String, String) {
        (text.to_string(), label.to_string())
    }

    #[test]
    fn test_gazetteer_prefers_longest_match() {
        assert_eq!(
            entities("I love New York City today"),
            vec![pair("New York City", "GPE"), pair("today", "DATE")]
        );
    }

    #[test]
    fn test_gazetteer_requires_capitalization() {
        assert!(entities("I ate an apple").is_empty());
        assert_eq!(entities("Apple sells phones"), vec![pair("Apple", "ORG")]);
    }

    #[test]
    fn test_title_marks_person() {
        assert_eq!(entities("Dr. John Smith arrived"), vec![pair("John Smith", "PERSON")]);
    }

    #[test]
    fn test_org_suffix() {
        assert_eq!(entities("He joined Acme Corp. last year"), vec![pair("Acme Corp.", "ORG")]);
    }

    #[test]
    fn test_numeric_entities() {
        assert_eq!(
            entities("It cost $ 5 million and 20 % more in 2010"),
            vec![pair("$ 5 million", "MONEY"), pair("20 %", "PERCENT"), pair("2010", "DATE")]
        );
        assert_eq!(entities("She finished 3rd of 12"), vec![pair("3rd", "ORDINAL"), pair("12", "CARDINAL")]);
    }

    #[test]
    fn test_dates_and_times() {
        assert_eq!(
            entities("We met on March 5 , 2020 at 5pm"),
            vec![pair("March 5 , 2020", "DATE"), pair("5pm", "TIME")]
        );
    }

    #[test]
    fn test_custom_entities() {
        let mut recognizer = EntityRecognizer::english();
        recognizer.add_entity("Flying Spaghetti Monster", "PERSON");
        assert_eq!(
            entities_with(&recognizer, "Pastafarians love the Flying Spaghetti Monster"),
            vec![pair("Pastafarians", "NORP"), pair("Flying Spaghetti Monster", "PERSON")]
        );
    }
}
