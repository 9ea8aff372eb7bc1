//! # Tokenizador para Inglês
//!
//! Divide o texto bruto em tokens (palavras, números, pontuação) preservando os
//! offsets de byte no texto original e atribui cada token a uma sentença.
//!
//! ## Regras
//!
//! - Palavras separadas por espaços e pontuação; hífen interno fica na palavra
//!   ("well-known").
//! - Abreviações conhecidas e siglas com pontos mantêm o ponto ("Dr.", "U.S.").
//! - Números com separadores decimais/milhar ficam juntos ("3.5", "1,000").
//! - Clíticos viram tokens próprios: "don't" → "do" + "n't", "it's" → "it" + "'s".
//! - Fronteiras de sentença vêm da segmentação Unicode (UAX #29), ignorando as que
//!   caem logo após uma abreviação.
//!
//! ## Exemplo
//!
//! ```rust
//! use displacy_core::tokenizer::tokenize;
//!
//! let tokens = tokenize("Dr. Smith didn't go.");
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["Dr.", "Smith", "did", "n't", "go", "."]);
//! ```

use std::sync::OnceLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Um token recém-extraído do texto, ainda sem anotações.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub text: String,
    /// Offset de byte inicial (inclusivo).
    pub start: usize,
    /// Offset de byte final (exclusivo).
    pub end: usize,
    /// Índice da sentença a que o token pertence.
    pub sentence: usize,
}

/// Abreviações que não terminam sentença
const ABBREVIATIONS: &[&str] = &[
    "Mr", "Mrs", "Ms", "Dr", "Prof", "Sr", "Jr", "St", "Mt", "Gen", "Gov", "Sen", "Rep",
    "Col", "Capt", "Lt", "Sgt", "Inc", "Corp", "Ltd", "Co", "vs", "etc", "approx", "Jan",
    "Feb", "Mar", "Apr", "Jun", "Jul", "Aug", "Sep", "Sept", "Oct", "Nov", "Dec", "No",
    "Fig", "Vol",
];

/// Clíticos separados do radical (comparação em minúsculas, apóstrofo ASCII)
const CLITICS: &[&str] = &["'s", "'re", "'ll", "'ve", "'m", "'d"];

/// Tokeniza o texto e atribui sentenças.
pub fn tokenize(text: &str) -> Vec<RawToken> {
    let mut tokens = split_words(text);
    assign_sentences(text, &mut tokens);
    tokens
}

fn punct_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\p{P}+$").expect("padrão de pontuação válido"))
}

/// `true` se o texto é inteiramente pontuação (categoria Unicode P*).
///
/// Símbolos como `$`, `+` e `=` não contam como pontuação.
pub fn is_punct(text: &str) -> bool {
    punct_pattern().is_match(text)
}

fn split_words(text: &str) -> Vec<RawToken> {
    let mut tokens = Vec::new();
    let mut current_start = 0;
    let mut current_text = String::new();
    let chars: Vec<(usize, char)> = text.char_indices().collect();

    for (i, &(byte_pos, ch)) in chars.iter().enumerate() {
        let next = chars.get(i + 1).map(|(_, c)| *c);
        let next_is_alnum = next.map(char::is_alphanumeric).unwrap_or(false);
        let next_is_digit = next.map(|c| c.is_ascii_digit()).unwrap_or(false);
        let current_is_num = !current_text.is_empty() && current_text.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',');

        if ch.is_alphanumeric() {
            if current_text.is_empty() {
                current_start = byte_pos;
            }
            current_text.push(ch);
        } else if ch == '-' && !current_text.is_empty() && next_is_alnum {
            current_text.push(ch);
        } else if (ch == '\'' || ch == '\u{2019}') && !current_text.is_empty() && next.map(char::is_alphabetic).unwrap_or(false) {
            current_text.push(ch);
        } else if (ch == '.' || ch == ',') && current_is_num && next_is_digit {
            current_text.push(ch);
        } else if ch == '.' && !current_text.is_empty() && keeps_period(&current_text, next) {
            current_text.push(ch);
        } else if ch.is_whitespace() {
            flush_word(&mut tokens, &mut current_text, current_start, byte_pos);
        } else {
            flush_word(&mut tokens, &mut current_text, current_start, byte_pos);
            push_token(&mut tokens, ch.to_string(), byte_pos, byte_pos + ch.len_utf8());
        }
    }

    flush_word(&mut tokens, &mut current_text, current_start, text.len());
    tokens
}

/// Decide se o ponto após `word` pertence à palavra (abreviação ou sigla).
fn keeps_period(word: &str, next: Option<char>) -> bool {
    if ABBREVIATIONS.contains(&word) {
        return true;
    }
    // Siglas: segmentos de uma letra separados por ponto ("U", "U.S")
    let segments: Vec<&str> = word.split('.').collect();
    let initialism = segments
        .iter()
        .all(|s| s.chars().count() == 1 && s.chars().all(char::is_alphabetic));
    if !initialism {
        return false;
    }
    // "U" só mantém o ponto se a sigla continuar ("U.S"); "U.S" sempre mantém
    segments.len() > 1 || next.map(char::is_alphabetic).unwrap_or(false)
}

/// Fecha a palavra acumulada, separando clíticos finais.
fn flush_word(tokens: &mut Vec<RawToken>, word: &mut String, start: usize, end: usize) {
    if word.is_empty() {
        return;
    }
    match clitic_split(word) {
        Some(split) => {
            push_token(tokens, word[..split].to_string(), start, start + split);
            push_token(tokens, word[split..].to_string(), start + split, end);
        }
        None => push_token(tokens, word.clone(), start, end),
    }
    word.clear();
}

/// Offset de byte onde começa o clítico final da palavra, se houver.
fn clitic_split(word: &str) -> Option<usize> {
    let apostrophe = word.rfind(|c: char| c == '\'' || c == '\u{2019}')?;
    if apostrophe == 0 {
        return None;
    }
    let suffix = word[apostrophe..].replace('\u{2019}', "'").to_lowercase();
    if CLITICS.contains(&suffix.as_str()) {
        return Some(apostrophe);
    }
    // "don't" → "do" + "n't"
    let before = &word[..apostrophe];
    if suffix == "'t" && before.len() > 1 && before.to_lowercase().ends_with('n') {
        return Some(apostrophe - 1);
    }
    None
}

fn push_token(tokens: &mut Vec<RawToken>, text: String, start: usize, end: usize) {
    tokens.push(RawToken {
        text,
        start,
        end,
        sentence: 0,
    });
}

fn assign_sentences(text: &str, tokens: &mut [RawToken]) {
    let bounds: Vec<usize> = text
        .split_sentence_bound_indices()
        .map(|(i, _)| i)
        .skip(1)
        .collect();
    let mut next_bound = 0;
    let mut sentence = 0;

    for k in 0..tokens.len() {
        let mut crossed = false;
        while next_bound < bounds.len() && bounds[next_bound] <= tokens[k].start {
            crossed = true;
            next_bound += 1;
        }
        if crossed && k > 0 && !ends_with_abbreviation(&tokens[k - 1].text) {
            sentence += 1;
        }
        tokens[k].sentence = sentence;
    }
}

fn ends_with_abbreviation(token: &str) -> bool {
    token.len() > 1 && token.ends_with('.')
}
