//! # Analisador de Dependências Heurístico
//!
//! Constrói uma árvore de dependências por sentença a partir das tags POS, em
//! três passos:
//!
//! 1. **Agrupamento**: sintagmas nominais (`the big dog`) e grupos verbais
//!    (`has not been running`) viram unidades; as relações internas (`det`, `amod`,
//!    `compound`, `aux`, `neg`...) são atribuídas na hora.
//! 2. **Raiz**: o verbo principal da primeira oração não subordinada; sem verbos,
//!    o primeiro núcleo nominal.
//! 3. **Orações**: percorre as unidades da esquerda para a direita ligando sujeitos,
//!    objetos, preposições, coordenação e orações subordinadas.
//!
//! O resultado sempre é uma árvore: tokens sem head ou em ciclo são religados à
//! raiz com a relação `dep`.

use crate::tagger::{is_be, is_verb_tag};

/// Relações que o analisador pode emitir.
pub const DEP_LABELS: &[&str] = &[
    "ROOT", "acl", "acomp", "advcl", "advmod", "amod", "appos", "attr", "aux", "auxpass",
    "case", "cc", "ccomp", "compound", "conj", "dative", "dep", "det", "dobj", "expl",
    "intj", "mark", "neg", "npadvmod", "nsubj", "nsubjpass", "nummod", "pobj", "poss",
    "predet", "prep", "prt", "punct", "relcl", "xcomp",
];

/// Conjunções que abrem oração subordinada
const SUBORDINATORS: &[&str] = &[
    "because", "if", "although", "though", "unless", "whether", "while", "when",
];

/// Verbos de ligação: o sintagma nominal seguinte é `attr`, não `dobj`
const LINKING_VERBS: &[&str] = &["become", "became", "becomes", "seem", "seems", "seemed", "remain", "remains"];

const TEMPORAL_NOUNS: &[&str] = &["today", "yesterday", "tomorrow", "tonight"];

/// Head (índice relativo à sentença) e relação de um token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attachment {
    pub head: usize,
    pub dep: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Noun { head: usize },
    Verb { start: usize, main: usize, passive: bool },
    Word(usize),
}

/// Estado pendente enquanto as unidades são percorridas.
#[derive(Debug, Default)]
struct ClauseState {
    last_verb: Option<usize>,
    objects: usize,
    last_noun: Option<usize>,
    /// Último núcleo de conteúdo (alvo de coordenação)
    last_head: Option<usize>,
    subject: Option<usize>,
    suspended_subject: Option<usize>,
    preposition: Option<usize>,
    /// (conjunção, primeiro conjunto)
    conjunction: Option<(usize, usize)>,
    possessor: Option<usize>,
    /// (marcador, relação da oração)
    mark: Option<(usize, &'static str)>,
    /// (pronome relativo, antecedente)
    relative: Option<(usize, usize)>,
    /// Tokens que se ligam ao próximo verbo
    pre_verbal: Vec<(usize, &'static str)>,
    after_comma: bool,
}

/// Analisa uma sentença. `words` e `tags` têm o mesmo tamanho.
pub fn parse_sentence(words: &[&str], tags: &[&str]) -> Vec<Attachment> {
    if words.is_empty() {
        return Vec::new();
    }
    let mut parser = SentenceParser::new(words, tags);
    let units = parser.chunk_units();
    let root = parser.choose_root(&units);
    parser.attach_clauses(&units, root);
    parser.finish(root)
}

struct SentenceParser<'a> {
    lower: Vec<String>,
    tags: &'a [&'a str],
    heads: Vec<Option<usize>>,
    deps: Vec<&'static str>,
}

impl<'a> SentenceParser<'a> {
    fn new(words: &[&str], tags: &'a [&'a str]) -> Self {
        Self {
            lower: words.iter().map(|w| w.to_lowercase()).collect(),
            tags,
            heads: vec![None; words.len()],
            deps: vec!["dep"; words.len()],
        }
    }

    fn len(&self) -> usize {
        self.tags.len()
    }

    fn set(&mut self, child: usize, head: usize, dep: &'static str) {
        if child != head {
            self.heads[child] = Some(head);
            self.deps[child] = dep;
        }
    }

    // ------------------------------------------------------------------
    // Agrupamento
    // ------------------------------------------------------------------

    fn chunk_units(&mut self) -> Vec<Unit> {
        let n = self.len();
        let mut units = Vec::new();
        let mut i = 0;

        while i < n {
            let tag = self.tags[i];
            if self.starts_verb_group(i) {
                let (end, unit) = self.verb_group(i);
                units.push(unit);
                i = end;
            } else if tag == "PRP" {
                units.push(Unit::Noun { head: i });
                i += 1;
            } else if is_np_modifier(tag) {
                let mut j = i;
                let mut last_nominal = None;
                while j < n && is_np_modifier(self.tags[j]) {
                    let determiner = matches!(self.tags[j], "DT" | "PDT" | "PRP$" | "WP$");
                    if j > i && determiner && last_nominal.is_some() {
                        break;
                    }
                    if is_nominal_head(self.tags[j]) {
                        last_nominal = Some(j);
                    }
                    j += 1;
                }
                match last_nominal {
                    Some(head) => {
                        self.attach_np_internal(i, head);
                        units.push(Unit::Noun { head });
                        i = head + 1;
                    }
                    // Demonstrativo sozinho funciona como pronome ("this is good")
                    None if j - i == 1 && tag == "DT" => {
                        units.push(Unit::Noun { head: i });
                        i += 1;
                    }
                    None => {
                        units.extend((i..j).map(Unit::Word));
                        i = j;
                    }
                }
            } else {
                units.push(Unit::Word(i));
                i += 1;
            }
        }
        units
    }

    fn attach_np_internal(&mut self, start: usize, head: usize) {
        for k in start..head {
            let dep = match self.tags[k] {
                "DT" => "det",
                "PDT" => "predet",
                "PRP$" | "WP$" => "poss",
                "CD" if self.tags[head] == "CD" => "compound",
                "CD" => "nummod",
                "JJ" | "JJR" | "JJS" => "amod",
                _ => "compound",
            };
            self.set(k, head, dep);
        }
    }

    fn starts_verb_group(&self, i: usize) -> bool {
        let tag = self.tags[i];
        is_verb_tag(tag) || (tag == "TO" && self.tags.get(i + 1).map(|t| t.starts_with("VB")).unwrap_or(false))
    }

    /// Grupo verbal a partir de `i`: auxiliares, advérbios intermediários e o verbo principal.
    fn verb_group(&mut self, i: usize) -> (usize, Unit) {
        let n = self.len();
        let mut members = vec![i];
        let mut j = i + 1;

        loop {
            let last = members[members.len() - 1];
            if !self.can_chain(last) {
                break;
            }
            let mut k = j;
            while k < n && self.tags[k].starts_with("RB") {
                k += 1;
            }
            if k < n && self.tags[k].starts_with("VB") {
                members.extend(j..=k);
                j = k + 1;
            } else {
                break;
            }
        }

        let main = members[members.len() - 1];
        let participle = self.tags[main] == "VBN";
        let mut passive = false;
        for &k in &members[..members.len() - 1] {
            let dep = match self.tags[k] {
                t if t.starts_with("RB") => {
                    if matches!(self.lower[k].as_str(), "not" | "n't" | "never") {
                        "neg"
                    } else {
                        "advmod"
                    }
                }
                _ if participle && is_be(&self.lower[k]) => {
                    passive = true;
                    "auxpass"
                }
                _ => "aux",
            };
            self.set(k, main, dep);
        }
        (j, Unit::Verb { start: i, main, passive })
    }

    /// Se o token pode ser seguido por outro verbo no mesmo grupo.
    fn can_chain(&self, i: usize) -> bool {
        let word = self.lower[i].as_str();
        matches!(self.tags[i], "MD" | "TO")
            || is_be(word)
            || matches!(word, "have" | "has" | "had" | "'ve" | "do" | "does" | "did" | "'d" | "'ll")
    }

    // ------------------------------------------------------------------
    // Raiz
    // ------------------------------------------------------------------

    fn choose_root(&self, units: &[Unit]) -> usize {
        let mut subordinate = false;
        let mut first_verb = None;

        for (u, unit) in units.iter().enumerate() {
            match *unit {
                Unit::Verb { start, main, .. } => {
                    first_verb.get_or_insert(main);
                    if !subordinate && self.tags[start] != "TO" {
                        return main;
                    }
                    subordinate = false;
                }
                Unit::Word(i) if self.opens_clause(i, units, u) => subordinate = true,
                _ => {}
            }
        }

        first_verb
            .or_else(|| {
                units.iter().enumerate().find_map(|(u, unit)| match unit {
                    Unit::Noun { head } if !self.followed_by_possessive(units, u) => Some(*head),
                    _ => None,
                })
            })
            .or_else(|| (0..self.len()).find(|&i| !is_punct_tag(self.tags[i])))
            .unwrap_or(0)
    }

    fn opens_clause(&self, i: usize, units: &[Unit], u: usize) -> bool {
        let word = self.lower[i].as_str();
        match self.tags[i] {
            "IN" | "WRB" => SUBORDINATORS.contains(&word) || word == "that",
            "WDT" | "WP" => matches!(u.checked_sub(1).map(|p| units[p]), Some(Unit::Noun { .. })),
            _ => false,
        }
    }

    fn followed_by_possessive(&self, units: &[Unit], u: usize) -> bool {
        matches!(units.get(u + 1), Some(Unit::Word(k)) if self.tags[*k] == "POS")
    }

    // ------------------------------------------------------------------
    // Orações
    // ------------------------------------------------------------------

    fn attach_clauses(&mut self, units: &[Unit], root: usize) {
        let mut state = ClauseState::default();
        for (u, unit) in units.iter().enumerate() {
            let previous = u.checked_sub(1).map(|p| units[p]);
            let next = units.get(u + 1).copied();
            match *unit {
                Unit::Noun { head } => self.attach_noun(head, next, root, &mut state),
                Unit::Verb { start, main, passive } => {
                    self.attach_verb(start, main, passive, previous, root, &mut state)
                }
                Unit::Word(i) => self.attach_word(i, previous, next, root, &mut state),
            }
        }
        self.resolve_pending(root, state);
    }

    fn attach_noun(&mut self, h: usize, next: Option<Unit>, root: usize, state: &mut ClauseState) {
        let after_comma = std::mem::take(&mut state.after_comma);

        // "John 's car": o possuído assume o papel do possuidor
        if let Some(p) = state.possessor.take() {
            if let Some(ph) = self.heads[p].filter(|&ph| ph != p) {
                self.heads[h] = Some(ph);
                self.deps[h] = self.deps[p];
            }
            self.set(p, h, "poss");
            if state.subject == Some(p) {
                state.subject = Some(h);
            }
            state.last_noun = Some(h);
            state.last_head = Some(h);
            return;
        }

        state.last_head = Some(h);
        if h == root {
            state.last_noun = Some(h);
            return;
        }

        let verb_conjunction = state
            .conjunction
            .map(|(_, first)| is_verb_tag(self.tags[first]))
            .unwrap_or(false);
        let starts_clause = matches!(
            next,
            Some(Unit::Verb { start, .. }) if self.tags[start] != "TO" && !matches!(self.tags[start], "VBG" | "VBN")
        );

        if let Some(p) = state.preposition.take() {
            self.set(h, p, "pobj");
        } else if let Some((cc, first)) = state.conjunction.filter(|(_, first)| is_nominal(self.tags[*first])) {
            state.conjunction = None;
            self.set(h, first, "conj");
            self.set(cc, first, "cc");
        } else if after_comma && state.subject.is_some() && state.last_verb.is_none() {
            if let Some(s) = state.subject {
                self.set(h, s, "appos");
            }
        } else if let (Some(v), false, false, false) = (
            state.last_verb,
            state.mark.is_some() || state.relative.is_some(),
            verb_conjunction,
            starts_clause,
        ) {
            let dep = if TEMPORAL_NOUNS.contains(&self.lower[h].as_str()) {
                "npadvmod"
            } else if state.objects == 0 && (is_be(&self.lower[v]) || LINKING_VERBS.contains(&self.lower[v].as_str())) {
                "attr"
            } else if state.objects == 0 && matches!(next, Some(Unit::Noun { .. })) {
                "dative"
            } else {
                "dobj"
            };
            state.objects += 1;
            self.set(h, v, dep);
        } else if let Some(old) = state.subject.replace(h) {
            state.pre_verbal.push((old, "npadvmod"));
        }
        state.last_noun = Some(h);
    }

    fn attach_verb(
        &mut self,
        start: usize,
        main: usize,
        passive: bool,
        previous: Option<Unit>,
        root: usize,
        state: &mut ClauseState,
    ) {
        state.after_comma = false;
        let mark = state.mark.take();
        if let Some((m, _)) = mark {
            self.set(m, main, "mark");
        }

        let mut restore_subject = false;
        let relation = if main == root {
            None
        } else if let Some((pronoun, antecedent)) = state.relative.take() {
            let dep = if state.subject.is_none() { "nsubj" } else { "dobj" };
            self.set(pronoun, main, dep);
            restore_subject = true;
            Some((antecedent, "relcl"))
        } else if let Some((_, dep)) = mark {
            Some((state.last_verb.unwrap_or(root), dep))
        } else if let Some((cc, first)) = state.conjunction.filter(|(_, first)| is_verb_tag(self.tags[*first])) {
            state.conjunction = None;
            self.set(cc, first, "cc");
            Some((first, "conj"))
        } else if self.tags[start] == "TO" {
            let noun_before = start > 0 && is_nominal(self.tags[start - 1]);
            match (noun_before, state.last_verb) {
                (true, _) => Some((start - 1, "acl")),
                (false, Some(v)) => Some((v, "xcomp")),
                (false, None) => Some((root, "advcl")),
            }
        } else if let (Some(Unit::Noun { head }), "VBG" | "VBN") = (previous, self.tags[main]) {
            Some((head, "acl"))
        } else if let Some(v) = state.last_verb {
            Some((v, "ccomp"))
        } else {
            Some((root, "dep"))
        };

        if let Some((head, dep)) = relation {
            self.set(main, head, dep);
        }
        if let Some(s) = state.subject.take() {
            self.set(s, main, if passive { "nsubjpass" } else { "nsubj" });
        }
        if restore_subject {
            state.subject = state.suspended_subject.take();
        }
        for (k, dep) in std::mem::take(&mut state.pre_verbal) {
            self.set(k, main, dep);
        }

        state.last_verb = Some(main);
        state.last_head = Some(main);
        state.objects = 0;
    }

    fn attach_word(
        &mut self,
        i: usize,
        previous: Option<Unit>,
        next: Option<Unit>,
        root: usize,
        state: &mut ClauseState,
    ) {
        let tag = self.tags[i];
        let word = self.lower[i].clone();

        match tag {
            _ if is_punct_tag(tag) => {
                self.set(i, root, "punct");
                state.after_comma = tag == ",";
                return;
            }
            "IN" | "TO" | "WRB" if SUBORDINATORS.contains(&word.as_str()) || (tag == "IN" && word == "that") => {
                let dep = if matches!(word.as_str(), "that" | "whether") { "ccomp" } else { "advcl" };
                state.mark = Some((i, dep));
            }
            "IN" | "TO" => {
                let after_noun = matches!(previous, Some(Unit::Noun { .. }));
                let head = if word == "than" {
                    (0..i)
                        .rev()
                        .find(|&k| matches!(self.tags[k], "JJR" | "RBR"))
                        .or(state.last_verb)
                } else if after_noun && (word == "of" || state.last_verb.is_none()) {
                    state.last_noun
                } else {
                    state.last_verb.or(state.last_noun)
                };
                match head {
                    Some(h) => self.set(i, h, "prep"),
                    None => state.pre_verbal.push((i, "prep")),
                }
                state.preposition = Some(i);
            }
            "CC" => match state.last_head {
                Some(first) => state.conjunction = Some((i, first)),
                None => self.set(i, root, "cc"),
            },
            "RB" | "RBR" | "RBS" => {
                let dep = if matches!(word.as_str(), "not" | "n't" | "never") { "neg" } else { "advmod" };
                let modifies_next = matches!(next, Some(Unit::Word(k)) if k == i + 1 && matches!(self.tags[k], "JJ" | "JJR" | "JJS" | "RB" | "RBR"));
                if modifies_next {
                    self.set(i, i + 1, dep);
                } else if let Some(v) = state.last_verb {
                    self.set(i, v, dep);
                } else {
                    state.pre_verbal.push((i, dep));
                }
            }
            "RP" => self.set(i, state.last_verb.unwrap_or(root), "prt"),
            "JJ" | "JJR" | "JJS" => {
                if let Some((cc, first)) = state.conjunction.filter(|(_, f)| self.tags[*f].starts_with("JJ")) {
                    state.conjunction = None;
                    self.set(i, first, "conj");
                    self.set(cc, first, "cc");
                } else if let (Some(v), 0) = (state.last_verb, state.objects) {
                    self.set(i, v, "acomp");
                } else if let Some(n) = state.last_noun {
                    self.set(i, n, "amod");
                }
                state.last_head = Some(i);
            }
            "UH" => self.set(i, root, "intj"),
            "EX" => state.pre_verbal.push((i, "expl")),
            "WRB" => state.pre_verbal.push((i, "advmod")),
            "WDT" | "WP" => match previous {
                Some(Unit::Noun { head }) => {
                    state.relative = Some((i, head));
                    state.suspended_subject = state.subject.take();
                }
                _ => self.attach_noun(i, next, root, state),
            },
            "POS" => {
                if let Some(Unit::Noun { head }) = previous {
                    self.set(i, head, "case");
                    state.possessor = Some(head);
                }
            }
            _ => {}
        }
        state.after_comma = false;
    }

    fn resolve_pending(&mut self, root: usize, state: ClauseState) {
        let verbal_root = is_verb_tag(self.tags[root]);
        let leftover_dep = if verbal_root { "npadvmod" } else { "dep" };
        for s in state.subject.into_iter().chain(state.suspended_subject) {
            self.set(s, root, leftover_dep);
        }
        if let Some((cc, first)) = state.conjunction {
            self.set(cc, first, "cc");
        }
        if let Some((m, _)) = state.mark {
            self.set(m, root, "mark");
        }
        for (k, dep) in state.pre_verbal {
            if self.heads[k].is_none() {
                self.set(k, root, dep);
            }
        }
    }

    // ------------------------------------------------------------------
    // Finalização
    // ------------------------------------------------------------------

    /// Liga tokens soltos à raiz e desfaz ciclos.
    fn finish(mut self, root: usize) -> Vec<Attachment> {
        let n = self.len();
        self.heads[root] = Some(root);
        self.deps[root] = "ROOT";

        for i in 0..n {
            if i != root && self.heads[i].map(|h| h == i).unwrap_or(true) {
                self.heads[i] = Some(root);
                self.deps[i] = "dep";
            }
        }

        let mut heads: Vec<usize> = self.heads.iter().map(|h| h.unwrap_or(root)).collect();
        loop {
            let mut changed = false;
            for i in 0..n {
                if !reaches(&heads, i, root) {
                    heads[i] = root;
                    self.deps[i] = "dep";
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        heads
            .into_iter()
            .zip(self.deps)
            .map(|(head, dep)| Attachment { head, dep })
            .collect()
    }
}

fn reaches(heads: &[usize], start: usize, root: usize) -> bool {
    let mut current = start;
    for _ in 0..=heads.len() {
        if current == root {
            return true;
        }
        current = heads[current];
    }
    false
}

fn is_np_modifier(tag: &str) -> bool {
    matches!(
        tag,
        "DT" | "PDT" | "PRP$" | "WP$" | "CD" | "JJ" | "JJR" | "JJS" | "NN" | "NNS" | "NNP" | "NNPS" | "$"
    )
}

fn is_nominal_head(tag: &str) -> bool {
    matches!(tag, "NN" | "NNS" | "NNP" | "NNPS" | "CD")
}

fn is_nominal(tag: &str) -> bool {
    is_nominal_head(tag) || matches!(tag, "PRP" | "WP" | "DT")
}

fn is_punct_tag(tag: &str) -> bool {
    matches!(tag, "." | "," | ":" | "``" | "''" | "-LRB-" | "-RRB-" | "HYPH" | "NFP")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(sentence: &[(&str, &str)]) -> Vec<(usize, &'static str)> {
        let words: Vec<&str> = sentence.iter().map(|(w, _)| *w).collect();
        let tags: Vec<&str> = sentence.iter().map(|(_, t)| *t).collect();
        parse_sentence(&words, &tags)
            .into_iter()
            .map(|a| (a.head, a.dep))
            .collect()
    }

    #[test]
    fn test_simple_intransitive() {
        let arcs = parse(&[("The", "DT"), ("big", "JJ"), ("dog", "NN"), ("barked", "VBD"), (".", ".")]);
        assert_eq!(arcs, vec![(2, "det"), (2, "amod"), (3, "nsubj"), (3, "ROOT"), (3, "punct")]);
    }

    #[test]
    fn test_copula_with_adjective() {
        let arcs = parse(&[("Paris", "NNP"), ("is", "VBZ"), ("nice", "JJ"), (".", ".")]);
        assert_eq!(arcs, vec![(1, "nsubj"), (1, "ROOT"), (1, "acomp"), (1, "punct")]);
    }

    #[test]
    fn test_verbless_sentence_roots_on_noun() {
        let arcs = parse(&[("Hello", "UH"), (",", ","), ("world", "NN"), ("!", ".")]);
        assert_eq!(arcs, vec![(2, "intj"), (2, "punct"), (2, "ROOT"), (2, "punct")]);
    }

    #[test]
    fn test_auxiliaries_and_objects() {
        let arcs = parse(&[
            ("She", "PRP"),
            ("has", "VBZ"),
            ("n't", "RB"),
            ("seen", "VBN"),
            ("the", "DT"),
            ("movie", "NN"),
        ]);
        assert_eq!(
            arcs,
            vec![(3, "nsubj"), (3, "aux"), (3, "neg"), (3, "ROOT"), (5, "det"), (3, "dobj")]
        );
    }

    #[test]
    fn test_passive_voice() {
        let arcs = parse(&[("It", "PRP"), ("was", "VBD"), ("announced", "VBN")]);
        assert_eq!(arcs, vec![(2, "nsubjpass"), (2, "auxpass"), (2, "ROOT")]);
    }

    #[test]
    fn test_prepositional_phrase() {
        let arcs = parse(&[("I", "PRP"), ("live", "VBP"), ("in", "IN"), ("New", "NNP"), ("York", "NNP")]);
        assert_eq!(arcs, vec![(1, "nsubj"), (1, "ROOT"), (1, "prep"), (4, "compound"), (2, "pobj")]);
    }

    #[test]
    fn test_possessive_takes_role_of_owner() {
        let arcs = parse(&[("I", "PRP"), ("saw", "VBD"), ("John", "NNP"), ("'s", "POS"), ("car", "NN")]);
        assert_eq!(arcs, vec![(1, "nsubj"), (1, "ROOT"), (4, "poss"), (2, "case"), (1, "dobj")]);
    }

    #[test]
    fn test_infinitive_complement() {
        let arcs = parse(&[("They", "PRP"), ("want", "VBP"), ("to", "TO"), ("visit", "VB"), ("Paris", "NNP")]);
        assert_eq!(arcs, vec![(1, "nsubj"), (1, "ROOT"), (3, "aux"), (1, "xcomp"), (3, "dobj")]);
    }

    #[test]
    fn test_coordination() {
        let arcs = parse(&[("cats", "NNS"), ("and", "CC"), ("dogs", "NNS"), ("sleep", "VBP")]);
        assert_eq!(arcs, vec![(3, "nsubj"), (0, "cc"), (0, "conj"), (3, "ROOT")]);
    }

    #[test]
    fn test_subordinate_clause_before_main() {
        let arcs = parse(&[
            ("If", "IN"),
            ("it", "PRP"),
            ("rains", "VBZ"),
            (",", ","),
            ("we", "PRP"),
            ("stay", "VBP"),
        ]);
        assert_eq!(
            arcs,
            vec![(2, "mark"), (2, "nsubj"), (5, "advcl"), (5, "punct"), (5, "nsubj"), (5, "ROOT")]
        );
    }

    #[test]
    fn test_result_is_always_a_tree() {
        let sentences: Vec<Vec<(&str, &str)>> = vec![
            vec![("the", "DT"), ("the", "DT"), (",", ",")],
            vec![("who", "WP"), ("which", "WDT"), ("'s", "POS")],
            vec![("and", "CC"), ("or", "CC")],
            vec![("dog", "NN"), ("'s", "POS"), ("'s", "POS"), ("bone", "NN")],
            vec![("$", "$"), ("5", "CD"), ("than", "IN"), ("up", "RP")],
        ];
        for sentence in sentences {
            let arcs = parse(&sentence);
            let heads: Vec<usize> = arcs.iter().map(|(h, _)| *h).collect();
            let roots: Vec<usize> = (0..heads.len()).filter(|&i| heads[i] == i).collect();
            assert_eq!(roots.len(), 1, "{:?}", sentence);
            for i in 0..heads.len() {
                assert!(reaches(&heads, i, roots[0]), "{:?}", sentence);
            }
        }
    }
}
