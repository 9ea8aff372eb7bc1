//! # Léxico Embutido do Inglês
//!
//! Listas compiladas no binário que formam o modelo `en`:
//! - classes fechadas com tag fixa (determinantes, pronomes, preposições, auxiliares);
//! - radicais de verbos e adjetivos frequentes, usados pela morfologia do tagger;
//! - formas irregulares para lematização;
//! - gazetteers de entidades (cidades, países, organizações, pessoas).
//!
//! Modelos carregados de arquivo estendem estas listas (ver [`model`](crate::model)).

/// Palavras de classe fechada → tag Penn Treebank (chaves em minúsculas)
pub const CLOSED_CLASS: &[(&str, &str)] = &[
    // Determinantes
    ("the", "DT"), ("a", "DT"), ("an", "DT"), ("this", "DT"), ("that", "DT"),
    ("these", "DT"), ("those", "DT"), ("every", "DT"), ("each", "DT"), ("some", "DT"),
    ("any", "DT"), ("no", "DT"), ("another", "DT"), ("all", "PDT"), ("both", "DT"),
    ("either", "DT"), ("neither", "DT"),
    // Pronomes
    ("i", "PRP"), ("you", "PRP"), ("he", "PRP"), ("she", "PRP"), ("it", "PRP"),
    ("we", "PRP"), ("they", "PRP"), ("me", "PRP"), ("him", "PRP"), ("her", "PRP$"),
    ("us", "PRP"), ("them", "PRP"), ("myself", "PRP"), ("yourself", "PRP"),
    ("himself", "PRP"), ("herself", "PRP"), ("itself", "PRP"), ("themselves", "PRP"),
    ("ourselves", "PRP"), ("someone", "NN"), ("everyone", "NN"), ("nobody", "NN"),
    ("something", "NN"), ("everything", "NN"), ("nothing", "NN"), ("anything", "NN"),
    ("my", "PRP$"), ("your", "PRP$"), ("his", "PRP$"), ("its", "PRP$"), ("our", "PRP$"),
    ("their", "PRP$"),
    // Interrogativos e relativos
    ("who", "WP"), ("whom", "WP"), ("what", "WP"), ("whose", "WP$"), ("which", "WDT"),
    ("where", "WRB"), ("when", "WRB"), ("why", "WRB"), ("how", "WRB"),
    // Preposições e subordinativas
    ("of", "IN"), ("in", "IN"), ("on", "IN"), ("at", "IN"), ("by", "IN"), ("for", "IN"),
    ("with", "IN"), ("about", "IN"), ("against", "IN"), ("between", "IN"), ("into", "IN"),
    ("through", "IN"), ("during", "IN"), ("before", "IN"), ("after", "IN"), ("above", "IN"),
    ("below", "IN"), ("from", "IN"), ("up", "RP"), ("down", "RP"), ("over", "IN"),
    ("under", "IN"), ("than", "IN"), ("as", "IN"), ("like", "IN"), ("because", "IN"),
    ("if", "IN"), ("while", "IN"), ("although", "IN"), ("since", "IN"), ("until", "IN"),
    ("without", "IN"), ("within", "IN"), ("near", "IN"), ("across", "IN"), ("behind", "IN"),
    ("toward", "IN"), ("towards", "IN"), ("upon", "IN"), ("among", "IN"), ("via", "IN"),
    ("per", "IN"), ("whether", "IN"), ("to", "TO"),
    // Conjunções
    ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"), ("yet", "CC"), ("so", "RB"),
    // Modais e auxiliares
    ("can", "MD"), ("could", "MD"), ("may", "MD"), ("might", "MD"), ("must", "MD"),
    ("shall", "MD"), ("should", "MD"), ("will", "MD"), ("would", "MD"), ("wo", "MD"),
    ("ca", "MD"), ("'ll", "MD"), ("'d", "MD"),
    ("be", "VB"), ("is", "VBZ"), ("am", "VBP"), ("are", "VBP"), ("was", "VBD"),
    ("were", "VBD"), ("been", "VBN"), ("being", "VBG"), ("'re", "VBP"), ("'m", "VBP"),
    ("have", "VBP"), ("has", "VBZ"), ("had", "VBD"), ("having", "VBG"), ("'ve", "VBP"),
    ("do", "VBP"), ("does", "VBZ"), ("did", "VBD"), ("done", "VBN"), ("doing", "VBG"),
    // Advérbios
    ("not", "RB"), ("n't", "RB"), ("never", "RB"), ("very", "RB"), ("too", "RB"),
    ("also", "RB"), ("just", "RB"), ("only", "RB"), ("still", "RB"), ("already", "RB"),
    ("always", "RB"), ("often", "RB"), ("here", "RB"), ("there", "EX"), ("now", "RB"),
    ("then", "RB"), ("again", "RB"), ("soon", "RB"), ("today", "NN"), ("yesterday", "NN"),
    ("tomorrow", "NN"), ("tonight", "NN"), ("quite", "RB"), ("rather", "RB"),
    ("almost", "RB"), ("even", "RB"), ("ever", "RB"), ("perhaps", "RB"), ("maybe", "RB"),
    ("more", "RBR"), ("most", "RBS"), ("less", "RBR"), ("least", "RBS"), ("well", "RB"),
    ("away", "RB"), ("back", "RB"), ("together", "RB"),
    // Interjeições
    ("hello", "UH"), ("hi", "UH"), ("hey", "UH"), ("oh", "UH"), ("wow", "UH"),
    ("yes", "UH"), ("ok", "UH"), ("okay", "UH"), ("please", "UH"), ("thanks", "UH"),
    ("goodbye", "UH"), ("bye", "UH"), ("ouch", "UH"),
    // Numerais por extenso
    ("one", "CD"), ("two", "CD"), ("three", "CD"), ("four", "CD"), ("five", "CD"),
    ("six", "CD"), ("seven", "CD"), ("eight", "CD"), ("nine", "CD"), ("ten", "CD"),
    ("hundred", "CD"), ("thousand", "CD"), ("million", "CD"), ("billion", "CD"),
    ("first", "JJ"), ("second", "JJ"), ("third", "JJ"), ("last", "JJ"),
    // Possessivo
    ("'s", "POS"), ("\u{2019}s", "POS"),
];

/// Radicais de verbos frequentes (forma base)
pub const VERBS: &[&str] = &[
    "say", "go", "get", "make", "know", "think", "take", "see", "come", "want", "look",
    "use", "find", "give", "tell", "work", "call", "try", "ask", "need", "feel", "become",
    "leave", "put", "mean", "keep", "let", "begin", "seem", "help", "show", "hear", "play",
    "run", "move", "live", "believe", "bring", "happen", "write", "sit", "stand", "lose",
    "pay", "meet", "include", "continue", "set", "learn", "change", "lead", "understand",
    "watch", "follow", "stop", "create", "speak", "read", "spend", "grow", "open", "walk",
    "win", "teach", "offer", "remember", "consider", "appear", "buy", "serve", "die",
    "send", "build", "stay", "fall", "cut", "reach", "kill", "raise", "pass", "sell",
    "decide", "return", "explain", "hope", "develop", "carry", "break", "receive", "agree",
    "support", "hit", "produce", "eat", "cover", "catch", "draw", "choose", "love", "hate",
    "visit", "announce", "launch", "parse", "drink", "sleep", "bark", "jump", "travel",
    "invest", "acquire", "report", "sign", "join", "arrive", "fly", "drive",
    "swim", "sing", "dance", "cook", "study", "close", "start", "finish", "plan", "own",
];

/// Radicais de adjetivos frequentes
pub const ADJECTIVES: &[&str] = &[
    "good", "new", "old", "great", "high", "small", "large", "big", "long", "little",
    "young", "important", "different", "bad", "same", "able", "early", "late", "public",
    "nice", "smart", "happy", "sad", "beautiful", "quick", "slow", "fast", "black", "white",
    "red", "blue", "green", "hot", "cold", "easy", "hard", "strong", "weak", "rich", "poor",
    "full", "empty", "free", "true", "false", "real", "best", "better", "short", "tall",
    "cheap", "expensive", "dark", "bright", "clean", "simple", "wrong", "right", "brown",
    "lazy", "busy", "wide", "deep", "quiet", "loud", "safe", "famous", "popular",
];

/// Formas irregulares → lema
pub const IRREGULAR_LEMMAS: &[(&str, &str)] = &[
    ("is", "be"), ("am", "be"), ("are", "be"), ("was", "be"), ("were", "be"),
    ("been", "be"), ("being", "be"), ("'re", "be"), ("'m", "be"), ("has", "have"),
    ("had", "have"), ("having", "have"), ("'ve", "have"), ("does", "do"), ("did", "do"),
    ("done", "do"), ("n't", "not"), ("wo", "will"), ("ca", "can"), ("'ll", "will"),
    ("'d", "would"), ("went", "go"), ("gone", "go"), ("said", "say"), ("made", "make"),
    ("took", "take"), ("taken", "take"), ("saw", "see"), ("seen", "see"), ("came", "come"),
    ("gave", "give"), ("given", "give"), ("told", "tell"), ("found", "find"),
    ("thought", "think"), ("knew", "know"), ("known", "know"), ("got", "get"),
    ("gotten", "get"), ("felt", "feel"), ("became", "become"), ("left", "leave"),
    ("meant", "mean"), ("kept", "keep"), ("began", "begin"), ("begun", "begin"),
    ("heard", "hear"), ("ran", "run"), ("brought", "bring"), ("wrote", "write"),
    ("written", "write"), ("sat", "sit"), ("stood", "stand"), ("lost", "lose"),
    ("paid", "pay"), ("met", "meet"), ("led", "lead"), ("understood", "understand"),
    ("spoke", "speak"), ("spoken", "speak"), ("spent", "spend"), ("grew", "grow"),
    ("grown", "grow"), ("won", "win"), ("taught", "teach"), ("bought", "buy"),
    ("sent", "send"), ("built", "build"), ("fell", "fall"), ("fallen", "fall"),
    ("sold", "sell"), ("broke", "break"), ("broken", "break"), ("ate", "eat"),
    ("eaten", "eat"), ("caught", "catch"), ("drew", "draw"), ("drawn", "draw"),
    ("chose", "choose"), ("chosen", "choose"), ("drank", "drink"), ("slept", "sleep"),
    ("flew", "fly"), ("flown", "fly"), ("drove", "drive"), ("driven", "drive"),
    ("swam", "swim"), ("sang", "sing"), ("men", "man"), ("women", "woman"),
    ("children", "child"), ("people", "people"), ("feet", "foot"), ("teeth", "tooth"),
    ("mice", "mouse"), ("better", "good"), ("best", "good"), ("worse", "bad"),
    ("worst", "bad"), ("me", "I"), ("us", "we"), ("him", "he"), ("them", "they"),
];

/// Formas verbais irregulares e suas tags
pub const IRREGULAR_VERB_TAGS: &[(&str, &str)] = &[
    ("went", "VBD"), ("gone", "VBN"), ("said", "VBD"), ("made", "VBD"), ("took", "VBD"),
    ("taken", "VBN"), ("saw", "VBD"), ("seen", "VBN"), ("came", "VBD"), ("gave", "VBD"),
    ("given", "VBN"), ("told", "VBD"), ("found", "VBD"), ("thought", "VBD"),
    ("knew", "VBD"), ("known", "VBN"), ("got", "VBD"), ("gotten", "VBN"), ("felt", "VBD"),
    ("became", "VBD"), ("left", "VBD"), ("meant", "VBD"), ("kept", "VBD"),
    ("began", "VBD"), ("begun", "VBN"), ("heard", "VBD"), ("ran", "VBD"),
    ("brought", "VBD"), ("wrote", "VBD"), ("written", "VBN"), ("sat", "VBD"),
    ("stood", "VBD"), ("lost", "VBD"), ("paid", "VBD"), ("met", "VBD"), ("led", "VBD"),
    ("understood", "VBD"), ("spoke", "VBD"), ("spoken", "VBN"), ("spent", "VBD"),
    ("grew", "VBD"), ("grown", "VBN"), ("won", "VBD"), ("taught", "VBD"),
    ("bought", "VBD"), ("sent", "VBD"), ("built", "VBD"), ("fell", "VBD"),
    ("fallen", "VBN"), ("sold", "VBD"), ("broke", "VBD"), ("broken", "VBN"),
    ("ate", "VBD"), ("eaten", "VBN"), ("caught", "VBD"), ("drew", "VBD"),
    ("drawn", "VBN"), ("chose", "VBD"), ("chosen", "VBN"), ("drank", "VBD"),
    ("slept", "VBD"), ("flew", "VBD"), ("flown", "VBN"), ("drove", "VBD"),
    ("driven", "VBN"), ("swam", "VBD"), ("sang", "VBD"),
];

/// Gazetteers de entidades: frase em minúsculas → rótulo
pub const ENTITIES: &[(&str, &str)] = &[
    // GPE: países, estados, cidades
    ("paris", "GPE"), ("london", "GPE"), ("berlin", "GPE"), ("madrid", "GPE"),
    ("rome", "GPE"), ("lisbon", "GPE"), ("amsterdam", "GPE"), ("moscow", "GPE"),
    ("tokyo", "GPE"), ("beijing", "GPE"), ("new york", "GPE"), ("new york city", "GPE"),
    ("los angeles", "GPE"), ("san francisco", "GPE"), ("chicago", "GPE"),
    ("boston", "GPE"), ("são paulo", "GPE"), ("rio de janeiro", "GPE"),
    ("brasília", "GPE"), ("buenos aires", "GPE"), ("mexico city", "GPE"),
    ("france", "GPE"), ("germany", "GPE"), ("spain", "GPE"), ("italy", "GPE"),
    ("portugal", "GPE"), ("brazil", "GPE"), ("argentina", "GPE"), ("mexico", "GPE"),
    ("canada", "GPE"), ("china", "GPE"), ("japan", "GPE"), ("india", "GPE"),
    ("russia", "GPE"), ("england", "GPE"), ("scotland", "GPE"), ("ireland", "GPE"),
    ("united states", "GPE"), ("united kingdom", "GPE"), ("u.s.", "GPE"),
    ("u.k.", "GPE"), ("usa", "GPE"), ("uk", "GPE"), ("california", "GPE"),
    ("texas", "GPE"), ("florida", "GPE"),
    // LOC: regiões e acidentes geográficos
    ("europe", "LOC"), ("africa", "LOC"), ("asia", "LOC"), ("antarctica", "LOC"),
    ("south america", "LOC"), ("north america", "LOC"), ("the alps", "LOC"),
    ("alps", "LOC"), ("mount everest", "LOC"), ("everest", "LOC"), ("nile", "LOC"),
    ("amazon river", "LOC"), ("atlantic", "LOC"), ("pacific", "LOC"),
    ("mediterranean", "LOC"), ("silicon valley", "LOC"),
    // ORG
    ("google", "ORG"), ("microsoft", "ORG"), ("apple", "ORG"), ("facebook", "ORG"),
    ("ibm", "ORG"), ("intel", "ORG"), ("tesla", "ORG"), ("toyota", "ORG"),
    ("coca cola", "ORG"), ("coca-cola", "ORG"), ("pepsi", "ORG"), ("nasa", "ORG"),
    ("nato", "ORG"), ("fifa", "ORG"), ("unesco", "ORG"), ("united nations", "ORG"),
    ("european union", "ORG"), ("petrobras", "ORG"), ("embraer", "ORG"),
    ("harvard", "ORG"), ("oxford university", "ORG"), ("the new york times", "ORG"),
    ("bbc", "ORG"), ("cnn", "ORG"), ("reuters", "ORG"),
    // PERSON
    ("barack obama", "PERSON"), ("obama", "PERSON"), ("angela merkel", "PERSON"),
    ("elon musk", "PERSON"), ("bill gates", "PERSON"), ("steve jobs", "PERSON"),
    ("albert einstein", "PERSON"), ("einstein", "PERSON"), ("shakespeare", "PERSON"),
    ("william shakespeare", "PERSON"), ("isaac newton", "PERSON"),
    ("marie curie", "PERSON"), ("ada lovelace", "PERSON"),
    // NORP
    ("american", "NORP"), ("americans", "NORP"), ("french", "NORP"), ("german", "NORP"),
    ("germans", "NORP"), ("british", "NORP"), ("brazilian", "NORP"),
    ("brazilians", "NORP"), ("chinese", "NORP"), ("japanese", "NORP"),
    ("european", "NORP"), ("europeans", "NORP"), ("christian", "NORP"),
    ("muslim", "NORP"), ("democrats", "NORP"), ("republicans", "NORP"),
    ("pastafarians", "NORP"),
    // EVENT
    ("world cup", "EVENT"), ("the world cup", "EVENT"), ("olympics", "EVENT"),
    ("the olympics", "EVENT"), ("world war ii", "EVENT"),
];

/// Palavras de data (meses e dias da semana)
pub const DATE_WORDS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august",
    "september", "october", "november", "december", "monday", "tuesday", "wednesday",
    "thursday", "friday", "saturday", "sunday", "today", "yesterday", "tomorrow",
];

/// Ordinais por extenso
pub const ORDINAL_WORDS: &[&str] = &[
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth",
    "ninth", "tenth",
];

/// Títulos que precedem nomes de pessoas
pub const PERSON_TITLES: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "president", "senator", "minister",
    "governor", "mayor", "general", "captain", "sir", "lady", "king", "queen",
    "pope", "ceo",
];

/// Indicadores de organização após o nome ("Acme Inc.")
pub const ORG_SUFFIXES: &[&str] = &[
    "inc.", "inc", "corp.", "corp", "ltd.", "ltd", "llc", "co.", "group", "university",
    "institute", "foundation", "bank", "airlines", "fc",
];

/// Tags Penn Treebank que o tagger pode emitir
pub const TAGSET: &[&str] = &[
    "$", "''", ",", "-LRB-", "-RRB-", ".", ":", "CC", "CD", "DT", "EX", "HYPH", "IN",
    "JJ", "JJR", "JJS", "MD", "NFP", "NN", "NNP", "NNPS", "NNS", "PDT", "POS", "PRP",
    "PRP$", "RB", "RBR", "RBS", "RP", "SYM", "TO", "UH", "VB", "VBD", "VBG", "VBN",
    "VBP", "VBZ", "WDT", "WP", "WP$", "WRB", "``",
];

/// Rótulos de entidade que o reconhecedor embutido pode emitir
pub const ENTITY_LABELS: &[&str] = &[
    "CARDINAL", "DATE", "EVENT", "GPE", "LOC", "MONEY", "NORP", "ORDINAL", "ORG",
    "PERCENT", "PERSON", "TIME",
];
