//! Process-wide linguistic resources: the stop-word set and the lemmatizer.
//!
//! Built once at startup and shared read-only behind an `Arc`. If the resources
//! cannot be built (e.g. a configured stop-word file is unreadable) the context
//! is constructed in degraded mode and the normalizer skips stop-word removal
//! and lemmatization for the lifetime of the process.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use tracing::{error, info};

/// English stop words (NLTK list, contractions omitted: punctuation is
/// stripped before tokens are compared).
const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don",
    "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "couldn", "didn",
    "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn", "needn", "shan",
    "shouldn", "wasn", "weren", "won", "wouldn",
];

/// Plural forms the suffix rules get wrong.
static IRREGULAR_PLURALS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("geese", "goose"),
        ("analyses", "analysis"),
        ("diagnoses", "diagnosis"),
        ("hypotheses", "hypothesis"),
        ("theses", "thesis"),
        ("crises", "crisis"),
        ("criteria", "criterion"),
        ("phenomena", "phenomenon"),
        ("indices", "index"),
        ("matrices", "matrix"),
        ("vertices", "vertex"),
        ("appendices", "appendix"),
        ("leaves", "leaf"),
        ("lives", "life"),
        ("wives", "wife"),
        ("knives", "knife"),
        ("halves", "half"),
        ("shelves", "shelf"),
        ("selves", "self"),
        ("wolves", "wolf"),
        ("heroes", "hero"),
        ("potatoes", "potato"),
        ("tomatoes", "tomato"),
        ("echoes", "echo"),
        ("vetoes", "veto"),
        ("caches", "cache"),
        ("niches", "niche"),
        ("headaches", "headache"),
        ("statuses", "status"),
        ("campuses", "campus"),
        ("viruses", "virus"),
        ("bonuses", "bonus"),
        ("buses", "bus"),
        ("movies", "movie"),
        ("cookies", "cookie"),
        ("calories", "calorie"),
    ])
});

/// Words ending in `s` that are already in base form.
static INVARIANT_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "news", "series", "species", "means", "physics", "mathematics", "economics",
        "statistics", "analytics", "logistics", "ethics", "politics", "electronics",
        "robotics", "graphics", "genetics", "linguistics", "athletics", "kubernetes",
        "jenkins", "devops", "postgres", "redis", "aws", "ios", "macos", "windows", "nodejs",
        "sales", "always", "perhaps", "towards", "afterwards", "whereas", "besides", "canvas",
        "atlas", "bias", "alias", "pandas", "saas", "paas", "iaas", "chaos", "ethos", "kudos",
        "lens", "christmas", "texas", "kansas", "vegas", "wales", "jeans", "pants",
    ])
});

/// Rule-based noun lemmatizer: reduces plural nouns to their singular form.
///
/// Rules are re-applied until the word stops changing ("mens" -> "men" ->
/// "man"), so `lemmatize(lemmatize(w)) == lemmatize(w)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lemmatizer;

impl Lemmatizer {
    pub fn lemmatize<'a>(&self, token: &'a str) -> Cow<'a, str> {
        let Some(mut lemma) = singularize(token) else {
            return Cow::Borrowed(token);
        };
        while let Some(next) = singularize(&lemma) {
            lemma = next;
        }
        Cow::Owned(lemma)
    }
}

/// One reduction step; `None` when `token` is already a base form.
fn singularize(token: &str) -> Option<String> {
    if let Some(lemma) = IRREGULAR_PLURALS.get(token) {
        return Some(lemma.to_string());
    }
    if token.len() <= 3
        || !token.bytes().all(|b| b.is_ascii_lowercase())
        || INVARIANT_WORDS.contains(token)
    {
        return None;
    }
    if token.ends_with("ss") || token.ends_with("us") || token.ends_with("is") {
        return None;
    }

    if let Some(stem) = token.strip_suffix("ies") {
        if token.len() > 4 {
            return Some(format!("{stem}y"));
        }
    }
    for suffix in ["sses", "xes", "ches", "shes", "zzes"] {
        if token.ends_with(suffix) {
            return Some(token[..token.len() - 2].to_string());
        }
    }
    token.strip_suffix('s').map(str::to_string)
}

/// Read-only linguistic resources shared by every request.
#[derive(Debug, Clone)]
pub struct LinguisticContext {
    stop_words: HashSet<String>,
    lemmatizer: Lemmatizer,
    degraded: bool,
}

impl LinguisticContext {
    /// Built-in English stop words plus the rule-based lemmatizer.
    pub fn english() -> Self {
        Self::with_stop_words(ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect())
    }

    /// No stop words, no lemmatization.
    pub fn degraded() -> Self {
        Self {
            stop_words: HashSet::new(),
            lemmatizer: Lemmatizer,
            degraded: true,
        }
    }

    /// Loads the resources at startup. Never fails: on error, logs the cause
    /// and returns a degraded context.
    pub fn load(stopwords_path: Option<&Path>) -> Self {
        let Some(path) = stopwords_path else {
            info!(
                "Linguistic resources initialized ({} built-in stop words)",
                ENGLISH_STOP_WORDS.len()
            );
            return Self::english();
        };

        match Self::from_stopword_file(path) {
            Ok(ctx) => {
                info!(
                    "Linguistic resources initialized ({} stop words from {})",
                    ctx.stop_words.len(),
                    path.display()
                );
                ctx
            }
            Err(e) => {
                error!("Error initializing linguistic resources: {e:#}. Normalizer runs degraded");
                Self::degraded()
            }
        }
    }

    fn from_stopword_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read stop-word file {}", path.display()))?;
        let stop_words: HashSet<String> = raw
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect();
        if stop_words.is_empty() {
            bail!("stop-word file {} contains no words", path.display());
        }
        Ok(Self::with_stop_words(stop_words))
    }

    fn with_stop_words(stop_words: HashSet<String>) -> Self {
        Self {
            stop_words,
            lemmatizer: Lemmatizer,
            degraded: false,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    pub fn lemmatize<'a>(&self, token: &'a str) -> Cow<'a, str> {
        self.lemmatizer.lemmatize(token)
    }
}

impl Default for LinguisticContext {
    fn default() -> Self {
        Self::english()
    }
}
