//! Keyword scoring — overlap between the normalized resume and an importance set.
//!
//! The importance set comes from the job description (top TF-IDF terms) when
//! one is supplied, otherwise from a fixed vocabulary of action words and
//! standard resume terms. Worth up to 80 points.

use thiserror::Error;

use super::linguistics::LinguisticContext;
use super::normalizer::{normalize, normalize_term, word_set};
use super::tfidf::top_terms;

pub const KEYWORD_WEIGHT: f64 = 80.0;
/// Substituted when the keyword stage cannot run (midpoint of the range).
pub const FALLBACK_KEYWORD_SCORE: f64 = 40.0;
pub const MAX_JD_KEYWORDS: usize = 20;

/// Used when no job description is supplied. Order drives list order.
pub const BUILTIN_VOCABULARY: [&str; 14] = [
    "achieved",
    "developed",
    "managed",
    "created",
    "improved",
    "team",
    "project",
    "experience",
    "skills",
    "education",
    "responsible",
    "leadership",
    "success",
    "results",
];

const JD_KEYWORD_FEEDBACK: &str = "Add more relevant keywords from the job description";
const BUILTIN_KEYWORD_FEEDBACK: &str = "Add more action words and industry-standard terms";

#[derive(Debug, Error)]
pub enum KeywordError {
    #[error("job description yields no scorable terms")]
    EmptyImportanceSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordSource {
    JobDescription,
    BuiltInVocabulary,
    /// Keyword stage failed; flat midpoint score, no lists.
    Fallback,
}

#[derive(Debug, Clone)]
pub struct KeywordReport {
    pub source: KeywordSource,
    pub found: Vec<String>,
    pub missing: Vec<String>,
    /// 0–80, or exactly 40 for `KeywordSource::Fallback`.
    pub score: f64,
    pub feedback: Option<String>,
}

impl KeywordReport {
    pub fn fallback() -> Self {
        Self {
            source: KeywordSource::Fallback,
            found: vec![],
            missing: vec![],
            score: FALLBACK_KEYWORD_SCORE,
            feedback: None,
        }
    }

    fn from_partition(
        source: KeywordSource,
        found: Vec<String>,
        missing: Vec<String>,
        advice: &str,
    ) -> Self {
        let total = found.len() + missing.len();
        let score = if total == 0 {
            0.0
        } else {
            found.len() as f64 / total as f64 * KEYWORD_WEIGHT
        };
        // fewer than half of the importance set found
        let feedback = (found.len() * 2 < total).then(|| advice.to_string());
        Self {
            source,
            found,
            missing,
            score,
            feedback,
        }
    }
}

/// Scores a normalized resume against the job description, or against the
/// built-in vocabulary when `job_description` is `None` or empty.
pub fn score_keywords(
    normalized_resume: &str,
    job_description: Option<&str>,
    ctx: &LinguisticContext,
) -> Result<KeywordReport, KeywordError> {
    match job_description.filter(|jd| !jd.is_empty()) {
        Some(jd) => score_against_job(normalized_resume, jd, ctx),
        None => Ok(score_against_vocabulary(normalized_resume, ctx)),
    }
}

/// The job description's top terms, most important first.
pub fn importance_set(
    job_description: &str,
    ctx: &LinguisticContext,
) -> Result<Vec<String>, KeywordError> {
    let normalized = normalize(job_description, ctx);
    let terms: Vec<String> = top_terms(&normalized, MAX_JD_KEYWORDS)
        .into_iter()
        .map(|t| t.term)
        .collect();
    if terms.is_empty() {
        return Err(KeywordError::EmptyImportanceSet);
    }
    Ok(terms)
}

fn score_against_job(
    normalized_resume: &str,
    job_description: &str,
    ctx: &LinguisticContext,
) -> Result<KeywordReport, KeywordError> {
    let keywords = importance_set(job_description, ctx)?;
    let resume_words = word_set(normalized_resume);

    let (found, missing): (Vec<String>, Vec<String>) = keywords
        .into_iter()
        .partition(|kw| resume_words.contains(kw.as_str()));

    Ok(KeywordReport::from_partition(
        KeywordSource::JobDescription,
        found,
        missing,
        JD_KEYWORD_FEEDBACK,
    ))
}

fn score_against_vocabulary(normalized_resume: &str, ctx: &LinguisticContext) -> KeywordReport {
    let resume_words = word_set(normalized_resume);

    let (found, missing): (Vec<String>, Vec<String>) = BUILTIN_VOCABULARY
        .iter()
        .map(|kw| kw.to_string())
        .partition(|kw| resume_words.contains(normalize_term(kw, ctx).as_str()));

    KeywordReport::from_partition(
        KeywordSource::BuiltInVocabulary,
        found,
        missing,
        BUILTIN_KEYWORD_FEEDBACK,
    )
}
