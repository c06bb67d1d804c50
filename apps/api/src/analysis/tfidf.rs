//! TF-IDF term importance over a small in-memory corpus.
//!
//! Conventions:
//! - terms are whitespace tokens of at least two characters (input is expected
//!   to be normalized already);
//! - the vocabulary is capped at `max_features`, keeping the terms with the
//!   highest corpus-wide frequency (ties: term ascending);
//! - idf is smoothed: `ln((1 + n) / (1 + df)) + 1`;
//! - each document vector is raw count × idf, L2-normalized.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq)]
pub struct WeightedTerm {
    pub term: String,
    pub weight: f64,
}

/// A fitted vocabulary with its idf weights.
#[derive(Debug, Clone)]
pub struct TfIdfModel {
    idf: BTreeMap<String, f64>,
}

impl TfIdfModel {
    pub fn fit(corpus: &[&str], max_features: usize) -> Self {
        let mut corpus_freq: HashMap<&str, usize> = HashMap::new();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();

        for doc in corpus {
            let counts = term_counts(doc);
            for (term, count) in counts {
                *corpus_freq.entry(term).or_default() += count;
                *doc_freq.entry(term).or_default() += 1;
            }
        }

        let mut ranked: Vec<(&str, usize)> = corpus_freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(max_features);

        let n = corpus.len() as f64;
        let idf = ranked
            .into_iter()
            .map(|(term, _)| {
                let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
                (term.to_string(), ((1.0 + n) / (1.0 + df)).ln() + 1.0)
            })
            .collect();

        Self { idf }
    }

    #[cfg(test)]
    pub fn vocabulary_len(&self) -> usize {
        self.idf.len()
    }

    /// Weights of the vocabulary terms present in `doc`, highest first
    /// (ties: term ascending).
    pub fn rank(&self, doc: &str) -> Vec<WeightedTerm> {
        let mut terms: Vec<WeightedTerm> = term_counts(doc)
            .into_iter()
            .filter_map(|(term, count)| {
                self.idf.get(term).map(|idf| WeightedTerm {
                    term: term.to_string(),
                    weight: count as f64 * idf,
                })
            })
            .collect();

        let norm = terms.iter().map(|t| t.weight * t.weight).sum::<f64>().sqrt();
        if norm > 0.0 {
            for t in &mut terms {
                t.weight /= norm;
            }
        }

        terms.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.term.cmp(&b.term))
        });
        terms
    }
}

/// Top terms of a single document treated as its own corpus.
pub fn top_terms(doc: &str, max_terms: usize) -> Vec<WeightedTerm> {
    TfIdfModel::fit(&[doc], max_terms).rank(doc)
}

fn term_counts(doc: &str) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for token in doc.split_whitespace().filter(|t| t.chars().count() >= 2) {
        *counts.entry(token).or_default() += 1;
    }
    counts
}
