//! Analysis orchestrator — combines the formatting and keyword stages.
//!
//! score = round(format_score (0–20) + keyword_score (0–80))
//!
//! The orchestrator has no failure mode: a keyword-stage error is logged and
//! replaced with the 40-point fallback.

use tracing::{debug, warn};

use super::formatting::{check_formatting, FormattingReport};
use super::keywords::{score_keywords, KeywordReport};
use super::linguistics::LinguisticContext;
use super::models::AnalysisResult;
use super::normalizer::normalize;

/// Full breakdown of one analysis, before it is shaped into a response.
#[derive(Debug, Clone)]
pub struct ScoredAnalysis {
    pub formatting: FormattingReport,
    pub format_score: f64,
    pub keywords: KeywordReport,
}

impl ScoredAnalysis {
    pub fn keyword_score(&self) -> f64 {
        self.keywords.score
    }

    pub fn total_score(&self) -> u32 {
        (self.format_score + self.keywords.score).round() as u32
    }

    /// Formatting advice first (fixed order), then keyword advice.
    pub fn feedback(&self) -> Vec<String> {
        let mut feedback = self.formatting.feedback();
        if let Some(advice) = &self.keywords.feedback {
            feedback.push(advice.clone());
        }
        feedback
    }

    pub fn into_result(self) -> AnalysisResult {
        AnalysisResult {
            score: self.total_score(),
            feedback: self.feedback(),
            keywords_found: self.keywords.found,
            missing_keywords: self.keywords.missing,
        }
    }
}

/// Runs every stage and returns the breakdown. CPU-bound.
pub fn score_resume(
    raw_text: &str,
    job_description: Option<&str>,
    ctx: &LinguisticContext,
) -> ScoredAnalysis {
    let formatting = check_formatting(raw_text);
    let format_score = formatting.score();

    let normalized = normalize(raw_text, ctx);
    let keywords = score_keywords(&normalized, job_description, ctx).unwrap_or_else(|e| {
        warn!("Keyword analysis failed: {e}. Using fallback score");
        KeywordReport::fallback()
    });

    debug!(
        format_score,
        keyword_score = keywords.score,
        keyword_source = ?keywords.source,
        "Resume scored"
    );

    ScoredAnalysis {
        formatting,
        format_score,
        keywords,
    }
}

/// Analyzes raw resume text against an optional job description.
pub fn analyze(
    raw_text: &str,
    job_description: Option<&str>,
    ctx: &LinguisticContext,
) -> AnalysisResult {
    score_resume(raw_text, job_description, ctx).into_result()
}
