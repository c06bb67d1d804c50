use serde::{Deserialize, Serialize};

/// The primary response shape of an analysis.
///
/// `keywords_found` and `missing_keywords` partition the active keyword set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// round(format_score + keyword_score); not clamped.
    pub score: u32,
    pub feedback: Vec<String>,
    pub keywords_found: Vec<String>,
    pub missing_keywords: Vec<String>,
}

/// Response shape of the legacy `/analyze/` endpoint. Only `score` carries data;
/// the remaining fields are placeholders kept for older clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyAnalysisResponse {
    pub score: u32,
    pub format_score: u32,
    pub keyword_score: u32,
    pub readability_score: u32,
    pub skills_match: Vec<String>,
    pub experience_match: Vec<String>,
    pub education_match: Vec<String>,
}

impl From<&AnalysisResult> for LegacyAnalysisResponse {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            score: result.score,
            format_score: 0,
            keyword_score: 0,
            readability_score: 0,
            skills_match: vec![],
            experience_match: vec![],
            education_match: vec![],
        }
    }
}
