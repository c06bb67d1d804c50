//! Structural heuristics over the raw (un-normalized) resume text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Each passed check is worth 5 of the 20 formatting points.
pub const FORMAT_WEIGHT: f64 = 20.0;
const CHECK_COUNT: usize = 4;

pub const MIN_WORDS: usize = 300;
pub const MAX_WORDS: usize = 1200;

const SECTION_HEADERS: &[&str] = &["experience", "education", "skills", "projects", "summary"];
const BULLET_CHARS: &[char] = &['•', '-', '*'];

static CONTACT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // email
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
        // 10-digit phone, 3-3-4 with optional - or . separators
        r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b",
        r"linkedin\.com/in/[A-Za-z0-9_-]+",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("contact pattern is a valid regex"))
    .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingReport {
    pub has_sections: bool,
    pub has_bullet_points: bool,
    pub appropriate_length: bool,
    pub has_contact_info: bool,
}

impl FormattingReport {
    pub fn passed(&self) -> usize {
        [
            self.has_sections,
            self.has_bullet_points,
            self.appropriate_length,
            self.has_contact_info,
        ]
        .iter()
        .filter(|&&ok| ok)
        .count()
    }

    /// (passed / 4) × 20, a multiple of 5 in [0, 20].
    pub fn score(&self) -> f64 {
        self.passed() as f64 / CHECK_COUNT as f64 * FORMAT_WEIGHT
    }

    /// Advice for each failed check, in fixed order.
    pub fn feedback(&self) -> Vec<String> {
        let mut feedback = Vec::new();
        if !self.has_sections {
            feedback.push("Add clear section headers (e.g., Experience, Education, Skills)".to_string());
        }
        if !self.has_bullet_points {
            feedback.push(
                "Use bullet points to highlight achievements and responsibilities".to_string(),
            );
        }
        if !self.appropriate_length {
            feedback.push(format!(
                "Adjust resume length to be between {MIN_WORDS}-{MAX_WORDS} words"
            ));
        }
        if !self.has_contact_info {
            feedback.push("Include contact information (email, phone, LinkedIn)".to_string());
        }
        feedback
    }
}

/// Runs all four checks. Pure and total.
pub fn check_formatting(text: &str) -> FormattingReport {
    let lower = text.to_lowercase();
    let word_count = text.split_whitespace().count();

    FormattingReport {
        has_sections: SECTION_HEADERS.iter().any(|s| lower.contains(s)),
        has_bullet_points: text.contains(BULLET_CHARS),
        appropriate_length: (MIN_WORDS..=MAX_WORDS).contains(&word_count),
        has_contact_info: CONTACT_PATTERNS.iter().any(|re| re.is_match(text)),
    }
}
