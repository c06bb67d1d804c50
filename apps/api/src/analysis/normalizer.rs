//! Text normalization shared by the resume and the job description.

use std::collections::HashSet;

use super::linguistics::LinguisticContext;

/// Lowercases, replaces non-word characters with spaces, collapses
/// whitespace, then drops stop words and lemmatizes each remaining token.
///
/// Total: never fails. In degraded mode only the first three steps run.
pub fn normalize(text: &str, ctx: &LinguisticContext) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let tokens = cleaned.split_whitespace();
    if ctx.is_degraded() {
        return tokens.collect::<Vec<_>>().join(" ");
    }

    tokens
        .filter(|token| !ctx.is_stop_word(token))
        .map(|token| ctx.lemmatize(token))
        // "offs" -> "off": a lemma can itself be a stop word.
        .filter(|lemma| !ctx.is_stop_word(lemma))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizes a single vocabulary term the same way resume tokens are.
pub fn normalize_term(term: &str, ctx: &LinguisticContext) -> String {
    let lower = term.to_lowercase();
    if ctx.is_degraded() {
        lower
    } else {
        ctx.lemmatize(&lower).into_owned()
    }
}

/// The distinct words of an already-normalized text.
pub fn word_set(normalized: &str) -> HashSet<&str> {
    normalized.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> LinguisticContext {
        LinguisticContext::english()
    }

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let out = normalize("Led R&D, shipped C++/Rust!", &english());
        assert_eq!(out, "led r shipped c rust");
    }

    #[test]
    fn test_drops_stop_words_and_lemmatizes() {
        let out = normalize("The team improved the skills of all engineers", &english());
        assert_eq!(out, "team improved skill engineer");
    }

    #[test]
    fn test_keeps_underscores_and_digits() {
        let out = normalize("snake_case 2024 results", &english());
        assert_eq!(out, "snake_case 2024 result");
    }

    #[test]
    fn test_contractions_fall_apart_into_stop_words() {
        let out = normalize("I don't know", &english());
        assert_eq!(out, "know");
    }

    #[test]
    fn test_lemma_that_is_a_stop_word_is_dropped() {
        assert_eq!(normalize("payoffs offs", &english()), "payoff");
    }

    #[test]
    fn test_empty_and_whitespace_inputs() {
        assert_eq!(normalize("", &english()), "");
        assert_eq!(normalize("  \n\t ", &english()), "");
        assert_eq!(normalize("--- *** •••", &english()), "");
    }

    #[test]
    fn test_idempotent_on_resume_text() {
        let ctx = english();
        let samples = [
            "EXPERIENCE\n• Led teams of 5 engineers; built APIs & services.",
            "Companies, processes, analyses and the children's boxes",
            "jane.doe@example.com — linkedin.com/in/jane-doe (555) 123-4567",
            "Ünïcödé Straße résumé naïve café",
            "Mens and womens teams; childrens programs, success criterias, phenomenas",
        ];
        for sample in samples {
            let once = normalize(sample, &ctx);
            assert_eq!(normalize(&once, &ctx), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_degraded_mode_skips_linguistics() {
        let out = normalize("The Skills, the RESULTS", &LinguisticContext::degraded());
        assert_eq!(out, "the skills the results");
    }

    #[test]
    fn test_normalize_term_matches_normalized_tokens() {
        let ctx = english();
        assert_eq!(normalize_term("Skills", &ctx), "skill");
        assert_eq!(normalize_term("success", &ctx), "success");
        assert_eq!(
            normalize_term("Skills", &LinguisticContext::degraded()),
            "skills"
        );
    }

    #[test]
    fn test_word_set_deduplicates() {
        let set = word_set("rust rust go");
        assert_eq!(set.len(), 2);
        assert!(set.contains("rust"));
    }
}
