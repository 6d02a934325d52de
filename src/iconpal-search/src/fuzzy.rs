//! Normalized fuzzy similarity using nucleo-matcher.
//!
//! Scores fall into tiers so that a closer relation always beats a looser
//! one: exact > prefix > substring > subsequence > no match.

use nucleo_matcher::{
    Config, Matcher, Utf32Str, chars,
    pattern::{AtomKind, CaseMatching, Normalization, Pattern},
};

const PREFIX_BASE: f64 = 0.75;
const CONTAINS_BASE: f64 = 0.5;
const COVERAGE_SPAN: f64 = 0.2;
const POSITION_PENALTY: f64 = 0.1;
const SUBSEQUENCE_BASE: f64 = 0.1;
const SUBSEQUENCE_SPAN: f64 = 0.3;

/// Approximate best nucleo score per pattern character.
const MAX_CHAR_SCORE: f64 = 24.0;

/// Fuzzy matcher returning similarities in `[0, 1]`.
///
/// Matching ignores case and diacritics. The inner nucleo matcher is scratch space
/// only; results never depend on earlier calls.
#[derive(Debug)]
pub struct FuzzyMatcher {
    matcher: Matcher,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcher {
    /// Creates a new fuzzy matcher.
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
        }
    }

    /// Computes how similar `candidate` is to `query`.
    ///
    /// Returns 1.0 for an exact match (ignoring case and accents) and 0.0
    /// when the query characters do not all appear in order in the
    /// candidate.
    pub fn similarity(&mut self, candidate: &str, query: &str) -> f64 {
        let query = query.trim();
        if query.is_empty() || candidate.is_empty() {
            return 0.0;
        }

        // Every tier compares the same folded text, including the nucleo one
        let candidate_lower = fold(candidate);
        let query_lower = fold(query);

        if candidate_lower == query_lower {
            return 1.0;
        }

        let query_len = query_lower.chars().count() as f64;
        let candidate_len = candidate_lower.chars().count() as f64;
        let coverage = (query_len / candidate_len).min(1.0);

        if candidate_lower.starts_with(&query_lower) {
            return PREFIX_BASE + COVERAGE_SPAN * coverage;
        }

        if let Some(byte_pos) = candidate_lower.find(&query_lower) {
            let char_pos = candidate_lower[..byte_pos].chars().count() as f64;
            let penalty = POSITION_PENALTY * (char_pos / candidate_len);
            return CONTAINS_BASE + COVERAGE_SPAN * coverage - penalty;
        }

        match self.subsequence_score(&candidate_lower, &query_lower) {
            Some(raw) => {
                let normalized = (f64::from(raw) / (query_len * MAX_CHAR_SCORE)).min(1.0);
                SUBSEQUENCE_BASE + SUBSEQUENCE_SPAN * normalized
            }
            None => 0.0,
        }
    }

    /// Returns the sorted character indices of `candidate` matched by
    /// `query`, for highlighting. Empty when there is no match.
    pub fn indices(&mut self, candidate: &str, query: &str) -> Vec<usize> {
        let query = query.trim();
        if query.is_empty() || candidate.is_empty() {
            return Vec::new();
        }

        let pattern = Self::pattern(query);
        let mut haystack_buf = Vec::new();
        let haystack = Utf32Str::new(candidate, &mut haystack_buf);

        let mut indices = Vec::new();
        if pattern
            .indices(haystack, &mut self.matcher, &mut indices)
            .is_none()
        {
            return Vec::new();
        }

        let mut indices: Vec<usize> = indices.iter().map(|&i| i as usize).collect();
        indices.sort_unstable();
        indices.dedup();
        indices
    }

    fn subsequence_score(&mut self, candidate: &str, query: &str) -> Option<u32> {
        let pattern = Self::pattern(query);
        let mut haystack_buf = Vec::new();
        let haystack = Utf32Str::new(candidate, &mut haystack_buf);
        pattern.score(haystack, &mut self.matcher)
    }

    fn pattern(query: &str) -> Pattern {
        Pattern::new(
            query,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        )
    }
}

/// Strips diacritics with nucleo's normalization table and lowercases.
fn fold(text: &str) -> String {
    text.chars()
        .flat_map(|c| chars::normalize(c).to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_exact() {
        let mut matcher = FuzzyMatcher::new();
        assert_eq!(matcher.similarity("github", "github"), 1.0);
        assert_eq!(matcher.similarity("GitHub", "github"), 1.0);
        assert_eq!(matcher.similarity("github", "  GITHUB "), 1.0);
    }

    #[test]
    fn test_similarity_ignores_accents() {
        let mut matcher = FuzzyMatcher::new();
        assert_eq!(matcher.similarity("café", "cafe"), 1.0);
        assert_eq!(matcher.similarity("Crème", "CREME"), 1.0);

        // A longer query that matches more of the name scores higher
        assert!(matcher.similarity("café", "cafe") > matcher.similarity("café", "caf"));
        assert!(matcher.similarity("crème brûlée", "brulee") > matcher.similarity("crème brûlée", "brl"));
    }

    #[test]
    fn test_similarity_prefix() {
        let mut matcher = FuzzyMatcher::new();
        let score = matcher.similarity("github", "git");
        assert!((0.75..0.95).contains(&score), "prefix scored {}", score);

        // Longer coverage ranks higher
        let longer = matcher.similarity("github", "gith");
        assert!(longer > score);
    }

    #[test]
    fn test_similarity_contains() {
        let mut matcher = FuzzyMatcher::new();
        let score = matcher.similarity("arrow-left", "left");
        assert!(score > 0.4 && score < 0.7, "substring scored {}", score);

        // Earlier position ranks higher
        let early = matcher.similarity("xleftxxxxx", "left");
        let late = matcher.similarity("xxxxxxleft", "left");
        assert!(early > late);
    }

    #[test]
    fn test_similarity_subsequence() {
        let mut matcher = FuzzyMatcher::new();
        let score = matcher.similarity("github", "ghb");
        assert!((0.1..=0.4).contains(&score), "subsequence scored {}", score);
    }

    #[test]
    fn test_similarity_no_match() {
        let mut matcher = FuzzyMatcher::new();
        assert_eq!(matcher.similarity("github", "xyz"), 0.0);
        assert_eq!(matcher.similarity("github", "bhg"), 0.0);
        assert_eq!(matcher.similarity("", "git"), 0.0);
        assert_eq!(matcher.similarity("github", ""), 0.0);
    }

    #[test]
    fn test_similarity_tiers_are_ordered() {
        let mut matcher = FuzzyMatcher::new();
        let exact = matcher.similarity("camera", "camera");
        let prefix = matcher.similarity("camera", "cam");
        let contains = matcher.similarity("camera", "mer");
        let subsequence = matcher.similarity("camera", "cmr");
        let none = matcher.similarity("camera", "zzz");

        assert!(exact > prefix);
        assert!(prefix > contains);
        assert!(contains > subsequence);
        assert!(subsequence > none);
    }

    #[test]
    fn test_similarity_range() {
        let mut matcher = FuzzyMatcher::new();
        let candidates = ["a", "ab", "abc", "a-b-c", "alphabet", "ABC", "bca"];
        let queries = ["a", "abc", "c", "ba", "alpha", "zz"];

        for candidate in candidates {
            for query in queries {
                let score = matcher.similarity(candidate, query);
                assert!(
                    (0.0..=1.0).contains(&score),
                    "{} vs {} scored {}",
                    candidate,
                    query,
                    score
                );
            }
        }
    }

    #[test]
    fn test_indices() {
        let mut matcher = FuzzyMatcher::new();

        let indices = matcher.indices("github", "gh");
        assert!(!indices.is_empty());
        assert!(indices.windows(2).all(|w| w[0] < w[1]));

        assert!(matcher.indices("github", "xyz").is_empty());
        assert!(matcher.indices("github", "").is_empty());
    }
}
