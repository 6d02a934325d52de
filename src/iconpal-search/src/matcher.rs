//! Weighted ranking of icon records against a query.

use std::time::Instant;

use crate::config::SearchConfig;
use crate::fuzzy::FuzzyMatcher;
use crate::record::{MatchedField, Record, ScoredRecord};

/// Ranks records by name, alias and category similarity.
///
/// Each call is an independent evaluation over the records passed in;
/// nothing is cached between queries.
#[derive(Debug, Default)]
pub struct Matcher {
    fuzzy: FuzzyMatcher,
    config: SearchConfig,
}

impl Matcher {
    /// Creates a matcher with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a matcher with a custom configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            fuzzy: FuzzyMatcher::new(),
            config,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the records matching `query`, best first.
    ///
    /// A blank query returns the first `empty_query_limit` records in
    /// input order.
    pub fn search<'a>(&mut self, records: &'a [Record], query: &str) -> Vec<&'a Record> {
        self.search_scored(records, query)
            .into_iter()
            .map(|scored| scored.record)
            .collect()
    }

    /// Like [`Matcher::search`], keeping scores and the winning field.
    ///
    /// Records returned for a blank query are unscored.
    pub fn search_scored<'a>(
        &mut self,
        records: &'a [Record],
        query: &str,
    ) -> Vec<ScoredRecord<'a>> {
        self.rank(records, query)
            .into_iter()
            .map(|(_, scored)| scored)
            .collect()
    }

    /// Like [`Matcher::search`], returning positions in `records`.
    pub fn search_indices(&mut self, records: &[Record], query: &str) -> Vec<usize> {
        self.rank(records, query)
            .into_iter()
            .map(|(idx, _)| idx)
            .collect()
    }

    fn rank<'a>(
        &mut self,
        records: &'a [Record],
        query: &str,
    ) -> Vec<(usize, ScoredRecord<'a>)> {
        let query = query.trim();
        if query.is_empty() {
            return records
                .iter()
                .take(self.config.empty_query_limit)
                .map(ScoredRecord::unscored)
                .enumerate()
                .collect();
        }

        let start = Instant::now();
        let min_score = self.config.min_score;
        let limit = self.config.result_limit;

        let mut results: Vec<(usize, ScoredRecord<'a>)> = records
            .iter()
            .enumerate()
            .map(|(idx, record)| (idx, self.score_record(record, query)))
            .filter(|(_, scored)| scored.score > min_score)
            .collect();

        let matched = results.len();

        // sort_by is stable: equal scores keep input order
        results.sort_by(|a, b| b.1.score.total_cmp(&a.1.score));
        results.truncate(limit);

        tracing::debug!(
            "Query '{}' matched {} of {} records in {:?}",
            query,
            matched,
            records.len(),
            start.elapsed()
        );

        results
    }

    /// Scores one record against `query`.
    ///
    /// The winning field is the first of name, alias, category to reach
    /// the maximum weighted score.
    pub fn score_record<'a>(&mut self, record: &'a Record, query: &str) -> ScoredRecord<'a> {
        let name_score = self.fuzzy.similarity(&record.name, query) * self.config.name_weight;
        let mut best = ScoredRecord::new(record, name_score, MatchedField::Name, &record.name);

        let alias_weight = self.config.alias_weight;
        if let Some((score, text)) = self.best_of(&record.aliases, query, alias_weight)
            && score > best.score
        {
            best = ScoredRecord::new(record, score, MatchedField::Alias, text);
        }

        let category_weight = self.config.category_weight;
        if let Some((score, text)) = self.best_of(&record.categories, query, category_weight)
            && score > best.score
        {
            best = ScoredRecord::new(record, score, MatchedField::Category, text);
        }

        best
    }

    /// Returns character indices of `query` within the winning text.
    pub fn highlight(&mut self, scored: &ScoredRecord<'_>, query: &str) -> Vec<usize> {
        self.fuzzy.indices(scored.matched_text, query)
    }

    /// Best weighted similarity among `candidates`; the first one wins ties.
    fn best_of<'a>(
        &mut self,
        candidates: &'a [String],
        query: &str,
        weight: f64,
    ) -> Option<(f64, &'a str)> {
        let mut best: Option<(f64, &'a str)> = None;

        for candidate in candidates {
            let score = self.fuzzy.similarity(candidate, query) * weight;
            match best {
                Some((best_score, _)) if score <= best_score => {}
                _ => best = Some((score, candidate.as_str())),
            }
        }

        best
    }
}
