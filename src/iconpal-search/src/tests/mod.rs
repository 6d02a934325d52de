//! Ranking property tests for iconpal-search.
