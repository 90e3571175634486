use std::ops::Range;
use std::sync::Arc;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, Input, MatchKind};
use indexmap::IndexSet;
use tracing::debug;

use crate::utils::validation::{validate_query, QueryError};

/// A validated, deduplicated set of peptides for one mapping call
#[derive(Debug, Clone, Default)]
pub struct QueryBatch {
    queries: IndexSet<Arc<str>>,
    max_len: usize,
}

impl QueryBatch {
    /// Validate and deduplicate the given peptides, keeping first-seen order.
    ///
    /// # Errors
    ///
    /// Rejects the whole batch with a [`QueryError`] if any peptide is empty,
    /// non-ASCII or contains the corpus delimiter.
    pub fn new<I, S>(queries: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut batch = Self::default();
        for (position, query) in queries.into_iter().enumerate() {
            let query = query.as_ref();
            validate_query(query, position)?;
            if !batch.queries.contains(query) {
                batch.max_len = batch.max_len.max(query.len());
                batch.queries.insert(Arc::from(query));
            }
        }
        Ok(batch)
    }

    /// Distinct peptides, in first-seen order
    pub fn queries(&self) -> impl Iterator<Item = &Arc<str>> {
        self.queries.iter()
    }

    /// Peptide with the given pattern index
    #[must_use]
    pub fn get(&self, pattern: usize) -> Option<&Arc<str>> {
        self.queries.get_index(pattern)
    }

    /// Length of the longest peptide
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}

/// A match in the corpus before it is resolved to a reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawHit {
    /// Index of the peptide in its [`QueryBatch`]
    pub pattern: usize,
    /// Corpus offset of the first matched residue
    pub start: usize,
}

/// Aho-Corasick automaton over one query batch.
///
/// Built once per mapping call and dropped with it. Scans report every
/// peptide ending at every position, so overlapping occurrences of the same
/// peptide and of different peptides are all found.
#[derive(Debug, Clone)]
pub struct PeptideAutomaton {
    automaton: AhoCorasick,
    batch: QueryBatch,
}

impl PeptideAutomaton {
    /// Build the automaton for a batch.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Automaton`] if the batch is too large for the
    /// automaton's state identifiers.
    pub fn build(batch: QueryBatch) -> Result<Self, QueryError> {
        // Standard semantics are the only ones that support overlapping search
        let automaton = AhoCorasickBuilder::new()
            .match_kind(MatchKind::Standard)
            .build(batch.queries().map(|q| q.as_bytes()))
            .map_err(|e| QueryError::Automaton(e.to_string()))?;

        debug!(
            "Built {:?} automaton for {} peptides (longest {}, {} bytes)",
            automaton.kind(),
            batch.len(),
            batch.max_len(),
            automaton.memory_usage()
        );

        Ok(Self { automaton, batch })
    }

    #[must_use]
    pub fn batch(&self) -> &QueryBatch {
        &self.batch
    }

    /// Peptide for a hit's pattern index
    #[must_use]
    pub fn query(&self, pattern: usize) -> Option<&Arc<str>> {
        self.batch.get(pattern)
    }

    /// Peptide a hit from this automaton refers to
    ///
    /// # Panics
    ///
    /// Panics if the hit was produced by a different automaton.
    #[must_use]
    pub fn peptide(&self, hit: &RawHit) -> &Arc<str> {
        &self.batch.queries[hit.pattern]
    }

    /// Scan the whole corpus once
    pub fn search<'a>(&'a self, corpus: &'a [u8]) -> impl Iterator<Item = RawHit> + 'a {
        self.search_range(corpus, 0..corpus.len())
    }

    /// Scan only `range` of the corpus.
    ///
    /// Reported offsets are relative to the whole corpus. A match must lie
    /// entirely inside `range` to be reported.
    pub fn search_range<'a>(
        &'a self,
        corpus: &'a [u8],
        range: Range<usize>,
    ) -> impl Iterator<Item = RawHit> + 'a {
        let input = Input::new(corpus).range(range);
        self.automaton
            .find_overlapping_iter(input)
            .map(|m| RawHit {
                pattern: m.pattern().as_usize(),
                start: m.start(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hits(queries: &[&str], corpus: &str) -> Vec<(String, usize)> {
        let automaton = PeptideAutomaton::build(QueryBatch::new(queries).unwrap()).unwrap();
        let mut hits: Vec<(String, usize)> = automaton
            .search(corpus.as_bytes())
            .map(|hit| (automaton.query(hit.pattern).unwrap().to_string(), hit.start))
            .collect();
        hits.sort();
        hits
    }

    #[test]
    fn test_batch_dedup_keeps_first_seen_order() {
        let batch = QueryBatch::new(["LAP", "ELVIS", "LAP", "GG"]).unwrap();
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.max_len(), 5);
        let queries: Vec<&str> = batch.queries().map(|q| &**q).collect();
        assert_eq!(queries, vec!["LAP", "ELVIS", "GG"]);
    }

    #[test]
    fn test_batch_rejects_empty_query() {
        let result = QueryBatch::new(["ELVIS", ""]);
        assert_eq!(result.unwrap_err(), QueryError::EmptyQuery { position: 1 });
    }

    #[test]
    fn test_overlapping_same_pattern() {
        let found = hits(&["GGGG"], "GGGGGGGGGG");
        let starts: Vec<usize> = found.iter().map(|(_, s)| *s).collect();
        assert_eq!(starts, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_all_patterns_ending_at_same_position() {
        // Each is a suffix of the next; all must be reported, not just the longest
        let found = hits(&["S", "IS", "VIS", "ELVIS"], "ELVIS");
        assert_eq!(
            found,
            vec![
                ("ELVIS".to_string(), 0),
                ("IS".to_string(), 3),
                ("S".to_string(), 4),
                ("VIS".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_no_match_across_delimiter() {
        let found = hits(&["LAPOVER", "OVERLAP"], "OVERLAP|OVERLAP");
        assert_eq!(
            found,
            vec![("OVERLAP".to_string(), 0), ("OVERLAP".to_string(), 8)]
        );
    }

    #[test]
    fn test_search_range_reports_global_offsets() {
        let automaton = PeptideAutomaton::build(QueryBatch::new(["AB"]).unwrap()).unwrap();
        let corpus = b"ABABAB";
        let starts: Vec<usize> = automaton
            .search_range(corpus, 1..5)
            .map(|hit| hit.start)
            .collect();
        assert_eq!(starts, vec![2]);
    }

    #[test]
    fn test_empty_batch_matches_nothing() {
        let automaton = PeptideAutomaton::build(QueryBatch::default()).unwrap();
        assert_eq!(automaton.search(b"ELVISLIVES").count(), 0);
    }
}
