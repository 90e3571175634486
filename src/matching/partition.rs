//! Parallel corpus scan over overlapping partitions.
//!
//! The corpus is cut into consecutive core ranges. Each worker scans its core
//! range extended by `max_query_len - 1` bytes so matches that start near the
//! end of the core are still seen whole, then keeps only the hits that start
//! inside its core. Every hit therefore has exactly one owning partition and
//! no hit is reported twice.

use std::ops::Range;

use rayon::prelude::*;
use tracing::debug;

use crate::matching::automaton::{PeptideAutomaton, RawHit};

/// One unit of parallel work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Hits starting here belong to this partition
    pub core: Range<usize>,
    /// Bytes actually scanned
    pub scan: Range<usize>,
}

/// Split a corpus of `corpus_len` bytes into partitions.
///
/// `partition_len` is the core length (clamped to at least 1).
#[must_use]
pub fn partitions(corpus_len: usize, partition_len: usize, max_query_len: usize) -> Vec<Partition> {
    let partition_len = partition_len.max(1);
    let overlap = max_query_len.saturating_sub(1);

    (0..corpus_len)
        .step_by(partition_len)
        .map(|start| {
            let end = (start + partition_len).min(corpus_len);
            Partition {
                core: start..end,
                scan: start..(end + overlap).min(corpus_len),
            }
        })
        .collect()
}

/// Scan the corpus in parallel.
///
/// Hits are returned grouped by partition in corpus order; within a partition
/// they are in scan order. The result holds the same hits as
/// [`PeptideAutomaton::search`], possibly in a different order.
#[must_use]
pub fn search_partitioned(
    automaton: &PeptideAutomaton,
    corpus: &[u8],
    partition_len: usize,
) -> Vec<RawHit> {
    let parts = partitions(corpus.len(), partition_len, automaton.batch().max_len());
    debug!(
        "Scanning {} bytes in {} partitions of {} bytes",
        corpus.len(),
        parts.len(),
        partition_len
    );

    parts
        .par_iter()
        .map(|part| {
            automaton
                .search_range(corpus, part.scan.clone())
                .filter(|hit| part.core.contains(&hit.start))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::automaton::QueryBatch;

    #[test]
    fn test_partitions_cover_corpus() {
        let parts = partitions(10, 4, 3);
        assert_eq!(
            parts,
            vec![
                Partition {
                    core: 0..4,
                    scan: 0..6
                },
                Partition {
                    core: 4..8,
                    scan: 4..10
                },
                Partition {
                    core: 8..10,
                    scan: 8..10
                },
            ]
        );
    }

    #[test]
    fn test_partitions_empty_corpus() {
        assert!(partitions(0, 4, 3).is_empty());
    }

    #[test]
    fn test_partitions_zero_length_clamped() {
        assert_eq!(partitions(3, 0, 1).len(), 3);
    }

    #[test]
    fn test_partitioned_matches_sequential() {
        let corpus = b"GGGGGGGGGG|ELVISLIVES|OVERLAP|OVERLAP|AAAAAAAAAAAA";
        let batch = QueryBatch::new(["GGGG", "ELVIS", "LAP", "OVERLAP", "AAAAAAAAAA", "G"]).unwrap();
        let automaton = PeptideAutomaton::build(batch).unwrap();

        let mut sequential: Vec<RawHit> = automaton.search(corpus).collect();
        sequential.sort();

        // Tiny partitions force many matches across partition borders
        for partition_len in [1, 2, 3, 7, 64] {
            let mut parallel = search_partitioned(&automaton, corpus, partition_len);
            parallel.sort();
            assert_eq!(parallel, sequential, "partition_len = {partition_len}");
        }
    }
}
