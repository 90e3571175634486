use tracing::info;

use crate::catalog::store::ReferenceStore;
use crate::core::occurrence::MappingResult;
use crate::matching::automaton::{PeptideAutomaton, QueryBatch};
use crate::matching::partition::search_partitioned;
use crate::matching::resolver::OccurrenceResolver;
use crate::utils::validation::QueryError;

/// Default core length of one parallel scan partition (1 MiB)
pub const DEFAULT_PARTITION_LEN: usize = 1 << 20;

/// Configuration for the mapper
#[derive(Debug, Clone)]
pub struct MapperConfig {
    /// Scan the corpus in parallel partitions
    pub parallel: bool,
    /// Core length of each partition when `parallel` is set
    pub partition_len: usize,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            partition_len: DEFAULT_PARTITION_LEN,
        }
    }
}

/// Maps peptide batches onto a reference store.
///
/// The mapper only borrows the store, so the store cannot be reloaded while a
/// mapping call is in flight. Each call builds its own automaton and returns
/// a fresh [`MappingResult`]; nothing carries over between calls.
pub struct PeptideMapper<'a> {
    store: &'a ReferenceStore,
    config: MapperConfig,
}

impl<'a> PeptideMapper<'a> {
    /// Create a new mapper with default configuration
    pub fn new(store: &'a ReferenceStore) -> Self {
        Self {
            store,
            config: MapperConfig::default(),
        }
    }

    /// Create a new mapper with custom configuration
    pub fn with_config(store: &'a ReferenceStore, config: MapperConfig) -> Self {
        Self { store, config }
    }

    #[must_use]
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Map every peptide to all of its occurrences in the store.
    ///
    /// Duplicate peptides are collapsed. Every distinct peptide gets an entry
    /// in the result, empty if it does not occur.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] and maps nothing if any peptide is invalid.
    pub fn map<I, S>(&self, peptides: I) -> Result<MappingResult, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let batch = QueryBatch::new(peptides)?;
        let automaton = PeptideAutomaton::build(batch)?;
        Ok(self.map_with(&automaton))
    }

    /// Map the batch of an already built automaton
    #[must_use]
    pub fn map_with(&self, automaton: &PeptideAutomaton) -> MappingResult {
        let resolver = OccurrenceResolver::new(self.store);
        let corpus = self.store.corpus();
        let mut result = MappingResult::with_peptides(automaton.batch().queries());

        if self.config.parallel {
            for hit in search_partitioned(automaton, corpus, self.config.partition_len) {
                result.push(resolver.resolve(automaton.peptide(&hit), hit.start));
            }
        } else {
            for hit in automaton.search(corpus) {
                result.push(resolver.resolve(automaton.peptide(&hit), hit.start));
            }
        }

        info!(
            "Mapped {} peptides against {} references: {} occurrences, {} unmapped",
            result.len(),
            self.store.len(),
            result.total_occurrences(),
            result.unmapped().count()
        );
        result
    }
}
