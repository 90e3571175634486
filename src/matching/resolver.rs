use std::sync::Arc;

use crate::catalog::store::ReferenceStore;
use crate::core::occurrence::Occurrence;
use crate::core::types::SENTINEL;

/// Turns corpus hits into reference-local occurrences
#[derive(Debug, Clone, Copy)]
pub struct OccurrenceResolver<'a> {
    store: &'a ReferenceStore,
}

impl<'a> OccurrenceResolver<'a> {
    pub fn new(store: &'a ReferenceStore) -> Self {
        Self { store }
    }

    /// Resolve a match of `peptide` starting at corpus offset `global_start`.
    ///
    /// # Panics
    ///
    /// Panics if the match does not lie entirely inside one reference. The
    /// delimiter never occurs in a valid peptide, so this can only happen if
    /// the matcher reported a span that is not in the corpus.
    #[must_use]
    pub fn resolve(&self, peptide: &Arc<str>, global_start: usize) -> Occurrence {
        let len = peptide.len();
        let location = self.store.locate(global_start).unwrap_or_else(|| {
            panic!("match of '{peptide}' at corpus offset {global_start} is outside every reference")
        });
        let reference = &self.store.references()[location.reference];

        let local_start = location.offset;
        let local_end = local_start + len - 1;
        assert!(
            local_end < reference.len(),
            "match of '{peptide}' at corpus offset {global_start} crosses the end of '{}'",
            reference.id
        );

        let pre = match local_start.checked_sub(1) {
            Some(before) => reference.residue(before).unwrap_or(SENTINEL),
            None => SENTINEL,
        };
        let post = reference.residue(local_end + 1).unwrap_or(SENTINEL);

        Occurrence {
            peptide: Arc::clone(peptide),
            start: local_start + 1,
            end: local_end + 1,
            pre,
            post,
            id: reference.id.clone(),
        }
    }
}
