use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use crate::catalog::index::{Location, OffsetIndex};
use crate::core::reference::Reference;
use crate::core::types::{ReferenceId, DELIMITER};
use crate::utils::validation::{validate_reference, ReferenceError};

/// How often progress is logged while buffering references
const PROGRESS_INTERVAL: usize = 5000;

/// The searchable reference collection.
///
/// Besides the references themselves the store keeps two derived structures
/// that are always rebuilt together: the delimiter-joined corpus the matcher
/// scans, and the [`OffsetIndex`] that maps corpus offsets back to references.
#[derive(Debug, Default)]
pub struct ReferenceStore {
    /// All references, in load order
    references: Vec<Reference>,

    /// Index: reference ID -> index in references vec
    id_to_index: HashMap<ReferenceId, usize>,

    /// Every sequence joined by [`DELIMITER`]
    corpus: Vec<u8>,

    /// Corpus offset -> (reference, local offset)
    index: OffsetIndex,
}

impl ReferenceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a single batch of `(identifier, sequence)` pairs
    ///
    /// # Errors
    ///
    /// Returns a [`ReferenceError`] for the first invalid pair.
    pub fn from_pairs<I, K, S>(source: I) -> Result<Self, ReferenceError>
    where
        I: IntoIterator<Item = (K, S)>,
        K: AsRef<str>,
        S: Into<String>,
    {
        let mut store = Self::new();
        store.load(source)?;
        Ok(store)
    }

    /// Append `(identifier, sequence)` pairs to the store.
    ///
    /// The whole batch is validated before anything is added, so a failed load
    /// leaves the store exactly as it was. On success the corpus and offset
    /// index are rebuilt for the whole store. Returns the number of references
    /// added.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError`] if a sequence is empty, is not ASCII, or
    /// contains the delimiter, if an identifier is empty, or if an identifier
    /// is already loaded or repeated within the batch.
    pub fn load<I, K, S>(&mut self, source: I) -> Result<usize, ReferenceError>
    where
        I: IntoIterator<Item = (K, S)>,
        K: AsRef<str>,
        S: Into<String>,
    {
        let mut staged: Vec<Reference> = Vec::new();
        let mut staged_ids: HashSet<ReferenceId> = HashSet::new();

        for (position, (id, sequence)) in source.into_iter().enumerate() {
            if position % PROGRESS_INTERVAL == 0 && position > 0 {
                debug!(
                    "Buffering reference #{} (store holds {})",
                    position,
                    self.references.len()
                );
            }

            let id = id.as_ref();
            let sequence = sequence.into();
            validate_reference(id, &sequence, position)?;

            let reference = Reference::new(id, sequence);
            if self.id_to_index.contains_key(&reference.id)
                || !staged_ids.insert(reference.id.clone())
            {
                return Err(ReferenceError::DuplicateIdentifier { id: id.to_string() });
            }
            staged.push(reference);
        }

        let added = staged.len();
        if added == 0 {
            return Ok(0);
        }

        for reference in staged {
            self.id_to_index
                .insert(reference.id.clone(), self.references.len());
            self.references.push(reference);
        }
        self.rebuild();

        info!(
            "Loaded {} references ({} total, corpus length {})",
            added,
            self.references.len(),
            self.corpus.len()
        );
        Ok(added)
    }

    /// Recompute the corpus and offset index from the reference list
    fn rebuild(&mut self) {
        let total = self.total_residues() + self.references.len().saturating_sub(1);
        let mut corpus = Vec::with_capacity(total);
        for (i, reference) in self.references.iter().enumerate() {
            if i > 0 {
                corpus.push(DELIMITER);
            }
            corpus.extend_from_slice(reference.sequence.as_bytes());
        }

        self.index = OffsetIndex::from_lengths(self.references.iter().map(Reference::len));
        self.corpus = corpus;
    }

    /// The delimiter-joined sequence of every reference
    #[must_use]
    pub fn corpus(&self) -> &[u8] {
        &self.corpus
    }

    #[must_use]
    pub fn index(&self) -> &OffsetIndex {
        &self.index
    }

    /// Find the reference owning a corpus offset
    #[must_use]
    pub fn locate(&self, global_offset: usize) -> Option<Location> {
        self.index.locate(global_offset)
    }

    /// All references, in load order
    #[must_use]
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// Reference at a store position
    #[must_use]
    pub fn reference(&self, index: usize) -> Option<&Reference> {
        self.references.get(index)
    }

    /// Get a reference by identifier
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Reference> {
        self.id_to_index
            .get(id)
            .map(|&idx| &self.references[idx])
    }

    /// Sum of all sequence lengths (delimiters excluded)
    #[must_use]
    pub fn total_residues(&self) -> usize {
        self.references.iter().map(Reference::len).sum()
    }

    /// Number of references in the store
    #[must_use]
    pub fn len(&self) -> usize {
        self.references.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}
