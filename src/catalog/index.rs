use serde::Serialize;

/// Position of a corpus offset inside the reference that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Index of the reference in store order
    pub reference: usize,
    /// Zero-based offset within that reference's sequence
    pub offset: usize,
}

/// Maps offsets in the concatenated corpus back to references.
///
/// Holds the start offset of every reference in the corpus together with its
/// length, so that delimiter positions can be told apart from residues.
/// Lookups are a binary search over the starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetIndex {
    starts: Vec<usize>,
    lengths: Vec<usize>,
}

impl OffsetIndex {
    /// Build the index for references of the given lengths, laid out in order
    /// and separated by a single delimiter byte.
    pub fn from_lengths(lengths: impl IntoIterator<Item = usize>) -> Self {
        let lengths: Vec<usize> = lengths.into_iter().collect();
        let mut starts = Vec::with_capacity(lengths.len());
        let mut next = 0;
        for &len in &lengths {
            starts.push(next);
            // One byte for the delimiter that follows
            next += len + 1;
        }
        Self { starts, lengths }
    }

    /// Offset of each reference's first residue in the corpus
    #[must_use]
    pub fn starts(&self) -> &[usize] {
        &self.starts
    }

    /// Corpus offset of the first residue of reference `reference`
    #[must_use]
    pub fn start_of(&self, reference: usize) -> Option<usize> {
        self.starts.get(reference).copied()
    }

    /// Find the reference containing `global_offset`.
    ///
    /// Returns `None` if the offset is a delimiter or past the end of the
    /// corpus.
    #[must_use]
    pub fn locate(&self, global_offset: usize) -> Option<Location> {
        // Rightmost start <= global_offset
        let reference = self
            .starts
            .partition_point(|&start| start <= global_offset)
            .checked_sub(1)?;
        let offset = global_offset - self.starts[reference];
        if offset < self.lengths[reference] {
            Some(Location { reference, offset })
        } else {
            None
        }
    }

    /// Number of indexed references
    #[must_use]
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }
}
