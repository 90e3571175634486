use serde::Serialize;

use crate::core::types::ReferenceId;

/// A named reference sequence (typically a protein) held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    /// Unique identifier within one store
    pub id: ReferenceId,

    /// Residues, ASCII only and never containing the corpus delimiter
    pub sequence: String,
}

impl Reference {
    pub fn new(id: impl AsRef<str>, sequence: impl Into<String>) -> Self {
        Self {
            id: ReferenceId::new(id),
            sequence: sequence.into(),
        }
    }

    /// Sequence length in residues
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Residue at a zero-based position, if it exists
    #[must_use]
    pub fn residue(&self, position: usize) -> Option<char> {
        self.sequence.as_bytes().get(position).map(|&b| char::from(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_residue() {
        let reference = Reference::new("Protein1", "ELVISLIVES");
        assert_eq!(reference.len(), 10);
        assert!(!reference.is_empty());
        assert_eq!(reference.residue(0), Some('E'));
        assert_eq!(reference.residue(9), Some('S'));
        assert_eq!(reference.residue(10), None);
    }
}
