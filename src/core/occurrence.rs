use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;

use crate::core::types::ReferenceId;

/// One located instance of a peptide inside one reference.
///
/// Coordinates are 1-based and inclusive. `pre`/`post` are the residues
/// immediately before and after the match, or [`crate::core::types::SENTINEL`]
/// when the match touches the start or end of the reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Occurrence {
    /// The peptide that matched; also the key it is filed under in a
    /// [`MappingResult`], so it is left out of serialized records
    #[serde(skip)]
    pub peptide: Arc<str>,

    pub start: usize,
    pub end: usize,
    pub pre: char,
    pub post: char,

    /// Owning reference
    pub id: ReferenceId,
}

impl Occurrence {
    /// Match length in residues
    #[must_use]
    pub fn match_len(&self) -> usize {
        self.end + 1 - self.start
    }
}

/// Occurrences of one query batch, keyed by peptide.
///
/// Keys keep the order in which peptides were first seen in the batch. Every
/// peptide of the batch has an entry, possibly empty. Within one peptide the
/// occurrences are in corpus scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MappingResult {
    mappings: IndexMap<Arc<str>, Vec<Occurrence>>,
}

impl MappingResult {
    /// Create a result with an empty entry for each peptide
    pub fn with_peptides<'a>(peptides: impl IntoIterator<Item = &'a Arc<str>>) -> Self {
        let mappings = peptides
            .into_iter()
            .map(|p| (Arc::clone(p), Vec::new()))
            .collect();
        Self { mappings }
    }

    pub fn push(&mut self, occurrence: Occurrence) {
        self.mappings
            .entry(Arc::clone(&occurrence.peptide))
            .or_default()
            .push(occurrence);
    }

    /// Occurrences of `peptide`, or `None` if it was not part of the batch
    #[must_use]
    pub fn get(&self, peptide: &str) -> Option<&[Occurrence]> {
        self.mappings.get(peptide).map(Vec::as_slice)
    }

    /// Peptides of the batch, in first-seen order
    pub fn peptides(&self) -> impl Iterator<Item = &str> {
        self.mappings.keys().map(|p| &**p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.mappings
            .iter()
            .map(|(peptide, occurrences)| (&**peptide, occurrences.as_slice()))
    }

    /// All occurrences, grouped by peptide
    pub fn occurrences(&self) -> impl Iterator<Item = &Occurrence> {
        self.mappings.values().flatten()
    }

    /// Peptides with no occurrence at all
    pub fn unmapped(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, occurrences)| occurrences.is_empty())
            .map(|(peptide, _)| peptide)
    }

    /// Number of distinct peptides in the batch
    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    #[must_use]
    pub fn total_occurrences(&self) -> usize {
        self.mappings.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occurrence(peptide: &Arc<str>, id: &str, start: usize) -> Occurrence {
        Occurrence {
            peptide: Arc::clone(peptide),
            start,
            end: start + peptide.len() - 1,
            pre: '-',
            post: 'K',
            id: ReferenceId::new(id),
        }
    }

    #[test]
    fn test_mapping_result_keeps_empty_entries() {
        let elvis: Arc<str> = Arc::from("ELVIS");
        let other: Arc<str> = Arc::from("WHYELVIS");
        let mut result = MappingResult::with_peptides([&elvis, &other]);
        result.push(occurrence(&elvis, "Protein1", 1));
        result.push(occurrence(&elvis, "Protein3", 6));

        assert_eq!(result.len(), 2);
        assert_eq!(result.total_occurrences(), 2);
        assert_eq!(result.get("ELVIS").unwrap().len(), 2);
        assert_eq!(result.get("WHYELVIS"), Some(&[][..]));
        assert_eq!(result.get("MISSING"), None);
        assert_eq!(result.unmapped().collect::<Vec<_>>(), vec!["WHYELVIS"]);
        assert_eq!(result.peptides().collect::<Vec<_>>(), vec!["ELVIS", "WHYELVIS"]);
    }

    #[test]
    fn test_occurrence_len() {
        let peptide: Arc<str> = Arc::from("GGGG");
        let occ = occurrence(&peptide, "Overlapping", 3);
        assert_eq!(occ.end, 6);
        assert_eq!(occ.match_len(), 4);
    }

    #[test]
    fn test_mapping_result_json_shape() {
        let peptide: Arc<str> = Arc::from("ELVIS");
        let mut result = MappingResult::with_peptides([&peptide]);
        result.push(occurrence(&peptide, "Protein1", 1));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "ELVIS": [
                    {"start": 1, "end": 5, "pre": "-", "post": "K", "id": "Protein1"}
                ]
            })
        );
    }
}
