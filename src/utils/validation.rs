//! Centralized validation for reference sequences and query peptides.

use thiserror::Error;

use crate::core::types::DELIMITER;

/// A reference rejected by [`crate::catalog::store::ReferenceStore::load`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("Reference #{position} has an empty identifier")]
    EmptyIdentifier { position: usize },

    #[error("Reference '{id}' has an empty sequence")]
    EmptySequence { id: String },

    #[error("Duplicate reference identifier '{id}'")]
    DuplicateIdentifier { id: String },

    #[error("Reference '{id}' contains the reserved delimiter '{}' at position {offset}", DELIMITER as char)]
    ReservedDelimiter { id: String, offset: usize },

    #[error("Reference '{id}' contains a non-ASCII character at byte {offset}")]
    NonAscii { id: String, offset: usize },
}

/// A query batch rejected by [`crate::matching::engine::PeptideMapper::map`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Query #{position} in the batch is empty")]
    EmptyQuery { position: usize },

    #[error("Query '{query}' contains the reserved delimiter '{}'", DELIMITER as char)]
    ReservedDelimiter { query: String },

    #[error("Query '{query}' contains a non-ASCII character")]
    NonAscii { query: String },

    #[error("Failed to build peptide automaton: {0}")]
    Automaton(String),
}

/// Check a reference identifier and sequence.
///
/// `position` is the zero-based index of the record in the incoming batch and
/// is only used for error reporting when there is no identifier to name.
///
/// # Errors
///
/// Returns the first [`ReferenceError`] the record violates. Duplicate
/// identifiers are checked by the store, which knows what is already loaded.
pub fn validate_reference(id: &str, sequence: &str, position: usize) -> Result<(), ReferenceError> {
    if id.trim().is_empty() {
        return Err(ReferenceError::EmptyIdentifier { position });
    }
    if sequence.is_empty() {
        return Err(ReferenceError::EmptySequence { id: id.to_string() });
    }
    if let Some(offset) = sequence.bytes().position(|b| !b.is_ascii()) {
        return Err(ReferenceError::NonAscii {
            id: id.to_string(),
            offset,
        });
    }
    if let Some(offset) = sequence.bytes().position(|b| b == DELIMITER) {
        return Err(ReferenceError::ReservedDelimiter {
            id: id.to_string(),
            offset,
        });
    }
    Ok(())
}

/// Check a single query peptide.
///
/// # Errors
///
/// Returns [`QueryError::EmptyQuery`] for an empty string,
/// [`QueryError::NonAscii`] or [`QueryError::ReservedDelimiter`] for
/// characters that can never match the corpus.
pub fn validate_query(query: &str, position: usize) -> Result<(), QueryError> {
    if query.is_empty() {
        return Err(QueryError::EmptyQuery { position });
    }
    if !query.is_ascii() {
        return Err(QueryError::NonAscii {
            query: query.to_string(),
        });
    }
    if query.as_bytes().contains(&DELIMITER) {
        return Err(QueryError::ReservedDelimiter {
            query: query.to_string(),
        });
    }
    Ok(())
}
