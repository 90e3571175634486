//! Peptide matching engine.
//!
//! A mapping call runs in three stages:
//!
//! 1. [`automaton::QueryBatch`]: validate and deduplicate the peptides
//! 2. [`automaton::PeptideAutomaton`]: build an Aho-Corasick automaton and scan
//!    the store's corpus once, reporting every peptide that ends at every
//!    position (overlapping matches included)
//! 3. [`resolver::OccurrenceResolver`]: turn each corpus offset into a
//!    reference, 1-based coordinates and flanking residues
//!
//! [`engine::PeptideMapper`] ties the stages together. With
//! [`engine::MapperConfig::parallel`] set, stage 2 runs over overlapping
//! corpus partitions on the rayon thread pool (see [`partition`]).
//!
//! ## Example
//!
//! ```rust
//! use peptide_mapper::{PeptideMapper, ReferenceStore};
//!
//! let store = ReferenceStore::from_pairs([
//!     ("Protein1", "ELVISLIVES"),
//!     ("Protein3", "WHYISELVISHELEAVING"),
//! ])
//! .unwrap();
//!
//! let result = PeptideMapper::new(&store).map(["ELVIS"]).unwrap();
//! for occurrence in result.get("ELVIS").unwrap() {
//!     println!(
//!         "{} {}-{} ({}.{})",
//!         occurrence.id, occurrence.start, occurrence.end, occurrence.pre, occurrence.post
//!     );
//! }
//! ```

pub mod automaton;
pub mod engine;
pub mod partition;
pub mod resolver;
