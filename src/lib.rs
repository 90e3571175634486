//! # peptide-mapper
//!
//! A library for locating every occurrence of a batch of peptides in a protein
//! database.
//!
//! Proteomics search engines report peptides, but downstream analysis needs to
//! know which proteins each peptide came from, where it sits in them, and which
//! residues flank it (for example to check tryptic cleavage sites). With
//! thousands of peptides and databases of tens of millions of residues, looking
//! up each peptide on its own is far too slow.
//!
//! `peptide-mapper` joins all proteins into one corpus, builds a single
//! Aho-Corasick automaton per peptide batch and scans the corpus once.
//!
//! ## Features
//!
//! - **All occurrences**: overlapping matches of the same or different
//!   peptides are all reported
//! - **No cross-protein matches**: proteins are separated by a reserved
//!   delimiter that no peptide can contain
//! - **Fast coordinate lookup**: corpus offsets are mapped back to proteins by
//!   binary search
//! - **Flanking residues**: the residue before and after every match, or `-`
//!   at a protein terminus
//! - **Parallel scan**: optional partitioned scan on the rayon thread pool
//!
//! ## Example
//!
//! ```rust
//! use peptide_mapper::{PeptideMapper, ReferenceStore};
//!
//! let mut store = ReferenceStore::new();
//! store
//!     .load([("Overlapping", "GGGGGGGGGG"), ("GnomeChompsky", "MUSTACHIO")])
//!     .unwrap();
//!
//! let result = PeptideMapper::new(&store).map(["GGGG", "MUST"]).unwrap();
//! assert_eq!(result.get("GGGG").unwrap().len(), 7);
//!
//! let must = &result.get("MUST").unwrap()[0];
//! assert_eq!((must.start, must.end, must.pre, must.post), (1, 4, '-', 'A'));
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Reference store, corpus and offset index
//! - [`core`]: Core data types for references and occurrences
//! - [`matching`]: Automaton, resolver and mapping engine
//! - [`parsing`]: Parsers for FASTA databases and peptide lists
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::catalog::index::{Location, OffsetIndex};
pub use crate::catalog::store::ReferenceStore;
pub use crate::core::occurrence::{MappingResult, Occurrence};
pub use crate::core::reference::Reference;
pub use crate::core::types::*;
pub use crate::matching::engine::{MapperConfig, PeptideMapper};
pub use crate::utils::validation::{QueryError, ReferenceError};
