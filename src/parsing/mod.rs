//! Parsers for the inputs of a mapping run.
//!
//! - **FASTA files**: protein databases, optionally gzip/bgzip compressed,
//!   read into `(identifier, sequence)` pairs
//! - **Peptide lists**: plain text, one peptide per line
//!
//! ## Example
//!
//! ```rust,no_run
//! use peptide_mapper::parsing::fasta::{parse_fasta_file, IdentifierMode};
//! use peptide_mapper::parsing::peptides::parse_peptide_file;
//! use peptide_mapper::{PeptideMapper, ReferenceStore};
//! use std::path::Path;
//!
//! let mut store = ReferenceStore::new();
//! store
//!     .load(parse_fasta_file(Path::new("uniprot.fasta"), IdentifierMode::Name).unwrap())
//!     .unwrap();
//!
//! let peptides = parse_peptide_file(Path::new("peptides.txt")).unwrap();
//! let result = PeptideMapper::new(&store).map(&peptides).unwrap();
//! println!("{} occurrences", result.total_occurrences());
//! ```

pub mod fasta;
pub mod peptides;
