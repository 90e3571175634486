//! Reference storage and corpus indexing.
//!
//! References are appended to a [`store::ReferenceStore`], which joins every
//! sequence into a single corpus separated by a reserved delimiter byte:
//!
//! ```text
//! ELVISLIVES|KLEINERPENNER|WHYISELVISHELEAVING
//! ^0         ^11           ^25
//! ```
//!
//! The start offsets feed an [`index::OffsetIndex`], which answers "which
//! reference owns corpus offset N, and where inside it" with a binary search.
//!
//! ## Example
//!
//! ```rust
//! use peptide_mapper::ReferenceStore;
//!
//! let mut store = ReferenceStore::new();
//! store.load([("Protein1", "ELVISLIVES"), ("Protein2", "KLEINERPENNER")]).unwrap();
//!
//! let location = store.locate(12).unwrap();
//! assert_eq!(store.references()[location.reference].id.as_str(), "Protein2");
//! assert_eq!(location.offset, 1);
//! ```

pub mod index;
pub mod store;
