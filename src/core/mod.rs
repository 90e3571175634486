//! Core data types for peptide mapping.
//!
//! - [`Reference`]: a named protein sequence held by the store
//! - [`Occurrence`]: one located peptide, with 1-based coordinates and flanks
//! - [`MappingResult`]: all occurrences of one query batch, keyed by peptide
//! - [`ReferenceId`], [`DELIMITER`], [`SENTINEL`]: shared identifiers and
//!   reserved characters
//!
//! ## Flanks
//!
//! | Match position | `pre` | `post` |
//! |----------------|-------|--------|
//! | interior | residue before | residue after |
//! | starts at residue 1 | `-` | residue after |
//! | ends at last residue | residue before | `-` |
//! | whole reference | `-` | `-` |

pub mod occurrence;
pub mod reference;
pub mod types;

pub use occurrence::{MappingResult, Occurrence};
pub use reference::Reference;
pub use types::{ReferenceId, DELIMITER, SENTINEL};
