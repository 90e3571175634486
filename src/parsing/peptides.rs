//! Parser for peptide lists.
//!
//! One peptide per line. Surrounding whitespace is trimmed; blank lines and
//! lines starting with `#` are skipped. Use `-` as the path to read stdin.

use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::parsing::fasta::ParseError;

/// Read peptides from a file, or from stdin when the path is `-`
///
/// # Errors
///
/// Returns `ParseError::Io` if the input cannot be read.
pub fn parse_peptide_file(path: &Path) -> Result<Vec<String>, ParseError> {
    if path.as_os_str() == "-" {
        let stdin = std::io::stdin();
        return parse_peptides(stdin.lock());
    }
    let file = std::fs::File::open(path)?;
    parse_peptides(BufReader::new(file))
}

/// Read peptides from any buffered reader
///
/// # Errors
///
/// Returns `ParseError::Io` if a line cannot be read.
pub fn parse_peptides<R: BufRead>(reader: R) -> Result<Vec<String>, ParseError> {
    let mut peptides = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let peptide = line.trim();
        if peptide.is_empty() || peptide.starts_with('#') {
            continue;
        }
        peptides.push(peptide.to_string());
    }
    Ok(peptides)
}
