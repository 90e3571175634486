//! Parser for protein FASTA files using noodles.
//!
//! Produces `(identifier, sequence)` pairs ready for
//! [`crate::catalog::store::ReferenceStore::load`]. Sequences spanning several
//! lines are concatenated and any whitespace inside them is dropped.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.faa`, `.fna` (uncompressed)
//! - any of the above with `.gz` or `.bgz` (gzip/bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),
}

/// How a FASTA definition line becomes a reference identifier
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum IdentifierMode {
    /// Text up to the first whitespace (e.g. `sp|P02769|ALBU_BOVIN`)
    #[default]
    Name,
    /// Name and description joined by a single space, i.e. the definition
    /// line without the leading `>` and with its first whitespace run
    /// normalized
    Header,
}

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    let stripped = path_str
        .strip_suffix(".gz")
        .or_else(|| path_str.strip_suffix(".bgz"))
        .unwrap_or(&path_str);

    matches!(
        Path::new(stripped)
            .extension()
            .and_then(OsStr::to_str),
        Some("fa" | "fasta" | "faa" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Parse a FASTA file into `(identifier, sequence)` pairs.
///
/// Compression is detected from the file extension.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, or `ParseError::InvalidFormat` if no records are found or a
/// record is not valid UTF-8.
pub fn parse_fasta_file(
    path: &Path,
    mode: IdentifierMode,
) -> Result<Vec<(String, String)>, ParseError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        parse_fasta(BufReader::new(MultiGzDecoder::new(file)), mode)
    } else {
        parse_fasta(BufReader::new(file), mode)
    }
}

/// Consume blank lines ahead of the first definition line
fn skip_leading_blank_lines<R: BufRead>(reader: &mut R) -> std::io::Result<()> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(());
        }
        let blank = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
        let reached_text = blank < buf.len();
        reader.consume(blank);
        if reached_text {
            return Ok(());
        }
    }
}

/// Parse FASTA records from any buffered reader
///
/// # Errors
///
/// See [`parse_fasta_file`].
pub fn parse_fasta<R: BufRead>(
    mut reader: R,
    mode: IdentifierMode,
) -> Result<Vec<(String, String)>, ParseError> {
    skip_leading_blank_lines(&mut reader)?;
    let mut reader = fasta::io::Reader::new(reader);
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let id = match (mode, record.description()) {
            (IdentifierMode::Header, Some(description)) => format!(
                "{} {}",
                String::from_utf8_lossy(record.name()),
                String::from_utf8_lossy(description)
            ),
            _ => String::from_utf8_lossy(record.name()).to_string(),
        };

        let residues: Vec<u8> = record
            .sequence()
            .as_ref()
            .iter()
            .copied()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        let sequence = String::from_utf8(residues).map_err(|_| {
            ParseError::InvalidFormat(format!("Sequence of '{id}' is not valid UTF-8"))
        })?;

        records.push((id, sequence));
    }

    if records.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_is_fasta_file() {
        assert!(is_fasta_file(Path::new("test.fa")));
        assert!(is_fasta_file(Path::new("test.fasta")));
        assert!(is_fasta_file(Path::new("uniprot.faa")));
        assert!(is_fasta_file(Path::new("test.fa.gz")));
        assert!(is_fasta_file(Path::new("test.fasta.bgz")));
        assert!(is_fasta_file(Path::new("/path/to/Proteome.FASTA")));

        assert!(!is_fasta_file(Path::new("peptides.txt")));
        assert!(!is_fasta_file(Path::new("test.gz")));
        assert!(!is_fasta_file(Path::new("test.fai")));
    }

    #[test]
    fn test_parse_multiline_sequence() {
        let content = b">Protein1\nELVISLIVES\n>Protein3 spans two lines\nWHYISELVIS\nHELEAVING\n";
        let records = parse_fasta(&content[..], IdentifierMode::Name).unwrap();
        assert_eq!(
            records,
            vec![
                ("Protein1".to_string(), "ELVISLIVES".to_string()),
                ("Protein3".to_string(), "WHYISELVISHELEAVING".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_header_mode() {
        let content = b">sp|P02769|ALBU_BOVIN Albumin OS=Bos taurus\nMKWVTFISLL\n";
        let records = parse_fasta(&content[..], IdentifierMode::Header).unwrap();
        assert_eq!(records[0].0, "sp|P02769|ALBU_BOVIN Albumin OS=Bos taurus");

        let records = parse_fasta(&content[..], IdentifierMode::Name).unwrap();
        assert_eq!(records[0].0, "sp|P02769|ALBU_BOVIN");
    }

    #[test]
    fn test_parse_blank_line_between_records() {
        let content = b">Protein1\nELVISLIVES\n\n>Protein2\nKLEINERPENNER\n";
        let records = parse_fasta(&content[..], IdentifierMode::Name).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].1, "ELVISLIVES");
        assert_eq!(records[1].1, "KLEINERPENNER");
    }

    #[test]
    fn test_parse_leading_blank_lines() {
        let content = b"\n  \n\r\n>Protein1\nELVISLIVES\n";
        let records = parse_fasta(&content[..], IdentifierMode::Name).unwrap();
        assert_eq!(
            records,
            vec![("Protein1".to_string(), "ELVISLIVES".to_string())]
        );
    }

    #[test]
    fn test_parse_only_blank_lines() {
        let content = b"\n\n\n";
        let result = parse_fasta(&content[..], IdentifierMode::Name);
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_header_mode_normalizes_separator() {
        let content = b">sp|A|B\tAlbumin  OS=Bos\nMKWV\n";
        let records = parse_fasta(&content[..], IdentifierMode::Header).unwrap();
        assert_eq!(records[0].0, "sp|A|B Albumin  OS=Bos");
    }

    #[test]
    fn test_parse_fasta_file_gzipped() {
        let mut temp = NamedTempFile::with_suffix(".fasta.gz").unwrap();
        {
            let mut encoder = GzEncoder::new(&mut temp, Compression::default());
            encoder.write_all(b">GnomeChompsky\nMUSTACHIO\n").unwrap();
            encoder.finish().unwrap();
        }
        temp.flush().unwrap();

        let records = parse_fasta_file(temp.path(), IdentifierMode::Name).unwrap();
        assert_eq!(
            records,
            vec![("GnomeChompsky".to_string(), "MUSTACHIO".to_string())]
        );
    }

    #[test]
    fn test_parse_empty_fasta() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b"").unwrap();
        temp.flush().unwrap();

        let result = parse_fasta_file(temp.path(), IdentifierMode::Name);
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_fasta_file(Path::new("/nonexistent/proteins.fa"), IdentifierMode::Name);
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
