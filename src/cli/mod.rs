//! Command-line interface for peptide-mapper.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **map**: Map peptides to every occurrence in one or more FASTA databases
//! - **references**: List the references loaded from FASTA databases
//!
//! ## Usage
//!
//! ```text
//! # Map a peptide list against a proteome
//! peptide-mapper map --fasta uniprot.fasta --peptides peptides.txt
//!
//! # Pipe peptides in, JSON out
//! cut -f1 psms.tsv | peptide-mapper map --fasta uniprot.fasta --peptides - --format json
//!
//! # A few peptides, scanned in parallel
//! peptide-mapper map --fasta a.fa --fasta b.fa.gz -p ELVIS -p LAP --parallel --threads 8
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::store::ReferenceStore;
use crate::parsing::fasta::{is_fasta_file, parse_fasta_file, IdentifierMode};

pub mod map;
pub mod references;

#[derive(Parser)]
#[command(name = "peptide-mapper")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Map peptides to their exact occurrences in protein FASTA databases")]
#[command(
    long_about = "peptide-mapper finds every occurrence of every peptide in a protein database.\n\nFor each occurrence it reports:\n- The protein it was found in\n- 1-based start and end positions\n- The residues immediately before and after the peptide ('-' at a protein terminus)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Map peptides to protein sequences
    Map(map::MapArgs),

    /// List references loaded from FASTA databases
    References(references::ReferencesArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// FASTA inputs shared by every subcommand
#[derive(clap::Args)]
pub struct DatabaseArgs {
    /// Protein FASTA database (.fa, .fasta, .faa, optionally .gz); repeat to load several
    #[arg(short = 'd', long = "fasta", required = true)]
    pub fasta: Vec<PathBuf>,

    /// How FASTA definition lines become protein identifiers
    #[arg(long, value_enum, default_value = "name")]
    pub id_mode: IdentifierMode,
}

impl DatabaseArgs {
    /// Load every FASTA file, in order, into one store
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be parsed or holds an invalid or
    /// duplicate reference.
    pub fn load_store(&self, verbose: bool) -> anyhow::Result<ReferenceStore> {
        let mut store = ReferenceStore::new();
        for path in &self.fasta {
            if !is_fasta_file(path) {
                tracing::warn!(
                    path = %path.display(),
                    "Unrecognized FASTA extension, parsing anyway"
                );
            }
            let records = parse_fasta_file(path, self.id_mode)
                .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))?;
            let added = store
                .load(records)
                .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))?;

            if verbose {
                eprintln!("Loaded {added} proteins from {}", path.display());
            }
        }
        Ok(store)
    }
}
