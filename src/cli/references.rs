use clap::Args;
use serde::Serialize;

use crate::catalog::store::ReferenceStore;
use crate::cli::{DatabaseArgs, OutputFormat};

#[derive(Args)]
pub struct ReferencesArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// One row of the reference listing
#[derive(Debug, Serialize)]
struct ReferenceSummary<'a> {
    id: &'a str,
    length: usize,
    corpus_start: usize,
}

fn summarize(store: &ReferenceStore) -> Vec<ReferenceSummary<'_>> {
    store
        .references()
        .iter()
        .zip(store.index().starts())
        .map(|(reference, &corpus_start)| ReferenceSummary {
            id: reference.id.as_str(),
            length: reference.len(),
            corpus_start,
        })
        .collect()
}

/// Execute references subcommand
///
/// # Errors
///
/// Returns an error if a FASTA file cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ReferencesArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let store = args.database.load_store(verbose)?;
    let rows = summarize(&store);

    match format {
        OutputFormat::Text => {
            println!("Proteins: {}", store.len());
            println!("Residues: {}", store.total_residues());
            println!();
            for row in &rows {
                println!("  {:<40} {:>8} aa  @{}", row.id, row.length, row.corpus_start);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Tsv => {
            println!("id\tlength\tcorpus_start");
            for row in &rows {
                println!("{}\t{}\t{}", row.id, row.length, row.corpus_start);
            }
        }
    }

    Ok(())
}
