use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::cli::{DatabaseArgs, OutputFormat};
use crate::core::occurrence::MappingResult;
use crate::matching::engine::{MapperConfig, PeptideMapper, DEFAULT_PARTITION_LEN};
use crate::parsing::peptides::parse_peptide_file;

#[derive(Args)]
pub struct MapArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,

    /// File with one peptide per line; use '-' for stdin
    #[arg(short = 'i', long)]
    pub peptides: Option<PathBuf>,

    /// Peptide to map; repeat for several
    #[arg(short = 'p', long = "peptide")]
    pub peptide: Vec<String>,

    /// Scan the database in parallel partitions
    #[arg(long)]
    pub parallel: bool,

    /// Length in residues of each parallel partition
    #[arg(long, default_value_t = DEFAULT_PARTITION_LEN)]
    pub partition_len: usize,

    /// Number of worker threads for --parallel (defaults to all cores)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Write results to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute map subcommand
///
/// # Errors
///
/// Returns an error if inputs cannot be read, a peptide is invalid, or the
/// output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: MapArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut peptides = args.peptide.clone();
    if let Some(path) = &args.peptides {
        peptides.extend(
            parse_peptide_file(path).map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))?,
        );
    }
    if peptides.is_empty() {
        anyhow::bail!("No peptides to map; pass --peptides <FILE> or --peptide <SEQ>");
    }

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let store = args.database.load_store(verbose)?;
    if verbose {
        eprintln!(
            "Database: {} proteins, {} residues",
            store.len(),
            store.total_residues()
        );
    }

    let config = MapperConfig {
        parallel: args.parallel,
        partition_len: args.partition_len,
    };
    let result = PeptideMapper::with_config(&store, config).map(&peptides)?;

    if verbose {
        eprintln!(
            "Mapped {} peptides: {} occurrences, {} without any match",
            result.len(),
            result.total_occurrences(),
            result.unmapped().count()
        );
    }

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    match format {
        OutputFormat::Text => write_text_results(&mut out, &result)?,
        OutputFormat::Json => write_json_results(&mut out, &result)?,
        OutputFormat::Tsv => {
            write_tsv_results(&mut out, &result)?;
            // TSV rows exist only per occurrence
            let unmapped: Vec<&str> = result.unmapped().collect();
            if !unmapped.is_empty() {
                tracing::warn!(
                    "{} peptides without any occurrence: {}",
                    unmapped.len(),
                    unmapped.join(", ")
                );
            }
        }
    }
    out.flush()?;

    Ok(())
}

fn write_text_results(out: &mut dyn Write, result: &MappingResult) -> anyhow::Result<()> {
    for (peptide, occurrences) in result.iter() {
        let noun = if occurrences.len() == 1 {
            "occurrence"
        } else {
            "occurrences"
        };
        writeln!(out, "{peptide} ({} {noun})", occurrences.len())?;
        for occ in occurrences {
            writeln!(
                out,
                "  {}\t{}-{}\t{}.{}.{}",
                occ.id, occ.start, occ.end, occ.pre, peptide, occ.post
            )?;
        }
    }
    Ok(())
}

fn write_json_results(out: &mut dyn Write, result: &MappingResult) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)?;
    Ok(())
}

fn write_tsv_results(out: &mut dyn Write, result: &MappingResult) -> anyhow::Result<()> {
    writeln!(out, "peptide\tprotein\tstart\tend\tpre\tpost")?;
    for occ in result.occurrences() {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}",
            occ.peptide, occ.id, occ.start, occ.end, occ.pre, occ.post
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::store::ReferenceStore;

    fn sample_result() -> MappingResult {
        let store = ReferenceStore::from_pairs([
            ("Protein1", "ELVISLIVES"),
            ("Protein3", "WHYISELVISHELEAVING"),
        ])
        .unwrap();
        PeptideMapper::new(&store).map(["ELVIS", "WHYELVIS"]).unwrap()
    }

    #[test]
    fn test_write_tsv_results() {
        let mut buf = Vec::new();
        write_tsv_results(&mut buf, &sample_result()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "peptide\tprotein\tstart\tend\tpre\tpost\n\
             ELVIS\tProtein1\t1\t5\t-\tL\n\
             ELVIS\tProtein3\t6\t10\tS\tH\n"
        );
    }

    #[test]
    fn test_write_text_results() {
        let mut buf = Vec::new();
        write_text_results(&mut buf, &sample_result()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("ELVIS (2 occurrences)"));
        assert!(text.contains("  Protein3\t6-10\tS.ELVIS.H"));
        assert!(text.contains("WHYELVIS (0 occurrences)"));
    }

    #[test]
    fn test_write_json_results() {
        let mut buf = Vec::new();
        write_json_results(&mut buf, &sample_result()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["ELVIS"][1]["id"], "Protein3");
        assert_eq!(value["ELVIS"][1]["start"], 6);
        assert_eq!(value["WHYELVIS"], serde_json::json!([]));
    }
}
