use clap::Parser;
use tracing_subscriber::EnvFilter;

use peptide_mapper::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("peptide_mapper=debug,info")
    } else {
        EnvFilter::new("peptide_mapper=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Map(args) => {
            cli::map::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::References(args) => {
            cli::references::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
