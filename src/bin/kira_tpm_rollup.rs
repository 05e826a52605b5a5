use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kira_tpm_rollup::app::{App, TracingSink};
use kira_tpm_rollup::config::RunConfig;
use kira_tpm_rollup::error::RollupError;
use kira_tpm_rollup::output::JsonOutput;

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Parser)]
#[command(name = "kira-tpm-rollup")]
#[command(about = "Sum transcript TPM into gene totals per species, sex, tissue and replicate")]
#[command(version, author)]
struct Cli {
    /// File mapping SRR accessions to species, tissue, sex and replicate
    metadata: Utf8PathBuf,

    /// Directory holding one subdirectory per species
    root: Utf8PathBuf,

    /// Name of the quantification file inside every sample directory
    quant_file: String,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(err) = report.downcast_ref::<RollupError>() {
            return ExitCode::from(map_exit_code(err));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &RollupError) -> u8 {
    match error {
        RollupError::InvalidReplicate { .. }
        | RollupError::MalformedMetadataLine { .. }
        | RollupError::RecordBeforeSpecies { .. }
        | RollupError::ReservedLabel { .. }
        | RollupError::InvalidSpeciesPattern { .. }
        | RollupError::MalformedReference { .. }
        | RollupError::UnknownAccession(_)
        | RollupError::MalformedQuantification { .. }
        | RollupError::InvalidTpm { .. }
        | RollupError::UnknownTranscript { .. }
        | RollupError::InvalidQuantFileName(_) => 2,
        RollupError::SpeciesDirectoryNotFound { .. }
        | RollupError::NoReferenceFile { .. }
        | RollupError::MultipleReferenceFiles { .. }
        | RollupError::Filesystem(_) => 3,
        RollupError::Output(_) => 1,
    }
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = RunConfig::new(cli.metadata, cli.root, cli.quant_file)?;
    let app = App::new(config);
    let tree = app.run(&TracingSink)?;
    JsonOutput::print(&tree)?;
    Ok(())
}
