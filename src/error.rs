use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum RollupError {
    #[error("metadata line {line}: replicate is not an integer: {value}")]
    InvalidReplicate { line: usize, value: String },

    #[error("metadata line {line}: {reason}")]
    MalformedMetadataLine { line: usize, reason: String },

    #[error("metadata line {line}: sample record appears before any '>' species line")]
    RecordBeforeSpecies { line: usize },

    #[error("metadata line {line}: label '{label}' is reserved for species totals")]
    ReservedLabel { line: usize, label: String },

    #[error("species name is not a valid pattern: {species}")]
    InvalidSpeciesPattern { species: String },

    #[error("no directory under {root} matches species {species}")]
    #[diagnostic(help("directory names must start with the species name (case is ignored)"))]
    SpeciesDirectoryNotFound { species: String, root: Utf8PathBuf },

    #[error("no files found in species directory {dir}; cannot build transcript/gene dictionary")]
    NoReferenceFile { dir: Utf8PathBuf },

    #[error("too many files found in species directory {dir} ({count})")]
    #[diagnostic(help("keep only the transcript id/gene name file next to the sample directories"))]
    MultipleReferenceFiles { dir: Utf8PathBuf, count: usize },

    #[error("{path} line {line}: expected gene name and transcript id separated by a tab")]
    MalformedReference { path: Utf8PathBuf, line: usize },

    #[error("accession {0} has no entry in the metadata file")]
    UnknownAccession(String),

    #[error("{path} line {line}: expected at least three whitespace-separated fields")]
    MalformedQuantification { path: Utf8PathBuf, line: usize },

    #[error("{path} line {line}: TPM is not a number: {value}")]
    InvalidTpm {
        path: Utf8PathBuf,
        line: usize,
        value: String,
    },

    #[error("transcript {transcript} is missing from the {species} reference file")]
    UnknownTranscript { transcript: String, species: String },

    #[error("quantification file must be a plain file name: {0}")]
    InvalidQuantFileName(String),

    #[error("filesystem error: {0}")]
    Filesystem(String),

    #[error("failed to write output: {0}")]
    Output(String),
}
