use std::fmt;

use crate::aggregate::aggregate_species;
use crate::config::RunConfig;
use crate::error::RollupError;
use crate::metadata::MetadataIndex;
use crate::resolve::resolve_species_dirs;
use crate::tree::ResultTree;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    MetadataLoaded { samples: usize, species: usize },
    Species { species: String, dir: String },
    Sample { species: String, accession: String },
    SkippedDirectory { path: String },
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressEvent::MetadataLoaded { samples, species } => {
                write!(f, "phase=Load; {samples} samples across {species} species")
            }
            ProgressEvent::Species { species, dir } => {
                write!(f, "phase=Aggregate; species={species} dir={dir}")
            }
            ProgressEvent::Sample { species, accession } => {
                write!(f, "phase=Aggregate; species={species} sample={accession}")
            }
            ProgressEvent::SkippedDirectory { path } => {
                write!(f, "phase=Aggregate; skipped {path}")
            }
        }
    }
}

pub trait ProgressSink {
    fn event(&self, event: ProgressEvent);
}

/// Forwards progress to `tracing` at debug level.
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn event(&self, event: ProgressEvent) {
        tracing::debug!("{event}");
    }
}

pub struct App {
    config: RunConfig,
}

impl App {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Runs the whole pipeline. Any fatal condition aborts before a tree is
    /// returned.
    pub fn run(&self, sink: &dyn ProgressSink) -> Result<ResultTree, RollupError> {
        let metadata = MetadataIndex::load(&self.config.metadata_path)?;
        tracing::info!(
            samples = metadata.len(),
            species = metadata.species().len(),
            "metadata loaded"
        );
        sink.event(ProgressEvent::MetadataLoaded {
            samples: metadata.len(),
            species: metadata.species().len(),
        });

        let dirs = resolve_species_dirs(metadata.species(), &self.config.root_dir)?;

        let mut tree = ResultTree::default();
        for entry in &dirs {
            let dir = entry.require(&self.config.root_dir)?;
            tracing::info!(species = %entry.species, dir = %dir, "aggregating species");
            sink.event(ProgressEvent::Species {
                species: entry.species.clone(),
                dir: dir.to_string(),
            });
            let record = aggregate_species(
                &entry.species,
                dir,
                &self.config.quant_file_name,
                &metadata,
                sink,
            )?;
            tree.species.insert(entry.species.clone(), record);
        }

        Ok(tree)
    }
}
