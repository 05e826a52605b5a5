use camino::Utf8Path;

use crate::app::{ProgressEvent, ProgressSink};
use crate::domain::SrrAccession;
use crate::error::RollupError;
use crate::fs_util;
use crate::metadata::MetadataIndex;
use crate::quant::TranscriptTpm;
use crate::reference::TranscriptGeneMap;
use crate::tree::SpeciesRecord;

/// Builds the record for one species directory: the single reference file
/// next to one subdirectory per sample.
pub fn aggregate_species(
    species: &str,
    dir: &Utf8Path,
    quant_file_name: &str,
    metadata: &MetadataIndex,
    sink: &dyn ProgressSink,
) -> Result<SpeciesRecord, RollupError> {
    let listing = fs_util::list_dir(dir)?;
    let reference = match listing.files.as_slice() {
        [] => {
            return Err(RollupError::NoReferenceFile {
                dir: dir.to_path_buf(),
            });
        }
        [single] => single,
        many => {
            return Err(RollupError::MultipleReferenceFiles {
                dir: dir.to_path_buf(),
                count: many.len(),
            });
        }
    };
    let genes = TranscriptGeneMap::load(reference)?;

    let mut record = SpeciesRecord::default();
    for sample_dir in &listing.dirs {
        let name = sample_dir.file_name().unwrap_or(sample_dir.as_str());
        let Some(accession) = SrrAccession::find_in(name) else {
            tracing::warn!(dir = %sample_dir, "directory name has no SRR accession, skipping");
            sink.event(ProgressEvent::SkippedDirectory {
                path: sample_dir.to_string(),
            });
            continue;
        };

        let sample = metadata.lookup(accession.as_str())?;
        let tpm = TranscriptTpm::load(&sample_dir.join(quant_file_name))?;
        let gene_tpm = tpm.roll_up(&genes, species)?;

        if record
            .insert(&sample.sex, &sample.tissue, sample.replicate, gene_tpm)
            .is_some()
        {
            tracing::warn!(
                accession = %accession,
                sex = %sample.sex,
                tissue = %sample.tissue,
                replicate = sample.replicate,
                "replicate already recorded, keeping the later sample"
            );
        }
        sink.event(ProgressEvent::Sample {
            species: species.to_string(),
            accession: accession.to_string(),
        });
    }

    record.compute_total();
    Ok(record)
}
