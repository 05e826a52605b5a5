use std::collections::BTreeMap;

use camino::Utf8Path;

use crate::error::RollupError;
use crate::fs_util;
use crate::reference::TranscriptGeneMap;
use crate::tree::GeneTpm;

const TRANSCRIPT_COLUMN: usize = 0;
const TPM_COLUMN: usize = 2;

/// Transcript-level TPM values from one quantification file.
#[derive(Debug, Clone, Default)]
pub struct TranscriptTpm {
    values: BTreeMap<String, f64>,
}

impl TranscriptTpm {
    /// Parses a whitespace-separated quantification file: column 0 is the
    /// transcript id, column 2 the TPM, which must be a finite number.
    pub fn load(path: &Utf8Path) -> Result<Self, RollupError> {
        let mut values = BTreeMap::new();
        fs_util::for_each_line(path, |line_no, line| {
            let fields = line.split_whitespace().collect::<Vec<_>>();
            if fields.len() <= TPM_COLUMN {
                return Err(RollupError::MalformedQuantification {
                    path: path.to_path_buf(),
                    line: line_no,
                });
            }
            let raw = fields[TPM_COLUMN];
            let tpm = raw
                .parse::<f64>()
                .ok()
                .filter(|tpm| tpm.is_finite())
                .ok_or_else(|| RollupError::InvalidTpm {
                    path: path.to_path_buf(),
                    line: line_no,
                    value: raw.to_string(),
                })?;
            values.insert(fields[TRANSCRIPT_COLUMN].to_string(), tpm);
            Ok(())
        })?;
        tracing::debug!(path = %path, transcripts = values.len(), "loaded quantification");
        Ok(Self { values })
    }

    /// Sums transcript TPM per gene, visiting transcripts in id order so the
    /// floating point result is reproducible. Every transcript must be known
    /// to `genes`.
    pub fn roll_up(&self, genes: &TranscriptGeneMap, species: &str) -> Result<GeneTpm, RollupError> {
        let mut out = BTreeMap::new();
        for (transcript, tpm) in &self.values {
            let gene = genes
                .gene(transcript)
                .ok_or_else(|| RollupError::UnknownTranscript {
                    transcript: transcript.clone(),
                    species: species.to_string(),
                })?;
            *out.entry(gene.to_string()).or_insert(0.0) += tpm;
        }
        Ok(out)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for TranscriptTpm {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(transcript, tpm)| (transcript.into(), tpm))
                .collect(),
        }
    }
}
