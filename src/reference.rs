use std::collections::HashMap;

use camino::Utf8Path;

use crate::error::RollupError;
use crate::fs_util;

/// Transcript id → gene name for one species.
///
/// The reference file is tab-separated with the gene name in column 0 and the
/// transcript id in column 1; further columns are ignored.
#[derive(Debug, Clone, Default)]
pub struct TranscriptGeneMap {
    genes: HashMap<String, String>,
}

impl TranscriptGeneMap {
    pub fn load(path: &Utf8Path) -> Result<Self, RollupError> {
        let mut genes = HashMap::new();
        fs_util::for_each_line(path, |line_no, line| {
            let mut columns = line.trim().split('\t');
            let gene = columns.next().unwrap_or_default();
            let transcript = columns
                .next()
                .ok_or_else(|| RollupError::MalformedReference {
                    path: path.to_path_buf(),
                    line: line_no,
                })?;
            genes.insert(transcript.to_string(), gene.to_string());
            Ok(())
        })?;
        let map = Self { genes };
        tracing::debug!(path = %path, transcripts = map.len(), "loaded reference");
        Ok(map)
    }

    pub fn gene(&self, transcript: &str) -> Option<&str> {
        self.genes.get(transcript).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranscriptGeneMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            genes: iter
                .into_iter()
                .map(|(transcript, gene)| (transcript.into(), gene.into()))
                .collect(),
        }
    }
}
