use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader};

use camino::Utf8Path;

use crate::domain::SampleMetadata;
use crate::error::RollupError;
use crate::tree::TOTAL_KEY;

const SPECIES_MARKER: char = '>';

/// Accession → sample metadata, plus species in the order the file lists them.
#[derive(Debug, Clone, Default)]
pub struct MetadataIndex {
    samples: HashMap<String, SampleMetadata>,
    species: Vec<String>,
}

impl MetadataIndex {
    pub fn load(path: &Utf8Path) -> Result<Self, RollupError> {
        let file = fs::File::open(path)
            .map_err(|err| RollupError::Filesystem(format!("open {path}: {err}")))?;
        let index = Self::parse(BufReader::new(file))?;
        tracing::debug!(
            path = %path,
            samples = index.samples.len(),
            species = index.species.len(),
            "loaded metadata"
        );
        Ok(index)
    }

    /// Skips whitespace-only lines; errors carry 1-based line numbers.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, RollupError> {
        let mut builder = IndexBuilder::default();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|err| RollupError::Filesystem(err.to_string()))?;
            if line.trim().is_empty() {
                continue;
            }
            builder.push(idx + 1, &line)?;
        }
        Ok(builder.index)
    }

    pub fn species(&self) -> &[String] {
        &self.species
    }

    pub fn get(&self, accession: &str) -> Option<&SampleMetadata> {
        self.samples.get(accession)
    }

    pub fn lookup(&self, accession: &str) -> Result<&SampleMetadata, RollupError> {
        self.get(accession)
            .ok_or_else(|| RollupError::UnknownAccession(accession.to_string()))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }
}

#[derive(Default)]
struct IndexBuilder {
    index: MetadataIndex,
    current: Option<String>,
}

impl IndexBuilder {
    fn push(&mut self, line_no: usize, line: &str) -> Result<(), RollupError> {
        if let Some(rest) = line.strip_prefix(SPECIES_MARKER) {
            let species = rest.trim().to_string();
            if !self.index.species.contains(&species) {
                self.index.species.push(species.clone());
            }
            self.current = Some(species);
            return Ok(());
        }

        let species = self
            .current
            .clone()
            .ok_or(RollupError::RecordBeforeSpecies { line: line_no })?;
        let (accession, metadata) = parse_record(line_no, line, species)?;
        self.index.samples.insert(accession, metadata);
        Ok(())
    }
}

fn parse_record(
    line_no: usize,
    line: &str,
    species: String,
) -> Result<(String, SampleMetadata), RollupError> {
    let mut fields = line.trim().split(',');
    let accession = fields.next().unwrap_or_default().trim().to_string();
    let attributes = fields
        .next()
        .ok_or_else(|| RollupError::MalformedMetadataLine {
            line: line_no,
            reason: "expected 'accession,tissue sex replicate'".to_string(),
        })?;

    let parts = attributes.split_whitespace().collect::<Vec<_>>();
    let [tissue, sex, replicate, ..] = parts.as_slice() else {
        return Err(RollupError::MalformedMetadataLine {
            line: line_no,
            reason: format!("expected tissue, sex and replicate, got '{}'", attributes.trim()),
        });
    };

    if *sex == TOTAL_KEY {
        return Err(RollupError::ReservedLabel {
            line: line_no,
            label: sex.to_string(),
        });
    }

    let replicate = replicate
        .parse::<i64>()
        .map_err(|_| RollupError::InvalidReplicate {
            line: line_no,
            value: replicate.to_string(),
        })?;

    Ok((
        accession,
        SampleMetadata {
            species,
            tissue: tissue.to_string(),
            sex: sex.to_string(),
            replicate,
        },
    ))
}
