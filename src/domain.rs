use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static SRR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"SRR\d+").unwrap_or_else(|err| panic!("invalid accession pattern: {err}"))
});

/// Sequence Read Archive run accession (`SRR` followed by digits).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SrrAccession(String);

impl SrrAccession {
    /// Finds the first accession embedded in `name`, e.g. `sample_SRR001_x`.
    pub fn find_in(name: &str) -> Option<Self> {
        SRR_PATTERN
            .find(name)
            .map(|found| Self(found.as_str().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SrrAccession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleMetadata {
    pub species: String,
    pub tissue: String,
    pub sex: String,
    pub replicate: i64,
}
