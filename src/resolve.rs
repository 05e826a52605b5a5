use camino::{Utf8Path, Utf8PathBuf};
use regex::{Regex, RegexBuilder};

use crate::error::RollupError;
use crate::fs_util;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesDir {
    pub species: String,
    pub dir: Option<Utf8PathBuf>,
}

impl SpeciesDir {
    pub fn require(&self, root: &Utf8Path) -> Result<&Utf8Path, RollupError> {
        self.dir
            .as_deref()
            .ok_or_else(|| RollupError::SpeciesDirectoryNotFound {
                species: self.species.clone(),
                root: root.to_path_buf(),
            })
    }
}

/// Pairs every species with the first entry under `root` whose name starts
/// with the species name, ignoring case.
pub fn resolve_species_dirs(
    species: &[String],
    root: &Utf8Path,
) -> Result<Vec<SpeciesDir>, RollupError> {
    let names = fs_util::entry_names(root)?;
    species
        .iter()
        .map(|name| -> Result<SpeciesDir, RollupError> {
            let pattern = species_pattern(name)?;
            let dir = names
                .iter()
                .find(|entry| pattern.is_match(entry))
                .map(|entry| root.join(entry));
            match &dir {
                Some(dir) => tracing::debug!(species = %name, dir = %dir, "resolved species"),
                None => tracing::warn!(species = %name, root = %root, "no species directory"),
            }
            Ok(SpeciesDir {
                species: name.clone(),
                dir,
            })
        })
        .collect()
}

fn species_pattern(species: &str) -> Result<Regex, RollupError> {
    RegexBuilder::new(&format!("^(?:{species})"))
        .case_insensitive(true)
        .build()
        .map_err(|_| RollupError::InvalidSpeciesPattern {
            species: species.to_string(),
        })
}
