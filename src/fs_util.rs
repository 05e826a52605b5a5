use std::fs;
use std::io::{BufRead, BufReader};

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::RollupError;

#[derive(Debug, Default)]
pub struct DirListing {
    pub files: Vec<Utf8PathBuf>,
    pub dirs: Vec<Utf8PathBuf>,
}

/// Names of the entries directly under `dir`, sorted.
pub fn entry_names(dir: &Utf8Path) -> Result<Vec<String>, RollupError> {
    let entries = dir
        .read_dir_utf8()
        .map_err(|err| RollupError::Filesystem(format!("list {dir}: {err}")))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| RollupError::Filesystem(format!("list {dir}: {err}")))?;
        names.push(entry.file_name().to_string());
    }
    names.sort();
    Ok(names)
}

/// Splits the entries of `dir` into regular files and everything else.
pub fn list_dir(dir: &Utf8Path) -> Result<DirListing, RollupError> {
    let mut listing = DirListing::default();
    for name in entry_names(dir)? {
        let path = dir.join(&name);
        if path.is_file() {
            listing.files.push(path);
        } else {
            listing.dirs.push(path);
        }
    }
    Ok(listing)
}

/// Reads `path` line by line, passing 1-based line numbers to `handle`.
/// Whitespace-only lines are skipped.
pub fn for_each_line<F>(path: &Utf8Path, mut handle: F) -> Result<(), RollupError>
where
    F: FnMut(usize, &str) -> Result<(), RollupError>,
{
    let file = fs::File::open(path)
        .map_err(|err| RollupError::Filesystem(format!("open {path}: {err}")))?;
    let reader = BufReader::new(file);
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| RollupError::Filesystem(format!("read {path}: {err}")))?;
        if line.trim().is_empty() {
            continue;
        }
        handle(idx + 1, &line)?;
    }
    Ok(())
}
