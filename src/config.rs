use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

use crate::error::RollupError;

/// Inputs of one aggregation run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub metadata_path: Utf8PathBuf,
    pub root_dir: Utf8PathBuf,
    pub quant_file_name: String,
}

impl RunConfig {
    pub fn new(
        metadata_path: impl Into<Utf8PathBuf>,
        root_dir: impl Into<Utf8PathBuf>,
        quant_file_name: impl Into<String>,
    ) -> Result<Self, RollupError> {
        let quant_file_name = quant_file_name.into();
        validate_file_name(&quant_file_name)?;
        Ok(Self {
            metadata_path: metadata_path.into(),
            root_dir: root_dir.into(),
            quant_file_name,
        })
    }
}

fn validate_file_name(name: &str) -> Result<(), RollupError> {
    let mut components = Utf8Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Utf8Component::Normal(_)), None) => Ok(()),
        _ => Err(RollupError::InvalidQuantFileName(name.to_string())),
    }
}
