//! Configuration table construction.

use crate::settings::{ConfigTable, SETTINGS};
use crate::source::EnvSource;
use std::path::{Path, PathBuf};

/// Builds resolved configuration tables from an override file location.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Create a loader backed by the override file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Override file backing this loader.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot the environment and resolve every enumerated setting.
    pub fn load(&self) -> ConfigTable {
        Self::build(&EnvSource::capture(&self.path))
    }

    /// Resolve every enumerated setting against `source`.
    ///
    /// Total by construction: a setting the source cannot supply resolves to
    /// its built-in default, so the table always contains every enumerated
    /// name and this step raises no errors.
    pub fn build(source: &EnvSource) -> ConfigTable {
        let values = SETTINGS
            .iter()
            .map(|setting| {
                source
                    .get(setting.name)
                    .unwrap_or(setting.default)
                    .to_string()
            })
            .collect();
        ConfigTable::from_values(values)
    }
}
