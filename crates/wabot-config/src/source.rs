//! Environment snapshot used to resolve settings.

use std::collections::HashMap;
use std::path::Path;

/// Default location of the dotenv override file, relative to the process
/// working directory.
pub const DEFAULT_OVERRIDE_FILE: &str = ".env";

/// Snapshot of the resolution environment for one load cycle.
///
/// Combines the ambient process environment with an optional dotenv-style
/// override file. The ambient environment always wins: the file only supplies
/// keys the surrounding environment left unset. The process environment is
/// never mutated, so a later snapshot observes override-file edits.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    ambient: HashMap<String, String>,
    overrides: HashMap<String, String>,
}

impl EnvSource {
    /// Snapshot the process environment plus the override file at `path`.
    ///
    /// A missing override file is not an error. Unparsable lines are skipped
    /// silently; well-formed lines in the same file still apply.
    pub fn capture(path: impl AsRef<Path>) -> Self {
        Self {
            ambient: std::env::vars().collect(),
            overrides: read_override_file(path.as_ref()),
        }
    }

    /// Build a source from explicit maps, with the same precedence as
    /// [`EnvSource::capture`]. Intended for tests and embedding scenarios
    /// that manage their own environment.
    pub fn from_parts(
        ambient: impl IntoIterator<Item = (String, String)>,
        overrides: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            ambient: ambient.into_iter().collect(),
            overrides: overrides.into_iter().collect(),
        }
    }

    /// Value for `key`, or `None` when the key is absent or empty.
    ///
    /// An ambient entry shadows the override file even when it is empty;
    /// the empty value then counts as absent, matching the
    /// never-clobber-the-environment merge policy.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match self.ambient.get(key) {
            Some(value) => value,
            None => self.overrides.get(key)?,
        };
        (!value.is_empty()).then_some(value.as_str())
    }
}

fn read_override_file(path: &Path) -> HashMap<String, String> {
    match dotenvy::from_path_iter(path) {
        Ok(iter) => iter.filter_map(Result::ok).collect(),
        Err(_) => HashMap::new(),
    }
}
