//! Published configuration table with atomic reload.

use crate::loader::ConfigLoader;
use crate::settings::ConfigTable;
use arc_swap::ArcSwap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Process-wide handle to the published configuration table.
///
/// Reads are lock-free and always observe a fully formed table; a reload
/// rebuilds the whole table and swaps the published pointer in one step,
/// never mutating the current table in place. Intended to be constructed
/// once at startup and handed to consumers explicitly.
pub struct ConfigManager {
    loader: ConfigLoader,
    table: ArcSwap<ConfigTable>,
}

impl ConfigManager {
    /// Resolve the first table from the override file at `path` and publish
    /// it, starting the first load cycle.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let loader = ConfigLoader::new(path);
        let table = loader.load();
        Self {
            loader,
            table: ArcSwap::from_pointee(table),
        }
    }

    /// The currently published table.
    ///
    /// Repeated calls may return a fresher table after a reload; a returned
    /// `Arc` stays valid and unchanged for as long as the caller holds it.
    pub fn current(&self) -> Arc<ConfigTable> {
        self.table.load_full()
    }

    /// Override file backing this manager.
    pub fn path(&self) -> &Path {
        self.loader.path()
    }

    /// Re-snapshot the environment, rebuild the table, and publish it.
    ///
    /// Ends the current load cycle and starts the next. Total like the
    /// initial load; a vanished override file simply yields ambient values
    /// and defaults.
    pub fn reload(&self) {
        let table = self.loader.load();
        if let Ok(dump) = serde_json::to_string(&table) {
            debug!(%dump, "resolved configuration");
        }
        self.table.store(Arc::new(table));
        info!(file = %self.loader.path().display(), "configuration reloaded");
    }
}

impl std::fmt::Debug for ConfigManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigManager")
            .field("path", &self.loader.path())
            .field("settings", &self.current().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_env(path: &Path, contents: &str) {
        let mut file = std::fs::File::create(path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.sync_all().unwrap();
    }

    #[test]
    fn test_load_publishes_a_complete_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        write_env(&path, "BOT_NAME=ManagerBot\n");

        let manager = ConfigManager::load(&path);
        let table = manager.current();
        assert_eq!(table.get("BOT_NAME"), Some("ManagerBot"));
        assert_eq!(table.get("MODE"), Some("public"));
    }

    #[test]
    fn test_reload_swaps_whole_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        write_env(&path, "PREFIX=!\n");

        let manager = ConfigManager::load(&path);
        let before = manager.current();
        assert_eq!(before.get("PREFIX"), Some("!"));

        write_env(&path, "PREFIX=#\nCHATBOT=true\n");
        manager.reload();

        let after = manager.current();
        assert_eq!(after.get("PREFIX"), Some("#"));
        assert_eq!(after.get("CHATBOT"), Some("true"));
        // The table handed out before the reload is untouched.
        assert_eq!(before.get("PREFIX"), Some("!"));
        assert_eq!(before.get("CHATBOT"), Some("false"));
    }

    #[test]
    fn test_reload_survives_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        write_env(&path, "FOOTER=custom footer\n");

        let manager = ConfigManager::load(&path);
        assert_eq!(manager.current().get("FOOTER"), Some("custom footer"));

        std::fs::remove_file(&path).unwrap();
        manager.reload();
        assert_eq!(manager.current().get("FOOTER"), Some("Powered by Wabot"));
    }
}
